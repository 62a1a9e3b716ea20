/// Viewport Visibility Service
///
/// Wraps `IntersectionObserver` as a one-shot subscription: a node reference
/// to attach to the observed element and a boolean signal that flips to
/// `true` once and never back. The observer disconnects after firing.
use leptos::html::Section;
use leptos::prelude::*;
use portal_core::{VisibilityConfig, VisibilityLatch};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Observe a `<section>` and report when it first enters the viewport.
pub fn use_intersection_observer(
    config: &VisibilityConfig,
) -> (NodeRef<Section>, ReadSignal<bool>) {
    let node_ref = NodeRef::<Section>::new();
    let (is_visible, set_visible) = signal(false);

    let threshold = config.threshold;
    let root_margin = config.root_margin.clone();

    Effect::new(move |_| {
        let Some(element) = node_ref.get() else {
            return;
        };
        if is_visible.get_untracked() {
            return;
        }

        let on_visible = move || set_visible.set(true);
        if let Err(err) = observe_once(&element, threshold, &root_margin, on_visible) {
            // No observer support: reveal immediately
            log::warn!("IntersectionObserver unavailable: {err:?}; revealing section");
            set_visible.set(true);
        }
    });

    (node_ref, is_visible)
}

fn observe_once(
    element: &Element,
    threshold: f64,
    root_margin: &str,
    on_visible: impl Fn() + 'static,
) -> Result<(), JsValue> {
    let mut latch = VisibilityLatch::new();

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());

            if latch.observe(intersecting) {
                observer.disconnect();
                on_visible();
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options.set_root_margin(root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);

    log::debug!("Observing section visibility (threshold={threshold}, margin={root_margin})");
    callback.forget();
    Ok(())
}
