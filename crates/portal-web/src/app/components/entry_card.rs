use leptos::prelude::*;
use portal_core::view::{affordance_class, panel_class};
use portal_core::{Activation, EntryModel, ExpansionState};
use web_sys::KeyboardEvent;

use super::document_link::DocumentLink;
use super::icons::{CalendarIcon, PlusIcon};
use crate::app::theme::palette;

/// One accreditation or autonomy entry with its collapsible document panel.
#[component]
pub fn EntryCard(entry: EntryModel, expansion: RwSignal<ExpansionState>) -> impl IntoView {
    let id = entry.id;
    let panel = entry.panel_id();
    let palette = palette(entry.kind);

    // Scoped to this entry so unrelated toggles do not re-render it
    let expanded = Memo::new(move |_| expansion.with(|state| state.is_expanded(id)));

    let activate = move |activation: Activation| {
        log::debug!("{activation:?} activation on {id}");
        expansion.update(|state| {
            state.activate(id, activation);
        });
    };

    let handle_keydown = move |ev: KeyboardEvent| {
        if let Some(activation) = Activation::from_key(&ev.key()) {
            if activation.prevents_default() {
                ev.prevent_default();
            }
            activate(activation);
        }
    };

    let documents = entry
        .documents
        .iter()
        .map(|document| view! { <DocumentLink document=*document palette=palette /> })
        .collect::<Vec<_>>();

    view! {
        <div
            class="group border border-gray-200 dark:border-dark-600 rounded-xl overflow-hidden hover:shadow-lg transition-all duration-300 animate-scale-in"
            style=format!("animation-delay: {}ms", entry.delay_ms)
        >
            <div class=palette.header>
                <div class="flex flex-col lg:flex-row lg:items-center lg:justify-between gap-4">
                    <div class="flex-1">
                        <h5 class="font-playfair text-xl font-bold text-gray-900 dark:text-white mb-2">
                            {entry.name}
                        </h5>
                        {entry.date.map(|date| view! {
                            <div class="flex items-center gap-2 text-sm text-gray-600 dark:text-gray-300">
                                <CalendarIcon />
                                <span class="font-medium">"Date: " {date}</span>
                            </div>
                        })}
                    </div>
                    <button
                        type="button"
                        class=palette.button
                        aria-expanded=move || expanded.get().to_string()
                        aria-controls=panel.clone()
                        on:click=move |_| activate(Activation::Click)
                        on:keydown=handle_keydown
                    >
                        <span class="font-medium">"View Documents"</span>
                        <div class=move || affordance_class(expanded.get())>
                            <PlusIcon />
                        </div>
                    </button>
                </div>
            </div>

            <div id=panel class=move || panel_class(expanded.get())>
                <div class="p-6 border-t border-gray-200 dark:border-dark-600">
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        {documents}
                    </div>
                </div>
            </div>
        </div>
    }
}
