use leptos::prelude::*;
use portal_core::catalog::QUICK_DOWNLOADS;

use super::icons::DownloadIcon;

const BUNDLE_CLASSES: [&str; 2] = [
    "inline-flex items-center px-6 py-3 bg-gradient-to-r from-primary-600 to-accent-teal text-white font-semibold rounded-lg hover:from-primary-700 hover:to-accent-teal/90 transition-all duration-300 hover:scale-105 hover:shadow-lg",
    "inline-flex items-center px-6 py-3 bg-gradient-to-r from-accent-gold to-accent-gold/80 text-dark-900 font-semibold rounded-lg hover:from-accent-gold/90 hover:to-accent-gold/70 transition-all duration-300 hover:scale-105 hover:shadow-lg",
];

/// Archive bundle links shown under the document panel.
#[component]
pub fn QuickDownloads() -> impl IntoView {
    let links = QUICK_DOWNLOADS
        .iter()
        .zip(BUNDLE_CLASSES.iter().cycle())
        .map(|(bundle, class)| {
            view! {
                <a href=bundle.url download="" class=*class>
                    <DownloadIcon size="w-5 h-5 mr-2" />
                    {bundle.name}
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="flex flex-wrap justify-center gap-4">
            {links}
        </div>
    }
}
