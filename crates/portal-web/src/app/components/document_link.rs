use leptos::prelude::*;
use portal_core::DocumentFile;

use super::icons::DownloadIcon;
use crate::app::theme::Palette;

/// Direct-download anchor. The URL is rendered exactly as stored.
#[component]
pub fn DocumentLink(document: DocumentFile, palette: Palette) -> impl IntoView {
    view! {
        <a href=document.url download="" class=palette.link>
            <div class="flex items-center space-x-3">
                <div class=palette.link_icon>
                    <DownloadIcon />
                </div>
                <span class=palette.link_label>{document.name}</span>
            </div>
            <div class=palette.link_hint>
                <DownloadIcon size="w-4 h-4" />
            </div>
        </a>
    }
}
