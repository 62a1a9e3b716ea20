use leptos::prelude::*;
use portal_core::catalog::SECTION_TAGLINE;
use portal_core::view::reveal_class;
use portal_core::{CategoryData, EntryModel, ExpansionState, SectionModel, VisibilityConfig};

use super::entry_card::EntryCard;
use super::icons::{AwardIcon, FileTextIcon};
use super::quick_downloads::QuickDownloads;
use crate::app::services::viewport::use_intersection_observer;

/// Accreditation and autonomy-certificate section.
///
/// Owns its own expansion state; mounting the section twice gives two
/// independent sets of toggles.
#[component]
pub fn ProgramsPortal(
    category: &'static CategoryData,
    visibility: VisibilityConfig,
) -> impl IntoView {
    let expansion = RwSignal::new(ExpansionState::new());
    let (section_ref, is_visible) = use_intersection_observer(&visibility);
    let model = SectionModel::from_category(category);

    log::info!(
        "Rendering {} accreditations and {} autonomy certificates",
        model.accreditations.len(),
        model.autonomy_certificates.len()
    );

    let cards = move |entries: Vec<EntryModel>| {
        entries
            .into_iter()
            .map(|entry| view! { <EntryCard entry=entry expansion=expansion /> })
            .collect::<Vec<_>>()
    };

    view! {
        <section
            node_ref=section_ref
            class=move || format!(
                "py-16 lg:py-24 bg-white dark:bg-dark-900 transition-all duration-700 {}",
                reveal_class(is_visible.get(), "animate-fade-in", "opacity-0"),
            )
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class=move || format!(
                    "text-center mb-16 transition-all duration-700 delay-200 {}",
                    reveal_class(is_visible.get(), "animate-slide-up", "opacity-0 translate-y-8"),
                )>
                    <h2 class="font-playfair text-3xl lg:text-4xl font-bold text-gray-900 dark:text-white mb-4">
                        {model.title}
                    </h2>
                    <p class="text-xl text-gray-600 dark:text-gray-300 max-w-3xl mx-auto">
                        {SECTION_TAGLINE}
                    </p>
                </div>

                <div class=move || format!(
                    "transition-all duration-700 delay-400 {}",
                    reveal_class(is_visible.get(), "animate-fade-in", "opacity-0"),
                )>
                    <div class="bg-white dark:bg-dark-800 rounded-2xl shadow-xl border border-gray-200 dark:border-dark-700 overflow-hidden">
                        <div class="bg-gradient-to-r from-primary-600 to-accent-teal p-6">
                            <h3 class="font-playfair text-2xl lg:text-3xl font-bold text-white mb-2">
                                {model.title}
                            </h3>
                            <p class="text-primary-100 text-lg">{model.description}</p>
                        </div>

                        <div class="p-6">
                            <div class="mb-12">
                                <h4 class="font-playfair text-2xl font-bold text-gray-900 dark:text-white mb-6 flex items-center">
                                    <AwardIcon />
                                    "NBA Accreditations"
                                </h4>
                                <div class="space-y-4">{cards(model.accreditations)}</div>
                            </div>

                            <div>
                                <h4 class="font-playfair text-2xl font-bold text-gray-900 dark:text-white mb-6 flex items-center">
                                    <FileTextIcon />
                                    "Autonomy Certificates"
                                </h4>
                                <div class="space-y-4">{cards(model.autonomy_certificates)}</div>
                            </div>
                        </div>
                    </div>
                </div>

                <div class=move || format!(
                    "mt-12 text-center transition-all duration-700 delay-600 {}",
                    reveal_class(is_visible.get(), "animate-fade-in", "opacity-0"),
                )>
                    <QuickDownloads />
                </div>
            </div>
        </section>
    }
}
