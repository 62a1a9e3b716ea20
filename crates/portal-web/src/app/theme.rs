//! Per-list colour palettes. Accreditations use the primary palette,
//! autonomy certificates the teal accent.

use portal_core::EntryKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub header: &'static str,
    pub button: &'static str,
    pub link: &'static str,
    pub link_icon: &'static str,
    pub link_label: &'static str,
    pub link_hint: &'static str,
}

const PRIMARY: Palette = Palette {
    header: "bg-gradient-to-r from-gray-50 to-gray-100 dark:from-dark-700 dark:to-dark-600 p-6",
    button: "flex items-center gap-2 px-4 py-2 bg-primary-600 hover:bg-primary-700 text-white rounded-lg transition-colors duration-300 focus:outline-none focus:ring-2 focus:ring-primary-500 focus:ring-offset-2 dark:focus:ring-offset-dark-700",
    link: "flex items-center justify-between p-4 bg-gradient-to-r from-primary-50 to-accent-teal/10 dark:from-dark-600 dark:to-dark-500 rounded-lg hover:from-primary-100 hover:to-accent-teal/20 transition-all duration-300 group border border-primary-200 dark:border-dark-500 hover:border-primary-300 hover:shadow-md",
    link_icon: "p-2 bg-primary-600 text-white rounded-lg group-hover:bg-primary-700 transition-colors duration-300",
    link_label: "font-medium text-gray-900 dark:text-white group-hover:text-primary-700 dark:group-hover:text-accent-teal transition-colors duration-300",
    link_hint: "text-primary-600 dark:text-accent-teal opacity-0 group-hover:opacity-100 transition-opacity duration-300",
};

const TEAL: Palette = Palette {
    header: "bg-gradient-to-r from-accent-teal/10 to-accent-teal/20 dark:from-dark-700 dark:to-dark-600 p-6",
    button: "flex items-center gap-2 px-4 py-2 bg-accent-teal hover:bg-accent-teal/90 text-white rounded-lg transition-colors duration-300 focus:outline-none focus:ring-2 focus:ring-accent-teal focus:ring-offset-2 dark:focus:ring-offset-dark-700",
    link: "flex items-center justify-between p-4 bg-gradient-to-r from-accent-teal/10 to-accent-teal/20 dark:from-dark-600 dark:to-dark-500 rounded-lg hover:from-accent-teal/20 hover:to-accent-teal/30 transition-all duration-300 group border border-accent-teal/30 dark:border-dark-500 hover:border-accent-teal/50 hover:shadow-md",
    link_icon: "p-2 bg-accent-teal text-white rounded-lg group-hover:bg-accent-teal/90 transition-colors duration-300",
    link_label: "font-medium text-gray-900 dark:text-white group-hover:text-accent-teal transition-colors duration-300",
    link_hint: "text-accent-teal opacity-0 group-hover:opacity-100 transition-opacity duration-300",
};

pub fn palette(kind: EntryKind) -> Palette {
    match kind {
        EntryKind::Accreditation => PRIMARY,
        EntryKind::Autonomy => TEAL,
    }
}
