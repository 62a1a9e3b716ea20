mod document_link;
mod entry_card;
mod icons;
mod programs_portal;
mod quick_downloads;

pub use programs_portal::ProgramsPortal;
