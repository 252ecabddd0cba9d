pub mod chevron;
pub mod nav_section;

pub use chevron::ChevronIcon;
pub use nav_section::NavSection;
