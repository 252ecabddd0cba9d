pub mod brand_mark;
pub mod portal_layout;
pub mod sidebar;

pub use brand_mark::BrandMark;
pub use portal_layout::PortalLayout;
pub use sidebar::Sidebar;
