pub mod use_frame_load;
pub mod use_nav_state;

pub use use_frame_load::use_frame_load;
pub use use_nav_state::{use_nav_state, NavState};
