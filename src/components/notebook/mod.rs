pub mod failure_panel;
pub mod notebook_frame;

pub use failure_panel::FailurePanel;
pub use notebook_frame::NotebookFrame;
