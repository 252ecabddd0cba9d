//! Sidebar navigation model: the static tree, derived activity, and the
//! open/closed store. Everything here is framework-free.

pub mod render;
pub mod state;
pub mod tree;

pub use render::{disclosure_class, render, render_tree, NavRow, NavRowKind};
pub use state::OpenState;
pub use tree::{find, find_leaf, first_leaf, leaves, NavNode, NAV_TREE};
