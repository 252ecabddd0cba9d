//! Open/closed state of sidebar sections
//!
//! One map for the whole sidebar instead of per-section component state.
//! A section's entry exists only while the section is displayed ("mounted");
//! it is seeded from [`NavNode::default_open`] when it appears and dropped
//! when an ancestor collapses, so re-expanding recomputes it from the route.

use std::collections::HashMap;

use super::tree::NavNode;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OpenState {
    open: HashMap<&'static str, bool>,
}

impl OpenState {
    /// State for a freshly mounted sidebar on `route`.
    pub fn mount(tree: &[NavNode], route: &str) -> Self {
        let mut state = Self::default();
        for node in tree {
            state.mount_node(node, route);
        }
        state
    }

    fn mount_node(&mut self, node: &NavNode, route: &str) {
        if !node.is_section() {
            return;
        }
        let open = *self.open.entry(node.href).or_insert_with(|| node.default_open(route));
        if open {
            for child in node.children {
                self.mount_node(child, route);
            }
        }
    }

    fn unmount_descendants(&mut self, node: &NavNode) {
        for child in node.children {
            if self.open.remove(child.href).is_some() {
                self.unmount_descendants(child);
            }
        }
    }

    pub fn is_open(&self, href: &str) -> bool {
        self.open.get(href).copied().unwrap_or(false)
    }

    /// Flip one section. Siblings and ancestors are untouched. Returns the
    /// new state.
    pub fn toggle(&mut self, node: &NavNode, route: &str) -> bool {
        let open = !self.is_open(node.href);
        self.open.insert(node.href, open);
        if open {
            for child in node.children {
                self.mount_node(child, route);
            }
        } else {
            self.unmount_descendants(node);
        }
        open
    }
}
