//! Pure render tree for the sidebar
//!
//! `render` turns a [`NavNode`] and the current route into rows carrying
//! their kind, depth and activity. Open/closed state is not part of the
//! result; the component asks [`super::OpenState`] whether to show children.

use super::tree::NavNode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavRowKind {
    /// Top-level section (uppercase header)
    SectionHeader,
    /// Section below the top level (indented row)
    NestedSection,
    Link,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavRow {
    pub label: &'static str,
    pub href: &'static str,
    pub kind: NavRowKind,
    pub active: bool,
    pub exact_active: bool,
    pub children: Vec<NavRow>,
}

pub fn render(node: &NavNode, route: &str, level: usize) -> NavRow {
    let kind = match (node.is_section(), level) {
        (false, _) => NavRowKind::Link,
        (true, 0) => NavRowKind::SectionHeader,
        (true, _) => NavRowKind::NestedSection,
    };

    NavRow {
        label: node.label,
        href: node.href,
        kind,
        active: node.is_active(route),
        exact_active: node.is_exact_active(route),
        children: node
            .children
            .iter()
            .map(|child| render(child, route, level + 1))
            .collect(),
    }
}

/// Render every top-level node.
pub fn render_tree(tree: &[NavNode], route: &str) -> Vec<NavRow> {
    tree.iter().map(|node| render(node, route, 0)).collect()
}

impl NavRow {
    pub fn class(&self) -> &'static str {
        match self.kind {
            NavRowKind::SectionHeader => "nav-header",
            NavRowKind::NestedSection if self.active => "nav-row nav-row--section nav-row--active",
            NavRowKind::NestedSection => "nav-row nav-row--section",
            // leaves only highlight on an exact match
            NavRowKind::Link if self.exact_active => "nav-row nav-link nav-link--current",
            NavRowKind::Link => "nav-row nav-link",
        }
    }

    /// Wrapper class for the children of an open section.
    pub fn children_class(&self) -> &'static str {
        match self.kind {
            NavRowKind::NestedSection => "nav-children nav-children--nested",
            _ => "nav-children",
        }
    }

    pub fn is_section(&self) -> bool {
        self.kind != NavRowKind::Link
    }
}

/// Chevron class; rotated a quarter turn when the section is open.
pub fn disclosure_class(open: bool) -> &'static str {
    if open {
        "nav-chevron nav-chevron--open"
    } else {
        "nav-chevron"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::tree::{find, NAV_TREE};

    #[test]
    fn test_kinds_by_level() {
        let rows = render_tree(NAV_TREE, "/");
        assert_eq!(rows[0].kind, NavRowKind::Link);
        let data = &rows[3];
        assert_eq!(data.kind, NavRowKind::SectionHeader);
        assert_eq!(data.children[0].kind, NavRowKind::NestedSection);
        assert_eq!(data.children[0].children[0].kind, NavRowKind::Link);
        // leaf directly under a header is still a link
        assert_eq!(data.children[3].kind, NavRowKind::Link);
    }

    #[test]
    fn test_nested_section_active_class() {
        let models = find(NAV_TREE, "/data/models").unwrap();
        let row = render(models, "/data/models/events", 1);
        assert!(row.active);
        assert!(!row.exact_active);
        assert_eq!(row.class(), "nav-row nav-row--section nav-row--active");

        let row = render(models, "/data/sources/oss-directory", 1);
        assert_eq!(row.class(), "nav-row nav-row--section");
    }

    #[test]
    fn test_leaf_highlight_only_on_exact_match() {
        let commits = find(NAV_TREE, "/data/models/commits").unwrap();
        assert_eq!(
            render(commits, "/data/models/commits", 2).class(),
            "nav-row nav-link nav-link--current"
        );
        assert_eq!(render(commits, "/data/models/commits/x", 2).class(), "nav-row nav-link");
    }

    #[test]
    fn test_home_not_active_elsewhere() {
        let rows = render_tree(NAV_TREE, "/quick-start");
        assert!(!rows[0].active);
        assert!(rows[1].exact_active);
    }

    #[test]
    fn test_disclosure_class() {
        assert_eq!(disclosure_class(true), "nav-chevron nav-chevron--open");
        assert_eq!(disclosure_class(false), "nav-chevron");
    }
}
