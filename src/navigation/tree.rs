//! Static navigation hierarchy

/// A section (has children) or a link (no children) in the sidebar.
///
/// `href` values are unique across the whole tree; they double as render keys
/// and as the targets of active-route matching.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavNode {
    pub label: &'static str,
    pub href: &'static str,
    pub children: &'static [NavNode],
}

impl NavNode {
    pub const fn link(label: &'static str, href: &'static str) -> Self {
        Self { label, href, children: &[] }
    }

    pub const fn section(label: &'static str, href: &'static str, children: &'static [NavNode]) -> Self {
        Self { label, href, children }
    }

    pub fn is_section(&self) -> bool {
        !self.children.is_empty()
    }

    /// Route is this node or below it. `/` never prefix-matches, otherwise
    /// every entry would light up on the home page.
    pub fn is_active(&self, route: &str) -> bool {
        if route == self.href {
            return true;
        }
        self.href != "/"
            && route
                .strip_prefix(self.href)
                .is_some_and(|rest| rest.starts_with('/'))
    }

    pub fn is_exact_active(&self, route: &str) -> bool {
        route == self.href
    }

    /// Initial disclosure state: open iff a child or grandchild is the route.
    pub fn default_open(&self, route: &str) -> bool {
        self.children.iter().any(|child| {
            child.href == route || child.children.iter().any(|grandchild| grandchild.href == route)
        })
    }
}

pub static NAV_TREE: &[NavNode] = &[
    NavNode::link("Home", "/"),
    NavNode::link("Quick Start", "/quick-start"),
    NavNode::link("Publications", "/publications"),
    NavNode::section(
        "Data",
        "/data",
        &[
            NavNode::section(
                "Sources",
                "/data/sources",
                &[
                    NavNode::link("Open Dev Data", "/data/sources/open-dev-data"),
                    NavNode::link("GitHub Archive", "/data/sources/github-archive"),
                    NavNode::link("OSS Directory", "/data/sources/oss-directory"),
                ],
            ),
            NavNode::section(
                "Models",
                "/data/models",
                &[
                    NavNode::link("Developers", "/data/models/developers"),
                    NavNode::link("Commits", "/data/models/commits"),
                    NavNode::link("Repositories", "/data/models/repositories"),
                    NavNode::link("Ecosystems", "/data/models/ecosystems"),
                    NavNode::link("Events", "/data/models/events"),
                    NavNode::link("Timeseries Metrics", "/data/models/timeseries-metrics"),
                ],
            ),
            NavNode::section(
                "Metric Definitions",
                "/data/metric-definitions",
                &[
                    NavNode::link("Activity", "/data/metric-definitions/activity"),
                    NavNode::link("Alignment", "/data/metric-definitions/alignment"),
                    NavNode::link("Lifecycle", "/data/metric-definitions/lifecycle"),
                ],
            ),
            NavNode::link("Agent Workflows", "/data/agent-workflows"),
        ],
    ),
    NavNode::section(
        "Insights",
        "/insights",
        &[
            NavNode::link("Developer Activity", "/insights/developer-activity"),
            NavNode::link("Developer Lifecycle", "/insights/developer-lifecycle"),
            NavNode::link("Developer Retention", "/insights/developer-retention"),
        ],
    ),
];

/// Depth-first lookup by href.
pub fn find<'a>(tree: &'a [NavNode], href: &str) -> Option<&'a NavNode> {
    tree.iter().find_map(|node| {
        if node.href == href {
            Some(node)
        } else {
            find(node.children, href)
        }
    })
}

/// The leaf (page) whose href is exactly `route`.
pub fn find_leaf<'a>(tree: &'a [NavNode], route: &str) -> Option<&'a NavNode> {
    find(tree, route).filter(|node| !node.is_section())
}

/// All leaves in display order.
pub fn leaves(tree: &[NavNode]) -> Vec<&NavNode> {
    let mut out = Vec::new();
    collect_leaves(tree, &mut out);
    out
}

fn collect_leaves<'a>(tree: &'a [NavNode], out: &mut Vec<&'a NavNode>) {
    for node in tree {
        if node.is_section() {
            collect_leaves(node.children, out);
        } else {
            out.push(node);
        }
    }
}

/// First leaf at or under `node`.
pub fn first_leaf(node: &NavNode) -> &NavNode {
    match node.children.first() {
        Some(child) => first_leaf(child),
        None => node,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn data() -> &'static NavNode {
        find(NAV_TREE, "/data").unwrap()
    }

    #[test]
    fn test_hrefs_unique() {
        fn walk(tree: &[NavNode], seen: &mut HashSet<&'static str>) {
            for node in tree {
                assert!(seen.insert(node.href), "duplicate href {}", node.href);
                walk(node.children, seen);
            }
        }
        let mut seen = HashSet::new();
        walk(NAV_TREE, &mut seen);
        assert_eq!(seen.len(), 24);
    }

    #[test]
    fn test_section_active() {
        let data = data();
        assert!(data.is_active("/data"));
        assert!(data.is_active("/data/models/commits"));
        assert!(!data.is_active("/database"));
        assert!(!data.is_active("/"));
    }

    #[test]
    fn test_root_never_prefix_matches() {
        let home = find(NAV_TREE, "/").unwrap();
        assert!(home.is_active("/"));
        assert!(!home.is_active("/data"));
        assert!(!home.is_active("/quick-start"));
    }

    #[test]
    fn test_exact_active_ignores_descendants() {
        let models = find(NAV_TREE, "/data/models").unwrap();
        assert!(models.is_exact_active("/data/models"));
        assert!(!models.is_exact_active("/data/models/events"));
    }

    #[test]
    fn test_default_open_two_levels() {
        let data = data();
        assert!(data.default_open("/data/agent-workflows"));
        assert!(data.default_open("/data/sources/github-archive"));
        assert!(data.default_open("/data/models"));
        assert!(!data.default_open("/data"));
        assert!(!data.default_open("/insights/developer-activity"));
    }

    #[test]
    fn test_default_open_stops_at_grandchildren() {
        static DEEP: NavNode = NavNode::section(
            "A",
            "/a",
            &[NavNode::section("B", "/a/b", &[NavNode::section("C", "/a/b/c", &[NavNode::link("D", "/a/b/c/d")])])],
        );
        assert!(DEEP.default_open("/a/b/c"));
        assert!(!DEEP.default_open("/a/b/c/d"));
    }

    #[test]
    fn test_find_leaf() {
        assert_eq!(find_leaf(NAV_TREE, "/data/models/commits").unwrap().label, "Commits");
        assert!(find_leaf(NAV_TREE, "/data/models").is_none());
        assert!(find_leaf(NAV_TREE, "/nope").is_none());
    }

    #[test]
    fn test_leaves_in_display_order() {
        let labels: Vec<_> = leaves(NAV_TREE).iter().map(|n| n.label).collect();
        assert_eq!(labels.len(), 19);
        assert_eq!(&labels[..4], &["Home", "Quick Start", "Publications", "Open Dev Data"]);
        assert_eq!(labels.last(), Some(&"Developer Retention"));
    }

    #[test]
    fn test_first_leaf() {
        assert_eq!(first_leaf(data()).href, "/data/sources/open-dev-data");
        let home = find(NAV_TREE, "/").unwrap();
        assert_eq!(first_leaf(home).href, "/");
    }
}
