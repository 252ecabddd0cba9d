pub mod home;
pub mod notebook_page;

pub use home::Home;
pub use notebook_page::{NotFound, NotebookPage};

/// Directory the marimo server exposes notebooks under.
const NOTEBOOK_ROOT: &str = "notebooks";

/// Pages whose notebook file is not named after the route.
static NOTEBOOK_OVERRIDES: &[(&str, &str)] = &[("/data/agent-workflows", "notebooks/agent-guide")];

/// Content identifier embedded by the page at `href`.
pub fn content_identifier(href: &str) -> String {
    NOTEBOOK_OVERRIDES
        .iter()
        .find(|(route, _)| *route == href)
        .map(|(_, identifier)| identifier.to_string())
        .unwrap_or_else(|| format!("{}{}", NOTEBOOK_ROOT, href))
}

/// Rebuild a route path from catch-all segments.
pub fn route_path(segments: &[String]) -> String {
    let segments: Vec<&str> = segments
        .iter()
        .map(|s| s.trim_matches('/'))
        .filter(|s| !s.is_empty())
        .collect();
    format!("/{}", segments.join("/"))
}
