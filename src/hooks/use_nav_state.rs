use dioxus::prelude::*;
use crate::navigation::{find, OpenState, NAV_TREE};

/// Sidebar-wide open/closed store, shared with nested sections via context.
#[derive(Clone, Copy)]
pub struct NavState {
    pub open: Signal<OpenState>,
}

/// Seeded once, from the route the sidebar first mounts on. Later
/// navigation does not reset sections the user has already seen.
pub fn use_nav_state(route: &str) -> NavState {
    let route = route.to_string();
    let open = use_signal(move || OpenState::mount(NAV_TREE, &route));

    NavState { open }
}

impl NavState {
    pub fn is_open(&self, href: &str) -> bool {
        self.open.read().is_open(href)
    }

    /// Toggle the section at `href`
    pub fn toggle(&mut self, href: &str, route: &str) {
        let Some(node) = find(NAV_TREE, href) else { return; };
        let open = self.open.write().toggle(node, route);
        tracing::debug!(href, open, "nav section toggled");
    }
}
