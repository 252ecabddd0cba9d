use dioxus::prelude::*;
use crate::Route;

/// Full-height shell: sidebar on the left, routed page on the right.
#[component]
pub fn PortalLayout() -> Element {
    rsx! {
        div {
            class: "portal-container",
            crate::components::layout::Sidebar {}
            main { class: "portal-main",
                Outlet::<Route> {}
            }
        }
    }
}
