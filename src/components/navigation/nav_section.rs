use dioxus::prelude::*;
use crate::hooks::NavState;
use crate::navigation::{disclosure_class, NavRow};

/// One sidebar entry: a collapsible section or a leaf link. Sections render
/// their children recursively while open.
#[component]
pub fn NavSection(row: NavRow, route: String) -> Element {
    let mut nav = use_context::<NavState>();
    let class = row.class();

    if !row.is_section() {
        return rsx! {
            Link { class: "{class}", to: row.href, "{row.label}" }
        };
    }

    let href = row.href;
    let open = nav.is_open(href);
    let chevron = disclosure_class(open);
    let children_class = row.children_class();
    let toggle_route = route.clone();

    rsx! {
        div {
            button {
                class: "{class}",
                onclick: move |_| nav.toggle(href, &toggle_route),
                span { "{row.label}" }
                span { class: "{chevron}", crate::components::navigation::ChevronIcon {} }
            }
            if open {
                div { class: "{children_class}",
                    for child in row.children.iter() {
                        NavSection {
                            key: "{child.href}",
                            row: child.clone(),
                            route: route.clone(),
                        }
                    }
                }
            }
        }
    }
}
