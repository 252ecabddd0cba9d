use dioxus::prelude::*;
use crate::config::PortalConfig;
use crate::hooks::use_nav_state;
use crate::navigation::{render_tree, NAV_TREE};
use crate::Route;

#[component]
pub fn Sidebar() -> Element {
    let route = use_route::<Route>().to_string();
    let config = use_context::<PortalConfig>();
    let nav = use_nav_state(&route);
    use_context_provider(|| nav);

    let rows = render_tree(NAV_TREE, &route);

    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar-header",
                div { class: "sidebar-brand",
                    crate::components::layout::BrandMark {}
                    div { class: "sidebar-wordmark",
                        p { "Developer" }
                        p { "Data" }
                        p { "Portal" }
                    }
                }
            }

            nav {
                class: "sidebar-nav",
                // Bring the current page into view when landing deep in the tree
                onmounted: move |event| {
                    if let Some(element) = event.data().downcast::<web_sys::Element>() {
                        if let Ok(Some(current)) = element.query_selector(".nav-link--current") {
                            current.scroll_into_view_with_bool(false);
                        }
                    }
                },
                for row in rows {
                    crate::components::navigation::NavSection {
                        key: "{row.href}",
                        row: row.clone(),
                        route: route.clone(),
                    }
                }
            }

            div { class: "sidebar-footer",
                a { class: "sidebar-docs", href: "{config.docs_url}", "Docs" }
                p { class: "sidebar-powered",
                    "Powered by "
                    span { "OSO" }
                }
            }
        }
    }
}
