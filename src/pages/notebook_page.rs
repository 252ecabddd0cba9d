use dioxus::prelude::*;
use crate::navigation::{find_leaf, NAV_TREE};
use crate::pages::{content_identifier, route_path};
use crate::Route;

/// Any path below `/`. Only leaves of the navigation tree are pages.
#[component]
pub fn NotebookPage(segments: Vec<String>) -> Element {
    let path = route_path(&segments);

    match find_leaf(NAV_TREE, &path) {
        Some(leaf) => {
            let identifier = content_identifier(leaf.href);
            rsx! {
                div { class: "page-frame",
                    crate::components::notebook::NotebookFrame { identifier }
                }
            }
        }
        None => rsx! {
            NotFound { path }
        },
    }
}

#[component]
pub fn NotFound(path: String) -> Element {
    rsx! {
        div { class: "not-found",
            h1 { "Page not found" }
            p { "Nothing lives at " code { "{path}" } "." }
            Link { class: "not-found-home", to: Route::Home {}, "Back to the portal home" }
        }
    }
}
