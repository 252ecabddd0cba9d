use dioxus::prelude::*;
use crate::navigation::{first_leaf, leaves, NavNode, NAV_TREE};

/// Landing page: one card per top-level entry.
#[component]
pub fn Home() -> Element {
    let cards = NAV_TREE.iter().filter(|node| node.href != "/");

    rsx! {
        div { class: "home",
            h1 { class: "home-title", "Developer Data Portal" }
            p { class: "home-lede",
                "OSO data portal for developer analytics. Pick a notebook from the sidebar, or start with a section below."
            }
            div { class: "home-grid",
                for node in cards {
                    Link {
                        key: "{node.href}",
                        class: "home-card",
                        to: first_leaf(node).href,
                        h2 { "{node.label}" }
                        p { {card_summary(node)} }
                    }
                }
            }
        }
    }
}

fn card_summary(node: &NavNode) -> String {
    match leaves(node.children).len() {
        0 => "Notebook".to_string(),
        1 => "1 notebook".to_string(),
        n => format!("{n} notebooks"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::find;

    #[test]
    fn test_card_summary() {
        assert_eq!(card_summary(find(NAV_TREE, "/quick-start").unwrap()), "Notebook");
        assert_eq!(card_summary(find(NAV_TREE, "/data").unwrap()), "13 notebooks");
        assert_eq!(card_summary(find(NAV_TREE, "/insights").unwrap()), "3 notebooks");
    }
}
