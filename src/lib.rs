//! Developer Data Portal
//!
//! A sidebar-navigated shell whose pages embed notebooks served by a local
//! marimo process. The navigation and frame logic live in framework-free
//! modules (`navigation`, `frame`); the Dioxus components wrap them.

use dioxus::prelude::*;

// Module Declarations
pub mod components;
pub mod config;
pub mod error;
pub mod frame;
pub mod hooks;
pub mod navigation;
pub mod pages;

use components::layout::PortalLayout;
use config::PortalConfig;
use pages::{Home, NotebookPage};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(PortalLayout)]
        #[route("/")]
        Home {},
        #[route("/:..segments")]
        NotebookPage { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    use_context_provider(PortalConfig::load_or_default);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Developer Data Portal" }
        document::Meta { name: "description", content: "OSO data portal for developer analytics" }

        Router::<Route> {}
    }
}
