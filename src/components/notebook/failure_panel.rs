use dioxus::prelude::*;
use crate::frame::FailureNotice;

#[component]
pub fn FailurePanel(notice: FailureNotice) -> Element {
    rsx! {
        div { class: "notebook-overlay notebook-failure",
            div { class: "notebook-failure-icon",
                svg {
                    fill: "none",
                    stroke: "currentColor",
                    view_box: "0 0 24 24",
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        stroke_width: "2",
                        d: "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
                    }
                }
            }
            div { class: "notebook-failure-title", "{notice.message}" }
            div { class: "notebook-failure-hint", "{notice.hint}" }
            div { class: "notebook-failure-url",
                div { class: "notebook-failure-label", "Expected URL:" }
                code { "{notice.expected_url}" }
            }
            div { class: "notebook-failure-remedy",
                "Run: "
                code { "{notice.command}" }
                " from the "
                code { "{notice.directory}" }
                " directory"
            }
        }
    }
}
