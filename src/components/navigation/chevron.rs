use dioxus::prelude::*;

/// Right-pointing disclosure chevron; the parent rotates it when open.
#[component]
pub fn ChevronIcon() -> Element {
    rsx! {
        svg {
            width: "14",
            height: "14",
            view_box: "0 0 14 14",
            fill: "none",
            xmlns: "http://www.w3.org/2000/svg",
            path {
                d: "M5.25 3.5L8.75 7L5.25 10.5",
                stroke: "currentColor",
                stroke_width: "1.5",
                stroke_linecap: "round",
                stroke_linejoin: "round",
            }
        }
    }
}
