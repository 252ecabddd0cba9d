use dioxus::prelude::*;
use crate::config::PortalConfig;
use crate::frame::{notebook_url, FailureNotice, FrameStatus};
use crate::hooks::use_frame_load;

/// Embeds a marimo notebook served by the local notebook process.
///
/// `port` falls back to the configured notebook port. A frame that never
/// fires load or error stays in the loading state.
#[component]
pub fn NotebookFrame(identifier: String, port: Option<u16>) -> Element {
    let config = use_context::<PortalConfig>();
    let port = port.unwrap_or(config.notebook_port);
    let url = notebook_url(&identifier, port);

    let mut frame = use_frame_load(identifier.clone());
    let status = frame.read().status_for(&identifier);
    let load_target = identifier.clone();
    let error_target = identifier.clone();

    rsx! {
        div { class: "notebook-frame",
            if status == FrameStatus::Loading {
                div { class: "notebook-overlay",
                    div { class: "notebook-spinner" }
                    div { class: "notebook-loading-text", "Loading notebook..." }
                }
            }
            if status == FrameStatus::Errored {
                crate::components::notebook::FailurePanel {
                    notice: FailureNotice::new(&identifier, port, &config),
                }
            }
            iframe {
                class: "notebook-iframe",
                src: "{url}",
                title: "{identifier}",
                onload: move |_| {
                    let mut state = frame.write();
                    state.retarget(&load_target);
                    if state.on_load() {
                        tracing::debug!(identifier = state.identifier(), "notebook frame loaded");
                    }
                },
                onerror: move |_| {
                    let mut state = frame.write();
                    state.retarget(&error_target);
                    state.on_error();
                },
            }
        }
    }
}
