use dioxus::prelude::*;
use crate::frame::FrameLoad;

/// Load state for one notebook frame. Re-enters `Loading` whenever
/// `identifier` changes, whatever state the frame was in.
///
/// The retarget lands in an effect after the render that saw the new
/// identifier; read the state with [`FrameLoad::status_for`] so that render
/// already shows `Loading`.
pub fn use_frame_load(identifier: String) -> Signal<FrameLoad> {
    let initial = identifier.clone();
    let mut frame = use_signal(move || FrameLoad::new(initial));

    use_effect(use_reactive(&identifier, move |identifier| {
        if frame.write().retarget(&identifier) {
            tracing::debug!(identifier = %identifier, "notebook frame retargeted");
        }
    }));

    frame
}
