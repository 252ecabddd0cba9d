//! Embedded notebook frame: target URL and load lifecycle
//!
//! Notebooks are served by a separately started marimo process on the local
//! machine. The frame only composes the URL and observes the iframe's two
//! terminal signals (load, error); there is no retry and no timeout.

use crate::config::PortalConfig;

pub const DEFAULT_NOTEBOOK_PORT: u16 = 8000;
pub const NOTEBOOK_HOST: &str = "localhost";
pub const NOTEBOOK_EXTENSION: &str = ".py";

/// Strip one trailing `.py` and any leading slashes from a content identifier.
pub fn notebook_path(identifier: &str) -> &str {
    let path = identifier.strip_suffix(NOTEBOOK_EXTENSION).unwrap_or(identifier);
    path.trim_start_matches('/')
}

/// URL the marimo server is expected to serve `identifier` at.
pub fn notebook_url(identifier: &str, port: u16) -> String {
    format!("http://{}:{}/{}", NOTEBOOK_HOST, port, notebook_path(identifier))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    Loading,
    Loaded,
    Errored,
}

/// Load state of one frame instance.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameLoad {
    identifier: String,
    status: FrameStatus,
}

impl FrameLoad {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            status: FrameStatus::Loading,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn status(&self) -> FrameStatus {
        self.status
    }

    /// Status as seen by a frame currently showing `identifier`. A state
    /// still holding the previous identifier reads as `Loading`, so a stale
    /// `Errored`/`Loaded` never renders against a new target.
    pub fn status_for(&self, identifier: &str) -> FrameStatus {
        if self.identifier == identifier {
            self.status
        } else {
            FrameStatus::Loading
        }
    }

    /// Point the frame at a new identifier. Returns true (and re-enters
    /// `Loading` from any state) only when the identifier actually changed.
    pub fn retarget(&mut self, identifier: &str) -> bool {
        if self.identifier == identifier {
            return false;
        }
        self.identifier = identifier.to_string();
        self.status = FrameStatus::Loading;
        true
    }

    /// The frame fired `load`. Ignored unless loading.
    pub fn on_load(&mut self) -> bool {
        self.settle(FrameStatus::Loaded)
    }

    /// The frame fired `error`. Ignored unless loading.
    pub fn on_error(&mut self) -> bool {
        self.settle(FrameStatus::Errored)
    }

    fn settle(&mut self, status: FrameStatus) -> bool {
        if self.status != FrameStatus::Loading {
            return false;
        }
        self.status = status;
        true
    }
}

/// Static guidance shown when a frame fails to load.
#[derive(Clone, Debug, PartialEq)]
pub struct FailureNotice {
    pub message: String,
    pub hint: String,
    pub expected_url: String,
    pub command: String,
    pub directory: String,
}

impl FailureNotice {
    pub fn new(identifier: &str, port: u16, config: &PortalConfig) -> Self {
        Self {
            message: "Failed to load notebook".to_string(),
            hint: format!("Make sure the marimo server is running on port {port}"),
            expected_url: notebook_url(identifier, port),
            command: config.serve_command.clone(),
            directory: config.serve_directory.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_strips_extension() {
        assert_eq!(
            notebook_url("notebooks/data/models/commits.py", DEFAULT_NOTEBOOK_PORT),
            "http://localhost:8000/notebooks/data/models/commits"
        );
    }

    #[test]
    fn test_url_custom_port() {
        assert_eq!(notebook_url("foo/bar", 9000), "http://localhost:9000/foo/bar");
    }

    #[test]
    fn test_url_no_double_slash() {
        assert_eq!(notebook_url("/foo/bar.py", 8000), "http://localhost:8000/foo/bar");
    }

    #[test]
    fn test_only_trailing_extension_stripped() {
        assert_eq!(notebook_path("notebooks/a.py/b"), "notebooks/a.py/b");
        assert_eq!(notebook_path("notebooks/a.py.py"), "notebooks/a.py");
        assert_eq!(notebook_path("notebooks/a.pyc"), "notebooks/a.pyc");
    }

    #[test]
    fn test_starts_loading() {
        let frame = FrameLoad::new("foo");
        assert_eq!(frame.status(), FrameStatus::Loading);
        assert_eq!(frame.identifier(), "foo");
    }

    #[test]
    fn test_load_and_error_transitions() {
        let mut frame = FrameLoad::new("foo");
        assert!(frame.on_load());
        assert_eq!(frame.status(), FrameStatus::Loaded);

        let mut frame = FrameLoad::new("foo");
        assert!(frame.on_error());
        assert_eq!(frame.status(), FrameStatus::Errored);
    }

    #[test]
    fn test_terminal_states_are_sticky() {
        let mut frame = FrameLoad::new("foo");
        frame.on_error();
        assert!(!frame.on_load());
        assert_eq!(frame.status(), FrameStatus::Errored);

        let mut frame = FrameLoad::new("foo");
        frame.on_load();
        assert!(!frame.on_error());
        assert_eq!(frame.status(), FrameStatus::Loaded);
    }

    #[test]
    fn test_retarget_resets_from_any_state() {
        let mut frame = FrameLoad::new("foo");
        frame.on_error();
        assert!(frame.retarget("bar"));
        assert_eq!(frame.status(), FrameStatus::Loading);
        assert_eq!(frame.identifier(), "bar");

        frame.on_load();
        assert!(frame.retarget("baz"));
        assert_eq!(frame.status(), FrameStatus::Loading);
    }

    #[test]
    fn test_retarget_same_identifier_is_noop() {
        let mut frame = FrameLoad::new("foo");
        frame.on_load();
        assert!(!frame.retarget("foo"));
        assert_eq!(frame.status(), FrameStatus::Loaded);
    }

    #[test]
    fn test_status_for_stale_identifier() {
        let mut frame = FrameLoad::new("a");
        frame.on_error();
        assert_eq!(frame.status_for("a"), FrameStatus::Errored);
        assert_eq!(frame.status_for("b"), FrameStatus::Loading);
    }

    #[test]
    fn test_failure_notice_expected_url() {
        let config = PortalConfig::default();
        let notice = FailureNotice::new("notebooks/insights/developer-activity", 8000, &config);
        assert_eq!(
            notice.expected_url,
            notebook_url("notebooks/insights/developer-activity", 8000)
        );
        assert_eq!(notice.hint, "Make sure the marimo server is running on port 8000");
        assert_eq!(notice.command, "uv run python serve_notebooks.py");
        assert_eq!(notice.directory, "community/ddp");
    }
}
