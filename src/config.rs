//! Portal configuration
//!
//! Values are baked in at build time: a browser bundle has no process
//! environment, so overrides come from `option_env!` rather than `std::env`.

use serde::Deserialize;

use crate::error::{PortalError, PortalResult};
use crate::frame::DEFAULT_NOTEBOOK_PORT;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Port of the local marimo server
    pub notebook_port: u16,
    pub docs_url: String,
    /// Command shown in the frame failure panel
    pub serve_command: String,
    /// Directory the serve command has to be run from
    pub serve_directory: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            notebook_port: DEFAULT_NOTEBOOK_PORT,
            docs_url: "https://docs.oso.xyz".to_string(),
            serve_command: "uv run python serve_notebooks.py".to_string(),
            serve_directory: "community/ddp".to_string(),
        }
    }
}

impl PortalConfig {
    /// Parse a (possibly partial) JSON configuration on top of the defaults.
    pub fn from_json(json: &str) -> PortalResult<Self> {
        let config: PortalConfig = serde_json::from_str(json)?;
        if config.notebook_port == 0 {
            return Err(PortalError::InvalidPort("0".to_string()));
        }
        Ok(config)
    }

    /// Replace the notebook port when an override is present.
    pub fn with_port_override(mut self, raw: Option<&str>) -> PortalResult<Self> {
        if let Some(raw) = raw {
            self.notebook_port = parse_port(raw)?;
        }
        Ok(self)
    }

    /// Build the configuration from defaults, then `DDP_PORTAL_CONFIG` (a JSON
    /// object with any subset of the fields), then `DDP_NOTEBOOK_PORT`.
    pub fn load() -> PortalResult<Self> {
        Self::resolve(option_env!("DDP_PORTAL_CONFIG"), option_env!("DDP_NOTEBOOK_PORT"))
    }

    fn resolve(json: Option<&str>, port: Option<&str>) -> PortalResult<Self> {
        let base = match json {
            Some(json) => Self::from_json(json)?,
            None => Self::default(),
        };
        base.with_port_override(port)
    }

    /// Like [`PortalConfig::load`], falling back to the defaults on error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|err| {
            tracing::warn!("{err}; using default portal configuration");
            Self::default()
        })
    }
}

/// Parse a TCP port, rejecting 0 and anything out of range.
pub fn parse_port(raw: &str) -> PortalResult<u16> {
    match raw.trim().parse::<u16>() {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(PortalError::InvalidPort(raw.to_string())),
    }
}
