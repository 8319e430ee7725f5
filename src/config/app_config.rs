use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::errors::{AuditLogError, Result};

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "auditlog.toml";

/// Top-level configuration read from `auditlog.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub event_listener: EventListenerSection,
    pub access: Option<AccessSection>,
}

impl AppConfig {
    /// Locate and load the configuration.
    ///
    /// Uses `explicit` when given, otherwise `./auditlog.toml`, then
    /// `<config dir>/auditlog/config.toml`.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = Self::locate(explicit)?;
        tracing::debug!(path = %path.display(), "loading config");
        Self::load_from(&path)
    }

    /// Load and validate a specific config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AuditLogError::InvalidConfig {
            detail: format!("Cannot read {}: {e}", path.display()),
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| AuditLogError::InvalidConfig {
            detail: format!("Failed to parse {}: {e}", path.display()),
        })?;

        if config.event_listener.log_output.trim().is_empty() {
            return Err(AuditLogError::InvalidConfig {
                detail: "event_listener.log_output must not be empty".into(),
            });
        }

        Ok(config)
    }

    fn locate(explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }

        let mut candidates = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            candidates.push(dir.join("auditlog").join("config.toml"));
        }

        if let Some(found) = candidates.iter().find(|p| p.is_file()) {
            return Ok(found.clone());
        }

        let searched = candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Err(AuditLogError::InvalidConfig {
            detail: format!("no config file found (searched: {searched}). Pass --config <path>."),
        })
    }

    /// Base directory holding one subdirectory per log category.
    pub fn log_output(&self) -> &Path {
        Path::new(&self.event_listener.log_output)
    }
}

/// The `[event_listener]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct EventListenerSection {
    pub log_output: String,
    /// Pattern the listener uses to name rotated files, e.g. `yyyy-MM-dd.HH`.
    pub log_conversion_pattern: Option<String>,
}

/// The `[access]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessSection {
    #[serde(default)]
    pub admins: Vec<String>,
}
