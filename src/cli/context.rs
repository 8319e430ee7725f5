use std::path::Path;

use crate::adapters::access::config_access_policy::ConfigAccessPolicy;
use crate::cli::FilterArgs;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::models::filter_criteria::FilterCriteria;
use crate::core::services::log_lister::LogFileLister;

/// Everything a command needs besides its own arguments.
pub struct CommandContext {
    pub config: AppConfig,
    pub session_user: String,
    pub policy: ConfigAccessPolicy,
}

impl CommandContext {
    /// Load the config and resolve who the request is made as.
    pub fn load(config_path: Option<&Path>, as_user: Option<&str>) -> Result<Self> {
        let config = AppConfig::load(config_path)?;
        let policy = ConfigAccessPolicy::from_config(config.access.as_ref());
        Ok(Self {
            config,
            session_user: session_user(as_user),
            policy,
        })
    }

    pub fn lister(&self) -> LogFileLister {
        LogFileLister::new(self.config.log_output())
    }
}

/// `--as`/`AUDITLOG_USER`, then the OS login name, then `unknown`.
pub fn session_user(explicit: Option<&str>) -> String {
    explicit
        .filter(|u| !u.is_empty())
        .map(str::to_string)
        .or_else(|| std::env::var("USER").ok().filter(|u| !u.is_empty()))
        .or_else(|| std::env::var("USERNAME").ok().filter(|u| !u.is_empty()))
        .unwrap_or_else(|| "unknown".to_string())
}

impl FilterArgs {
    /// Normalize the raw flags for `category` into filter criteria.
    pub fn to_criteria(&self, category: &str) -> Result<FilterCriteria> {
        FilterCriteria::new(
            category,
            self.user.as_deref(),
            self.begin_time.as_deref(),
            self.end_time.as_deref(),
            self.level.as_deref(),
        )
    }
}
