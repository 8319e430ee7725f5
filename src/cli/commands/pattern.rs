use std::path::Path;

use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::services::rotation_pattern::RotationPattern;

/// Execute the `auditlog pattern` command.
///
/// Prints the timestamp layout the event listener uses for file names,
/// which is also the layout `--begin-time`/`--end-time` expect.
pub fn execute(config_path: Option<&Path>) -> Result<()> {
    let config = AppConfig::load(config_path)?;
    let pattern =
        RotationPattern::resolve(config.event_listener.log_conversion_pattern.as_deref());
    println!("{pattern}");
    Ok(())
}
