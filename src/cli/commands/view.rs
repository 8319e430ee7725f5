use std::path::Path;

use crate::cli::FilterArgs;
use crate::cli::context::CommandContext;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::log_view::JsonOptions;
use crate::core::services::audit_log_service::AuditLogService;

/// Execute the `auditlog view` command.
///
/// Prints up to the last 100 lines of the matching files as a JSON
/// array on stdout, newest file first.
pub fn execute(
    config_path: Option<&Path>,
    as_user: Option<&str>,
    category: &str,
    filters: &FilterArgs,
    compact: bool,
) -> Result<()> {
    let criteria = filters.to_criteria(category)?;
    let ctx = CommandContext::load(config_path, as_user)?;

    let svc = AuditLogService::new(ctx.lister(), &ctx.policy, &ctx.session_user);
    let view = svc.view(&criteria)?;

    if view.is_empty() {
        output::warning("Matching log files are empty");
    }

    let options = JsonOptions { pretty: !compact };
    println!("{}", view.to_json(&options)?);

    tracing::debug!(
        category,
        filtered = criteria.is_filtered(),
        lines = view.len(),
        "rendered audit log view"
    );
    Ok(())
}
