use std::fs::{self, File};
use std::path::Path;

use chrono::Local;

use crate::adapters::archive::zip_archiver::ZipLogArchiver;
use crate::cli::FilterArgs;
use crate::cli::context::CommandContext;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::services::audit_log_service::{AuditLogService, download_file_name};
use crate::core::traits::archive::LogArchiver;

/// Execute the `auditlog download` command.
///
/// Writes `<yyyy-MM-dd.HH>_<user>_auditLog.zip` into `output_dir` with
/// one entry per matching file, oldest first.
pub fn execute(
    config_path: Option<&Path>,
    as_user: Option<&str>,
    category: &str,
    filters: &FilterArgs,
    output_dir: &Path,
) -> Result<()> {
    let criteria = filters.to_criteria(category)?;
    let ctx = CommandContext::load(config_path, as_user)?;
    let svc = AuditLogService::new(ctx.lister(), &ctx.policy, &ctx.session_user);

    let archiver = ZipLogArchiver;
    let file_name = download_file_name(&Local::now(), svc.session_user(), archiver.extension());
    let archive_path = output_dir.join(&file_name);

    let mut created = false;
    let result = svc.download(&criteria, &archiver, || {
        fs::create_dir_all(output_dir)?;
        let file = File::create(&archive_path)?;
        created = true;
        Ok(file)
    });

    match result {
        Ok(file) => {
            file.sync_all()?;
            output::header("auditlog download");
            output::success(&format!("Archive written to {}", archive_path.display()));
            Ok(())
        }
        Err(e) => {
            // Only this run's partial archive is removed; an earlier export
            // with the same name stays untouched when nothing was written.
            if created && fs::remove_file(&archive_path).is_err() {
                output::warning(&format!(
                    "Could not remove incomplete archive {}",
                    archive_path.display()
                ));
            }
            Err(e)
        }
    }
}
