use std::io::{Seek, Write};
use std::path::PathBuf;

use chrono::{DateTime, TimeZone};

use crate::core::errors::{AuditLogError, Result};
use crate::core::models::filter_criteria::FilterCriteria;
use crate::core::models::log_view::LogView;
use crate::core::services::log_lister::LogFileLister;
use crate::core::services::view_assembler::LogViewAssembler;
use crate::core::traits::access::AccessPolicy;
use crate::core::traits::archive::LogArchiver;

/// Serves audit log reads for one session user.
///
/// Every read checks the access policy first, then lists the category.
/// An empty listing is reported as `NotFound`, never as an empty result.
pub struct AuditLogService<'a> {
    lister: LogFileLister,
    policy: &'a dyn AccessPolicy,
    session_user: String,
}

impl<'a> AuditLogService<'a> {
    pub fn new(lister: LogFileLister, policy: &'a dyn AccessPolicy, session_user: &str) -> Self {
        Self {
            lister,
            policy,
            session_user: session_user.to_string(),
        }
    }

    pub fn session_user(&self) -> &str {
        &self.session_user
    }

    /// Latest lines of the matching files, newest file first.
    pub fn view(&self, criteria: &FilterCriteria) -> Result<LogView> {
        let paths = self.authorized_listing(criteria)?;
        LogViewAssembler::default().assemble(&paths)
    }

    /// Archive of the matching files, oldest first.
    ///
    /// `open_sink` is only called once access is granted and at least one
    /// file matched, so a refused request never creates an output.
    pub fn download<A, W, F>(
        &self,
        criteria: &FilterCriteria,
        archiver: &A,
        open_sink: F,
    ) -> Result<W>
    where
        A: LogArchiver,
        W: Write + Seek,
        F: FnOnce() -> Result<W>,
    {
        let paths = self.authorized_listing(criteria)?;
        let sink = archiver.build(&paths, open_sink()?)?;
        tracing::info!(
            category = %criteria.category,
            user = %self.session_user,
            files = paths.len(),
            "audit log archive written"
        );
        Ok(sink)
    }

    /// Listing for `criteria`, or the error the caller should report.
    pub fn authorized_listing(&self, criteria: &FilterCriteria) -> Result<Vec<PathBuf>> {
        if let Some(forced) = self.policy.user_for_filter(&self.session_user) {
            tracing::warn!(user = %forced, "audit log access denied");
            return Err(AuditLogError::AccessDenied { user: forced });
        }

        let paths = self.lister.list(criteria)?;
        if paths.is_empty() {
            return Err(AuditLogError::NotFound {
                category: criteria.category.clone(),
            });
        }
        Ok(paths)
    }
}

/// Name offered for a downloaded archive:
/// `<yyyy-MM-dd.HH>_<session user>_auditLog.<extension>`.
pub fn download_file_name<Tz>(now: &DateTime<Tz>, session_user: &str, extension: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let user: String = session_user
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | '\0') { '_' } else { c })
        .collect();
    format!("{}_{user}_auditLog.{extension}", now.format("%Y-%m-%d.%H"))
}
