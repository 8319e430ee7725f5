/// All domain errors for auditlog.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum AuditLogError {
    #[error(
        "Access denied for user '{user}'\n\n  \
         Audit logs can only be read by administrators.\n  \
         Ask an operator to add you to [access].admins in the config file."
    )]
    AccessDenied { user: String },

    #[error(
        "No audit log files found in category '{category}'\n\n  \
         Either the category directory does not exist or no file matched the filters.\n  \
         Try removing --user, --level or the time bounds."
    )]
    NotFound { category: String },

    #[error(
        "Invalid log category '{name}'\n\n  \
         A category is a single directory name under the log output root,\n  \
         e.g. 'query' or 'access'. Separators and '..' are not allowed."
    )]
    InvalidCategory { name: String },

    #[error(
        "Invalid {field} '{value}'\n\n  \
         Expected YYYY-MM-DD (daily) or YYYY-MM-DD.HH (hourly), zero-padded,\n  \
         e.g. 2024-03-07 or 2024-03-07.09. Partial bounds such as 2024-01\n  \
         are not supported. Run 'auditlog pattern' to see which one applies."
    )]
    InvalidTimeBound { field: &'static str, value: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error("Archive error: {detail}")]
    ArchiveError { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AuditLogError>;
