use std::sync::LazyLock;

use regex::Regex;

use crate::core::errors::{AuditLogError, Result};

/// Accepted shape of a time bound: `YYYY-MM-DD` or `YYYY-MM-DD.HH`.
static TIME_BOUND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}(\.\d{2})?$").expect("time bound pattern is valid")
});

/// Normalized filters for one request.
///
/// Empty strings are treated as "not set", so a blank form field never
/// turns into a filter that matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub category: String,
    pub user: Option<String>,
    pub begin_time: Option<String>,
    pub end_time: Option<String>,
    pub level: Option<String>,
}

impl FilterCriteria {
    /// Build criteria from raw request parameters.
    ///
    /// Rejects categories that are not a single directory name and time
    /// bounds that are not zero-padded `YYYY-MM-DD[.HH]` strings.
    pub fn new(
        category: &str,
        user: Option<&str>,
        begin_time: Option<&str>,
        end_time: Option<&str>,
        level: Option<&str>,
    ) -> Result<Self> {
        validate_category(category)?;

        let begin_time = empty_to_none(begin_time);
        let end_time = empty_to_none(end_time);
        if let Some(value) = &begin_time {
            validate_time_bound("begin time", value)?;
        }
        if let Some(value) = &end_time {
            validate_time_bound("end time", value)?;
        }

        Ok(Self {
            category: category.to_string(),
            user: empty_to_none(user),
            begin_time,
            end_time,
            level: empty_to_none(level),
        })
    }

    /// Criteria for a category with no filters at all.
    #[cfg(test)]
    pub fn for_category(category: &str) -> Result<Self> {
        Self::new(category, None, None, None, None)
    }

    /// True when at least one of user, time range or level is set.
    pub fn is_filtered(&self) -> bool {
        self.user.is_some()
            || self.begin_time.is_some()
            || self.end_time.is_some()
            || self.level.is_some()
    }
}

fn empty_to_none(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// A category must name exactly one directory below the log output root.
fn validate_category(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);
    if invalid {
        return Err(AuditLogError::InvalidCategory {
            name: name.to_string(),
        });
    }
    Ok(())
}

fn validate_time_bound(field: &'static str, value: &str) -> Result<()> {
    if TIME_BOUND.is_match(value) {
        Ok(())
    } else {
        Err(AuditLogError::InvalidTimeBound {
            field,
            value: value.to_string(),
        })
    }
}
