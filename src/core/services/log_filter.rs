use crate::core::models::filter_criteria::FilterCriteria;
use crate::core::models::log_file_name::LogFileName;

/// Decides whether a single log file belongs in a result set.
pub struct LogFileFilter;

impl LogFileFilter {
    /// Check a file name against the criteria.
    ///
    /// Checks run in order and stop at the first failure:
    /// structure, begin time, end time, user, level. Time bounds are
    /// inclusive and compared as strings. User and level are exact,
    /// case-sensitive matches. The category is not consulted here; the
    /// lister has already picked the directory.
    pub fn matches(&self, file_name: &str, criteria: &FilterCriteria) -> bool {
        let Some(name) = LogFileName::parse(file_name) else {
            return false;
        };

        let begin = criteria.begin_time.as_deref();
        let timestamp = name.comparable_timestamp(begin);

        if let Some(begin) = begin
            && *timestamp < *begin
        {
            return false;
        }
        if let Some(end) = criteria.end_time.as_deref()
            && *timestamp > *end
        {
            return false;
        }
        if let Some(user) = criteria.user.as_deref()
            && name.user != user
        {
            return false;
        }
        if let Some(level) = criteria.level.as_deref()
            && name.level != level
        {
            return false;
        }

        true
    }
}
