use std::borrow::Cow;

/// Suffix every live log file carries.
const LOG_SUFFIX: &str = ".log";

/// Marker of a lock file left next to the file being written.
const LOCK_MARKER: &str = ".lck";

/// Marker of a rotated sibling, e.g. `INFO#bob#2024-03-07.log.1`.
const ROTATED_MARKER: &str = ".log.";

/// Field separator inside a log file name.
const FIELD_SEPARATOR: char = '#';

/// Metadata the event listener encodes into each log file name.
///
/// The layout is `<level>#<user>#<timestamp>.log`, for example
/// `INFO#alice#2024-03-07.09.log`. Timestamps are compared as plain
/// strings, so the writer must emit them zero-padded and fixed-width
/// (`YYYY-MM-DD` or `YYYY-MM-DD.HH`). That is not checked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogFileName<'a> {
    pub level: &'a str,
    pub user: &'a str,
    pub timestamp: &'a str,
}

impl<'a> LogFileName<'a> {
    /// Decode a physical file name.
    ///
    /// Returns `None` for anything that is not a current log file: names
    /// without `.log`, lock files, rotated siblings and names that do not
    /// split into exactly three `#` fields. Unrelated files in a category
    /// directory are therefore skipped instead of failing the listing.
    pub fn parse(file_name: &'a str) -> Option<Self> {
        if !file_name.contains(LOG_SUFFIX)
            || file_name.contains(LOCK_MARKER)
            || file_name.contains(ROTATED_MARKER)
        {
            return None;
        }

        let mut fields = file_name.split(FIELD_SEPARATOR);
        let level = fields.next()?;
        let user = fields.next()?;
        let last = fields.next()?;
        if fields.next().is_some() {
            return None;
        }

        let timestamp = last.strip_suffix(LOG_SUFFIX)?;

        Some(Self {
            level,
            user,
            timestamp,
        })
    }

    /// Timestamp to compare against a filter's bounds.
    ///
    /// A daily timestamp is padded with `.00` when the begin bound is hourly,
    /// so `2024-01-02` sorts as `2024-01-02.00` against `2024-01-02.05`.
    pub fn comparable_timestamp(&self, begin_time: Option<&str>) -> Cow<'a, str> {
        match begin_time {
            Some(begin) if begin.contains('.') && !self.timestamp.contains('.') => {
                Cow::Owned(format!("{}.00", self.timestamp))
            }
            _ => Cow::Borrowed(self.timestamp),
        }
    }
}
