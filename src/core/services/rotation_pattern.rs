use std::fmt;

/// How often the event listener starts a new log file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationPattern {
    Daily,
    Hourly,
}

impl RotationPattern {
    /// Infer the rotation from the listener's log conversion pattern.
    ///
    /// Any `.` in the pattern means an hour component follows the date.
    pub fn resolve(log_conversion_pattern: Option<&str>) -> Self {
        match log_conversion_pattern {
            Some(pattern) if pattern.contains('.') => Self::Hourly,
            _ => Self::Daily,
        }
    }

    /// Timestamp layout used in file names and time bounds.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "YYYY-MM-DD",
            Self::Hourly => "YYYY-MM-DD.HH",
        }
    }
}

impl fmt::Display for RotationPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
