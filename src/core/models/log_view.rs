use serde::Serialize;

use crate::core::errors::{AuditLogError, Result};

/// Maximum number of lines returned for inline display.
pub const VIEW_LINE_LIMIT: usize = 100;

/// Encoder settings for rendering a view.
///
/// Passed explicitly to every render call instead of living in shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonOptions {
    pub pretty: bool,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Lines from the newest matching files, capped at a fixed count.
///
/// Files appear newest first; lines inside one file keep their order.
/// Every line keeps its trailing line terminator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LogView {
    pub lines: Vec<String>,
}

impl LogView {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render the view as a JSON array of strings.
    pub fn to_json(&self, options: &JsonOptions) -> Result<String> {
        let rendered = if options.pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        rendered.map_err(|e| AuditLogError::Io(e.into()))
    }
}
