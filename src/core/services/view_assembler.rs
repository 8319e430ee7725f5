use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use crate::core::errors::Result;
use crate::core::models::log_view::{LogView, VIEW_LINE_LIMIT};

#[cfg(windows)]
const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
const LINE_SEPARATOR: &str = "\n";

/// Builds the inline view from a listing.
pub struct LogViewAssembler {
    limit: usize,
}

impl Default for LogViewAssembler {
    fn default() -> Self {
        Self::with_limit(VIEW_LINE_LIMIT)
    }
}

impl LogViewAssembler {
    pub fn with_limit(limit: usize) -> Self {
        Self { limit }
    }

    /// Collect up to the line limit from `paths`, newest file first.
    ///
    /// `paths` is expected in listing order (oldest first). Reading stops
    /// in the middle of a file once the limit is reached. Bytes that are
    /// not valid UTF-8 are replaced, not rejected; any read error aborts
    /// the whole view.
    pub fn assemble(&self, paths: &[PathBuf]) -> Result<LogView> {
        let mut lines = Vec::with_capacity(self.limit);

        'files: for path in paths.iter().rev() {
            if lines.len() >= self.limit {
                break;
            }
            let mut reader = BufReader::new(File::open(path)?);
            let mut buf = Vec::new();
            loop {
                buf.clear();
                if reader.read_until(b'\n', &mut buf)? == 0 {
                    break;
                }
                lines.push(format!("{}{LINE_SEPARATOR}", decode_line(&buf)));
                if lines.len() >= self.limit {
                    tracing::debug!(
                        limit = self.limit,
                        path = %path.display(),
                        "view line limit reached"
                    );
                    break 'files;
                }
            }
        }

        Ok(LogView { lines })
    }
}

/// Strip a trailing `\n` or `\r\n` and decode, replacing invalid UTF-8.
fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw)
}
