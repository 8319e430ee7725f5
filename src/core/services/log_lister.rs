use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::core::errors::Result;
use crate::core::models::filter_criteria::FilterCriteria;
use crate::core::services::log_filter::LogFileFilter;

/// Finds the log files of one category that match a set of filters.
pub struct LogFileLister {
    log_output: PathBuf,
}

impl LogFileLister {
    /// Create a lister rooted at the event listener's output directory.
    pub fn new(log_output: impl Into<PathBuf>) -> Self {
        Self {
            log_output: log_output.into(),
        }
    }

    /// Directory holding the files of `category`.
    pub fn category_dir(&self, category: &str) -> PathBuf {
        self.log_output.join(category)
    }

    /// List matching files, oldest modification time first.
    ///
    /// A missing category directory yields an empty list. Read and
    /// canonicalization errors are returned as-is; no partial list is
    /// produced in that case. Returned paths are absolute and have
    /// symlinks resolved.
    pub fn list(&self, criteria: &FilterCriteria) -> Result<Vec<PathBuf>> {
        let dir = self.category_dir(&criteria.category);
        if !dir.is_dir() {
            tracing::debug!(dir = %dir.display(), "category directory not found");
            return Ok(Vec::new());
        }

        let mut entries = read_entries(&dir)?;
        // stable: entries with equal mtimes keep directory order
        entries.sort_by_key(|(_, modified)| *modified);

        let filter = LogFileFilter;
        let mut matched = Vec::new();
        for (path, _) in &entries {
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if filter.matches(file_name, criteria) {
                matched.push(fs::canonicalize(path)?);
            }
        }

        tracing::debug!(
            dir = %dir.display(),
            scanned = entries.len(),
            matched = matched.len(),
            "listed audit log files"
        );

        Ok(matched)
    }
}

/// Read the direct children of `dir` with their modification times.
fn read_entries(dir: &Path) -> Result<Vec<(PathBuf, SystemTime)>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let modified = entry.metadata()?.modified()?;
        entries.push((entry.path(), modified));
    }
    Ok(entries)
}
