use std::io::{Seek, Write};
use std::path::PathBuf;

use crate::core::errors::Result;

/// Port for packing listed log files into a downloadable archive.
///
/// Implementations live in `adapters::archive`.
pub trait LogArchiver {
    /// Write one entry per path, in the given order, into `sink`.
    ///
    /// The archive is finalized on every exit path. On success the sink
    /// is handed back; on failure it has already been finalized and dropped.
    fn build<W: Write + Seek>(&self, paths: &[PathBuf], sink: W) -> Result<W>;

    /// File extension of produced archives, without the dot.
    fn extension(&self) -> &str;
}
