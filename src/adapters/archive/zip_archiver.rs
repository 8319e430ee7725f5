use std::collections::HashSet;
use std::fs::File;
use std::io::{ErrorKind, Read, Seek, Write};
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::core::errors::{AuditLogError, Result};
use crate::core::traits::archive::LogArchiver;

/// Size of the buffer used to copy file contents into an entry.
const TRANSFER_BUFFER_SIZE: usize = 1024;

/// Packs log files into a deflated zip archive, one entry per file.
///
/// Entries are named after the file's base name. Two files sharing a base
/// name cannot both be stored, so the second one fails the build instead
/// of silently replacing the first.
pub struct ZipLogArchiver;

impl ZipLogArchiver {
    fn write_entries<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        paths: &[PathBuf],
    ) -> Result<()> {
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut seen = HashSet::new();

        for path in paths {
            let name = entry_name(path)?;
            if !seen.insert(name.clone()) {
                return Err(AuditLogError::ArchiveError {
                    detail: format!(
                        "duplicate entry name '{name}' for {}; refusing to overwrite",
                        path.display()
                    ),
                });
            }

            let mut file = File::open(path)?;
            zip.start_file(name.as_str(), options)
                .map_err(|e| archive_error(path, e))?;
            let bytes = copy_buffered(&mut file, zip)?;

            tracing::debug!(entry = %name, bytes, "archived log file");
        }

        Ok(())
    }
}

impl LogArchiver for ZipLogArchiver {
    fn build<W: Write + Seek>(&self, paths: &[PathBuf], sink: W) -> Result<W> {
        let mut zip = ZipWriter::new(sink);
        let written = self.write_entries(&mut zip, paths);
        let finished = zip.finish();

        match (written, finished) {
            (Ok(()), Ok(sink)) => Ok(sink),
            (Ok(()), Err(e)) => Err(AuditLogError::ArchiveError {
                detail: format!("failed to finalize archive: {e}"),
            }),
            (Err(e), finished) => {
                if let Err(finish_err) = finished {
                    tracing::warn!(error = %finish_err, "failed to finalize partial archive");
                }
                Err(e)
            }
        }
    }

    fn extension(&self) -> &str {
        "zip"
    }
}

fn entry_name(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(|| AuditLogError::ArchiveError {
            detail: format!("{}: file name is not valid UTF-8", path.display()),
        })
}

fn archive_error(path: &Path, err: zip::result::ZipError) -> AuditLogError {
    AuditLogError::ArchiveError {
        detail: format!("{}: {err}", path.display()),
    }
}

/// Copy `reader` into `writer` through a fixed-size buffer.
fn copy_buffered<R: Read, W: Write>(reader: &mut R, writer: &mut W) -> Result<u64> {
    let mut buf = [0u8; TRANSFER_BUFFER_SIZE];
    let mut total = 0u64;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        writer.write_all(&buf[..n])?;
        total += n as u64;
    }
    Ok(total)
}
