//! File loading and saving.
//!
//! A file is a sequence of lines each terminated by `'\n'`. Content is never decoded; CR bytes
//! from CRLF files stay at the end of their line.

use crate::storage::{Line, LineStore};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading or writing the document file.
#[derive(Debug, Error)]
pub enum FileError {
    /// The path exists but is a directory, device, socket...
    #[error("'{}' is not a regular file", .path.display())]
    NotRegularFile {
        /// Offending path.
        path: PathBuf,
    },
    /// `stat` failed for a reason other than the file not existing.
    #[error("could not stat '{}': {source}", .path.display())]
    Metadata {
        /// Offending path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// Reading an existing file failed.
    #[error("could not read '{}': {source}", .path.display())]
    Read {
        /// Offending path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// Creating or writing the file failed.
    #[error("could not write '{}': {source}", .path.display())]
    Write {
        /// Offending path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Load `path` into a line store.
///
/// A missing file yields a single empty line, so a new document can be created by saving.
pub fn load(path: &Path) -> Result<LineStore, FileError> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "file does not exist, starting empty");
            return Ok(LineStore::with_empty_line());
        }
        Err(source) => {
            return Err(FileError::Metadata {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if !metadata.is_file() {
        return Err(FileError::NotRegularFile {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let store = split_lines(&bytes);
    tracing::debug!(
        path = %path.display(),
        bytes = bytes.len(),
        lines = store.line_count(),
        "file loaded"
    );
    Ok(store)
}

/// Overwrite `path` with every line followed by `'\n'`. Returns the number of lines written.
pub fn save(path: &Path, store: &LineStore) -> Result<usize, FileError> {
    let write_error = |source| FileError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    for line in store.iter() {
        writer.write_all(line.as_bytes()).map_err(write_error)?;
        writer.write_all(b"\n").map_err(write_error)?;
    }
    writer.flush().map_err(write_error)?;

    tracing::debug!(path = %path.display(), lines = store.line_count(), "file saved");
    Ok(store.line_count())
}

/// Split file content on `'\n'`. A final newline terminates the last line rather than starting
/// an empty one; empty content yields one empty line.
pub fn split_lines(bytes: &[u8]) -> LineStore {
    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    LineStore::from_lines(body.split(|&b| b == b'\n').map(Line::from))
}

/// Serialize a line store the way [`save`] writes it.
pub fn join_lines(store: &LineStore) -> Vec<u8> {
    let mut out = Vec::with_capacity(store.iter().map(|line| line.len() + 1).sum());
    for line in store.iter() {
        out.extend_from_slice(line.as_bytes());
        out.push(b'\n');
    }
    out
}
