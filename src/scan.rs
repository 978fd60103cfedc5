//! Notebook directory scanning.
//!
//! Lists one notebook directory, classifies each filename, and stats only the
//! files that classify as page or audio assets. Unrelated files cost a single
//! string check and no syscall.
//!
//! ## Failure policy
//!
//! Scanning is fail-fast. A directory that cannot be listed, or any asset that
//! cannot be stat'ed, aborts the scan with a [`ScanError`] naming the path.
//! No partial entry list is ever returned.
//!
//! ## Parallelism
//!
//! Stat calls run on the rayon pool. Results are collected back in listing
//! order, so the entries (and everything aggregated from them) are identical
//! to a sequential scan.

use crate::classify::{self, AssetKind};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Not found: {0}")]
    NotFound(PathBuf),
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid notebook id: {0:?}")]
    InvalidNotebookId(String),
}

impl ScanError {
    /// Attach `path` to an IO error, mapping the kinds callers distinguish.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => ScanError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => ScanError::PermissionDenied(path.to_path_buf()),
            _ => ScanError::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

/// Size and capture time of an asset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    pub created: DateTime<Utc>,
    pub size: u64,
}

/// A classified asset found in a notebook directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub filename: String,
    /// Never [`AssetKind::Ignored`].
    pub kind: AssetKind,
    pub stat: FileStat,
}

/// Stat a file for its creation time and size.
///
/// Filesystems that do not record a birth time fall back to the modification
/// time; any other metadata failure is an error.
pub fn stat_file(path: &Path) -> Result<FileStat, ScanError> {
    let meta = fs::metadata(path).map_err(|e| ScanError::from_io(path, e))?;
    let created = match meta.created() {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::Unsupported => {
            meta.modified().map_err(|e| ScanError::from_io(path, e))?
        }
        Err(e) => return Err(ScanError::from_io(path, e)),
    };
    Ok(FileStat {
        created: DateTime::<Utc>::from(created),
        size: meta.len(),
    })
}

/// Read a directory, keeping entries whose name is valid UTF-8.
///
/// Asset and notebook names are plain ASCII by convention. Anything else is a
/// stray file and is skipped, since a lossy name would no longer point at it.
fn read_named_entries(dir: &Path) -> Result<Vec<(String, fs::DirEntry)>, ScanError> {
    let read_dir = fs::read_dir(dir).map_err(|e| ScanError::from_io(dir, e))?;
    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| ScanError::from_io(dir, e))?;
        match entry.file_name().into_string() {
            Ok(name) => entries.push((name, entry)),
            Err(raw) => {
                tracing::trace!(dir = %dir.display(), file = ?raw, "skipping non-UTF-8 filename");
            }
        }
    }
    Ok(entries)
}

/// List the filenames of a directory in listing order.
///
/// Names that are not valid UTF-8 are skipped.
pub fn list_filenames(dir: &Path) -> Result<Vec<String>, ScanError> {
    Ok(read_named_entries(dir)?
        .into_iter()
        .map(|(name, _)| name)
        .collect())
}

/// List subdirectories of `dir` whose name starts with `prefix`.
///
/// The entry's own file type decides; symlinks are followed. A file type or
/// symlink target that cannot be read is an error.
pub fn list_subdirectories(dir: &Path, prefix: &str) -> Result<Vec<String>, ScanError> {
    let mut dirnames = Vec::new();
    for (name, entry) in read_named_entries(dir)? {
        if !name.starts_with(prefix) {
            continue;
        }
        let path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|e| ScanError::from_io(&path, e))?;
        let is_dir = if file_type.is_symlink() {
            fs::metadata(&path)
                .map_err(|e| ScanError::from_io(&path, e))?
                .is_dir()
        } else {
            file_type.is_dir()
        };
        if is_dir {
            dirnames.push(name);
        }
    }
    Ok(dirnames)
}

/// Scan a notebook directory for page and audio assets.
///
/// Ignored files are skipped before any stat call.
pub fn scan_notebook(dir: &Path) -> Result<Vec<Entry>, ScanError> {
    let classified: Vec<(String, AssetKind)> = list_filenames(dir)?
        .into_iter()
        .filter_map(|filename| match classify::classify(&filename) {
            AssetKind::Ignored => {
                tracing::trace!(file = %filename, "ignoring unrecognized file");
                None
            }
            kind => Some((filename, kind)),
        })
        .collect();

    let entries = classified
        .into_par_iter()
        .map(|(filename, kind)| {
            let stat = stat_file(&dir.join(&filename))?;
            Ok(Entry {
                filename,
                kind,
                stat,
            })
        })
        .collect::<Result<Vec<_>, ScanError>>()?;

    tracing::debug!(dir = %dir.display(), assets = entries.len(), "scanned notebook directory");
    Ok(entries)
}
