//! Notebook summaries for the notebook list.
//!
//! Each notebook directory becomes one [`Notebook`] record: its id, display
//! name, the PDF and audio filenames it holds, and the newest PDF creation
//! time. Unlike the page view, the summary classifies by extension alone, so
//! a PDF without a `page-N` token still counts toward `pages` and `date`.
//!
//! Notebooks are summarized in parallel and merged by the caller. Any listing
//! or stat failure aborts the whole build with that single error; the
//! display-name file is optional and never fails a build.

use crate::classify::{self, MediaType};
use crate::config::LibraryConfig;
use crate::scan::{self, ScanError};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// Summary of one notebook directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notebook {
    /// Directory name with the notebook prefix stripped.
    pub id: String,
    pub dirname: String,
    /// Display name from the name file, or the id.
    pub name: String,
    /// Newest PDF creation time; `null` until the first page is rendered.
    pub date: Option<DateTime<Utc>>,
    /// PDF filenames in listing order.
    pub pages: Vec<String>,
    /// Audio filenames in listing order.
    pub audio: Vec<String>,
}

/// Read the display-name override of a notebook directory.
///
/// Returns `None` when the file is missing or unreadable. The trailing run of
/// newlines and tabs is stripped; interior whitespace is kept.
pub fn read_name_override(notebook_dir: &Path, config: &LibraryConfig) -> Option<String> {
    let path = notebook_dir.join(&config.layout.name_file);
    match fs::read(&path) {
        Ok(bytes) => Some(clean_name(&String::from_utf8_lossy(&bytes))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "unreadable notebook name file");
            None
        }
    }
}

fn clean_name(raw: &str) -> String {
    raw.trim_end_matches(['\n', '\r', '\t']).to_string()
}

/// Summarize a single notebook directory `dirname` under `root`.
pub fn summarize_notebook(
    root: &Path,
    dirname: &str,
    config: &LibraryConfig,
) -> Result<Notebook, ScanError> {
    let dir = root.join(dirname);
    let id = dirname
        .strip_prefix(config.layout.notebook_prefix.as_str())
        .unwrap_or(dirname)
        .to_string();

    let filenames = scan::list_filenames(&dir)?;
    let name = read_name_override(&dir, config).unwrap_or_else(|| id.clone());

    let mut notebook = Notebook {
        id,
        dirname: dirname.to_string(),
        name,
        date: None,
        pages: Vec::new(),
        audio: Vec::new(),
    };

    for filename in filenames {
        match classify::media_type(&filename) {
            Some(MediaType::Pdf) => {
                let stat = scan::stat_file(&dir.join(&filename))?;
                notebook.date = notebook.date.max(Some(stat.created));
                notebook.pages.push(filename);
            }
            Some(MediaType::Audio) => notebook.audio.push(filename),
            None => {}
        }
    }

    tracing::debug!(
        notebook = dirname,
        pages = notebook.pages.len(),
        audio = notebook.audio.len(),
        "summarized notebook"
    );
    Ok(notebook)
}

/// Summarize every notebook in `dirnames`, keyed by directory name.
///
/// `dirnames` are expected to be pre-filtered to notebook directories.
pub fn build_summaries(
    root: &Path,
    dirnames: &[String],
    config: &LibraryConfig,
) -> Result<BTreeMap<String, Notebook>, ScanError> {
    let notebooks = dirnames
        .par_iter()
        .map(|dirname| summarize_notebook(root, dirname, config))
        .collect::<Result<Vec<_>, ScanError>>()?;

    Ok(notebooks
        .into_iter()
        .map(|nb| (nb.dirname.clone(), nb))
        .collect())
}
