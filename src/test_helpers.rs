//! Shared test utilities for the pendata test suite.
//!
//! Builds notebook directories inside a `TempDir` and provides lookups that
//! panic with a readable message on a miss.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! let nb = make_notebook(tmp.path(), "notebook-42");
//! write_asset(&nb, "page-1.pdf", 1000);
//! write_asset(&nb, "page-1.ogg", 200);
//!
//! let pages = list_notebook_pages(tmp.path(), "42", OrderKey::PageNumber, &config).unwrap();
//! let page = find_page(&pages, 1);
//! assert_eq!(page.recordings.len(), 1);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};

use crate::pages::{Page, Recording};

// =========================================================================
// Fixture setup
// =========================================================================

/// Create a notebook directory under `root` and return its path.
pub fn make_notebook(root: &Path, dirname: &str) -> PathBuf {
    let dir = root.join(dirname);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Write a file of exactly `size` bytes and return its path.
pub fn write_asset(dir: &Path, filename: &str, size: usize) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, vec![b'x'; size]).unwrap();
    path
}

/// Write the display-name override file of a notebook.
pub fn write_name(dir: &Path, contents: &str) {
    fs::write(dir.join("notebook_name"), contents).unwrap();
}

// =========================================================================
// Value builders for pure-logic tests
// =========================================================================

/// Timestamp `secs` seconds after a fixed epoch.
pub fn ts(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
}

/// A page with a PDF dated `secs` and no recordings.
pub fn pdf_page(number: u32, secs: i64) -> Page {
    Page {
        number,
        pdf: Some(format!("pendata/notebook-1/page-{number}.pdf")),
        thumbnail: Some(format!("pendata/notebook-1/thumbnails/page-{number}.pdf.png")),
        date: Some(ts(secs)),
        size: Some(100),
        recordings: Vec::new(),
    }
}

/// A page known only from a recording.
pub fn audio_only_page(number: u32, secs: i64) -> Page {
    Page {
        number,
        pdf: None,
        thumbnail: None,
        date: None,
        size: None,
        recordings: vec![Recording {
            date: ts(secs),
            size: 10,
        }],
    }
}

// =========================================================================
// Lookups, panicking with a clear message on miss
// =========================================================================

/// Find a page by number. Panics if not found.
pub fn find_page(pages: &[Page], number: u32) -> &Page {
    pages.iter().find(|p| p.number == number).unwrap_or_else(|| {
        let numbers: Vec<u32> = pages.iter().map(|p| p.number).collect();
        panic!("page {number} not found. Available: {numbers:?}")
    })
}

/// Page numbers in sequence order.
pub fn page_numbers(pages: &[Page]) -> Vec<u32> {
    pages.iter().map(|p| p.number).collect()
}
