//! Page aggregation.
//!
//! Folds the entries of one notebook scan into a map from page number to
//! [`Page`]. PDFs and recordings are discovered independently and meet on the
//! page number:
//!
//! ```text
//! page-1.pdf       ─┐
//! page-1-0001.ogg  ─┼─→ Page 1 { pdf, thumbnail, date, size, recordings: [ogg, aac] }
//! page-1-0002.aac  ─┘
//! page-3-0001.ogg  ───→ Page 3 { recordings: [ogg] }        (no PDF yet)
//! ```
//!
//! The merge does not depend on which asset of a page comes first. The one
//! order-dependent case is two PDFs claiming the same number: the later one in
//! listing order overwrites the PDF fields. Recordings are only ever appended.

use crate::classify::AssetKind;
use crate::config::LibraryConfig;
use crate::scan::Entry;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// One numbered sheet of a notebook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub number: u32,
    /// Reference to the rendered PDF, if one has been produced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf: Option<String>,
    /// Reference to `<thumbnails_dir>/<pdf filename>.png`. Never checked for existence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Creation time of the PDF.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    /// Size of the PDF in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    pub recordings: Vec<Recording>,
}

impl Page {
    fn empty(number: u32) -> Self {
        Self {
            number,
            pdf: None,
            thumbnail: None,
            date: None,
            size: None,
            recordings: Vec::new(),
        }
    }
}

/// One audio capture attached to a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recording {
    pub date: DateTime<Utc>,
    pub size: u64,
}

/// Merge scanned entries of notebook `dirname` into pages keyed by number.
pub fn aggregate(
    dirname: &str,
    entries: impl IntoIterator<Item = Entry>,
    config: &LibraryConfig,
) -> BTreeMap<u32, Page> {
    let mut pages: BTreeMap<u32, Page> = BTreeMap::new();

    for entry in entries {
        match entry.kind {
            AssetKind::Page(number) => {
                let page = pages.entry(number).or_insert_with(|| Page::empty(number));
                if page.pdf.is_some() {
                    tracing::debug!(
                        notebook = dirname,
                        page = number,
                        file = %entry.filename,
                        "duplicate page number, later PDF wins"
                    );
                }
                let thumbnail = format!("{}/{}.png", config.layout.thumbnails_dir, entry.filename);
                page.pdf = Some(config.assets.asset_url(dirname, &entry.filename));
                page.thumbnail = Some(config.assets.asset_url(dirname, &thumbnail));
                page.date = Some(entry.stat.created);
                page.size = Some(entry.stat.size);
            }
            AssetKind::Audio(number) => {
                pages
                    .entry(number)
                    .or_insert_with(|| Page::empty(number))
                    .recordings
                    .push(Recording {
                        date: entry.stat.created,
                        size: entry.stat.size,
                    });
            }
            AssetKind::Ignored => {}
        }
    }

    pages
}
