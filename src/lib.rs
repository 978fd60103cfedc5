//! # pendata
//!
//! A read-only index over the output of a pen notebook conversion pipeline.
//! The filesystem is the data source: every `notebook-<id>` directory is a
//! notebook, every `page-<N>.pdf` inside it is a rendered page, and every
//! `page-<N>*.ogg` or `.aac` is a recording captured on page N.
//!
//! ```text
//! data/
//! ├── config.toml              # Optional, see [`config`]
//! ├── notebook-42/
//! │   ├── notebook_name        # "Field notes" (optional display name)
//! │   ├── page-1.pdf
//! │   ├── page-1-0001.ogg
//! │   ├── page-2.pdf
//! │   └── thumbnails/
//! │       ├── page-1.pdf.png
//! │       └── page-2.pdf.png
//! └── notebook-43/
//!     └── ...
//! ```
//!
//! # Views
//!
//! - **Notebook list** ([`library::list_notebook_summaries`]): one
//!   [`summary::Notebook`] per directory with its name, newest page date, and
//!   the PDF and audio filenames it holds.
//! - **Notebook detail** ([`library::list_notebook_pages`]): the
//!   [`pages::Page`]s of one notebook with their recordings attached, ordered
//!   by page number or by date.
//!
//! Every call rescans the directory. There is no cache to invalidate and no
//! watcher to keep running; the pipeline can add files at any time.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`classify`] | Filename → page asset, audio asset, or ignored |
//! | [`scan`] | Lists a notebook directory and stats its assets |
//! | [`pages`] | Merges PDFs and recordings into pages keyed by number |
//! | [`summary`] | Builds per-notebook summaries and reads display names |
//! | [`order`] | Orders a page map by page number or date |
//! | [`library`] | Public operations over a data directory |
//! | [`config`] | Optional `config.toml` loading and validation |
//! | [`types`] | JSON response envelope |
//! | [`output`] | CLI text formatting |
//!
//! # Error Policy
//!
//! Listing or stat failures abort the operation with a single
//! [`scan::ScanError`]; there are no partial results. Stray files and
//! filenames without a page token are not errors, they are skipped. A missing
//! display-name file falls back to the notebook id.

pub mod classify;
pub mod config;
pub mod library;
pub mod order;
pub mod output;
pub mod pages;
pub mod scan;
pub mod summary;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
