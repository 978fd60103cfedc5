//! Entry points over a data directory.
//!
//! These are the operations an outer layer (the CLI here, or an HTTP handler)
//! calls. Each call is a fresh scan of the filesystem; nothing is cached.

use crate::config::LibraryConfig;
use crate::order::{self, OrderKey};
use crate::pages::{self, Page};
use crate::scan::{self, ScanError};
use crate::summary::{self, Notebook};
use std::collections::BTreeMap;
use std::path::Path;

pub use crate::summary::read_name_override;

/// Summaries of every notebook directory under `root`, keyed by directory name.
///
/// Only directories whose name starts with the notebook prefix are considered.
/// A root with no notebooks yields an empty map.
pub fn list_notebook_summaries(
    root: &Path,
    config: &LibraryConfig,
) -> Result<BTreeMap<String, Notebook>, ScanError> {
    let dirnames = scan::list_subdirectories(root, &config.layout.notebook_prefix)?;

    tracing::debug!(root = %root.display(), notebooks = dirnames.len(), "listing notebooks");
    summary::build_summaries(root, &dirnames, config)
}

/// Pages of notebook `id`, with their recordings, in `order`.
pub fn list_notebook_pages(
    root: &Path,
    id: &str,
    order: OrderKey,
    config: &LibraryConfig,
) -> Result<Vec<Page>, ScanError> {
    validate_notebook_id(id)?;
    let dirname = config.layout.notebook_dirname(id);
    let entries = scan::scan_notebook(&root.join(&dirname))?;
    let pages = pages::aggregate(&dirname, entries, config);

    tracing::debug!(notebook = %dirname, pages = pages.len(), order = order.as_str(), "listing pages");
    Ok(order::order_pages(pages, order))
}

/// Reject ids that would resolve outside the notebook's own directory.
fn validate_notebook_id(id: &str) -> Result<(), ScanError> {
    if id.contains(['/', '\\', '\0']) {
        return Err(ScanError::InvalidNotebookId(id.to_string()));
    }
    Ok(())
}
