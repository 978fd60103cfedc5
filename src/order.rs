//! Page ordering for the notebook detail view.
//!
//! Pages can be listed by page number (the default) or by the creation date
//! of their PDF. Both orders are ascending and stable. Pages without a PDF
//! have no date and sort before every dated page.

use crate::pages::Page;
use std::collections::BTreeMap;

/// Field to order a page listing by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderKey {
    /// Ascending page number.
    #[default]
    PageNumber,
    /// Ascending PDF creation date.
    Date,
}

impl OrderKey {
    /// Parse a caller-supplied order name.
    ///
    /// `"date"` selects [`OrderKey::Date`]; anything else, including no value,
    /// falls back to [`OrderKey::PageNumber`].
    pub fn parse_lossy(value: Option<&str>) -> Self {
        match value {
            Some("date") => OrderKey::Date,
            _ => OrderKey::PageNumber,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderKey::PageNumber => "pagenumber",
            OrderKey::Date => "date",
        }
    }
}

/// Flatten a page map into a sequence sorted by `key`.
pub fn order_pages(pages: BTreeMap<u32, Page>, key: OrderKey) -> Vec<Page> {
    let mut ordered: Vec<Page> = pages.into_values().collect();
    sort_pages(&mut ordered, key);
    ordered
}

/// Stable in-place sort of a page sequence by `key`.
pub fn sort_pages(pages: &mut [Page], key: OrderKey) {
    match key {
        OrderKey::PageNumber => pages.sort_by_key(|p| p.number),
        OrderKey::Date => pages.sort_by_key(|p| p.date),
    }
}
