//! CLI output formatting.
//!
//! Output is information-first: each entity leads with its positional index
//! and display name, with filesystem details on indented context lines.
//!
//! ## Notebooks
//!
//! ```text
//! Notebooks
//! 001 Groceries (2 pages, 1 recording)
//!     Source: notebook-1/
//!     Updated: 2026-10-01 14:03:11 UTC
//! 002 7 (empty)
//!     Source: notebook-7/
//! ```
//!
//! ## Pages
//!
//! ```text
//! notebook-42 by pagenumber
//! 001 Page 1
//!     Source: pendata/notebook-42/page-1.pdf (1000 bytes)
//!     Date: 2026-10-01 14:03:11 UTC
//!     Recording: 2026-10-01 14:05:40 UTC (200 bytes)
//! 002 Page 3 (no PDF)
//!     Recording: 2026-10-01 14:07:02 UTC (512 bytes)
//! ```
//!
//! Each view has a `format_*` function returning `Vec<String>` for testability
//! and a `print_*` wrapper that writes to stdout.

use crate::order::OrderKey;
use crate::pages::Page;
use crate::summary::Notebook;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Format the notebook list.
pub fn format_notebooks(notebooks: &BTreeMap<String, Notebook>) -> Vec<String> {
    let mut lines = vec!["Notebooks".to_string()];
    if notebooks.is_empty() {
        lines.push("    (none)".to_string());
        return lines;
    }

    for (i, nb) in notebooks.values().enumerate() {
        let counts = match (nb.pages.len(), nb.audio.len()) {
            (0, 0) => "empty".to_string(),
            (p, 0) => plural(p, "page"),
            (p, a) => format!("{}, {}", plural(p, "page"), plural(a, "recording")),
        };
        lines.push(format!("{} {} ({})", format_index(i + 1), nb.name, counts));
        lines.push(format!("    Source: {}/", nb.dirname));
        if let Some(date) = &nb.date {
            lines.push(format!("    Updated: {}", format_date(date)));
        }
    }
    lines
}

/// Format the page listing of one notebook.
pub fn format_pages(dirname: &str, order: OrderKey, pages: &[Page]) -> Vec<String> {
    let mut lines = vec![format!("{} by {}", dirname, order.as_str())];
    if pages.is_empty() {
        lines.push("    (no pages)".to_string());
        return lines;
    }

    for (i, page) in pages.iter().enumerate() {
        let marker = if page.pdf.is_none() { " (no PDF)" } else { "" };
        lines.push(format!("{} Page {}{}", format_index(i + 1), page.number, marker));

        if let Some(pdf) = &page.pdf {
            match page.size {
                Some(size) => lines.push(format!("    Source: {pdf} ({size} bytes)")),
                None => lines.push(format!("    Source: {pdf}")),
            }
        }
        if let Some(date) = &page.date {
            lines.push(format!("    Date: {}", format_date(date)));
        }
        for rec in &page.recordings {
            lines.push(format!(
                "    Recording: {} ({} bytes)",
                format_date(&rec.date),
                rec.size
            ));
        }
    }
    lines
}

/// Print the notebook list to stdout.
pub fn print_notebooks(notebooks: &BTreeMap<String, Notebook>) {
    for line in format_notebooks(notebooks) {
        println!("{}", line);
    }
}

/// Print a page listing to stdout.
pub fn print_pages(dirname: &str, order: OrderKey, pages: &[Page]) {
    for line in format_pages(dirname, order, pages) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    fn notebook(dirname: &str, name: &str, pages: usize, audio: usize) -> Notebook {
        Notebook {
            id: dirname.trim_start_matches("notebook-").to_string(),
            dirname: dirname.to_string(),
            name: name.to_string(),
            date: (pages > 0).then(|| ts(0)),
            pages: (1..=pages).map(|n| format!("page-{n}.pdf")).collect(),
            audio: (1..=audio).map(|n| format!("page-{n}.ogg")).collect(),
        }
    }

    #[test]
    fn notebook_lines() {
        let mut map = BTreeMap::new();
        map.insert("notebook-1".to_string(), notebook("notebook-1", "Groceries", 2, 1));
        map.insert("notebook-7".to_string(), notebook("notebook-7", "7", 0, 0));

        let lines = format_notebooks(&map);
        assert_eq!(lines[0], "Notebooks");
        assert_eq!(lines[1], "001 Groceries (2 pages, 1 recording)");
        assert_eq!(lines[2], "    Source: notebook-1/");
        assert!(lines[3].starts_with("    Updated: 2023-11-14"));
        assert_eq!(lines[4], "002 7 (empty)");
        assert_eq!(lines[5], "    Source: notebook-7/");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn no_notebooks() {
        let lines = format_notebooks(&BTreeMap::new());
        assert_eq!(lines, vec!["Notebooks", "    (none)"]);
    }

    #[test]
    fn page_lines() {
        let pages = vec![pdf_page(1, 0), audio_only_page(3, 60)];
        let lines = format_pages("notebook-1", OrderKey::PageNumber, &pages);

        assert_eq!(lines[0], "notebook-1 by pagenumber");
        assert_eq!(lines[1], "001 Page 1");
        assert_eq!(lines[2], "    Source: pendata/notebook-1/page-1.pdf (100 bytes)");
        assert!(lines[3].starts_with("    Date: "));
        assert_eq!(lines[4], "002 Page 3 (no PDF)");
        assert!(lines[5].starts_with("    Recording: "));
        assert!(lines[5].ends_with("(10 bytes)"));
    }

    #[test]
    fn no_pages() {
        let lines = format_pages("notebook-1", OrderKey::Date, &[]);
        assert_eq!(lines, vec!["notebook-1 by date", "    (no pages)"]);
    }
}
