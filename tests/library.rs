//! End-to-end tests of the public operations over a data directory on disk.

use pendata::config::{self, LibraryConfig};
use pendata::library::{list_notebook_pages, list_notebook_summaries};
use pendata::order::OrderKey;
use pendata::scan::ScanError;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn notebook(root: &Path, dirname: &str, files: &[(&str, usize)]) -> PathBuf {
    let dir = root.join(dirname);
    fs::create_dir_all(&dir).unwrap();
    for (name, size) in files {
        fs::write(dir.join(name), vec![0u8; *size]).unwrap();
    }
    dir
}

fn data_dir() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let nb = notebook(
        tmp.path(),
        "notebook-42",
        &[
            ("page-1.pdf", 1000),
            ("page-1.ogg", 200),
            ("page-2.pdf", 2000),
            ("page-4-0001.aac", 40),
            ("page-4-0002.ogg", 41),
            ("cover.pdf", 5),
            ("stray.txt", 3),
        ],
    );
    fs::write(nb.join("notebook_name"), "Field notes\n").unwrap();
    fs::create_dir_all(nb.join("thumbnails")).unwrap();
    notebook(tmp.path(), "notebook-43", &[]);
    notebook(tmp.path(), "unrelated", &[("page-1.pdf", 1)]);
    tmp
}

#[test]
fn notebook_list_end_to_end() {
    let tmp = data_dir();
    let map = list_notebook_summaries(tmp.path(), &LibraryConfig::default()).unwrap();

    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["notebook-42", "notebook-43"]);

    let nb = &map["notebook-42"];
    assert_eq!(nb.id, "42");
    assert_eq!(nb.name, "Field notes");
    assert!(nb.date.is_some());
    let mut pages = nb.pages.clone();
    pages.sort();
    assert_eq!(pages, vec!["cover.pdf", "page-1.pdf", "page-2.pdf"]);
    assert_eq!(nb.audio.len(), 3);

    let empty = &map["notebook-43"];
    assert_eq!(empty.name, "43");
    assert!(empty.date.is_none());
}

#[test]
fn page_listing_end_to_end() {
    let tmp = data_dir();
    let pages =
        list_notebook_pages(tmp.path(), "42", OrderKey::PageNumber, &LibraryConfig::default())
            .unwrap();

    let numbers: Vec<u32> = pages.iter().map(|p| p.number).collect();
    assert_eq!(numbers, vec![1, 2, 4]);

    assert_eq!(pages[0].size, Some(1000));
    assert_eq!(pages[0].recordings.len(), 1);
    assert_eq!(pages[0].recordings[0].size, 200);
    assert_eq!(
        pages[0].thumbnail.as_deref(),
        Some("pendata/notebook-42/thumbnails/page-1.pdf.png")
    );
    assert!(pages[1].recordings.is_empty());

    let audio_only = &pages[2];
    assert!(audio_only.pdf.is_none());
    let mut sizes: Vec<u64> = audio_only.recordings.iter().map(|r| r.size).collect();
    sizes.sort();
    assert_eq!(sizes, vec![40, 41]);
}

#[test]
fn date_order_puts_audio_only_pages_first() {
    let tmp = data_dir();
    let pages = list_notebook_pages(tmp.path(), "42", OrderKey::Date, &LibraryConfig::default())
        .unwrap();

    assert_eq!(pages.len(), 3);
    assert_eq!(pages[0].number, 4);
    assert!(pages.windows(2).all(|w| w[0].date <= w[1].date));
}

#[test]
fn repeated_scans_agree() {
    let tmp = data_dir();
    let config = LibraryConfig::default();
    let first = list_notebook_pages(tmp.path(), "42", OrderKey::PageNumber, &config).unwrap();
    let second = list_notebook_pages(tmp.path(), "42", OrderKey::PageNumber, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn config_file_in_data_root_is_honored() {
    let tmp = data_dir();
    fs::write(
        tmp.path().join("config.toml"),
        "[assets]\nmount = \"\"\n\n[layout]\nthumbnails_dir = \"thumbs\"\n",
    )
    .unwrap();

    let config = config::load_config(tmp.path()).unwrap();
    let pages = list_notebook_pages(tmp.path(), "42", OrderKey::PageNumber, &config).unwrap();
    assert_eq!(pages[0].pdf.as_deref(), Some("notebook-42/page-1.pdf"));
    assert_eq!(
        pages[0].thumbnail.as_deref(),
        Some("notebook-42/thumbs/page-1.pdf.png")
    );
}

#[test]
fn missing_notebook_surfaces_not_found() {
    let tmp = data_dir();
    let result =
        list_notebook_pages(tmp.path(), "99", OrderKey::PageNumber, &LibraryConfig::default());
    assert!(matches!(result, Err(ScanError::NotFound(_))));
}

#[test]
fn page_json_shape() {
    let tmp = data_dir();
    let pages =
        list_notebook_pages(tmp.path(), "42", OrderKey::PageNumber, &LibraryConfig::default())
            .unwrap();
    let json = serde_json::to_value(pendata::types::Response::success(&pages)).unwrap();

    assert_eq!(json["status"], "success");
    assert_eq!(json["data"][0]["number"], 1);
    assert_eq!(json["data"][0]["size"], 1000);
    assert!(json["data"][0]["date"].is_string());
    assert_eq!(json["data"][0]["recordings"][0]["size"], 200);
    assert!(json["data"][2].get("pdf").is_none());
}
