//! Filename classification for notebook assets.
//!
//! The conversion pipeline encodes everything we know about an asset in its
//! filename: the extension says what it is, and a `page-<digits>` token says
//! which page it belongs to.
//!
//! ```text
//! notebook-42/
//! ├── notebook_name            # Display name (optional)
//! ├── page-1.pdf               # Page(1)
//! ├── page-1-0001.ogg          # Audio(1)
//! ├── page-1-0002.aac          # Audio(1)
//! ├── page-2.pdf               # Page(2)
//! ├── cover.pdf                # Ignored (no page token)
//! ├── stray.txt                # Ignored
//! └── thumbnails/
//!     └── page-1.pdf.png       # Never classified, addressed by convention
//! ```
//!
//! Classification is total: anything that does not match is [`AssetKind::Ignored`],
//! never an error. Extensions are matched case-sensitively, as the pipeline
//! writes them lowercase.

/// Extension for rendered pages.
pub const PDF_EXTENSION: &str = ".pdf";

/// Extensions for page recordings.
pub const AUDIO_EXTENSIONS: &[&str] = &[".ogg", ".aac"];

const PAGE_TOKEN: &str = "page-";

/// What an asset filename refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// A rendered page PDF for the given page number.
    Page(u32),
    /// An audio recording captured on the given page number.
    Audio(u32),
    Ignored,
}

impl AssetKind {
    /// Page number the asset is attached to, if any.
    pub fn page_number(self) -> Option<u32> {
        match self {
            AssetKind::Page(n) | AssetKind::Audio(n) => Some(n),
            AssetKind::Ignored => None,
        }
    }
}

/// Media type judged from the extension alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Pdf,
    Audio,
}

/// Classify a filename by extension only, without looking for a page token.
///
/// The notebook summary lists every PDF and audio file, numbered or not.
pub fn media_type(filename: &str) -> Option<MediaType> {
    if filename.ends_with(PDF_EXTENSION) {
        Some(MediaType::Pdf)
    } else if AUDIO_EXTENSIONS.iter().any(|ext| filename.ends_with(ext)) {
        Some(MediaType::Audio)
    } else {
        None
    }
}

/// Classify a filename into a page asset, an audio asset, or nothing.
///
/// - `"page-3.pdf"` → `Page(3)`
/// - `"scan-page-12-final.pdf"` → `Page(12)`
/// - `"page-3-0001.ogg"` → `Audio(3)`
/// - `"cover.pdf"` → `Ignored` (no page token)
/// - `"page-3.txt"` → `Ignored`
pub fn classify(filename: &str) -> AssetKind {
    match media_type(filename) {
        Some(MediaType::Pdf) => page_token(filename).map_or(AssetKind::Ignored, AssetKind::Page),
        Some(MediaType::Audio) => page_token(filename).map_or(AssetKind::Ignored, AssetKind::Audio),
        None => AssetKind::Ignored,
    }
}

/// Find the first `page-<digits>` token and parse its number.
///
/// Occurrences of `page-` not followed by a digit are skipped. A digit run
/// too large for `u32` yields `None`.
pub fn page_token(filename: &str) -> Option<u32> {
    let mut rest = filename;
    while let Some(pos) = rest.find(PAGE_TOKEN) {
        let after = &rest[pos + PAGE_TOKEN.len()..];
        let digits_len = after.bytes().take_while(u8::is_ascii_digit).count();
        if digits_len > 0 {
            return after[..digits_len].parse().ok();
        }
        rest = after;
    }
    None
}
