//! Shared types for the two JSON documents a gallery site is built from.
//!
//! Both documents are read once per build, held as plain values during
//! rendering, and never written back. See [`crate::load`] for parsing and
//! validation.

use serde::{Deserialize, Serialize};

/// One entry of the navigation descriptor (`config/nav.json`).
///
/// Entries are kept in file order; that order is the display order. A nav
/// item has no identity beyond its `link`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItem {
    /// Label shown in the navigation rails.
    pub title: String,
    /// Target page file name, relative (e.g. `nature.html`).
    pub link: String,
}

/// Album description: either a single paragraph or one line per entry.
///
/// The JSON side is untagged — `"text"` and `["line", "line"]` are both
/// accepted. A list renders as one block element per line, in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Text(String),
    Lines(Vec<String>),
}

/// The per-page album document (`config/albums/<name>.json`).
///
/// Invariant: `images` order is the grid order is the viewer navigation
/// order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumDocument {
    pub title: String,
    pub description: Description,
    /// Hero background image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    /// Album-level credit, shown as a hero badge and as the footer owner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub images: Vec<ImageItem>,
}

/// One image of an album.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageItem {
    /// Full-resolution URL — the tile href and the lightbox source.
    pub src: String,
    /// Grid thumbnail URL; falls back to `src` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Full-resolution pixel width, required by the lightbox.
    pub width: u32,
    /// Full-resolution pixel height, required by the lightbox.
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    /// Per-image credit, shown in the hover caption and the lightbox caption.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl ImageItem {
    /// The URL to use for the grid thumbnail.
    pub fn thumbnail_url(&self) -> &str {
        self.thumbnail.as_deref().unwrap_or(&self.src)
    }
}
