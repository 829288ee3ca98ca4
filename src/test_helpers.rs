//! Shared test utilities for the photogal test suite.
//!
//! Provides in-memory fixtures for the renderers and a JSON fixture site
//! writer for the loader and generator tests. Fixture sites are written
//! into a `tempfile::TempDir`, so every test gets an isolated copy it can
//! mutate freely.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::SiteConfig;
use crate::types::{AlbumDocument, Description, ImageItem, NavItem};

// =========================================================================
// Filesystem fixtures
// =========================================================================

/// Write `content` to `dir/name`, creating `dir` as needed.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// A complete two-album fixture site: nav descriptor, album documents,
/// and one asset file.
pub fn fixture_site() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    write_file(
        &root.join("config"),
        "nav.json",
        r#"[
            {"title": "Nature", "link": "nature.html"},
            {"title": "Urban", "link": "urban.html"}
        ]"#,
    );
    write_file(
        &root.join("config/albums"),
        "nature.json",
        r#"{
            "title": "Nature",
            "description": ["Trees.", "Light."],
            "cover": "assets/img/cover.jpg",
            "author": "Jo Smith",
            "images": [
                {"src": "assets/img/1.jpg", "width": 1600, "height": 1200,
                 "author": "A. Lens"},
                {"src": "assets/img/2.jpg", "thumbnail": "assets/img/2t.jpg",
                 "width": 1200, "height": 1600, "alt": "dune"}
            ]
        }"#,
    );
    write_file(
        &root.join("config/albums"),
        "urban.json",
        r#"{
            "title": "Urban",
            "description": "Concrete and glass.",
            "images": [
                {"src": "assets/img/3.jpg", "width": 2000, "height": 1500}
            ]
        }"#,
    );
    write_file(&root.join("assets/img"), "cover.jpg", "not really a jpeg");

    tmp
}

// =========================================================================
// In-memory fixtures
// =========================================================================

/// Stock config, by value so tests can tweak single fields.
pub fn test_config() -> SiteConfig {
    SiteConfig::default()
}

/// Three nav entries; `nature.html` matches the stock default page.
pub fn nav_fixture() -> Vec<NavItem> {
    vec![
        NavItem {
            title: "Nature".to_string(),
            link: "nature.html".to_string(),
        },
        NavItem {
            title: "Urban".to_string(),
            link: "urban.html".to_string(),
        },
        NavItem {
            title: "Black & White".to_string(),
            link: "bw.html".to_string(),
        },
    ]
}

/// A two-image album with cover, author, and a multi-line description.
pub fn album_fixture() -> AlbumDocument {
    AlbumDocument {
        title: "Nature".to_string(),
        description: Description::Lines(vec!["Trees.".to_string(), "Light.".to_string()]),
        cover: Some("img/cover.jpg".to_string()),
        author: Some("Jo Smith".to_string()),
        images: vec![
            ImageItem {
                src: "img/1.jpg".to_string(),
                thumbnail: None,
                width: 1600,
                height: 1200,
                alt: None,
                author: Some("A. Lens".to_string()),
            },
            ImageItem {
                src: "img/2.jpg".to_string(),
                thumbnail: Some("img/2t.jpg".to_string()),
                width: 1200,
                height: 1600,
                alt: Some("dune".to_string()),
                author: None,
            },
        ],
    }
}

/// A landscape-format image with an optional credit.
pub fn image_fixture(src: &str, author: Option<&str>) -> ImageItem {
    ImageItem {
        src: src.to_string(),
        thumbnail: None,
        width: 1600,
        height: 1200,
        alt: None,
        author: author.map(|a| a.to_string()),
    }
}

// =========================================================================
// Assertions
// =========================================================================

/// Count non-overlapping occurrences of `needle` in `haystack`.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
