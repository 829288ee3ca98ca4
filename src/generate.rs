//! Site generation.
//!
//! Drives a full build: loads the site config and the navigation
//! descriptor, then assembles one HTML page per album document, an
//! `index.html` alias for the configured default page, and a verbatim copy
//! of the `assets/` tree.
//!
//! ## Source layout
//!
//! ```text
//! site/
//! ├── config.toml              # Optional site configuration
//! ├── config/
//! │   ├── nav.json             # Navigation descriptor (fixed location)
//! │   └── albums/
//! │       ├── nature.json      # One album document per page
//! │       └── urban.json
//! └── assets/                  # Copied to the output root as-is
//! ```
//!
//! ## Failure policy
//!
//! Two tiers, nothing in between:
//!
//! - A navigation failure is recoverable: it is recorded on the report and
//!   every page is built with empty rails.
//! - An album failure is fatal for that page only: its output file is the
//!   static error page, other pages build normally, and the build itself
//!   still succeeds.
//!
//! No retries on either tier.

use crate::config::{ConfigError, SiteConfig};
use crate::load;
use crate::nav;
use crate::page::{self, PageContext};
use crate::types::NavItem;
use chrono::Datelike;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Fixed, well-known location of the navigation descriptor.
pub const NAV_DESCRIPTOR: &str = "config/nav.json";

/// Directory of album documents, one JSON file per page.
pub const ALBUMS_DIR: &str = "config/albums";

/// Static asset directory, copied verbatim to the output root.
pub const ASSETS_DIR: &str = "assets";

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Asset walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("no album documents found in {0}")]
    NoAlbums(PathBuf),
}

/// Outcome of one page build.
#[derive(Debug)]
pub enum PageOutcome {
    Rendered { title: String, images: usize },
    ErrorPage { reason: String },
}

/// One output page and how it went.
#[derive(Debug)]
pub struct BuiltPage {
    /// Output file name, e.g. `nature.html`.
    pub route: String,
    pub outcome: PageOutcome,
}

/// What a build (or check) did, for CLI reporting.
#[derive(Debug)]
pub struct BuildReport {
    /// Set when the navigation descriptor failed to load; rails were empty.
    pub nav_error: Option<String>,
    /// Album pages in route order.
    pub pages: Vec<BuiltPage>,
    /// Route `index.html` aliases, when the default page exists.
    pub index_alias: Option<String>,
    pub assets_copied: usize,
}

/// Build the site from `source` into `output`.
pub fn generate(source: &Path, output: &Path) -> Result<BuildReport, GenerateError> {
    run(source, Some(output))
}

/// Validate the site without writing anything. Same loaders, same report.
pub fn check(source: &Path) -> Result<BuildReport, GenerateError> {
    run(source, None)
}

fn run(source: &Path, output: Option<&Path>) -> Result<BuildReport, GenerateError> {
    let config = SiteConfig::load(source)?;

    // Recoverable tier: a bad descriptor degrades to empty rails.
    let (nav_items, nav_error) = match load::load_nav(&source.join(NAV_DESCRIPTOR)) {
        Ok(items) => (items, None),
        Err(e) => (Vec::new(), Some(e.to_string())),
    };

    let album_paths = discover_albums(&source.join(ALBUMS_DIR))?;
    let year = chrono::Utc::now().year();

    if let Some(output) = output {
        fs::create_dir_all(output)?;
    }

    let mut pages = Vec::new();
    let mut default_album: Option<PathBuf> = None;
    for album_path in &album_paths {
        let route = route_for(album_path);
        if route == config.default_page {
            default_album = Some(album_path.clone());
        }
        let (markup, outcome) = build_one(&config, &nav_items, &route, album_path, year);
        if let Some(output) = output {
            fs::write(output.join(&route), markup)?;
        }
        pages.push(BuiltPage { route, outcome });
    }

    // The root document renders the default album with its own file name,
    // so the active-link defaulting rule is exercised, not bypassed.
    let index_alias = match default_album {
        Some(album_path) => {
            let (markup, _) = build_one(&config, &nav_items, nav::ROOT_DOCUMENT, &album_path, year);
            if let Some(output) = output {
                fs::write(output.join(nav::ROOT_DOCUMENT), markup)?;
            }
            Some(config.default_page.clone())
        }
        None => None,
    };

    let assets_copied = match output {
        Some(output) => copy_assets(&source.join(ASSETS_DIR), output)?,
        None => 0,
    };

    Ok(BuildReport {
        nav_error,
        pages,
        index_alias,
        assets_copied,
    })
}

/// Assemble one page. Fatal album failures become the error page here;
/// this is the only recovery boundary.
fn build_one(
    config: &SiteConfig,
    nav: &[NavItem],
    current_file: &str,
    album_path: &Path,
    year: i32,
) -> (String, PageOutcome) {
    let ctx = PageContext {
        config,
        nav,
        current_file,
        year,
    };
    match load::load_album(album_path) {
        Ok(doc) => {
            let markup = page::build_album_page(&ctx, &doc);
            let outcome = PageOutcome::Rendered {
                title: doc.title.clone(),
                images: doc.images.len(),
            };
            (markup.into_string(), outcome)
        }
        Err(e) => {
            let markup = page::render_error_page();
            let outcome = PageOutcome::ErrorPage {
                reason: e.to_string(),
            };
            (markup.into_string(), outcome)
        }
    }
}

/// Album documents in file-name order. Each `<name>.json` becomes
/// `<name>.html`.
fn discover_albums(albums_dir: &Path) -> Result<Vec<PathBuf>, GenerateError> {
    if !albums_dir.is_dir() {
        return Err(GenerateError::NoAlbums(albums_dir.to_path_buf()));
    }
    let mut paths: Vec<PathBuf> = fs::read_dir(albums_dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|p| p.extension().is_some_and(|e| e == "json"))
        .collect();
    paths.sort();
    if paths.is_empty() {
        return Err(GenerateError::NoAlbums(albums_dir.to_path_buf()));
    }
    Ok(paths)
}

fn route_for(album_path: &Path) -> String {
    let stem = album_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{stem}.html")
}

fn copy_assets(assets_dir: &Path, output: &Path) -> Result<usize, GenerateError> {
    if !assets_dir.is_dir() {
        return Ok(0);
    }
    let target_root = output.join(ASSETS_DIR);
    let mut copied = 0;
    for entry in WalkDir::new(assets_dir) {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(assets_dir) else {
            continue;
        };
        let target = target_root.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}
