//! Loading and validation of the JSON data documents.
//!
//! Two document kinds exist: the navigation descriptor (shared by every
//! page) and the album document (one per page). Both are read from the
//! local filesystem and parsed with `serde_json`.
//!
//! ## Failure tiers
//!
//! - Navigation failures are recoverable: [`crate::generate`] logs them and
//!   builds the site with empty navigation rails.
//! - Album failures are fatal for that page: the page body is replaced by a
//!   single error notice, never a partial render.
//!
//! Both tiers surface as [`LoadError`]; the caller decides the policy.

use crate::types::{AlbumDocument, NavItem};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid document {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the navigation descriptor: an ordered JSON array of nav items.
pub fn load_nav(path: &Path) -> Result<Vec<NavItem>, LoadError> {
    let content = read(path)?;
    serde_json::from_str(&content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and validate one album document.
pub fn load_album(path: &Path) -> Result<AlbumDocument, LoadError> {
    let content = read(path)?;
    let doc: AlbumDocument = serde_json::from_str(&content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    validate_album(&doc).map_err(|reason| LoadError::Invalid {
        path: path.to_path_buf(),
        reason,
    })?;
    Ok(doc)
}

/// Structural checks the JSON schema cannot express.
///
/// The lightbox computes zoom levels from the declared dimensions, so a
/// zero width or height would break it at view time — reject at build time
/// instead.
fn validate_album(doc: &AlbumDocument) -> Result<(), String> {
    for (idx, img) in doc.images.iter().enumerate() {
        if img.src.is_empty() {
            return Err(format!("image {} has an empty src", idx + 1));
        }
        if img.width == 0 || img.height == 0 {
            return Err(format!(
                "image {} ({}) has zero width or height",
                idx + 1,
                img.src
            ));
        }
    }
    Ok(())
}
