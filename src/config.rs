//! Site configuration module.
//!
//! Handles loading and validating the optional `config.toml` at the site
//! source root. Configuration is sparse: stock defaults apply, user files
//! only override the values they name, unknown keys are rejected to catch
//! typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! # Footer owner when an album has no author
//! site_label = "Gallery App"
//!
//! # Page whose nav link is active at the site root. This mirrors the
//! # historical behavior of the gallery: visiting "/" or "index.html"
//! # highlights this entry even though no file name matched.
//! default_page = "nature.html"
//!
//! [theme]
//! grid = "crop"        # "crop" (fixed square tiles) or "masonry"
//! nav_rail = "dual"    # "dual" (desktop + mobile overlay) or "single"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Footer owner used when the album document carries no author.
    pub site_label: String,
    /// Nav entry treated as active for the site root. A single named value
    /// because the rule couples navigation to one specific route; see
    /// [`crate::nav::is_active`].
    pub default_page: String,
    /// Layout choices that were historically forked implementations.
    pub theme: ThemeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_label: "Gallery App".to_string(),
            default_page: "nature.html".to_string(),
            theme: ThemeConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_page.is_empty() {
            return Err(ConfigError::Validation(
                "default_page must not be empty".into(),
            ));
        }
        if self.site_label.is_empty() {
            return Err(ConfigError::Validation(
                "site_label must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Load `config.toml` from the site root, or stock defaults if absent.
    pub fn load(source_root: &Path) -> Result<Self, ConfigError> {
        let path = source_root.join("config.toml");
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

/// Layout/theme settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Grid tile shape.
    pub grid: GridLayout,
    /// Navigation rail arrangement.
    pub nav_rail: NavRail,
}

/// Grid tile shape: fixed-aspect crop or masonry flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridLayout {
    #[default]
    Crop,
    Masonry,
}

/// Navigation rail arrangement: desktop-only, or desktop plus a mobile
/// overlay menu sharing the same active-link logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavRail {
    Single,
    #[default]
    Dual,
}

/// A documented stock `config.toml`, printed by `photogal gen-config`.
pub fn stock_config_toml() -> String {
    let defaults = SiteConfig::default();
    format!(
        r#"# photogal site configuration
# All options are optional - defaults shown below.

# Footer owner when an album document has no author.
site_label = "{site_label}"

# Nav entry highlighted when visiting the site root or index.html.
default_page = "{default_page}"

[theme]
# Grid tile shape: "crop" (fixed square tiles) or "masonry" (column flow).
grid = "crop"
# Navigation rails: "dual" (desktop rail + mobile overlay) or "single".
nav_rail = "dual"
"#,
        site_label = defaults.site_label,
        default_page = defaults.default_page,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::write_file;
    use tempfile::TempDir;

    #[test]
    fn defaults_are_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_page, "nature.html");
        assert_eq!(config.site_label, "Gallery App");
        assert_eq!(config.theme.grid, GridLayout::Crop);
        assert_eq!(config.theme.nav_rail, NavRail::Dual);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = SiteConfig::load(tmp.path()).unwrap();
        assert_eq!(config.default_page, "nature.html");
    }

    #[test]
    fn sparse_override_keeps_other_defaults() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "config.toml", "default_page = \"urban.html\"\n");
        let config = SiteConfig::load(tmp.path()).unwrap();
        assert_eq!(config.default_page, "urban.html");
        assert_eq!(config.site_label, "Gallery App");
    }

    #[test]
    fn theme_override() {
        let tmp = TempDir::new().unwrap();
        write_file(
            tmp.path(),
            "config.toml",
            "[theme]\ngrid = \"masonry\"\nnav_rail = \"single\"\n",
        );
        let config = SiteConfig::load(tmp.path()).unwrap();
        assert_eq!(config.theme.grid, GridLayout::Masonry);
        assert_eq!(config.theme.nav_rail, NavRail::Single);
    }

    #[test]
    fn unknown_key_rejected() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "config.toml", "default_pge = \"x.html\"\n");
        let err = SiteConfig::load(tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn empty_default_page_rejected() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "config.toml", "default_page = \"\"\n");
        let err = SiteConfig::load(tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn stock_config_parses_back() {
        let stock = stock_config_toml();
        let config: SiteConfig = toml::from_str(&stock).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_page, SiteConfig::default().default_page);
    }
}
