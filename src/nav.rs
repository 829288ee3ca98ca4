//! Navigation rendering and active-link resolution.
//!
//! The navbar carries up to two rails built from the same descriptor: the
//! desktop rail and, with the `dual` theme, a full-screen mobile overlay.
//! Both share the active-link logic and differ only in styling hooks.
//!
//! ## Active-link rule
//!
//! A link is active when it equals the current page's file name. Two
//! defaulting cases exist on top of that, both tied to the configured
//! `default_page`:
//!
//! - an empty file name (a path ending in `/`) resolves to `default_page`;
//! - `default_page` is also active when the current file is `index.html`.
//!
//! The second case couples navigation to one specific route. It is kept
//! because the published sites rely on it, but the page name lives in a
//! single config value rather than being scattered through comparisons.

use crate::config::{NavRail, SiteConfig};
use crate::types::NavItem;
use maud::{Markup, html};

/// Canonical root document name, as served by any static file server.
pub const ROOT_DOCUMENT: &str = "index.html";

/// Extract the current page's file name: everything after the last `/`.
pub fn current_file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Whether `link` is the active nav entry for `current_file`.
///
/// `current_file` is the raw file name, possibly empty.
pub fn is_active(link: &str, current_file: &str, default_page: &str) -> bool {
    let resolved = if current_file.is_empty() {
        default_page
    } else {
        current_file
    };
    link == resolved
        || (link == default_page && (current_file.is_empty() || current_file == ROOT_DOCUMENT))
}

/// Render the fixed navbar: brand, desktop rail, and (dual theme) the
/// hamburger trigger plus the mobile overlay with its own rail.
pub fn render_navbar(items: &[NavItem], current_file: &str, config: &SiteConfig) -> Markup {
    let dual = config.theme.nav_rail == NavRail::Dual;
    html! {
        nav id="navbar" class="fixed top-0 left-0 right-0 z-40 transition-all duration-300 text-white" {
            div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8" {
                div class="flex items-center justify-between h-16" {
                    a href=(ROOT_DOCUMENT) class="text-lg font-bold tracking-widest uppercase" {
                        (config.site_label)
                    }
                    div id="nav-links" class="hidden md:flex items-center space-x-8 text-sm" {
                        @for item in items {
                            (rail_link(item, current_file, &config.default_page, false))
                        }
                    }
                    @if dual {
                        button id="menu-btn" type="button" aria-label="Open menu" class="md:hidden p-2" {
                            span class="block w-6 h-px bg-current mb-1.5" {}
                            span class="block w-6 h-px bg-current mb-1.5" {}
                            span class="block w-6 h-px bg-current" {}
                        }
                    }
                }
            }
        }
        @if dual {
            div id="mobile-menu" class="fixed inset-0 z-50 bg-black/95 hidden" {
                button id="close-menu-btn" type="button" aria-label="Close menu"
                    class="absolute top-4 right-4 p-2 text-white text-3xl" { "\u{00d7}" }
                div id="nav-links-mobile" class="flex flex-col items-center justify-center h-full space-y-8 text-white text-2xl" {
                    @for item in items {
                        (rail_link(item, current_file, &config.default_page, true))
                    }
                }
            }
        }
    }
}

/// One nav link: full opacity and bold for the active entry, dimmed
/// otherwise. The mobile variant carries its own hook class for
/// independent styling.
fn rail_link(item: &NavItem, current_file: &str, default_page: &str, mobile: bool) -> Markup {
    let active = is_active(&item.link, current_file, default_page);
    let state = if active {
        "opacity-100 font-bold"
    } else {
        "opacity-70"
    };
    let class = if mobile {
        format!("mobile-nav-link hover:opacity-100 transition-opacity {state}")
    } else {
        format!("hover:opacity-100 transition-opacity {state}")
    };
    html! {
        a href=(item.link) class=(class) { (item.title) }
    }
}

/// Overlay open/close wiring. Guards on element presence so the script is
/// a no-op on single-rail pages.
pub fn menu_toggle_script() -> &'static str {
    r#"(function () {
  var btn = document.getElementById('menu-btn');
  var menu = document.getElementById('mobile-menu');
  var close = document.getElementById('close-menu-btn');
  if (!btn || !menu || !close) return;
  btn.addEventListener('click', function () {
    menu.classList.remove('hidden');
  });
  close.addEventListener('click', function () {
    menu.classList.add('hidden');
  });
})();"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{count_occurrences, nav_fixture, test_config};

    const DEFAULT: &str = "nature.html";

    // =========================================================================
    // File name extraction
    // =========================================================================

    #[test]
    fn file_name_from_nested_path() {
        assert_eq!(current_file_name("/gallery/urban.html"), "urban.html");
    }

    #[test]
    fn file_name_from_root_slash_is_empty() {
        assert_eq!(current_file_name("/"), "");
    }

    #[test]
    fn file_name_without_slash_is_whole_path() {
        assert_eq!(current_file_name("urban.html"), "urban.html");
    }

    // =========================================================================
    // Active resolution
    // =========================================================================

    #[test]
    fn exact_match_is_active() {
        assert!(is_active("urban.html", "urban.html", DEFAULT));
    }

    #[test]
    fn non_match_is_inactive() {
        assert!(!is_active("urban.html", "nature.html", DEFAULT));
    }

    #[test]
    fn empty_file_activates_default() {
        assert!(is_active(DEFAULT, "", DEFAULT));
        assert!(!is_active("urban.html", "", DEFAULT));
    }

    #[test]
    fn root_document_activates_default() {
        assert!(is_active(DEFAULT, ROOT_DOCUMENT, DEFAULT));
        assert!(!is_active("urban.html", ROOT_DOCUMENT, DEFAULT));
    }

    #[test]
    fn configured_default_is_respected() {
        assert!(is_active("urban.html", "", "urban.html"));
        assert!(!is_active("nature.html", "", "urban.html"));
    }

    #[test]
    fn exactly_one_link_active_per_page() {
        let items = nav_fixture();
        for current in ["", "index.html", "nature.html", "urban.html", "bw.html"] {
            let active = items
                .iter()
                .filter(|i| is_active(&i.link, current, DEFAULT))
                .count();
            assert_eq!(active, 1, "current_file={current:?}");
        }
    }

    // =========================================================================
    // Rail rendering
    // =========================================================================

    #[test]
    fn dual_rails_render_each_link_twice() {
        let items = nav_fixture();
        let html = render_navbar(&items, "urban.html", &test_config()).into_string();
        assert_eq!(count_occurrences(&html, "href=\"urban.html\""), 2);
        assert!(html.contains("nav-links-mobile"));
        assert!(html.contains("menu-btn"));
    }

    #[test]
    fn single_rail_omits_overlay() {
        let items = nav_fixture();
        let mut config = test_config();
        config.theme.nav_rail = NavRail::Single;
        let html = render_navbar(&items, "urban.html", &config).into_string();
        assert!(!html.contains("mobile-menu"));
        assert!(!html.contains("menu-btn"));
        assert_eq!(count_occurrences(&html, "href=\"urban.html\""), 1);
    }

    #[test]
    fn active_link_is_bold_in_both_rails() {
        let items = nav_fixture();
        let html = render_navbar(&items, "urban.html", &test_config()).into_string();
        assert_eq!(count_occurrences(&html, "opacity-100 font-bold"), 2);
    }

    #[test]
    fn empty_descriptor_renders_empty_rails() {
        let html = render_navbar(&[], "nature.html", &test_config()).into_string();
        assert!(html.contains("id=\"nav-links\""));
        assert!(!html.contains("opacity-70"));
    }

    #[test]
    fn titles_are_escaped() {
        let items = vec![NavItem {
            title: "<script>alert(1)</script>".to_string(),
            link: "x.html".to_string(),
        }];
        let html = render_navbar(&items, "x.html", &test_config()).into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn toggle_script_guards_missing_elements() {
        assert!(menu_toggle_script().contains("if (!btn || !menu || !close) return;"));
    }
}
