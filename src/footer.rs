//! Footer rendering.
//!
//! A single copyright line owned by the album author, or by the site label
//! when the album has no author. The footer is appended exactly once per
//! page; the once-only guarantee lives in [`crate::page::PageAssembly`].

use crate::config::SiteConfig;
use crate::types::AlbumDocument;
use maud::{Markup, html};

/// Render the footer: `"© {year} {owner}. All rights reserved."`.
pub fn render(doc: &AlbumDocument, config: &SiteConfig, year: i32) -> Markup {
    let owner = doc.author.as_deref().unwrap_or(&config.site_label);
    html! {
        footer class="py-12 bg-white text-center" {
            div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8" {
                p class="text-gray-500 text-sm" {
                    "\u{00a9} " (year) " " (owner) ". All rights reserved."
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{album_fixture, test_config};

    #[test]
    fn footer_uses_album_author() {
        let html = render(&album_fixture(), &test_config(), 2026).into_string();
        assert!(html.contains("\u{00a9} 2026 Jo Smith. All rights reserved."));
    }

    #[test]
    fn footer_falls_back_to_site_label() {
        let mut doc = album_fixture();
        doc.author = None;
        let html = render(&doc, &test_config(), 2026).into_string();
        assert!(html.contains("\u{00a9} 2026 Gallery App. All rights reserved."));
    }
}
