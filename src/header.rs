//! Hero header rendering.
//!
//! The header owns the page title, the cover background, the album title
//! and description, and the optional author badge. Text starts shifted and
//! transparent and is revealed by [`reveal_script`] after a fixed delay;
//! the cover reveals on the first animation frame. The delay and the class
//! names live here as constants so the generated script and the markup
//! cannot drift apart.

use crate::types::{AlbumDocument, Description};
use maud::{Markup, html};

/// Delay before the title/description/badge reveal, in milliseconds.
pub const REVEAL_DELAY_MS: u32 = 100;

/// Classes that hide a `data-reveal` element until the timer fires.
pub const REVEAL_HIDDEN_CLASSES: [&str; 2] = ["translate-y-8", "opacity-0"];

/// Suffix appended to the album title for the `<title>` element.
const TITLE_SUFFIX: &str = "Gallery";

/// The document title: `"{album} - Gallery"`.
pub fn page_title(doc: &AlbumDocument) -> String {
    format!("{} - {}", doc.title, TITLE_SUFFIX)
}

/// Render the hero header section.
pub fn render(doc: &AlbumDocument) -> Markup {
    let hidden = REVEAL_HIDDEN_CLASSES.join(" ");
    html! {
        header class="relative h-[60vh] min-h-[400px] flex items-end overflow-hidden bg-gray-900" {
            @if let Some(cover) = &doc.cover {
                div id="hero-bg"
                    class="absolute inset-0 bg-cover bg-center opacity-0 scale-105 transition-all duration-1000"
                    style=(format!("background-image: url('{cover}')")) {}
            }
            div class="absolute inset-0 bg-gradient-to-t from-black/60 to-transparent" {}
            div class="relative w-full max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 pb-12 text-white" {
                h1 id="album-title" data-reveal
                    class=(format!("text-4xl md:text-6xl font-bold {hidden} transition-all duration-700")) {
                    (doc.title)
                }
                div id="album-desc" data-reveal
                    class=(format!("mt-4 max-w-2xl text-white/80 {hidden} transition-all duration-700 delay-150")) {
                    (render_description(&doc.description))
                }
                @if let Some(author) = &doc.author {
                    div id="album-credit" data-reveal
                        class=(format!("mt-4 flex items-center text-white/80 {hidden} transition-all duration-700 delay-500")) {
                        span class="bg-white/20 backdrop-blur-sm px-3 py-1 rounded-full text-sm font-medium" {
                            "\u{00a9} " (author)
                        }
                    }
                }
            }
        }
    }
}

/// A string description renders as plain text; a list renders one block
/// element per line, in order.
fn render_description(description: &Description) -> Markup {
    match description {
        Description::Text(text) => html! { (text) },
        Description::Lines(lines) => html! {
            @for line in lines {
                p { (line) }
            }
        },
    }
}

/// The reveal wiring: cover on the next frame, text after the fixed delay.
/// Generated from the module constants.
pub fn reveal_script() -> String {
    let classes = REVEAL_HIDDEN_CLASSES
        .map(|c| format!("'{c}'"))
        .join(", ");
    format!(
        r#"requestAnimationFrame(function () {{
  var bg = document.getElementById('hero-bg');
  if (bg) {{
    bg.classList.remove('opacity-0', 'scale-105');
    bg.classList.add('scale-100');
  }}
}});
setTimeout(function () {{
  document.querySelectorAll('[data-reveal]').forEach(function (el) {{
    el.classList.remove({classes});
  }});
}}, {REVEAL_DELAY_MS});"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::album_fixture;

    #[test]
    fn page_title_has_gallery_suffix() {
        let doc = album_fixture();
        assert_eq!(page_title(&doc), "Nature - Gallery");
    }

    #[test]
    fn line_list_renders_block_per_line_in_order() {
        let mut doc = album_fixture();
        doc.description = Description::Lines(vec!["a".to_string(), "b".to_string()]);
        let html = render(&doc).into_string();
        assert!(html.contains("<p>a</p><p>b</p>"));
    }

    #[test]
    fn string_description_renders_single_text_node() {
        let mut doc = album_fixture();
        doc.description = Description::Text("a quiet place".to_string());
        let html = render(&doc).into_string();
        assert!(html.contains("a quiet place"));
        assert!(!html.contains("<p>"));
    }

    #[test]
    fn cover_sets_background_image() {
        let doc = album_fixture();
        let html = render(&doc).into_string();
        assert!(html.contains("id=\"hero-bg\""));
        assert!(html.contains("background-image: url('img/cover.jpg')"));
    }

    #[test]
    fn missing_cover_omits_hero_bg() {
        let mut doc = album_fixture();
        doc.cover = None;
        let html = render(&doc).into_string();
        assert!(!html.contains("hero-bg"));
    }

    #[test]
    fn author_badge_present_only_with_author() {
        let with = render(&album_fixture()).into_string();
        assert!(with.contains("album-credit"));
        assert!(with.contains("\u{00a9} Jo Smith"));

        let mut doc = album_fixture();
        doc.author = None;
        let without = render(&doc).into_string();
        assert!(!without.contains("album-credit"));
    }

    #[test]
    fn reveal_targets_start_hidden() {
        let html = render(&album_fixture()).into_string();
        // title, description, badge
        assert_eq!(html.matches("data-reveal").count(), 3);
        assert!(html.contains("translate-y-8 opacity-0"));
    }

    #[test]
    fn reveal_script_uses_named_delay() {
        let script = reveal_script();
        assert!(script.contains(&format!("}}, {REVEAL_DELAY_MS});")));
        assert!(script.contains("'translate-y-8', 'opacity-0'"));
    }
}
