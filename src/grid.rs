//! Image grid rendering.
//!
//! One anchor tile per image, in document order. Each tile is what the
//! lightbox later reads: `href` is the full-resolution source and the
//! `data-pswp-*` attributes carry the dimensions it needs to compute zoom
//! levels. `data-author` is always present (empty when the image has no
//! credit) so the viewer caption can read it unconditionally.
//!
//! Two tile shapes exist behind [`GridLayout`]: fixed square crops on a
//! regular grid, or a masonry column flow preserving aspect ratios.

use crate::config::GridLayout;
use crate::types::ImageItem;
use maud::{Markup, html};

/// Container id — also the lightbox gallery selector, see
/// [`crate::lightbox::GALLERY_SELECTOR`].
pub const GRID_ID: &str = "gallery-grid";

/// Render the grid container with one tile per image. Zero images is a
/// valid empty grid, not an error.
pub fn render(images: &[ImageItem], layout: GridLayout) -> Markup {
    let container_class = match layout {
        GridLayout::Crop => "grid grid-cols-2 md:grid-cols-3 gap-1",
        GridLayout::Masonry => "columns-2 md:columns-3 gap-1",
    };
    html! {
        div id=(GRID_ID) class=(container_class) {
            @for image in images {
                (tile(image, layout))
            }
        }
    }
}

fn tile(image: &ImageItem, layout: GridLayout) -> Markup {
    let shape = match layout {
        GridLayout::Crop => "relative aspect-square overflow-hidden bg-gray-100 group",
        GridLayout::Masonry => "relative block mb-1 overflow-hidden bg-gray-100 group break-inside-avoid",
    };
    html! {
        a href=(image.src)
            data-pswp-width=(image.width)
            data-pswp-height=(image.height)
            data-author=(image.author.as_deref().unwrap_or(""))
            target="_blank"
            class=(shape) {
            img src=(image.thumbnail_url())
                alt=(image.alt.as_deref().unwrap_or(""))
                class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-110"
                loading="lazy";
            div class="absolute inset-0 bg-black/0 group-hover:bg-black/20 transition-colors duration-300" {}
            @if let Some(author) = &image.author {
                div class="absolute bottom-0 left-0 right-0 p-3 bg-gradient-to-t from-black/70 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300" {
                    p class="text-white text-xs md:text-sm font-medium tracking-wide truncate" {
                        "\u{00a9} " (author)
                    }
                }
            }
        }
    }
}
