//! Page assembly.
//!
//! Drives the renderers in a fixed order: navigation, hero header, image
//! grid, lightbox wiring, navbar scroll wiring, footer. The order is a
//! guarantee, not a convention — the grid only renders from a validated
//! album document, and the lightbox script is only emitted after the grid
//! markup it binds to.
//!
//! A fatal failure anywhere replaces the whole page body with a single
//! static error notice ([`render_error_page`]); no partially assembled
//! page is ever written. The decision of what counts as fatal lives in
//! [`crate::generate`].

use crate::config::SiteConfig;
use crate::types::{AlbumDocument, NavItem};
use crate::{footer, grid, header, lightbox, nav, navbar};
use maud::{DOCTYPE, Markup, PreEscaped, html};

const CSS: &str = include_str!("../static/style.css");

/// Everything an album page needs besides the document itself.
pub struct PageContext<'a> {
    pub config: &'a SiteConfig,
    /// Navigation items, already loaded (empty on nav load failure).
    pub nav: &'a [NavItem],
    /// File name of the page being built, for active-link resolution.
    pub current_file: &'a str,
    /// Current year, for the footer copyright line.
    pub year: i32,
}

/// The main content region under assembly. Sections land in push order;
/// the footer is special-cased so asking for it twice keeps the first one.
#[derive(Default)]
pub struct PageAssembly {
    sections: Vec<Markup>,
    footer: Option<Markup>,
}

impl PageAssembly {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, section: Markup) {
        self.sections.push(section);
    }

    /// Set the footer. No-op if one is already present.
    pub fn set_footer(&mut self, footer: Markup) {
        if self.footer.is_none() {
            self.footer = Some(footer);
        }
    }

    /// The `<main>` element: sections in order, footer last.
    pub fn into_markup(self) -> Markup {
        html! {
            main {
                @for section in self.sections {
                    (section)
                }
                @if let Some(footer) = self.footer {
                    (footer)
                }
            }
        }
    }
}

/// Assemble one complete album page.
pub fn build_album_page(ctx: &PageContext, doc: &AlbumDocument) -> Markup {
    let navbar_markup = nav::render_navbar(ctx.nav, ctx.current_file, ctx.config);

    let mut assembly = PageAssembly::new();
    assembly.push(header::render(doc));
    assembly.push(html! {
        section class="max-w-7xl mx-auto px-1 py-1" {
            (grid::render(&doc.images, ctx.config.theme.grid))
        }
    });
    assembly.set_footer(footer::render(doc, ctx.config, ctx.year));

    let body = html! {
        (navbar_markup)
        (assembly.into_markup())
        script { (PreEscaped(header::reveal_script())) }
        script { (PreEscaped(nav::menu_toggle_script())) }
        script type="module" {
            (PreEscaped(lightbox::init_script(
                lightbox::GALLERY_SELECTOR,
                lightbox::CHILD_SELECTOR,
            )))
        }
        script { (PreEscaped(navbar::script())) }
    };

    base_document(&header::page_title(doc), true, body)
}

/// The fail-fast page: the body is exactly one error notice, nothing else.
pub fn render_error_page() -> Markup {
    let body = html! {
        div class="text-center py-20" { "Error loading gallery data." }
    };
    base_document("Gallery", false, body)
}

/// The base HTML document. The stylesheet is inlined; the PhotoSwipe
/// stylesheet is only linked on pages that carry a grid.
fn base_document(title: &str, with_viewer: bool, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                @if with_viewer {
                    link rel="stylesheet" href=(lightbox::STYLESHEET_URL);
                }
                style { (PreEscaped(CSS)) }
            }
            body class="bg-white text-gray-900 antialiased" {
                (body)
            }
        }
    }
}
