//! PhotoSwipe integration.
//!
//! The viewer itself is an external capability, loaded as an ES module
//! from a CDN. This module only emits its initialization contract: the
//! gallery container selector, the child selector for the clickable tiles,
//! and one custom caption element. On every slide change the caption reads
//! `data-author` from the current slide's originating anchor — the
//! attribute [`crate::grid`] writes on every tile — and shows the credit
//! when non-empty, nothing otherwise. The subscription lives for the page
//! lifetime; there is no teardown.

/// Selector of the grid container the lightbox binds to.
pub const GALLERY_SELECTOR: &str = "#gallery-grid";

/// Selector of the clickable tiles inside the container.
pub const CHILD_SELECTOR: &str = "a";

/// PhotoSwipe's own stylesheet, linked from every album page head.
pub const STYLESHEET_URL: &str = "https://unpkg.com/photoswipe@5.4.4/dist/photoswipe.css";

const TEMPLATE: &str = include_str!("../static/lightbox.js");

/// The lightbox initialization script for a given container and child
/// selector. Emitted as a `<script type="module">`.
pub fn init_script(gallery: &str, children: &str) -> String {
    TEMPLATE
        .replace("{{gallery}}", gallery)
        .replace("{{children}}", children)
}
