//! # photogal
//!
//! A minimal static gallery builder. Two JSON documents are the data
//! source: a site-wide navigation descriptor and one album document per
//! page. From those, photogal assembles finished HTML pages — navigation
//! rails with the active link resolved, a hero header, a PhotoSwipe-ready
//! image grid, and a footer — and writes them to an output directory.
//!
//! # Architecture: Fixed-Order Page Assembly
//!
//! Every page is assembled by the same strict sequence:
//!
//! ```text
//! navigation → header → grid → lightbox wiring → navbar wiring → footer
//! ```
//!
//! The order is a guarantee: the grid only renders from a validated album
//! document, and the lightbox script is emitted only after the grid markup
//! it binds to. Failure handling has exactly two tiers:
//!
//! - **Recoverable**: a broken navigation descriptor degrades to empty
//!   rails; the rest of every page still builds.
//! - **Fatal (per page)**: a broken album document replaces that page's
//!   entire body with a single static error notice. No partial page is
//!   ever written.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`generate`] | Build driver — loads documents, writes pages and assets, reports outcomes |
//! | [`page`] | Per-page assembly: section ordering, once-only footer, base document |
//! | [`nav`] | Navigation rails and active-link resolution |
//! | [`header`] | Hero header: title, cover, description, author badge, reveal timing |
//! | [`grid`] | Image grid tiles with the viewer annotations |
//! | [`footer`] | Copyright footer |
//! | [`lightbox`] | PhotoSwipe initialization contract and caption element |
//! | [`navbar`] | Scroll-threshold navbar styling and its generated script |
//! | [`load`] | JSON document loading and validation |
//! | [`config`] | `config.toml` loading, theme and default-page settings |
//! | [`types`] | Shared document types (`NavItem`, `AlbumDocument`, `ImageItem`) |
//! | [`output`] | CLI output formatting — information-first page listing |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than Handlebars or Tera:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: template variables are Rust expressions — no stringly-typed lookups.
//! - **XSS-safe by default**: all interpolation is auto-escaped, including
//!   the `data-author` annotations the lightbox caption reads back.
//! - **Zero runtime files**: no template directory to ship or get out of sync.
//!
//! ## Client Behavior Generated From Rust Constants
//!
//! The published pages keep three dynamic behaviors: the scroll-reactive
//! navbar, the staggered hero reveal, and the lightbox. Their decision
//! logic (threshold, class sets, delay, selectors) lives in Rust constants,
//! and the emitted scripts are generated from those constants — so the
//! rules are unit-tested in Rust and cannot drift from what ships.
//!
//! ## The Viewer Stays External
//!
//! PhotoSwipe is consumed as an opaque ES module from a CDN. photogal only
//! emits its initialization contract (container selector, child selector,
//! one custom caption element); it never vendors or re-implements the
//! viewer.
//!
//! ## Active-Link Defaulting Is One Config Value
//!
//! Visiting the site root highlights a designated nav entry even though no
//! file name matched. That route name is deliberately a single `config.toml`
//! value (`default_page`) instead of a constant scattered through the
//! comparison logic.

pub mod config;
pub mod footer;
pub mod generate;
pub mod grid;
pub mod header;
pub mod lightbox;
pub mod load;
pub mod nav;
pub mod navbar;
pub mod output;
pub mod page;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
