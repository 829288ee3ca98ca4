//! Scroll-reactive navbar styling.
//!
//! The navbar is transparent over the hero and becomes opaque once the
//! page scrolls past a fixed threshold. The decision function lives here
//! in Rust; the emitted script is generated from the same constants, so
//! tests exercise the exact rule the browser will run. Stateless: the
//! style is derived from `scrollY` on every event, no hysteresis, no
//! debounce.

/// Scroll offset (in CSS pixels) past which the navbar turns opaque.
/// Exclusive: exactly at the threshold the navbar stays transparent.
pub const SCROLL_THRESHOLD: u32 = 50;

/// Classes applied above the threshold.
pub const SOLID_CLASSES: [&str; 4] = [
    "bg-white/90",
    "backdrop-blur-md",
    "shadow-sm",
    "text-gray-900",
];

/// Classes applied at or below the threshold.
pub const TRANSPARENT_CLASSES: [&str; 1] = ["text-white"];

/// Navbar presentation state derived from the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarStyle {
    Transparent,
    Solid,
}

/// The style the navbar carries at a given scroll offset.
pub fn style_at(scroll_y: u32) -> NavbarStyle {
    if scroll_y > SCROLL_THRESHOLD {
        NavbarStyle::Solid
    } else {
        NavbarStyle::Transparent
    }
}

/// The class set for a style.
pub fn classes(style: NavbarStyle) -> &'static [&'static str] {
    match style {
        NavbarStyle::Solid => &SOLID_CLASSES,
        NavbarStyle::Transparent => &TRANSPARENT_CLASSES,
    }
}

fn js_list(classes: &[&str]) -> String {
    classes
        .iter()
        .map(|c| format!("'{c}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The scroll wiring: applied once at load, then on every scroll event.
pub fn script() -> String {
    let solid = js_list(&SOLID_CLASSES);
    let transparent = js_list(&TRANSPARENT_CLASSES);
    format!(
        r#"(function () {{
  var navbar = document.getElementById('navbar');
  if (!navbar) return;
  function updateNavbar() {{
    if (window.scrollY > {SCROLL_THRESHOLD}) {{
      navbar.classList.add({solid});
      navbar.classList.remove({transparent});
    }} else {{
      navbar.classList.remove({solid});
      navbar.classList.add({transparent});
    }}
  }}
  updateNavbar();
  window.addEventListener('scroll', updateNavbar);
}})();"#
    )
}
