//! CSS custom property generation for live injection into the surface.

mod generate;

pub use generate::{generate_css_injection_js, safe_area_value, CssVariable};
