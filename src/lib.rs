//! # floem-shade
//!
//! A color picker widget for [Floem](https://github.com/lapce/floem).
//!
//! Provides an inline HSV picker with a 2D saturation/value board, a hue
//! strip, and (behind the `alpha` feature, on by default) a read-only alpha
//! strip. The picker speaks hex: it reads a `#rrggbb` or `#rgb` value from
//! an `RwSignal<String>` and writes the selected color back to it,
//! lowercase and 6-digit, on every drag frame.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_shade::shade_picker;
//!
//! let hex = RwSignal::new("#e4bd18".to_string());
//! // Use `shade_picker(hex)` in your Floem view tree.
//! ```

mod board;
mod color;
mod constants;
mod drag;
mod error;
mod hue_slider;
mod math;
mod picker;

#[cfg(feature = "alpha")]
mod alpha_strip;
#[cfg(feature = "alpha")]
mod checkerboard;

pub use color::{Hsva, Rgba};
pub use error::ParseColorError;

use floem::prelude::*;
use floem::reactive::RwSignal;

/// Creates the top-level color picker view.
///
/// The picker reads from and writes to `hex`. External writes of a valid
/// hex color are reflected on the picking surfaces; writes that fail the
/// hex pattern are ignored. User drags update the signal with the derived
/// `#rrggbb` value on every frame, including the initial press.
pub fn shade_picker(hex: RwSignal<String>) -> impl IntoView {
    picker::shade_picker_view(hex)
}
