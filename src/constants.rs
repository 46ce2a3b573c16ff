//! Sizing, color, and styling constants for the picker.

/// Thumb radius on the 2D saturation/value board
pub const BOARD_THUMB_RADIUS: f64 = 6.0;

/// Thumb radius on the 1D strips
pub const STRIP_THUMB_RADIUS: f64 = 8.0;

/// 1D strip track height
pub const STRIP_HEIGHT: f32 = 16.0;

/// 2D board height
pub const BOARD_HEIGHT: f32 = 160.0;

/// Gap between picker elements
pub const GAP: f32 = 8.0;

/// Padding around the whole picker
pub const PADDING: f32 = 8.0;

/// Raster resolution of the board background (per axis)
pub const BOARD_RASTER_SIZE: u32 = 256;

/// Raster resolution of the hue spectrum strip
pub const SPECTRUM_RASTER_WIDTH: u32 = 360;

/// Fallback color used when the caller's initial hex value is invalid
pub const DEFAULT_HEX: &str = "#e4bd18";

/// Checkerboard cell size (for the alpha strip background)
#[cfg(feature = "alpha")]
pub const CHECKER_CELL: f64 = 5.0;
