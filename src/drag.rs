//! Pointer-drag to color-channel mapping shared by both picking surfaces.
//!
//! Offsets are thumb-center coordinates local to the surface: 0 at the
//! left/top edge, `extent` at the right/bottom edge. One clamp policy covers
//! every axis of both surfaces, so the thumb center never leaves the track
//! even while the pointer is dragged past the widget edges.

use crate::color::Hsva;

/// Clamp a thumb-center offset to the track and normalize to 0.0–1.0.
pub(crate) fn track_fraction(offset: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    offset.clamp(0.0, extent) / extent
}

/// Round a channel to 2 decimals, keeping repeated drag frames at the same
/// pointer position stable.
pub(crate) fn round_channel(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Apply a 2D board position: x → saturation, y → value (top is bright).
/// Hue and alpha carry over from `hsva` untouched.
pub(crate) fn board_update(hsva: Hsva, x: f64, y: f64, width: f64, height: f64) -> Hsva {
    Hsva {
        saturation: round_channel(track_fraction(x, width)),
        value: round_channel(1.0 - track_fraction(y, height)),
        ..hsva
    }
}

/// Apply a hue-strip position: x → hue in degrees. Saturation, value, and
/// alpha carry over untouched.
pub(crate) fn strip_update(hsva: Hsva, x: f64, width: f64) -> Hsva {
    Hsva {
        hue: round_channel(track_fraction(x, width) * 360.0),
        ..hsva
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_clamps_both_ends() {
        assert_eq!(track_fraction(-25.0, 200.0), 0.0);
        assert_eq!(track_fraction(50.0, 200.0), 0.25);
        assert_eq!(track_fraction(200.0, 200.0), 1.0);
        // Past the right edge saturates at exactly 1, never overshoots.
        assert_eq!(track_fraction(9999.0, 200.0), 1.0);
    }

    #[test]
    fn empty_track_maps_to_zero() {
        assert_eq!(track_fraction(10.0, 0.0), 0.0);
        assert_eq!(track_fraction(10.0, -5.0), 0.0);
    }

    #[test]
    fn board_drag_preserves_hue_exactly() {
        let before = Hsva::with_alpha(197.123456789, 0.5, 0.5, 0.75);
        let after = board_update(before, 120.0, 40.0, 200.0, 160.0);
        assert_eq!(after.hue.to_bits(), before.hue.to_bits());
        assert_eq!(after.alpha.to_bits(), before.alpha.to_bits());
        assert_eq!(after.saturation, 0.6);
        assert_eq!(after.value, 0.75);
    }

    #[test]
    fn strip_drag_preserves_saturation_and_value_exactly() {
        let before = Hsva::new(10.0, 0.333333333333, 0.666666666667);
        let after = strip_update(before, 100.0, 360.0);
        assert_eq!(after.saturation.to_bits(), before.saturation.to_bits());
        assert_eq!(after.value.to_bits(), before.value.to_bits());
        assert_eq!(after.hue, 100.0);
    }

    #[test]
    fn board_overshoot_saturates() {
        let hsva = Hsva::new(48.53, 0.2, 0.2);
        let after = board_update(hsva, 500.0, -80.0, 200.0, 160.0);
        assert_eq!(after.saturation, 1.0);
        assert_eq!(after.value, 1.0);
    }

    #[test]
    fn channels_round_to_two_decimals() {
        let hsva = Hsva::new(0.0, 0.0, 0.0);
        let after = board_update(hsva, 1.0, 1.0, 3.0, 3.0);
        assert_eq!(after.saturation, 0.33);
        assert_eq!(after.value, 0.67);
        // A repeated frame at the same position is a fixed point.
        let again = board_update(after, 1.0, 1.0, 3.0, 3.0);
        assert_eq!(again, after);
    }

    #[test]
    fn strip_hue_rounds_to_two_decimals() {
        let after = strip_update(Hsva::new(0.0, 1.0, 1.0), 33.0, 720.0);
        assert_eq!(after.hue, 16.5);
        let full = strip_update(Hsva::new(0.0, 1.0, 1.0), 720.0, 720.0);
        assert_eq!(full.hue, 360.0);
    }
}
