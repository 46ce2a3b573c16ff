//! Color math — direct conversions without external dependencies.
//! Hue is an angle in degrees; saturation and value are 0.0–1.0 fractions.

/// Clamp `value` to `[0, max]` and normalize to 0.0–1.0.
///
/// Inputs within 1e-6 of `max` map to exactly 1.0, so the top of the hue
/// range never produces an out-of-range sector index.
pub(crate) fn bound_value(value: f64, max: f64) -> f64 {
    let value = value.clamp(0.0, max);
    if (value - max).abs() < 1e-6 {
        return 1.0;
    }
    value / max
}

/// HSV → RGB. Hue in degrees, saturation/value 0.0–1.0; channels 0–255.
pub(crate) fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> (u8, u8, u8) {
    let h = bound_value(hue, 360.0);
    let s = bound_value(saturation * 100.0, 100.0);
    let v = bound_value(value * 100.0, 100.0);

    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (i as u32) % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    let scale = |c: f64| (c * 255.0).round() as u8;
    (scale(r), scale(g), scale(b))
}

/// RGB → HSV. Channels 0–255; returns (hue in degrees, saturation, value).
pub(crate) fn rgb_to_hsv(red: u8, green: u8, blue: u8) -> (f64, f64, f64) {
    let r = red as f64 / 255.0;
    let g = green as f64 / 255.0;
    let b = blue as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let value = max;
    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    let hue = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };

    (hue * 360.0, saturation, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_value_clamps_and_normalizes() {
        assert_eq!(bound_value(-10.0, 360.0), 0.0);
        assert_eq!(bound_value(180.0, 360.0), 0.5);
        assert_eq!(bound_value(360.0, 360.0), 1.0);
        assert_eq!(bound_value(500.0, 360.0), 1.0);
    }

    #[test]
    fn pure_red() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), (255, 0, 0));
    }

    #[test]
    fn hue_360_is_red() {
        // The boundary must not fall out of the sector table.
        assert_eq!(hsv_to_rgb(360.0, 1.0, 1.0), (255, 0, 0));
    }

    #[test]
    fn zero_saturation_is_gray() {
        for hue in [0.0, 48.5, 137.0, 260.0, 359.9] {
            let (r, g, b) = hsv_to_rgb(hue, 0.0, 0.6);
            assert_eq!(r, g);
            assert_eq!(g, b);
        }
    }

    #[test]
    fn black_has_no_divide_by_zero() {
        let (h, s, v) = rgb_to_hsv(0, 0, 0);
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert_eq!(v, 0.0);
    }

    #[test]
    fn mustard_decomposes() {
        let (h, s, v) = rgb_to_hsv(228, 189, 24);
        assert!((h - 48.53).abs() < 0.01);
        assert!((s - 0.895).abs() < 0.001);
        assert!((v - 0.894).abs() < 0.001);
    }

    #[test]
    fn rgb_hsv_round_trip_within_one() {
        let samples = [
            (228u8, 189u8, 24u8),
            (255, 0, 0),
            (0, 255, 0),
            (0, 0, 255),
            (1, 2, 3),
            (128, 128, 128),
            (250, 251, 252),
            (17, 200, 90),
        ];
        for (r, g, b) in samples {
            let (h, s, v) = rgb_to_hsv(r, g, b);
            let (r2, g2, b2) = hsv_to_rgb(h, s, v);
            assert!((r as i16 - r2 as i16).abs() <= 1, "{r} vs {r2}");
            assert!((g as i16 - g2 as i16).abs() <= 1, "{g} vs {g2}");
            assert!((b as i16 - b2 as i16).abs() <= 1, "{b} vs {b2}");
        }
    }
}
