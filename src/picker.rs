//! Picker assembly: the saturation/value board stacked over the hue strip
//! (plus, with the `alpha` feature, the alpha display strip).
//!
//! Owns the single authoritative HSV record. The caller's hex signal is
//! decomposed into it when it changes externally and re-derived from it on
//! every drag frame; RGB and hex are never stored independently.

use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};

#[cfg(feature = "alpha")]
use crate::alpha_strip::alpha_strip;
use crate::board::sat_value_board;
use crate::color::{Hsva, Rgba};
use crate::constants;
use crate::hue_slider::hue_slider;

/// Channel distance ≤ 1 counts as the same color: a decompose→compose
/// round trip moves each channel by at most one rounding step.
fn rgb_close(a: Rgba, b: Rgba) -> bool {
    (a.red as i16 - b.red as i16).abs() <= 1
        && (a.green as i16 - b.green as i16).abs() <= 1
        && (a.blue as i16 - b.blue as i16).abs() <= 1
}

pub(crate) fn shade_picker_view(hex: RwSignal<String>) -> impl IntoView {
    // Ground-truth HSV record; everything else is derived from it.
    let initial = Hsva::from_hex(&hex.get_untracked())
        .or_else(|_| Hsva::from_hex(constants::DEFAULT_HEX))
        .unwrap_or(Hsva::new(0.0, 0.0, 1.0));
    let hsva = RwSignal::new(initial);

    // External hex → HSV. Pattern-invalid values are ignored; values that
    // round-trip to the retained color are skipped so the writeback loop
    // cannot disturb the retained hue.
    create_effect(move |_| {
        let raw = hex.get();
        let rgba = match Rgba::from_hex(&raw) {
            Ok(rgba) => rgba,
            Err(err) => {
                log::debug!("picker: ignoring hex {raw:?}: {err}");
                return;
            }
        };
        let retained = hsva.get_untracked();
        if rgb_close(rgba, retained.to_rgba()) {
            return;
        }
        let mut next = rgba.to_hsva();
        // An achromatic color carries no hue information; keep the retained
        // hue so the board background does not snap to red.
        if next.saturation <= 0.0 || next.value <= 0.0 {
            next.hue = retained.hue;
        }
        hsva.set(next);
    });

    // HSV → hex writeback on every change, including the initial frame.
    create_effect(move |_| {
        let derived = hsva.get().to_hex();
        if hex.get_untracked() != derived {
            log::debug!("picker: color changed to {derived}");
            hex.set(derived);
        }
    });

    v_stack((
        sat_value_board(hsva),
        hue_slider(hsva),
        #[cfg(feature = "alpha")]
        alpha_strip(hsva),
    ))
    .style(|st| {
        st.gap(constants::GAP)
            .padding(constants::PADDING)
            .size_full()
    })
}
