//! Alpha display strip with checkerboard background.
//!
//! Shows the current color over a transparency ramp. The strip is display
//! only: alpha is parsed and carried through conversions, but it is not
//! editable by dragging, so this view attaches no pointer handling.

use floem::kurbo::{Rect, Shape};
use floem::peniko::{Color, Gradient};

use floem::reactive::{create_effect, RwSignal, SignalGet};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, PaintCx, UpdateCx},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::checkerboard;
use crate::color::Hsva;
use crate::constants;

struct StripUpdate {
    alpha: f64,
    base: (u8, u8, u8),
}

pub(crate) struct AlphaStrip {
    id: ViewId,
    alpha: f64,
    base: (u8, u8, u8),
    size: floem::taffy::prelude::Size<f32>,
}

/// Creates the read-only alpha strip for the retained HSV record.
pub(crate) fn alpha_strip(hsva: RwSignal<Hsva>) -> AlphaStrip {
    let id = ViewId::new();

    create_effect(move |_| {
        let c = hsva.get();
        let rgba = c.to_rgba();
        id.update_state(StripUpdate {
            alpha: c.alpha,
            base: (rgba.red, rgba.green, rgba.blue),
        });
    });

    let initial = hsva.get_untracked();
    let rgba = initial.to_rgba();
    AlphaStrip {
        id,
        alpha: initial.alpha,
        base: (rgba.red, rgba.green, rgba.blue),
        size: Default::default(),
    }
    .style(|s| {
        s.height(constants::STRIP_HEIGHT)
            .border_radius(constants::STRIP_THUMB_RADIUS as f32)
            .cursor(floem::style::CursorStyle::Default)
    })
}

impl View for AlphaStrip {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<StripUpdate>() {
            self.alpha = update.alpha;
            self.base = update.base;
            self.id.request_layout();
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::STRIP_THUMB_RADIUS);

        // Checkerboard background
        cx.save();
        cx.clip(&rrect);
        checkerboard::paint_checkerboard(cx, rect);

        // Opaque (left) → transparent (right)
        let (r, g, b) = self.base;
        let solid = Color::rgba8(r, g, b, 255);
        let transparent = Color::rgba8(r, g, b, 0);
        let gradient =
            Gradient::new_linear((0.0, h / 2.0), (w, h / 2.0)).with_stops([solid, transparent]);
        // Convert to BezPath so the vello renderer uses the general path
        // handler (its Rect fast-path only supports solid colors).
        let path = rect.to_path(0.1);
        cx.fill(&path, &gradient, 0.0);
        cx.restore();

        // Strip outline
        cx.stroke(
            &rrect,
            Color::rgba8(0, 0, 0, 40),
            &floem::kurbo::Stroke::new(1.0),
        );

        // Thumb marking the parsed alpha (left = 1.0, right = 0.0)
        let radius = constants::STRIP_THUMB_RADIUS;
        let thumb_x = radius + (1.0 - self.alpha) * (w - 2.0 * radius);
        let thumb_cy = h / 2.0;
        let circle = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius);
        cx.stroke(
            &circle,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
        let inner = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius - 1.5);
        cx.stroke(&inner, Color::WHITE, &floem::kurbo::Stroke::new(2.0));
    }
}
