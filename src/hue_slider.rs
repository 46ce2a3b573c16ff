//! Hue strip (0–360°).
//!
//! Renders the full hue spectrum at full saturation and value as a
//! rasterized image. Dragging along the strip updates only the hue of the
//! retained HSV record.

use std::sync::Arc;

use floem::kurbo::Rect;
use floem::peniko::{self, Blob, Color};

use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::color::Hsva;
use crate::constants;
use crate::drag;
use crate::math;

/// Rasterize the hue spectrum: 0° on the left, 360° on the right.
fn rasterize_spectrum(width: u32) -> Vec<u8> {
    let mut buf = vec![0u8; (width * 4) as usize];
    for px in 0..width {
        let hue = px as f64 / (width - 1).max(1) as f64 * 360.0;
        let (r, g, b) = math::hsv_to_rgb(hue, 1.0, 1.0);
        let offset = (px * 4) as usize;
        buf[offset] = r;
        buf[offset + 1] = g;
        buf[offset + 2] = b;
        buf[offset + 3] = 255;
    }
    buf
}

pub(crate) struct HueSlider {
    id: ViewId,
    held: bool,
    hsva: Hsva,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Option<Box<dyn Fn(Hsva)>>,
    /// Cached spectrum image, rasterized once at a fixed resolution.
    spectrum_img: Option<peniko::Image>,
    spectrum_hash: Vec<u8>,
}

/// Creates the horizontal hue strip bound to the retained HSV record.
///
/// Drags update only the hue; saturation, value, and alpha are left
/// untouched.
pub(crate) fn hue_slider(hsva: RwSignal<Hsva>) -> HueSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        let c = hsva.get();
        id.update_state(c);
    });

    HueSlider {
        id,
        held: false,
        hsva: hsva.get_untracked(),
        size: Default::default(),
        on_change: Some(Box::new(move |c| {
            hsva.set(c);
        })),
        spectrum_img: None,
        spectrum_hash: Vec::new(),
    }
    .style(|s| {
        s.height(constants::STRIP_HEIGHT)
            .border_radius(constants::STRIP_THUMB_RADIUS as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl HueSlider {
    fn update_from_pointer(&mut self, x: f64) {
        let w = self.size.width as f64;
        self.hsva = drag::strip_update(self.hsva, x, w);
    }

    fn ensure_spectrum_image(&mut self) {
        if self.spectrum_img.is_some() {
            return;
        }

        let width = constants::SPECTRUM_RASTER_WIDTH;
        let pixels = rasterize_spectrum(width);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, width, 1);

        self.spectrum_hash = blob.id().to_le_bytes().to_vec();
        self.spectrum_img = Some(img);
    }
}

impl View for HueSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(hsva) = state.downcast::<Hsva>() {
            self.hsva = *hsva;
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos.x);
                log::debug!("hue strip: drag started, h={}", self.hsva.hue);
                if let Some(cb) = &self.on_change {
                    cb(self.hsva);
                }
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.update_from_pointer(e.pos.x);
                    if let Some(cb) = &self.on_change {
                        cb(self.hsva);
                    }
                    self.id.request_layout();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) => {
                if self.held {
                    log::debug!("hue strip: drag stopped");
                }
                self.held = false;
                EventPropagation::Continue
            }
            Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
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

        // Clip to rounded rect for rounded ends
        cx.save();
        cx.clip(&rrect);
        self.ensure_spectrum_image();
        if let Some(ref img) = self.spectrum_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.spectrum_hash,
                },
                rect,
            );
        }
        cx.restore();

        // Strip outline
        cx.stroke(
            &rrect,
            Color::rgba8(0, 0, 0, 40),
            &floem::kurbo::Stroke::new(1.0),
        );

        // Thumb (circular ring; 0° at the left edge, 360° at the right)
        let radius = constants::STRIP_THUMB_RADIUS;
        let thumb_x = self.hsva.hue / 360.0 * w;
        let thumb_cy = h / 2.0;
        let circle = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius);
        cx.stroke(
            &circle,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
        let inner = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius - 1.5);
        cx.stroke(&inner, Color::WHITE, &floem::kurbo::Stroke::new(2.0));
        let innermost = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius - 3.0);
        cx.stroke(
            &innermost,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
    }
}
