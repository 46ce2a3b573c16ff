//! 2D saturation/value picking board.
//!
//! Saturation runs left→right and value runs top→bottom (bright at the
//! top), both rendered at the current hue. The surface is rasterized to an
//! RGBA8 pixel buffer at a fixed resolution, cached until the hue changes,
//! and scaled to widget size by the renderer.

use std::sync::Arc;

use floem::kurbo::{Circle, Rect};
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

/// Rasterize the board at `hue`: saturation 0→1 left to right, value 1→0
/// top to bottom.
fn rasterize_board(width: u32, height: u32, hue: f64) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    for py in 0..height {
        let value = 1.0 - py as f64 / (height - 1).max(1) as f64;
        let row_offset = (py * width * 4) as usize;
        for px in 0..width {
            let saturation = px as f64 / (width - 1).max(1) as f64;
            let (r, g, b) = math::hsv_to_rgb(hue, saturation, value);
            let offset = row_offset + (px * 4) as usize;
            buf[offset] = r;
            buf[offset + 1] = g;
            buf[offset + 2] = b;
            buf[offset + 3] = 255;
        }
    }
    buf
}

pub(crate) struct SatValueBoard {
    id: ViewId,
    held: bool,
    hsva: Hsva,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Option<Box<dyn Fn(Hsva)>>,
    /// Cached board image, rasterized at a fixed resolution per hue.
    board_img: Option<peniko::Image>,
    board_hash: Vec<u8>,
    cached_hue: Option<f64>,
}

/// Creates the 2D saturation/value board bound to the retained HSV record.
///
/// Drags update saturation and value; hue and alpha are left untouched.
pub(crate) fn sat_value_board(hsva: RwSignal<Hsva>) -> SatValueBoard {
    let id = ViewId::new();

    create_effect(move |_| {
        let c = hsva.get();
        id.update_state(c);
    });

    SatValueBoard {
        id,
        held: false,
        hsva: hsva.get_untracked(),
        size: Default::default(),
        on_change: Some(Box::new(move |c| {
            hsva.set(c);
        })),
        board_img: None,
        board_hash: Vec::new(),
        cached_hue: None,
    }
    .style(|s| {
        s.width_full()
            .height(constants::BOARD_HEIGHT)
            .cursor(floem::style::CursorStyle::Default)
    })
}

impl SatValueBoard {
    fn update_from_pointer(&mut self, x: f64, y: f64) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        self.hsva = drag::board_update(self.hsva, x, y, w, h);
    }

    /// The thumb center derived from the retained saturation/value.
    fn thumb_position(&self) -> (f64, f64) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        (self.hsva.saturation * w, (1.0 - self.hsva.value) * h)
    }

    fn ensure_board_image(&mut self) {
        if self.board_img.is_some() && self.cached_hue == Some(self.hsva.hue) {
            return;
        }

        let size = constants::BOARD_RASTER_SIZE;
        let pixels = rasterize_board(size, size, self.hsva.hue);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, size, size);

        self.board_hash = blob.id().to_le_bytes().to_vec();
        self.board_img = Some(img);
        self.cached_hue = Some(self.hsva.hue);
    }
}

impl View for SatValueBoard {
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
                self.update_from_pointer(e.pos.x, e.pos.y);
                log::debug!(
                    "board: drag started, s={} v={}",
                    self.hsva.saturation,
                    self.hsva.value
                );
                if let Some(cb) = &self.on_change {
                    cb(self.hsva);
                }
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.update_from_pointer(e.pos.x, e.pos.y);
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
                    log::debug!("board: drag stopped");
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
        self.ensure_board_image();
        if let Some(ref img) = self.board_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.board_hash,
                },
                rect,
            );
        }

        // Board outline
        cx.stroke(
            &rect,
            Color::rgba8(0, 0, 0, 40),
            &floem::kurbo::Stroke::new(1.0),
        );

        // Thumb ring at the retained saturation/value
        let (cur_x, cur_y) = self.thumb_position();
        let radius = constants::BOARD_THUMB_RADIUS;
        let outer = Circle::new((cur_x, cur_y), radius + 1.0);
        cx.stroke(
            &outer,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
        let cursor = Circle::new((cur_x, cur_y), radius);
        cx.stroke(&cursor, Color::WHITE, &floem::kurbo::Stroke::new(2.0));
        let inner = Circle::new((cur_x, cur_y), radius - 1.5);
        cx.stroke(
            &inner,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
    }
}
