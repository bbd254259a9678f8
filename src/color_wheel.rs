//! Circular color wheel view.
//!
//! Renders a wheel where angle maps to hue and radius maps to saturation,
//! rasterized once to an RGBA8 pixel buffer. A click inside the disk picks
//! the color under the pointer and drops a circular marker at the click
//! position; clicks outside the disk are ignored.

use std::sync::Arc;

use floem::kurbo::{Circle, Point, Rect};
use floem::peniko::{self, Blob, Color};

use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
};
use floem_renderer::Renderer;

use crate::constants;
use crate::math;
use crate::swatch::{Swatch, SwatchList};

/// Rasterize the hue/saturation disk at full brightness to an RGBA8 buffer.
///
/// The buffer is `2·radius` pixels square. Every integer offset `(x, y)`
/// with `x, y ∈ [-radius, radius)` whose distance from the center is within
/// `radius` gets the color of its polar coordinates and alpha 255; pixels
/// outside the disk are left untouched (alpha 0). `radius` must be at
/// least 1.
pub(crate) fn rasterize_wheel(radius: u32) -> Vec<u8> {
    let side = (2 * radius) as i32;
    let r = radius as i32;
    let max_dist = radius as f64;

    let mut buf = vec![0u8; (side * side * 4) as usize];

    for y in -r..r {
        for x in -r..r {
            let (dist, phi) = math::cartesian_to_polar(x as f64, y as f64);
            if dist > max_dist {
                continue;
            }

            let hue = math::polar_to_hue(phi);
            let (red, green, blue) = math::hsb_to_rgb(hue, dist / max_dist, 1.0);

            let offset = (((x + r) + (y + r) * side) * 4) as usize;
            buf[offset] = red;
            buf[offset + 1] = green;
            buf[offset + 2] = blue;
            buf[offset + 3] = 255;
        }
    }

    log::debug!("rasterized color wheel: radius={radius}px ({} bytes)", buf.len());
    buf
}

enum WheelUpdate {
    Swatches(SwatchList),
}

pub(crate) struct ColorWheel {
    id: ViewId,
    swatches: SwatchList,
    size: floem::taffy::prelude::Size<f32>,
    on_pick: Option<Box<dyn Fn(Swatch)>>,
    /// Cached wheel image, rasterized once at the first sized paint.
    wheel_img: Option<peniko::Image>,
    wheel_hash: Vec<u8>,
}

/// Creates a circular color wheel that appends every pick to `selections`.
///
/// Hue 0 sits at the leftmost point; saturation runs from 0.0 at the center
/// to 1.0 at the edge; brightness is fixed at 1.0, so the center is white.
pub(crate) fn color_wheel(selections: RwSignal<SwatchList>) -> ColorWheel {
    let id = ViewId::new();

    create_effect(move |_| {
        let list = selections.get();
        id.update_state(WheelUpdate::Swatches(list));
    });

    ColorWheel {
        id,
        swatches: selections.get_untracked(),
        size: Default::default(),
        on_pick: Some(Box::new(move |swatch| {
            selections.update(|list| list.push(swatch));
        })),
        wheel_img: None,
        wheel_hash: Vec::new(),
    }
    .style(|s| {
        s.flex_grow(1.0)
            .aspect_ratio(1.0)
            .min_height(constants::MIN_WHEEL_SIZE)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl ColorWheel {
    /// Side length of the square region used for the wheel.
    fn side(&self) -> f64 {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        w.min(h)
    }

    fn radius(&self) -> f64 {
        self.side() / 2.0
    }

    fn center(&self) -> (f64, f64) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        (w / 2.0, h / 2.0)
    }

    /// The square rect centered within the widget, used for drawing the wheel.
    fn wheel_rect(&self) -> Rect {
        let (cx, cy) = self.center();
        let r = self.radius();
        Rect::new(cx - r, cy - r, cx + r, cy + r)
    }

    /// Resolve a pointer position into a pick. Returns false when the
    /// position misses the disk (or the widget has no size yet).
    fn pick_at(&mut self, pos: Point) -> bool {
        let (cx, cy) = self.center();
        let radius = self.radius();
        if radius <= 0.0 {
            return false;
        }

        match Swatch::pick(pos.x - cx, pos.y - cy, radius) {
            Some(swatch) => {
                self.swatches.push(swatch.clone());
                if let Some(cb) = &self.on_pick {
                    cb(swatch);
                }
                self.id.request_layout();
                true
            }
            None => false,
        }
    }

    /// Rasterize once at the current radius, then let the renderer scale
    /// the cached raster on later paints.
    fn ensure_wheel_image(&mut self) {
        if self.wheel_img.is_some() {
            return;
        }

        let radius = self.radius().round() as u32;
        if radius == 0 {
            return;
        }

        let pixels = rasterize_wheel(radius);
        let blob = Blob::new(Arc::new(pixels));
        let side = 2 * radius;
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, side, side);

        self.wheel_hash = blob.id().to_le_bytes().to_vec();
        self.wheel_img = Some(img);
    }
}

impl View for ColorWheel {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<WheelUpdate>() {
            match *update {
                WheelUpdate::Swatches(list) => {
                    self.swatches = list;
                }
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, _cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                if self.pick_at(e.pos) {
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
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

        let (center_x, center_y) = self.center();
        let radius = self.radius();
        let center_pt = Point::new(center_x, center_y);

        // Draw the cached wheel image, clipped to the disk.
        let wheel_rect = self.wheel_rect();
        let clip = Circle::new(center_pt, radius);
        cx.save();
        cx.clip(&clip);
        self.ensure_wheel_image();
        if let Some(ref img) = self.wheel_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.wheel_hash,
                },
                wheel_rect,
            );
        }
        cx.restore();

        // Draw one marker per pick, oldest first, at the picked position.
        let origin = wheel_rect.origin();
        for swatch in self.swatches.iter() {
            let (r, g, b) = swatch.rgb();
            let marker_pt = Point::new(origin.x + swatch.x(), origin.y + swatch.y());
            let marker = Circle::new(marker_pt, constants::SWATCH_RADIUS);
            cx.fill(&marker, Color::rgb8(r, g, b), 0.0);
            cx.stroke(
                &marker,
                Color::WHITE,
                &floem::kurbo::Stroke::new(constants::SWATCH_BORDER),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offset_of(x: i32, y: i32, radius: i32) -> usize {
        (((x + radius) + (y + radius) * 2 * radius) * 4) as usize
    }

    #[test]
    fn buffer_covers_the_square() {
        let buf = rasterize_wheel(20);
        assert_eq!(buf.len(), 40 * 40 * 4);
    }

    #[test]
    fn alpha_marks_exactly_the_disk() {
        let radius = 16;
        let buf = rasterize_wheel(radius as u32);
        for y in -radius..radius {
            for x in -radius..radius {
                let inside = ((x * x + y * y) as f64).sqrt() <= radius as f64;
                let alpha = buf[offset_of(x, y, radius) + 3];
                assert_eq!(alpha, if inside { 255 } else { 0 }, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn center_pixel_is_white() {
        let radius = 32;
        let buf = rasterize_wheel(radius as u32);
        let offset = offset_of(0, 0, radius);
        assert_eq!(&buf[offset..offset + 4], &[255, 255, 255, 255]);
    }

    #[test]
    fn leftmost_pixel_is_fully_saturated_red() {
        let radius = 32;
        let buf = rasterize_wheel(radius as u32);
        let offset = offset_of(-radius, 0, radius);
        assert_eq!(&buf[offset..offset + 4], &[255, 0, 0, 255]);
    }

    #[test]
    fn same_radius_yields_identical_pixels() {
        assert_eq!(rasterize_wheel(24), rasterize_wheel(24));
    }
}
