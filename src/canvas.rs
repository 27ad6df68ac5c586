use egui::Pos2;
use image::{Rgba, RgbaImage};

use crate::replicator;
use crate::session::SessionParams;
use crate::stroke::{Stroke, StrokeRef};

/// How a stamped pixel combines with the buffer.
#[derive(Clone, Copy)]
enum Paint {
    /// Source-over with an opaque pen color.
    Color(Rgba<u8>),
    /// Destination-out: clear the alpha, leaving a hole.
    Erase,
}

/// Owns the persistent drawing surface.
///
/// The buffer outlives every UI repaint: strokes are composited into it as
/// they are drawn, and it is only rebuilt from history by [`replay`] when
/// history or geometry changes retroactively (undo, redo, sector-count
/// change, gallery restore). The decorative sector-guide overlay is *not*
/// part of the buffer; the central panel paints it fresh each frame from
/// [`guide_lines`].
///
/// [`replay`]: CanvasEngine::replay
/// [`guide_lines`]: CanvasEngine::guide_lines
pub struct CanvasEngine {
    buffer: RgbaImage,
    /// Bumped on every buffer mutation so the app only re-uploads the egui
    /// texture when something actually changed.
    version: u64,
}

impl CanvasEngine {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            buffer: RgbaImage::new(width, height),
            version: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// The rotation center for all sector copies.
    pub fn center(&self) -> Pos2 {
        Pos2::new(
            self.buffer.width() as f32 / 2.0,
            self.buffer.height() as f32 / 2.0,
        )
    }

    pub fn buffer(&self) -> &RgbaImage {
        &self.buffer
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Reset the surface to fully transparent. History is untouched.
    pub fn clear_surface(&mut self) {
        for pixel in self.buffer.pixels_mut() {
            *pixel = Rgba([0, 0, 0, 0]);
        }
        self.version += 1;
    }

    /// Composite one completed stroke into the buffer, replicated across
    /// `sectors` using the stroke's own snapshotted parameters.
    pub fn render_stroke(&mut self, stroke: &Stroke, sectors: u32) {
        let paint = if stroke.is_eraser() {
            Paint::Erase
        } else {
            let [r, g, b] = stroke.color();
            Paint::Color(Rgba([r, g, b, 255]))
        };
        self.render_path(stroke.points(), stroke.width(), stroke.is_mirrored(), paint, sectors);
    }

    /// Live-preview path: composite just the newest segment of the stroke
    /// being drawn, using the *current* session parameters. The union of all
    /// previewed segments equals a full [`render_stroke`](Self::render_stroke)
    /// of the finished path, so nothing needs re-rendering on release.
    pub fn render_live_segment(&mut self, a: Pos2, b: Pos2, params: &SessionParams) {
        let paint = if params.eraser {
            Paint::Erase
        } else {
            let [r, g, b] = params.pen_color;
            Paint::Color(Rgba([r, g, b, 255]))
        };
        self.render_path(&[a, b], params.pen_width, params.mirror, paint, params.sector_count);
    }

    /// Rebuild the whole surface from a stroke history, oldest first. Each
    /// stroke renders with its own snapshotted parameters — the current
    /// session parameters are never consulted, let alone mutated.
    pub fn replay(&mut self, strokes: &[StrokeRef], sectors: u32) {
        self.clear_surface();
        for stroke in strokes {
            self.render_stroke(stroke, sectors);
        }
        log::debug!("replayed {} strokes at {} sectors", strokes.len(), sectors);
    }

    /// Decorative guide geometry: `sectors` radial segments from the center
    /// to the circle of radius = half the canvas height, starting at -90 deg
    /// so sector 0 points up. Integer loop, one line per sector.
    pub fn guide_lines(&self, sectors: u32) -> Vec<[Pos2; 2]> {
        if sectors == 0 {
            return Vec::new();
        }
        let center = self.center();
        let radius = self.buffer.height() as f32 / 2.0;
        let theta = std::f32::consts::TAU / sectors as f32;
        (0..sectors)
            .map(|i| {
                let angle = -std::f32::consts::FRAC_PI_2 + theta * i as f32;
                let (sin, cos) = angle.sin_cos();
                [center, Pos2::new(center.x + radius * cos, center.y + radius * sin)]
            })
            .collect()
    }

    // ---- rasterization ----

    fn render_path(&mut self, path: &[Pos2], width: u8, mirror: bool, paint: Paint, sectors: u32) {
        let center = self.center();
        let canvas_width = self.buffer.width() as f32;
        let radius = width as f32 / 2.0;

        let copies = replicator::replicate(path, sectors, mirror, center, canvas_width);
        if copies.is_empty() {
            return;
        }
        for copy in &copies {
            for pair in copy.windows(2) {
                self.stamp_segment(pair[0], pair[1], radius, paint);
            }
        }
        self.version += 1;
    }

    /// Round-capped segment: discs of `radius` stamped along a Bresenham walk
    /// from `a` to `b`.
    fn stamp_segment(&mut self, a: Pos2, b: Pos2, radius: f32, paint: Paint) {
        let (x0, y0) = (a.x.round() as i32, a.y.round() as i32);
        let (x1, y1) = (b.x.round() as i32, b.y.round() as i32);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.stamp_disc(x, y, radius, paint);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn stamp_disc(&mut self, cx: i32, cy: i32, radius: f32, paint: Paint) {
        // Width 0 is a hairline: exactly the center pixel.
        if radius < 0.5 {
            self.put_pixel(cx, cy, paint);
            return;
        }
        let r = radius.ceil() as i32;
        let r_sq = radius * radius;
        for dy in -r..=r {
            for dx in -r..=r {
                if (dx * dx + dy * dy) as f32 <= r_sq {
                    self.put_pixel(cx + dx, cy + dy, paint);
                }
            }
        }
    }

    #[inline]
    fn put_pixel(&mut self, x: i32, y: i32, paint: Paint) {
        if x < 0 || y < 0 || x >= self.buffer.width() as i32 || y >= self.buffer.height() as i32 {
            return;
        }
        let pixel = self.buffer.get_pixel_mut(x as u32, y as u32);
        match paint {
            Paint::Color(color) => *pixel = color,
            Paint::Erase => *pixel = Rgba([0, 0, 0, 0]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guide_lines_count_matches_sectors() {
        let canvas = CanvasEngine::new(100, 100);
        assert_eq!(canvas.guide_lines(7).len(), 7);
        assert_eq!(canvas.guide_lines(0).len(), 0);
    }

    #[test]
    fn first_guide_points_up() {
        let canvas = CanvasEngine::new(100, 100);
        let lines = canvas.guide_lines(4);
        let [start, end] = lines[0];
        assert_eq!(start, Pos2::new(50.0, 50.0));
        assert!((end.x - 50.0).abs() < 1e-3);
        assert!((end.y - 0.0).abs() < 1e-3);
    }

    #[test]
    fn zero_sectors_renders_nothing() {
        let mut canvas = CanvasEngine::new(20, 20);
        let stroke = Stroke::new(
            vec![Pos2::new(5.0, 5.0), Pos2::new(15.0, 15.0)],
            [255, 0, 0],
            4,
            false,
            false,
        );
        canvas.render_stroke(&stroke, 0);
        assert!(canvas.buffer().pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }
}
