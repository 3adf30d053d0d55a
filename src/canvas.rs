//! RGBA pixel surface with alpha compositing and the raster primitives used by the scene.
//!
//! Coordinates are in pixels with the origin at the top-left corner and y growing
//! downward. Every primitive clips against the surface, so callers can draw partly
//! (or entirely) off-canvas geometry without checks.

use glam::Vec2;
use image::{Rgba, RgbaImage};

use crate::font;

/// How a drawn pixel combines with the pixel already on the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    /// Overwrite destination, alpha included (painting into a transparent layer)
    Replace,
    /// Standard source-over alpha compositing
    Over,
}

/// Build a color from float channels, truncating and clamping each to 0..=255
pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Rgba<u8> {
    Rgba([channel(r), channel(g), channel(b), channel(a)])
}

/// Source-over blend; opaque destinations stay exactly opaque
fn blend_over(dst: &mut Rgba<u8>, src: &Rgba<u8>) {
    match src[3] {
        0 => return,
        255 => {
            *dst = *src;
            return;
        }
        _ => {}
    }
    let src_a = src[3] as f32 / 255.0;
    let dst_a = dst[3] as f32 / 255.0 * (1.0 - src_a);
    let out_a = src_a + dst_a;
    for c in 0..3 {
        let value = (src[c] as f32 * src_a + dst[c] as f32 * dst_a) / out_a;
        dst[c] = value.round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
}

fn channel(value: f32) -> u8 {
    if value.is_nan() {
        0
    } else {
        value.clamp(0.0, 255.0) as u8
    }
}

/// Off-screen RGBA surface
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a fully transparent surface
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    /// Create a surface filled with one color
    pub fn filled(width: u32, height: u32, color: Rgba<u8>) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, color),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Replace the backing image (used by post-processing)
    pub fn set_image(&mut self, image: RgbaImage) {
        self.image = image;
    }

    /// Read a pixel, `None` outside the surface
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba<u8>> {
        if self.contains(x, y) {
            Some(*self.image.get_pixel(x as u32, y as u32))
        } else {
            None
        }
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.image.width() && (y as u32) < self.image.height()
    }

    /// Write a single pixel (clipped)
    pub fn put(&mut self, x: i32, y: i32, color: Rgba<u8>, mode: BlendMode) {
        if !self.contains(x, y) {
            return;
        }
        let dst = self.image.get_pixel_mut(x as u32, y as u32);
        match mode {
            BlendMode::Replace => *dst = color,
            BlendMode::Over => blend_over(dst, &color),
        }
    }

    /// Write a single fully opaque pixel, ignoring the color's alpha
    pub fn put_opaque(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        let [r, g, b, _] = color.0;
        self.put(x, y, Rgba([r, g, b, 255]), BlendMode::Replace);
    }

    /// Horizontal span from `x0` to `x1` inclusive
    pub fn hline(&mut self, y: i32, x0: i32, x1: i32, color: Rgba<u8>, mode: BlendMode) {
        if y < 0 || y as u32 >= self.image.height() {
            return;
        }
        let lo = x0.min(x1).max(0);
        let hi = x0.max(x1).min(self.image.width() as i32 - 1);
        for x in lo..=hi {
            self.put(x, y, color, mode);
        }
    }

    /// Axis-aligned rectangle with top-left corner at (`x`, `y`)
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba<u8>, mode: BlendMode) {
        if w <= 0 || h <= 0 {
            return;
        }
        let top = y.max(0);
        let bottom = y.saturating_add(h).min(self.image.height() as i32);
        for row in top..bottom {
            self.hline(row, x, x.saturating_add(w - 1), color, mode);
        }
    }

    /// Filled disc of integer radius centred on the pixel containing `center`.
    /// Radii below 1 draw nothing.
    pub fn fill_circle(&mut self, center: Vec2, radius: i32, color: Rgba<u8>, mode: BlendMode) {
        if radius < 1 {
            return;
        }
        let cx = center.x.floor() as i32;
        let cy = center.y.floor() as i32;
        let r2 = radius * radius;
        for dy in -radius..=radius {
            let span = ((r2 - dy * dy) as f32).sqrt() as i32;
            self.hline(
                cy.saturating_add(dy),
                cx.saturating_sub(span),
                cx.saturating_add(span),
                color,
                mode,
            );
        }
    }

    /// Filled axis-aligned ellipse with semi-axes `rx`, `ry`
    pub fn fill_ellipse(&mut self, center: Vec2, rx: f32, ry: f32, color: Rgba<u8>, mode: BlendMode) {
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let y0 = ((center.y - ry).floor() as i32).max(0);
        let y1 = ((center.y + ry).ceil() as i32).min(self.image.height() as i32 - 1);
        for y in y0..=y1 {
            let dy = (y as f32 + 0.5 - center.y) / ry;
            if dy.abs() > 1.0 {
                continue;
            }
            let half = rx * (1.0 - dy * dy).sqrt();
            let x0 = (center.x - half).round() as i32;
            let x1 = (center.x + half).round() as i32 - 1;
            if x1 >= x0 {
                self.hline(y, x0, x1, color, mode);
            }
        }
    }

    /// Concentric glow: rings `max_radius..=1`, each an ellipse with semi-axes
    /// `radius * scale`. A pixel takes the color of the innermost ring covering it,
    /// so every pixel is blended exactly once.
    pub fn fill_rings<F>(&mut self, center: Vec2, max_radius: i32, scale: Vec2, mode: BlendMode, ring_color: F)
    where
        F: Fn(i32) -> Rgba<u8>,
    {
        if max_radius < 1 || scale.x <= 0.0 || scale.y <= 0.0 {
            return;
        }
        let cx = center.x.floor() as i32;
        let cy = center.y.floor() as i32;
        let reach_x = (max_radius as f32 * scale.x).ceil() as i32;
        let reach_y = (max_radius as f32 * scale.y).ceil() as i32;
        // offsets limited to the part of the box that lands on the surface
        let (w, h) = (self.image.width() as i32, self.image.height() as i32);
        let dx_range = (-reach_x).max(0i32.saturating_sub(cx))..=reach_x.min((w - 1).saturating_sub(cx));
        let dy_range = (-reach_y).max(0i32.saturating_sub(cy))..=reach_y.min((h - 1).saturating_sub(cy));
        for dy in dy_range {
            for dx in dx_range.clone() {
                let nx = dx as f32 / scale.x;
                let ny = dy as f32 / scale.y;
                let ring = ((nx * nx + ny * ny).sqrt().ceil() as i32).max(1);
                if ring <= max_radius {
                    self.put(cx + dx, cy + dy, ring_color(ring), mode);
                }
            }
        }
    }

    /// Even-odd scanline fill of a closed polygon, sampled at pixel centres
    pub fn fill_polygon(&mut self, points: &[Vec2], color: Rgba<u8>, mode: BlendMode) {
        if points.len() < 3 {
            return;
        }
        let (min_y, max_y) = points
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));
        let first_row = (min_y.floor() as i32).max(0);
        let last_row = (max_y.ceil() as i32).min(self.image.height() as i32 - 1);

        let mut crossings: Vec<f32> = Vec::with_capacity(8);
        for row in first_row..=last_row {
            let sample_y = row as f32 + 0.5;
            crossings.clear();
            for (i, a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                if (a.y <= sample_y && b.y > sample_y) || (b.y <= sample_y && a.y > sample_y) {
                    let t = (sample_y - a.y) / (b.y - a.y);
                    crossings.push(a.x + t * (b.x - a.x));
                }
            }
            crossings.sort_by(|l, r| l.total_cmp(r));
            for pair in crossings.chunks_exact(2) {
                let x0 = (pair[0] - 0.5).ceil() as i32;
                let x1 = (pair[1] - 0.5).floor() as i32;
                if x1 >= x0 {
                    self.hline(row, x0, x1, color, mode);
                }
            }
        }
    }

    /// One-pixel line (Bresenham), endpoints inclusive
    pub fn line(&mut self, a: Vec2, b: Vec2, color: Rgba<u8>, mode: BlendMode) {
        let Some((a, b)) = self.clip_segment(a, b) else {
            return;
        };
        let (mut x0, mut y0) = (a.x.floor() as i32, a.y.floor() as i32);
        let (x1, y1) = (b.x.floor() as i32, b.y.floor() as i32);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.put(x0, y0, color, mode);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Part of segment `ab` inside the surface grown by one pixel on each side
    /// (Liang-Barsky). `None` when nothing of it is visible or a point is not finite.
    fn clip_segment(&self, a: Vec2, b: Vec2) -> Option<(Vec2, Vec2)> {
        if !a.is_finite() || !b.is_finite() {
            return None;
        }
        let (max_x, max_y) = (f64::from(self.image.width()), f64::from(self.image.height()));
        let (ax, ay) = (f64::from(a.x), f64::from(a.y));
        let (dx, dy) = (f64::from(b.x) - ax, f64::from(b.y) - ay);
        let edges = [(-dx, ax + 1.0), (dx, max_x - ax), (-dy, ay + 1.0), (dy, max_y - ay)];
        let (mut enter, mut leave) = (0.0f64, 1.0f64);
        for (p, q) in edges {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
            } else if p < 0.0 {
                enter = enter.max(q / p);
            } else {
                leave = leave.min(q / p);
            }
        }
        if enter > leave {
            return None;
        }
        let at = |t: f64| Vec2::new((ax + dx * t) as f32, (ay + dy * t) as f32);
        let start = if enter > 0.0 { at(enter) } else { a };
        let end = if leave < 1.0 { at(leave) } else { b };
        Some((start, end))
    }

    /// Line of the given width, rasterized as a quad so no pixel is blended twice
    pub fn thick_line(&mut self, a: Vec2, b: Vec2, width: f32, color: Rgba<u8>, mode: BlendMode) {
        if width <= 1.0 {
            self.line(a, b, color, mode);
            return;
        }
        let dir = b - a;
        if dir.length_squared() < f32::EPSILON {
            return;
        }
        let normal = dir.perp().normalize() * (width * 0.5);
        let quad = [a + normal, b + normal, b - normal, a - normal];
        self.fill_polygon(&quad, color, mode);
    }

    /// Bitmap text with the built-in 5x7 font; `scale` multiplies each font pixel
    pub fn draw_text(&mut self, origin: Vec2, text: &str, scale: i32, color: Rgba<u8>, mode: BlendMode) {
        let scale = scale.max(1);
        let mut pen_x = origin.x.floor() as i32;
        let top = origin.y.floor() as i32;
        for ch in text.chars() {
            let rows = font::glyph(ch);
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..font::GLYPH_WIDTH {
                    if (bits >> (font::GLYPH_WIDTH - 1 - col)) & 1 == 0 {
                        continue;
                    }
                    self.fill_rect(
                        pen_x.saturating_add(col * scale),
                        top.saturating_add(row as i32 * scale),
                        scale,
                        scale,
                        color,
                        mode,
                    );
                }
            }
            pen_x = pen_x.saturating_add(font::ADVANCE * scale);
        }
    }

    /// Composite another surface of the same size on top of this one
    pub fn composite(&mut self, layer: &Canvas, mode: BlendMode) {
        debug_assert_eq!(self.image.dimensions(), layer.image.dimensions());
        for (dst, src) in self.image.pixels_mut().zip(layer.image.pixels()) {
            match mode {
                BlendMode::Replace => *dst = *src,
                BlendMode::Over => blend_over(dst, src),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_clamps_and_truncates() {
        assert_eq!(rgba(-4.0, 12.9, 300.0, f32::NAN), Rgba([0, 12, 255, 0]));
    }

    #[test]
    fn test_over_blend_onto_opaque_stays_opaque() {
        let mut canvas = Canvas::filled(4, 4, Rgba([0, 0, 0, 255]));
        canvas.put(1, 1, Rgba([200, 100, 50, 128]), BlendMode::Over);
        let px = canvas.pixel(1, 1).unwrap();
        assert_eq!(px[3], 255);
        assert!(px[0] > 90 && px[0] < 110, "expected roughly half intensity, got {:?}", px);
    }

    #[test]
    fn test_over_blend_onto_transparent_keeps_source() {
        let mut canvas = Canvas::new(2, 2);
        canvas.put(0, 0, Rgba([90, 60, 30, 40]), BlendMode::Over);
        assert_eq!(canvas.pixel(0, 0), Some(Rgba([90, 60, 30, 40])));
    }

    #[test]
    fn test_drawing_clips_off_canvas() {
        let mut canvas = Canvas::new(8, 8);
        canvas.fill_circle(Vec2::new(-50.0, -50.0), 10, Rgba([255; 4]), BlendMode::Over);
        canvas.line(Vec2::new(-10.0, 4.0), Vec2::new(20.0, 4.0), Rgba([255; 4]), BlendMode::Replace);
        assert_eq!(canvas.pixel(0, 4), Some(Rgba([255; 4])));
        assert_eq!(canvas.pixel(7, 4), Some(Rgba([255; 4])));
        assert_eq!(canvas.pixel(0, 0), Some(Rgba([0; 4])));
    }

    #[test]
    fn test_extreme_coordinates_are_clipped_without_overflow() {
        let mut canvas = Canvas::new(8, 8);
        let far = Vec2::new(f32::MAX, f32::MAX);
        let white = Rgba([255; 4]);
        canvas.fill_circle(far, 3, white, BlendMode::Over);
        canvas.fill_circle(-far, 3, white, BlendMode::Over);
        canvas.fill_rings(far, 2, Vec2::splat(4.0), BlendMode::Over, |_| white);
        canvas.fill_rings(-far, 2, Vec2::splat(4.0), BlendMode::Over, |_| white);
        canvas.fill_ellipse(far, 1e30, 1e30, white, BlendMode::Over);
        canvas.fill_rect(i32::MAX - 1, i32::MAX - 1, 5, 5, white, BlendMode::Over);
        canvas.line(far, far * 0.5, white, BlendMode::Over);
        canvas.line(Vec2::new(f32::NAN, 0.0), Vec2::ZERO, white, BlendMode::Over);
        canvas.draw_text(far, "Wave", 3, white, BlendMode::Over);
        assert!(canvas.image().pixels().all(|p| p[3] == 0));

        // a long diagonal is clipped to the part crossing the surface
        canvas.line(Vec2::splat(-1e6), Vec2::splat(1e6), white, BlendMode::Replace);
        assert_eq!(canvas.pixel(0, 0), Some(white));
        assert_eq!(canvas.pixel(4, 4), Some(white));
        assert_eq!(canvas.pixel(7, 7), Some(white));
    }

    #[test]
    fn test_clipped_line_keeps_interior_endpoints() {
        let mut canvas = Canvas::new(8, 8);
        canvas.line(Vec2::new(1.0, 1.0), Vec2::new(6.0, 3.0), Rgba([255; 4]), BlendMode::Replace);
        assert_eq!(canvas.pixel(1, 1).unwrap()[3], 255);
        assert_eq!(canvas.pixel(6, 3).unwrap()[3], 255);
    }

    #[test]
    fn test_polygon_fills_interior_only() {
        let mut canvas = Canvas::new(10, 10);
        let square = [
            Vec2::new(2.0, 2.0),
            Vec2::new(6.0, 2.0),
            Vec2::new(6.0, 6.0),
            Vec2::new(2.0, 6.0),
        ];
        canvas.fill_polygon(&square, Rgba([9, 9, 9, 255]), BlendMode::Replace);
        let filled = canvas.image().pixels().filter(|p| p[3] == 255).count();
        assert_eq!(filled, 16);
        assert_eq!(canvas.pixel(1, 1).unwrap()[3], 0);
    }

    #[test]
    fn test_rings_use_innermost_color() {
        let mut canvas = Canvas::new(21, 21);
        canvas.fill_rings(Vec2::new(10.0, 10.0), 5, Vec2::ONE, BlendMode::Replace, |r| {
            Rgba([r as u8, 0, 0, 255])
        });
        assert_eq!(canvas.pixel(10, 10).unwrap()[0], 1);
        assert_eq!(canvas.pixel(13, 10).unwrap()[0], 3);
        assert_eq!(canvas.pixel(10, 15).unwrap()[0], 5);
        assert_eq!(canvas.pixel(10, 16).unwrap()[3], 0);
    }

    #[test]
    fn test_composite_replace_copies_layer() {
        let mut base = Canvas::filled(3, 3, Rgba([1, 2, 3, 255]));
        let layer = Canvas::filled(3, 3, Rgba([7, 7, 7, 7]));
        base.composite(&layer, BlendMode::Replace);
        assert_eq!(base.pixel(2, 2), Some(Rgba([7, 7, 7, 7])));
    }

    #[test]
    fn test_text_marks_pixels() {
        let mut canvas = Canvas::new(40, 10);
        canvas.draw_text(Vec2::ZERO, "Hi", 1, Rgba([255; 4]), BlendMode::Replace);
        assert!(canvas.image().pixels().any(|p| p[3] == 255));
    }
}
