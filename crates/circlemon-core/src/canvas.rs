//! Software rasterizer for the widget face.
//!
//! Produces a premultiplied BGRA buffer (the layout
//! `UpdateLayeredWindow` expects) from a [`Presentation`]. Text is not
//! drawn here; the platform layer overlays it with the system font.

use crate::color::Color;
use crate::gauge::{GaugeVisual, Presentation};

/// Widget width and height in pixels.
pub const WIDGET_SIZE: i32 = 150;

/// Ring stroke width in pixels.
pub const STROKE_WIDTH: f64 = 8.0;

/// Sub-pixel sample offsets (2×2 supersampling).
const SUBSAMPLES: [(f64, f64); 4] = [(0.25, 0.25), (0.75, 0.25), (0.25, 0.75), (0.75, 0.75)];

/// Non-gauge colors of the widget face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    /// Unfilled part of each ring.
    pub track: Color,
    /// Disc behind the rings.
    pub background: Color,
    /// Disc alpha (0–255).
    pub background_alpha: u8,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            track: Color::new(0x3c, 0x3c, 0x3c),
            background: Color::new(0x1e, 0x1e, 0x1e),
            background_alpha: 153,
        }
    }
}

/// Rasterizes both rings over the background disc into a
/// `size`×`size` premultiplied BGRA buffer, row-major, top-down.
pub fn rasterize(p: &Presentation, style: &RenderStyle, size: i32) -> Vec<u32> {
    let size = size.max(0);
    let mut buf = Vec::with_capacity((size * size) as usize);
    for py in 0..size {
        for px in 0..size {
            let mut acc = [0u32; 4];
            for (ox, oy) in SUBSAMPLES {
                let (x, y) = (f64::from(px) + ox, f64::from(py) + oy);
                if let Some((color, alpha)) = shade(p, style, x, y) {
                    let a = u32::from(alpha);
                    acc[0] += a;
                    acc[1] += u32::from(color.r) * a / 255;
                    acc[2] += u32::from(color.g) * a / 255;
                    acc[3] += u32::from(color.b) * a / 255;
                }
            }
            let n = SUBSAMPLES.len() as u32;
            buf.push((acc[0] / n) << 24 | (acc[1] / n) << 16 | (acc[2] / n) << 8 | acc[3] / n);
        }
    }
    buf
}

/// Color and alpha at a point, or `None` for fully transparent.
fn shade(p: &Presentation, style: &RenderStyle, x: f64, y: f64) -> Option<(Color, u8)> {
    for gauge in [&p.outer, &p.inner] {
        if let Some(color) = ring_color(gauge, style, x, y) {
            return Some((color, 255));
        }
    }
    let outer = &p.outer.geometry;
    let disc_radius = outer.radius + STROKE_WIDTH / 2.0 + 1.0;
    if outer.distance_of(x, y) <= disc_radius && style.background_alpha > 0 {
        return Some((style.background, style.background_alpha));
    }
    None
}

fn ring_color(gauge: &GaugeVisual, style: &RenderStyle, x: f64, y: f64) -> Option<Color> {
    if gauge.covers(x, y, STROKE_WIDTH) {
        return Some(gauge.color);
    }
    let on_track =
        (gauge.geometry.distance_of(x, y) - gauge.geometry.radius).abs() <= STROKE_WIDTH / 2.0;
    on_track.then_some(style.track)
}

/// Unpacks a premultiplied BGRA pixel into (alpha, r, g, b).
pub fn unpack(pixel: u32) -> (u8, u8, u8, u8) {
    (
        (pixel >> 24) as u8,
        (pixel >> 16) as u8,
        (pixel >> 8) as u8,
        pixel as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gauge::{Palette, present};
    use crate::usage::UsageSample;

    fn face(cpu: f32, available_mb: f32) -> Vec<u32> {
        let sample = UsageSample::new(cpu, available_mb, 8192.0);
        let p = present(&sample, &Palette::default());
        rasterize(&p, &RenderStyle::default(), WIDGET_SIZE)
    }

    fn at(buf: &[u32], x: i32, y: i32) -> (u8, u8, u8, u8) {
        unpack(buf[(y * WIDGET_SIZE + x) as usize])
    }

    #[test]
    fn buffer_matches_widget_size() {
        let buf = face(10.0, 4096.0);
        assert_eq!(buf.len(), (WIDGET_SIZE * WIDGET_SIZE) as usize);
    }

    #[test]
    fn corners_are_transparent() {
        let buf = face(10.0, 4096.0);
        assert_eq!(at(&buf, 0, 0), (0, 0, 0, 0));
        assert_eq!(at(&buf, WIDGET_SIZE - 1, WIDGET_SIZE - 1), (0, 0, 0, 0));
    }

    #[test]
    fn busy_cpu_paints_red_at_three_oclock() {
        // Arrange / Act: 85% sweeps past 3 o'clock.
        let buf = face(85.0, 4096.0);

        // Assert: outer ring centre line at (145, 75).
        assert_eq!(at(&buf, 144, 74), (255, 255, 0, 0));
    }

    #[test]
    fn idle_cpu_paints_track_at_nine_oclock() {
        let buf = face(10.0, 4096.0);
        assert_eq!(at(&buf, 5, 74), (255, 0x3c, 0x3c, 0x3c));
    }

    #[test]
    fn half_ram_paints_amber_on_right_and_track_on_left() {
        // Inner ring centre line at x = 75 ± 55.
        let buf = face(0.0, 4096.0);
        assert_eq!(at(&buf, 129, 74), (255, 0xff, 0xd7, 0x00));
        assert_eq!(at(&buf, 20, 74), (255, 0x3c, 0x3c, 0x3c));
    }

    #[test]
    fn centre_shows_background_disc() {
        let buf = face(0.0, 8192.0);
        let (a, r, _, _) = at(&buf, 75, 75);
        assert_eq!(a, 153);
        assert_eq!(r, (0x1e * 153 / 255) as u8);
    }
}
