//! The 2D drawing surface: a CPU framebuffer with alpha-composited line
//! and circle primitives, plus PNG export for headless capture.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use stardrift_scene::Color;

use crate::camera::ScreenPoint;

/// Errors from exporting a frame to disk.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write frame: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode frame: {0}")]
    Encode(#[from] png::EncodingError),
}

/// The drawing primitives the renderer paints through. Opacity is in
/// [0, 1] and composited src-over; implementations clamp out-of-range
/// values and ignore non-finite geometry.
pub trait Surface {
    /// Reset every pixel to the background.
    fn clear(&mut self);

    /// Paint a line segment of the given stroke width.
    fn stroke_line(
        &mut self,
        p0: ScreenPoint,
        p1: ScreenPoint,
        stroke: Color,
        width: f64,
        opacity: f64,
    );

    /// Paint a circle, stroked and optionally filled.
    fn draw_circle(
        &mut self,
        center: ScreenPoint,
        radius: f64,
        stroke: Color,
        fill: Option<Color>,
        opacity: f64,
    );
}

/// A `0x00RRGGBB` framebuffer in the layout minifb presents directly.
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
    background: Color,
    /// Soft halo width around filled circles, the software stand-in for a
    /// canvas shadow blur. Zero disables it.
    glow_radius: f64,
}

impl Canvas {
    pub fn new(width: usize, height: usize, background: Color, glow_radius: f64) -> Self {
        Self {
            width,
            height,
            pixels: vec![background.pack(); width * height],
            background,
            glow_radius: glow_radius.max(0.0),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The raw pixel buffer, row-major from the top-left.
    pub fn buffer(&self) -> &[u32] {
        &self.pixels
    }

    /// Read one pixel; None outside the viewport.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    /// Source-over blend one pixel. Out-of-viewport coordinates and
    /// non-positive alpha are ignored; alpha is clamped to [0, 1].
    fn blend(&mut self, x: i64, y: i64, color: Color, alpha: f64) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }

        let index = y as usize * self.width + x as usize;
        let dst = self.pixels[index];
        let mix = |src: u8, dst: u8| -> u32 {
            (f64::from(src) * alpha + f64::from(dst) * (1.0 - alpha)).round() as u32
        };
        let r = mix(color.r, ((dst >> 16) & 0xff) as u8);
        let g = mix(color.g, ((dst >> 8) & 0xff) as u8);
        let b = mix(color.b, (dst & 0xff) as u8);
        self.pixels[index] = (r << 16) | (g << 8) | b;
    }

    /// Blend a square of side `width` centered on the coordinate, the
    /// stamp used at each step of a stroked line.
    fn stamp(&mut self, x: f64, y: f64, color: Color, width: f64, alpha: f64) {
        let half = ((width.max(1.0) - 1.0) / 2.0).round() as i64;
        let cx = x.round() as i64;
        let cy = y.round() as i64;
        for oy in -half..=half {
            for ox in -half..=half {
                self.blend(cx + ox, cy + oy, color, alpha);
            }
        }
    }

    /// Export the frame as an 8-bit RGB PNG.
    pub fn write_png(&self, path: &Path) -> Result<(), ExportError> {
        let file = File::create(path)?;
        let mut encoder = png::Encoder::new(
            BufWriter::new(file),
            self.width as u32,
            self.height as u32,
        );
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;

        let mut data = Vec::with_capacity(self.pixels.len() * 3);
        for pixel in &self.pixels {
            data.push(((pixel >> 16) & 0xff) as u8);
            data.push(((pixel >> 8) & 0xff) as u8);
            data.push((pixel & 0xff) as u8);
        }
        writer.write_image_data(&data)?;
        Ok(())
    }
}

impl Surface for Canvas {
    fn clear(&mut self) {
        self.pixels.fill(self.background.pack());
    }

    fn stroke_line(
        &mut self,
        p0: ScreenPoint,
        p1: ScreenPoint,
        stroke: Color,
        width: f64,
        opacity: f64,
    ) {
        if !p0.is_finite() || !p1.is_finite() {
            return;
        }

        // DDA: step along the dominant axis one pixel at a time. Steps can
        // revisit a pixel (zero-length or sub-pixel segments), and blending
        // it twice would darken it, so each pixel is stamped at most once
        // per run.
        let dx = p1.x - p0.x;
        let dy = p1.y - p0.y;
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0);
        let step_x = dx / steps;
        let step_y = dy / steps;

        let mut x = p0.x;
        let mut y = p0.y;
        let mut last = None;
        for _ in 0..=steps as usize {
            let pixel = (x.round() as i64, y.round() as i64);
            if last != Some(pixel) {
                self.stamp(x, y, stroke, width, opacity);
                last = Some(pixel);
            }
            x += step_x;
            y += step_y;
        }
    }

    fn draw_circle(
        &mut self,
        center: ScreenPoint,
        radius: f64,
        stroke: Color,
        fill: Option<Color>,
        opacity: f64,
    ) {
        if !center.is_finite() || !radius.is_finite() || radius < 0.0 {
            return;
        }

        let reach = radius + self.glow_radius + 1.0;
        let min_x = (center.x - reach).floor() as i64;
        let max_x = (center.x + reach).ceil() as i64;
        let min_y = (center.y - reach).floor() as i64;
        let max_y = (center.y + reach).ceil() as i64;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = x as f64 - center.x;
                let dy = y as f64 - center.y;
                let dist = (dx * dx + dy * dy).sqrt();

                if let Some(fill) = fill {
                    // Half-pixel coverage ramp at the rim keeps small
                    // bodies round instead of square.
                    let coverage = (radius - dist + 0.5).clamp(0.0, 1.0);
                    if coverage > 0.0 {
                        self.blend(x, y, fill, opacity * coverage);
                    }
                }

                let edge = (1.0 - (dist - radius).abs()).clamp(0.0, 1.0);
                if edge > 0.0 {
                    self.blend(x, y, stroke, opacity * edge);
                }

                if self.glow_radius > 0.0 && dist > radius && fill.is_some() {
                    let falloff = 1.0 - (dist - radius) / self.glow_radius;
                    if falloff > 0.0 {
                        self.blend(x, y, stroke, opacity * falloff * 0.35);
                    }
                }
            }
        }
    }
}
