use std::path::Path;

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use image::{Rgba, RgbaImage, imageops};

use crate::{GalleryError, GalleryResult, Rect, RgbaData};

use super::{Color, Surface};

pub const TEXT_PX_SIZE: f32 = 14.0;

/// Advance used when no font is loaded
const FALLBACK_CHAR_WIDTH: f32 = 8.0;

/// Software surface on an RGBA pixel buffer
pub struct RgbaSurface {
    canvas: RgbaImage,
    font: Option<FontVec>,
}

impl RgbaSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            canvas: RgbaImage::new(width.max(1), height.max(1)),
            font: None,
        }
    }

    /// Text is only drawn if a font was loaded
    pub fn load_font(&mut self, path: &Path) -> GalleryResult<()> {
        let data = std::fs::read(path)?;
        match FontVec::try_from_vec(data) {
            Ok(font) => {
                self.font = Some(font);
                Ok(())
            }
            Err(err) => Err(GalleryError::Config {
                path: path.to_path_buf(),
                message: err.to_string(),
            }),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.canvas
    }

    pub fn save_png(&self, path: &Path) -> GalleryResult<()> {
        self.canvas.save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }

    fn blend_pixel(&mut self, x: i64, y: i64, color: Color, coverage: f32) {
        if x < 0 || y < 0 || x >= self.canvas.width() as i64 || y >= self.canvas.height() as i64 {
            return;
        }
        let alpha = (color[3] as f32 / 255.0) * coverage.clamp(0.0, 1.0);
        let pixel = self.canvas.get_pixel_mut(x as u32, y as u32);
        for i in 0..3 {
            pixel[i] = (color[i] as f32 * alpha + pixel[i] as f32 * (1.0 - alpha)).round() as u8;
        }
        pixel[3] = pixel[3].max((alpha * 255.0) as u8);
    }

    fn pixel_span(&self, rect: Rect) -> (i64, i64, i64, i64) {
        let x0 = (rect.x.round() as i64).max(0);
        let y0 = (rect.y.round() as i64).max(0);
        let x1 = (rect.right().round() as i64).min(self.canvas.width() as i64);
        let y1 = (rect.bottom().round() as i64).min(self.canvas.height() as i64);
        (x0, y0, x1, y1)
    }
}

impl Surface for RgbaSurface {
    fn size(&self) -> (f32, f32) {
        (self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let (x0, y0, x1, y1) = self.pixel_span(rect);
        for y in y0..y1 {
            for x in x0..x1 {
                self.blend_pixel(x, y, color, 1.0);
            }
        }
    }

    fn draw_image(&mut self, image: &RgbaData, rect: Rect) {
        let (x0, y0, x1, y1) = self.pixel_span(rect);
        if x1 <= x0 || y1 <= y0 {
            return;
        }
        let Some(source) = image.to_image() else {
            log::warn!("invalid thumbnail buffer {}x{}", image.width, image.height);
            return;
        };
        let scaled = imageops::resize(&source, (x1 - x0) as u32, (y1 - y0) as u32, imageops::FilterType::Triangle);
        imageops::overlay(&mut self.canvas, &scaled, x0, y0);
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color) {
        let Some(font) = self.font.take() else {
            return;
        };
        {
            let scaled_font = font.as_scaled(PxScale::from(TEXT_PX_SIZE));
            let baseline = y + scaled_font.ascent();
            let mut x_offset = x;

            for c in text.chars() {
                let glyph_id = scaled_font.glyph_id(c);
                let glyph = glyph_id.with_scale_and_position(PxScale::from(TEXT_PX_SIZE), ab_glyph::point(x_offset, baseline));
                x_offset += scaled_font.h_advance(glyph_id);

                if let Some(outlined) = scaled_font.outline_glyph(glyph) {
                    let bounds = outlined.px_bounds();
                    outlined.draw(|px, py, coverage| {
                        let px = bounds.min.x as i64 + px as i64;
                        let py = bounds.min.y as i64 + py as i64;
                        self.blend_pixel(px, py, color, coverage);
                    });
                }
            }
        }
        self.font = Some(font);
    }

    fn measure_text(&self, text: &str) -> f32 {
        match &self.font {
            Some(font) => {
                let scaled_font = font.as_scaled(PxScale::from(TEXT_PX_SIZE));
                text.chars().map(|c| scaled_font.h_advance(scaled_font.glyph_id(c))).sum()
            }
            None => text.chars().count() as f32 * FALLBACK_CHAR_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_clipped() {
        let mut surface = RgbaSurface::new(10, 10);
        surface.fill_rect(Rect::new(-5.0, 5.0, 100.0, 100.0), [255, 0, 0, 255]);
        assert_eq!(surface.image().get_pixel(0, 9), &Rgba([255, 0, 0, 255]));
        assert_eq!(surface.image().get_pixel(9, 4), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_draw_image_scaled_into_rect() {
        let mut surface = RgbaSurface::new(20, 20);
        let image = RgbaData::from_raw([0, 255, 0, 255].repeat(4), 2, 2).unwrap();
        surface.draw_image(&image, Rect::new(5.0, 5.0, 10.0, 10.0));
        assert_eq!(surface.image().get_pixel(10, 10), &Rgba([0, 255, 0, 255]));
        assert_eq!(surface.image().get_pixel(2, 2), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_text_without_font_is_measured_not_drawn() {
        let mut surface = RgbaSurface::new(50, 20);
        assert_eq!(surface.measure_text("abc"), 24.0);
        surface.draw_text("abc", 0.0, 0.0, [255, 255, 255, 255]);
        assert!(surface.image().pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn test_save_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.png");
        let surface = RgbaSurface::new(8, 8);
        surface.save_png(&path).unwrap();
        let loaded = image::open(&path).unwrap();
        assert_eq!((loaded.width(), loaded.height()), (8, 8));
    }
}
