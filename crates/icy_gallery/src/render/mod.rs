//! Drawing the grid onto a 2D surface
//!
//! The surface itself is a collaborator; `RgbaSurface` is the software
//! implementation used for PNG snapshots.

mod rgba_surface;

pub use rgba_surface::*;

use crate::{Phase, Rect, RgbaData, SearchSession, Tile, Tooltip};

pub type Color = [u8; 4];

pub trait Surface {
    fn size(&self) -> (f32, f32);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw `image` scaled into `rect`
    fn draw_image(&mut self, image: &RgbaData, rect: Rect);

    /// Draw a single line with its top-left corner at (x, y)
    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color);

    fn measure_text(&self, text: &str) -> f32;

    fn stroke_rect(&mut self, rect: Rect, width: f32, color: Color) {
        self.fill_rect(Rect::new(rect.x, rect.y, rect.width, width), color);
        self.fill_rect(Rect::new(rect.x, rect.bottom() - width, rect.width, width), color);
        self.fill_rect(Rect::new(rect.x, rect.y, width, rect.height), color);
        self.fill_rect(Rect::new(rect.right() - width, rect.y, width, rect.height), color);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    pub background: Color,
    /// Fill of tiles whose thumbnail failed to load
    pub fallback: Color,
    pub hover_outline: Color,
    pub text: Color,
    pub error_text: Color,
    pub tooltip_background: Color,
    pub tooltip_text: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: [24, 24, 28, 255],
            fallback: [70, 70, 80, 255],
            hover_outline: [240, 200, 80, 255],
            text: [200, 200, 200, 255],
            error_text: [240, 110, 110, 255],
            tooltip_background: [0, 0, 0, 220],
            tooltip_text: [255, 255, 255, 255],
        }
    }
}

/// Draw one frame of the session. `pointer` is the current pointer position.
pub fn render_session(session: &SearchSession, pointer: Option<(f32, f32)>, surface: &mut dyn Surface, style: &RenderStyle) {
    let (width, height) = surface.size();
    surface.fill_rect(Rect::new(0.0, 0.0, width, height), style.background);

    for tile in &session.tiles {
        draw_tile(tile, surface, style);
    }

    if session.tiles.is_empty() {
        let message = match session.phase {
            Phase::Loading => "loading...".to_string(),
            Phase::Error => String::new(),
            _ if session.is_empty_result() => session.status_text.clone(),
            _ => "no images yet".to_string(),
        };
        if !message.is_empty() {
            draw_centered(surface, &message, height / 2.0, style.text);
        }
    }

    match session.phase {
        Phase::Loading => {
            // stale tiles may still be visible, keep the message readable
            let text_width = surface.measure_text(&session.status_text);
            surface.fill_rect(Rect::new(0.0, height - 22.0, text_width + 16.0, 22.0), style.tooltip_background);
            surface.draw_text(&session.status_text, 8.0, height - 18.0, style.text);
        }
        Phase::Error => {
            let message = session.error_message.as_deref().unwrap_or("error");
            draw_centered(surface, message, height / 2.0, style.error_text);
        }
        _ => {}
    }

    if let Some((x, y)) = pointer {
        if let Some(tile) = crate::hit_test(&session.tiles, x, y) {
            surface.stroke_rect(tile.bounds, 2.0, style.hover_outline);
            let tooltip = Tooltip::place((x, y), &tile.record.title, &tile.record.artist, |s| surface.measure_text(s), (width, height));
            draw_tooltip(&tooltip, surface, style);
        }
    }
}

fn draw_tile(tile: &Tile, surface: &mut dyn Surface, style: &RenderStyle) {
    if tile.bounds.is_empty() {
        return;
    }
    match &tile.image {
        Some(image) => surface.draw_image(image, fit_rect(image, tile.bounds)),
        None => surface.fill_rect(tile.bounds, style.fallback),
    }
}

/// Largest rect with the image aspect ratio, centered in `bounds`
pub fn fit_rect(image: &RgbaData, bounds: Rect) -> Rect {
    if image.width == 0 || image.height == 0 {
        return bounds;
    }
    let scale = (bounds.width / image.width as f32).min(bounds.height / image.height as f32);
    let width = image.width as f32 * scale;
    let height = image.height as f32 * scale;
    Rect::new(bounds.x + (bounds.width - width) / 2.0, bounds.y + (bounds.height - height) / 2.0, width, height)
}

fn draw_tooltip(tooltip: &Tooltip, surface: &mut dyn Surface, style: &RenderStyle) {
    surface.fill_rect(tooltip.bounds, style.tooltip_background);
    for (line, (x, y)) in tooltip.lines.iter().zip(tooltip.line_origins()) {
        surface.draw_text(line, x, y, style.tooltip_text);
    }
}

fn draw_centered(surface: &mut dyn Surface, text: &str, y: f32, color: Color) {
    let (width, _) = surface.size();
    let x = ((width - surface.measure_text(text)) / 2.0).max(0.0);
    surface.draw_text(text, x, y, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DetailRecord, Options, layout};

    #[derive(Default)]
    struct RecordingSurface {
        rects: Vec<(Rect, Color)>,
        images: Vec<Rect>,
        texts: Vec<String>,
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> (f32, f32) {
            (900.0, 560.0)
        }

        fn fill_rect(&mut self, rect: Rect, color: Color) {
            self.rects.push((rect, color));
        }

        fn draw_image(&mut self, _image: &RgbaData, rect: Rect) {
            self.images.push(rect);
        }

        fn draw_text(&mut self, text: &str, _x: f32, _y: f32, _color: Color) {
            self.texts.push(text.to_string());
        }

        fn measure_text(&self, text: &str) -> f32 {
            text.len() as f32 * 8.0
        }
    }

    fn ready_session() -> SearchSession {
        let record = |id: u64| DetailRecord {
            id,
            title: format!("Title {}", id),
            artist: format!("Artist {}", id),
            date: String::new(),
            image_url: "https://example.org/x.jpg".to_string(),
        };
        let mut tiles = vec![
            Tile::new(record(1), RgbaData::from_raw(vec![255; 4 * 4 * 2], 4, 2)),
            Tile::new(record(2), None),
        ];
        layout(&mut tiles, &Options::default().grid_geometry());
        SearchSession {
            query: "cat".to_string(),
            phase: Phase::Ready,
            status_text: "showing 2 images for \"cat\"".to_string(),
            error_message: None,
            tiles,
            generation: 1,
        }
    }

    #[test]
    fn test_failed_image_drawn_as_fallback() {
        let session = ready_session();
        let style = RenderStyle::default();
        let mut surface = RecordingSurface::default();
        render_session(&session, None, &mut surface, &style);

        assert_eq!(surface.images.len(), 1);
        assert!(surface.rects.iter().any(|(rect, color)| *rect == session.tiles[1].bounds && *color == style.fallback));
    }

    #[test]
    fn test_hover_draws_tooltip() {
        let session = ready_session();
        let mut surface = RecordingSurface::default();
        let bounds = session.tiles[1].bounds;
        render_session(&session, Some((bounds.x + 5.0, bounds.y + 5.0)), &mut surface, &RenderStyle::default());
        assert_eq!(surface.texts, vec!["Title 2".to_string(), "Artist 2".to_string()]);
    }

    #[test]
    fn test_empty_state_message() {
        let mut surface = RecordingSurface::default();
        render_session(&SearchSession::new(), None, &mut surface, &RenderStyle::default());
        assert_eq!(surface.texts, vec!["no images yet".to_string()]);
    }

    #[test]
    fn test_fit_rect_keeps_aspect() {
        let image = RgbaData::from_raw(vec![0; 4 * 4 * 2], 4, 2).unwrap();
        let rect = fit_rect(&image, Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(rect, Rect::new(0.0, 25.0, 100.0, 50.0));
    }
}
