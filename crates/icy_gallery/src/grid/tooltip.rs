use super::Rect;

/// Distance between pointer and tooltip box
pub const TOOLTIP_OFFSET: f32 = 14.0;
pub const TOOLTIP_PADDING: f32 = 6.0;
pub const TOOLTIP_LINE_HEIGHT: f32 = 16.0;

/// Hover tooltip showing title and artist
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub bounds: Rect,
    pub lines: [String; 2],
}

impl Tooltip {
    /// Place a tooltip below-right of the pointer, shifted left/up so the box
    /// stays on the canvas. `measure` returns the pixel width of a line.
    pub fn place(pointer: (f32, f32), title: &str, artist: &str, measure: impl Fn(&str) -> f32, canvas: (f32, f32)) -> Self {
        let (canvas_width, canvas_height) = canvas;
        let text_width = measure(title).max(measure(artist));

        let width = (text_width + 2.0 * TOOLTIP_PADDING).min(canvas_width);
        let height = (2.0 * TOOLTIP_LINE_HEIGHT + 2.0 * TOOLTIP_PADDING).min(canvas_height);

        let mut x = pointer.0 + TOOLTIP_OFFSET;
        let mut y = pointer.1 + TOOLTIP_OFFSET;
        if x + width > canvas_width {
            x = canvas_width - width;
        }
        if y + height > canvas_height {
            y = canvas_height - height;
        }

        Self {
            bounds: Rect::new(x.max(0.0), y.max(0.0), width, height),
            lines: [title.to_string(), artist.to_string()],
        }
    }

    /// Top-left positions of the text lines
    pub fn line_origins(&self) -> [(f32, f32); 2] {
        let x = self.bounds.x + TOOLTIP_PADDING;
        let y = self.bounds.y + TOOLTIP_PADDING;
        [(x, y), (x, y + TOOLTIP_LINE_HEIGHT)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measure(s: &str) -> f32 {
        s.chars().count() as f32 * 8.0
    }

    #[test]
    fn test_below_right_of_pointer() {
        let tip = Tooltip::place((100.0, 100.0), "Title", "Artist", measure, (900.0, 560.0));
        assert_eq!(tip.bounds.x, 114.0);
        assert_eq!(tip.bounds.y, 114.0);
        assert_eq!(tip.bounds.width, 48.0 + 12.0);
        assert_eq!(tip.lines[1], "Artist");
    }

    #[test]
    fn test_clamped_at_right_and_bottom() {
        let tip = Tooltip::place((890.0, 550.0), "A rather long title", "Someone", measure, (900.0, 560.0));
        assert_eq!(tip.bounds.right(), 900.0);
        assert_eq!(tip.bounds.bottom(), 560.0);
    }

    #[test]
    fn test_always_within_canvas() {
        for &(x, y) in &[(0.0, 0.0), (450.0, 280.0), (899.0, 0.0), (0.0, 559.0), (899.0, 559.0)] {
            let tip = Tooltip::place((x, y), &"x".repeat(200), "y", measure, (900.0, 560.0));
            assert!(tip.bounds.x >= 0.0 && tip.bounds.y >= 0.0);
            assert!(tip.bounds.right() <= 900.0 && tip.bounds.bottom() <= 560.0);
        }
    }
}
