//! Uniform grid layout
//!
//! Every cell has the same size. Rows are derived from the tile count, so a
//! partial last row keeps the cell size of the full rows and is left-aligned.

use super::{Rect, Tile};

/// Canvas and spacing of the grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub columns: usize,
    /// Margin between canvas edge and the outer tiles
    pub padding: f32,
    /// Spacing between columns and rows
    pub gap: f32,
}

impl GridGeometry {
    pub fn rows_for(&self, count: usize) -> usize {
        count.div_ceil(self.columns.max(1))
    }

    /// Size of a single cell when `count` tiles are shown
    pub fn cell_size(&self, count: usize) -> (f32, f32) {
        let columns = self.columns.max(1);
        let rows = self.rows_for(count).max(1);

        let usable_width = self.canvas_width - 2.0 * self.padding;
        let usable_height = self.canvas_height - 2.0 * self.padding;

        let width = (usable_width - self.gap * (columns - 1) as f32) / columns as f32;
        let height = (usable_height - self.gap * (rows - 1) as f32) / rows as f32;
        (width.max(0.0), height.max(0.0))
    }

    /// The padded area tiles are placed in
    pub fn content_rect(&self) -> Rect {
        Rect::new(
            self.padding,
            self.padding,
            self.canvas_width - 2.0 * self.padding,
            self.canvas_height - 2.0 * self.padding,
        )
    }
}

/// Rectangles for `count` tiles in grid order
pub fn cell_rects(count: usize, geometry: &GridGeometry) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let columns = geometry.columns.max(1);
    let (width, height) = geometry.cell_size(count);

    (0..count)
        .map(|i| {
            let col = i % columns;
            let row = i / columns;
            Rect {
                x: geometry.padding + col as f32 * (width + geometry.gap),
                y: geometry.padding + row as f32 * (height + geometry.gap),
                width,
                height,
            }
        })
        .collect()
}

/// Assign bounds to all tiles. No-op for an empty slice.
pub fn layout(tiles: &mut [Tile], geometry: &GridGeometry) {
    let rects = cell_rects(tiles.len(), geometry);
    for (tile, rect) in tiles.iter_mut().zip(rects) {
        tile.bounds = rect;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(columns: usize) -> GridGeometry {
        GridGeometry {
            canvas_width: 900.0,
            canvas_height: 560.0,
            columns,
            padding: 20.0,
            gap: 10.0,
        }
    }

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 0.01, "{} != {}", a, b);
    }

    #[test]
    fn test_full_grid() {
        let rects = cell_rects(18, &geometry(6));
        assert_eq!(rects.len(), 18);
        for rect in &rects {
            assert_close(rect.width, 135.0);
            assert_close(rect.height, 166.67);
        }
        assert_eq!((rects[0].x, rects[0].y), (20.0, 20.0));
        assert_close(rects[5].x, 20.0 + 5.0 * 145.0);
        assert_close(rects[5].right(), 880.0);
        assert_close(rects[17].bottom(), 540.0);
    }

    #[test]
    fn test_partial_last_row_left_aligned() {
        let rects = cell_rects(8, &geometry(6));
        assert_eq!(rects.len(), 8);
        // two rows
        assert_close(rects[0].height, (520.0 - 10.0) / 2.0);
        assert_eq!(rects[6].x, 20.0);
        assert_close(rects[7].x, 165.0);
        assert_eq!(rects[6].width, rects[0].width);
        assert_close(rects[6].y, 20.0 + rects[0].height + 10.0);
    }

    #[test]
    fn test_inside_padding_and_not_overlapping() {
        for columns in 1..=8 {
            let geometry = geometry(columns);
            let content = geometry.content_rect();
            for count in 1..=24 {
                let rects = cell_rects(count, &geometry);
                assert_eq!(rects.len(), count);
                for (i, a) in rects.iter().enumerate() {
                    assert!(!a.is_empty());
                    assert!(a.x >= content.x - 0.01 && a.y >= content.y - 0.01);
                    assert!(a.right() <= content.right() + 0.01 && a.bottom() <= content.bottom() + 0.01);
                    for b in rects.iter().skip(i + 1) {
                        assert!(!a.intersects(b), "{:?} overlaps {:?}", a, b);
                    }
                }
            }
        }
    }

    #[test]
    fn test_empty_is_noop() {
        assert!(cell_rects(0, &geometry(6)).is_empty());
        let mut tiles: Vec<Tile> = Vec::new();
        layout(&mut tiles, &geometry(6));
        assert!(tiles.is_empty());
    }

    #[test]
    fn test_zero_columns_treated_as_one() {
        let rects = cell_rects(2, &geometry(0));
        assert_eq!(rects[0].x, rects[1].x);
        assert_close(rects[0].width, 860.0);
    }

    #[test]
    fn test_layout_is_idempotent() {
        let geometry = geometry(6);
        assert_eq!(cell_rects(11, &geometry), cell_rects(11, &geometry));
    }
}
