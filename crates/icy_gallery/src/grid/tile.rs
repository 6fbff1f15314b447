use crate::{DetailRecord, ObjectId, RgbaData};

/// Axis-aligned rectangle in canvas pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Inclusive on all four edges
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right() && other.x < self.right() && self.y < other.bottom() && other.y < self.bottom()
    }
}

/// A detail record with its thumbnail and grid position
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub record: DetailRecord,
    /// `None` if the thumbnail could not be loaded
    pub image: Option<RgbaData>,
    /// Zero until the grid has been laid out
    pub bounds: Rect,
}

impl Tile {
    pub fn new(record: DetailRecord, image: Option<RgbaData>) -> Self {
        Self {
            record,
            image,
            bounds: Rect::default(),
        }
    }

    pub fn id(&self) -> ObjectId {
        self.record.id
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}
