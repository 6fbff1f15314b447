use std::sync::Arc;

use crate::GalleryResult;

/// Thumbnails are decoded at most this wide; grid cells are smaller than that.
pub const THUMBNAIL_RENDER_WIDTH: u32 = 320;

/// Very tall images are scaled to fit this height
pub const THUMBNAIL_MAX_HEIGHT: u32 = 2048;

/// Decoded, drawable RGBA image
#[derive(Debug, Clone)]
pub struct RgbaData {
    /// Raw RGBA pixel data (Arc for cheap cloning)
    pub data: Arc<Vec<u8>>,
    pub width: u32,
    pub height: u32,
}

impl RgbaData {
    /// Wrap raw RGBA8 pixels. `None` if `data` is not exactly `width * height * 4` bytes.
    pub fn from_raw(data: Vec<u8>, width: u32, height: u32) -> Option<Self> {
        if data.len() as u64 != 4 * width as u64 * height as u64 {
            return None;
        }
        Some(Self {
            data: Arc::new(data),
            width,
            height,
        })
    }

    pub fn from_image(image: image::RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            data: Arc::new(image.into_raw()),
            width,
            height,
        }
    }

    pub fn to_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data.to_vec())
    }
}

impl PartialEq for RgbaData {
    fn eq(&self, other: &Self) -> bool {
        // same Arc = same pixels
        Arc::ptr_eq(&self.data, &other.data) && self.width == other.width && self.height == other.height
    }
}

impl Eq for RgbaData {}

/// Decode PNG/JPEG/etc bytes and scale down to thumbnail size
pub fn load_image_to_rgba(data: &[u8]) -> GalleryResult<RgbaData> {
    let img = image::load_from_memory(data)?;
    let (orig_width, orig_height) = (img.width().max(1), img.height().max(1));
    let scale = (THUMBNAIL_RENDER_WIDTH as f32 / orig_width as f32)
        .min(THUMBNAIL_MAX_HEIGHT as f32 / orig_height as f32)
        .min(1.0);

    let new_width = ((orig_width as f32 * scale) as u32).max(1);
    let new_height = ((orig_height as f32 * scale) as u32).max(1);

    let resized = if scale < 1.0 {
        img.resize_exact(new_width, new_height, image::imageops::FilterType::Triangle)
    } else {
        img
    };

    Ok(RgbaData::from_image(resized.to_rgba8()))
}
