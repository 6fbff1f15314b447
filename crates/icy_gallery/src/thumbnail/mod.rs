//! Thumbnail decoding and the sequential preloader
//!
//! - `rgba` - decoded image handle (RgbaData) and decoding helpers
//! - `preloader` - turns detail records into tiles, one image at a time

mod preloader;
mod rgba;

pub use preloader::*;
pub use rgba::*;
