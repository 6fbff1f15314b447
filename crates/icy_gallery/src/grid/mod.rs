//! Grid of image tiles
//!
//! - `tile` - Tile and Rect
//! - `layout` - uniform grid layout
//! - `hit_test` - pointer to tile lookup
//! - `tooltip` - tooltip placement clamped to the canvas

mod hit_test;
mod layout;
mod tile;
mod tooltip;

pub use hit_test::*;
pub use layout::*;
pub use tile::*;
pub use tooltip::*;
