use super::Tile;

/// Index of the first tile whose bounds contain the point (inclusive)
pub fn hit_index(tiles: &[Tile], x: f32, y: f32) -> Option<usize> {
    tiles.iter().position(|tile| !tile.bounds.is_empty() && tile.bounds.contains(x, y))
}

pub fn hit_test(tiles: &[Tile], x: f32, y: f32) -> Option<&Tile> {
    hit_index(tiles, x, y).map(|i| &tiles[i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DetailRecord, GridGeometry, layout};

    fn tiles(count: usize) -> Vec<Tile> {
        let mut tiles: Vec<Tile> = (0..count)
            .map(|i| {
                Tile::new(
                    DetailRecord {
                        id: i as u64 + 100,
                        title: format!("Title {}", i),
                        artist: "Artist".to_string(),
                        date: String::new(),
                        image_url: format!("https://example.org/{}.jpg", i),
                    },
                    None,
                )
            })
            .collect();
        let geometry = GridGeometry {
            canvas_width: 900.0,
            canvas_height: 560.0,
            columns: 6,
            padding: 20.0,
            gap: 10.0,
        };
        layout(&mut tiles, &geometry);
        tiles
    }

    #[test]
    fn test_hit_inside_and_on_edges() {
        let tiles = tiles(18);
        assert_eq!(hit_test(&tiles, 20.0, 20.0).map(Tile::id), Some(100));
        assert_eq!(hit_test(&tiles, 155.0, 100.0).map(Tile::id), Some(100));
        assert_eq!(hit_test(&tiles, 165.0, 100.0).map(Tile::id), Some(101));
        assert_eq!(hit_index(&tiles, 879.0, 539.0), Some(17));
    }

    #[test]
    fn test_padding_and_gaps_miss() {
        let tiles = tiles(18);
        assert!(hit_test(&tiles, 5.0, 5.0).is_none());
        assert!(hit_test(&tiles, 160.0, 100.0).is_none());
        assert!(hit_test(&tiles, 100.0, 191.0).is_none());
        assert!(hit_test(&tiles, 890.0, 300.0).is_none());
    }

    #[test]
    fn test_partial_row_leaves_empty_cells() {
        let tiles = tiles(7);
        assert_eq!(hit_index(&tiles, 50.0, 400.0), Some(6));
        assert!(hit_index(&tiles, 200.0, 400.0).is_none());
    }

    #[test]
    fn test_tile_without_image_is_hittable() {
        let tiles = tiles(1);
        assert!(!tiles[0].has_image());
        // a single tile spans the full content height of the first column
        assert_eq!(hit_index(&tiles, 50.0, 300.0), Some(0));
        assert!(hit_index(&tiles, 400.0, 300.0).is_none());
    }

    #[test]
    fn test_not_laid_out_never_hits() {
        let mut tiles = tiles(2);
        for tile in &mut tiles {
            tile.bounds = Default::default();
        }
        assert!(hit_index(&tiles, 0.0, 0.0).is_none());
    }
}
