use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::{CollectionClient, DetailRecord, GalleryError, GalleryResult, Tile};

use super::{RgbaData, load_image_to_rgba};

/// Resolves record image URLs into decoded thumbnails, strictly in order.
///
/// A failed image never drops its record: the tile is produced with `image: None`
/// and drawn as a fallback rectangle.
pub struct ThumbnailPreloader<'a> {
    client: &'a dyn CollectionClient,
    timeout: Duration,
}

impl<'a> ThumbnailPreloader<'a> {
    pub fn new(client: &'a dyn CollectionClient, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// `progress` is called with (done, total) after every record.
    /// Only cancellation is reported as an error.
    pub async fn preload<P>(&self, records: Vec<DetailRecord>, cancel_token: &CancellationToken, mut progress: P) -> GalleryResult<Vec<Tile>>
    where
        P: FnMut(usize, usize) + Send,
    {
        let total = records.len();
        let mut tiles = Vec::with_capacity(total);

        for record in records {
            let image = tokio::select! {
                biased;
                _ = cancel_token.cancelled() => return Err(GalleryError::Cancelled),
                result = self.load_thumbnail(&record.image_url) => result
            };

            let image = match image {
                Ok(rgba) => Some(rgba),
                Err(err) => {
                    log::debug!("thumbnail for object {} failed: {}", record.id, err);
                    None
                }
            };
            tiles.push(Tile::new(record, image));
            progress(tiles.len(), total);
        }

        Ok(tiles)
    }

    async fn load_thumbnail(&self, url: &str) -> GalleryResult<RgbaData> {
        let bytes = match tokio::time::timeout(self.timeout, self.client.fetch_image(url)).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(GalleryError::Timeout {
                    secs: self.timeout.as_secs(),
                    url: url.to_string(),
                });
            }
        };

        // decoding is CPU-bound
        tokio::task::spawn_blocking(move || load_image_to_rgba(&bytes)).await?
    }
}
