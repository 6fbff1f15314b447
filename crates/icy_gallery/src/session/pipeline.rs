use std::{sync::Arc, time::Duration};

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{CollectionClient, FetchProgress, GalleryError, GalleryResult, GridGeometry, Options, RecordFetcher, ThumbnailPreloader, Tile, layout};

/// Parameters of the fetch/preload/layout pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineSettings {
    pub max_items: usize,
    pub geometry: GridGeometry,
    pub image_timeout: Duration,
}

impl From<&Options> for PipelineSettings {
    fn from(options: &Options) -> Self {
        Self {
            max_items: options.max_items,
            geometry: options.grid_geometry(),
            image_timeout: options.image_timeout(),
        }
    }
}

/// Final product of a successful search
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    /// Number of candidate ids the keyword matched
    pub candidates: usize,
    /// Laid-out tiles in fetch order
    pub tiles: Vec<Tile>,
}

/// Messages from a running search to the gallery
#[derive(Debug)]
pub enum SearchEvent {
    Status { generation: u64, text: String },
    Finished { generation: u64, result: GalleryResult<SearchOutcome> },
}

impl SearchEvent {
    pub fn generation(&self) -> u64 {
        match self {
            SearchEvent::Status { generation, .. } | SearchEvent::Finished { generation, .. } => *generation,
        }
    }
}

/// One search, created by the gallery and run by whoever owns the runtime.
///
/// Stages run strictly in order: fetch records, preload thumbnails, lay out.
/// Each network call is awaited before the next one is issued.
#[derive(Debug, Clone)]
pub struct SearchJob {
    pub generation: u64,
    pub query: String,
    pub settings: PipelineSettings,
    pub cancel_token: CancellationToken,
}

impl SearchJob {
    /// Run the job and report through `events`. A cancelled job sends no `Finished` event.
    pub async fn run(self, client: Arc<dyn CollectionClient>, events: mpsc::UnboundedSender<SearchEvent>) {
        let generation = self.generation;
        let result = self.execute(&*client, &events).await;

        if matches!(&result, Err(err) if err.is_cancelled()) {
            log::debug!("search #{} '{}' cancelled", generation, self.query);
            return;
        }
        if let Err(err) = &result {
            log::error!("search '{}' failed: {}", self.query, err);
        }
        if events.send(SearchEvent::Finished { generation, result }).is_err() {
            log::warn!("search #{} finished after the gallery was closed", generation);
        }
    }

    pub async fn execute(&self, client: &dyn CollectionClient, events: &mpsc::UnboundedSender<SearchEvent>) -> GalleryResult<SearchOutcome> {
        let generation = self.generation;
        let status = |text: String| {
            let _ = events.send(SearchEvent::Status { generation, text });
        };

        status(format!("searching for \"{}\"...", self.query));
        let fetcher = RecordFetcher::new(client, self.settings.max_items);
        let fetched = fetcher
            .search(&self.query, &self.cancel_token, |progress| status(fetch_status(&progress)))
            .await?;

        if fetched.records.is_empty() {
            return Ok(SearchOutcome {
                candidates: fetched.candidates,
                tiles: Vec::new(),
            });
        }

        let total = fetched.records.len();
        status(format!("preloading thumbnails 0 of {}", total));
        let preloader = ThumbnailPreloader::new(client, self.settings.image_timeout);
        let mut tiles = preloader
            .preload(fetched.records, &self.cancel_token, |done, total| {
                status(format!("preloading thumbnails {} of {}", done, total))
            })
            .await?;

        if self.cancel_token.is_cancelled() {
            return Err(GalleryError::Cancelled);
        }
        layout(&mut tiles, &self.settings.geometry);
        status(format!("layout complete: {} tiles", tiles.len()));

        Ok(SearchOutcome {
            candidates: fetched.candidates,
            tiles,
        })
    }
}

fn fetch_status(progress: &FetchProgress) -> String {
    if progress.checked == 0 {
        format!("found {} ids, fetching details...", progress.candidates)
    } else {
        format!(
            "fetching details: {} of {} checked, {} with images",
            progress.checked, progress.candidates, progress.accepted
        )
    }
}
