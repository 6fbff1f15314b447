use tokio_util::sync::CancellationToken;

use crate::{GalleryError, GalleryResult};

use super::{CollectionClient, DetailRecord, ObjectId};

/// Result of the fetch stage
#[derive(Debug, Clone, Default)]
pub struct FetchOutcome {
    /// Number of candidate ids the search returned
    pub candidates: usize,
    /// Accepted records in the order their ids were tried
    pub records: Vec<DetailRecord>,
}

/// Reported once with `checked == 0` when the candidates are known, then after every id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchProgress {
    pub checked: usize,
    pub candidates: usize,
    pub accepted: usize,
}

/// Turns a keyword into at most `max_items` illustrated records.
///
/// Detail requests are issued one after another; the next id is requested only
/// after the previous response has been handled.
pub struct RecordFetcher<'a> {
    client: &'a dyn CollectionClient,
    max_items: usize,
}

impl<'a> RecordFetcher<'a> {
    pub fn new(client: &'a dyn CollectionClient, max_items: usize) -> Self {
        Self { client, max_items }
    }

    /// Search errors are returned; per-object failures only drop that object.
    pub async fn search<P>(&self, query: &str, cancel_token: &CancellationToken, mut progress: P) -> GalleryResult<FetchOutcome>
    where
        P: FnMut(FetchProgress) + Send,
    {
        let ids = tokio::select! {
            biased;
            _ = cancel_token.cancelled() => return Err(GalleryError::Cancelled),
            result = self.client.search_ids(query) => result?
        };
        log::info!("search '{}' returned {} candidate ids", query, ids.len());

        let mut outcome = FetchOutcome {
            candidates: ids.len(),
            records: Vec::with_capacity(self.max_items.min(ids.len())),
        };
        if ids.is_empty() {
            return Ok(outcome);
        }
        progress(FetchProgress {
            checked: 0,
            candidates: outcome.candidates,
            accepted: 0,
        });

        for (checked, id) in ids.iter().enumerate() {
            if outcome.records.len() >= self.max_items {
                break;
            }

            let record = tokio::select! {
                biased;
                _ = cancel_token.cancelled() => return Err(GalleryError::Cancelled),
                record = self.fetch_record(*id) => record
            };
            if let Some(record) = record {
                outcome.records.push(record);
            }

            progress(FetchProgress {
                checked: checked + 1,
                candidates: outcome.candidates,
                accepted: outcome.records.len(),
            });
        }

        Ok(outcome)
    }

    async fn fetch_record(&self, id: ObjectId) -> Option<DetailRecord> {
        match self.client.fetch_object(id).await {
            Ok(json) => {
                let record = DetailRecord::from_json(id, &json);
                if record.is_none() {
                    log::debug!("object {} has no usable image, skipped", id);
                }
                record
            }
            Err(err) => {
                log::debug!("object {} skipped: {}", id, err);
                None
            }
        }
    }
}
