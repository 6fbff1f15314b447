use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde_json::Value;

use crate::{GalleryError, GalleryResult, Options};

use super::{ObjectId, parse_object_ids};

/// Transport to the art collection API.
///
/// Every call is a single request; callers decide about ordering.
#[async_trait]
pub trait CollectionClient: Send + Sync {
    /// Resolve a keyword to candidate object ids (only objects with images)
    async fn search_ids(&self, query: &str) -> GalleryResult<Vec<ObjectId>>;

    /// Fetch the raw detail JSON of one object
    async fn fetch_object(&self, id: ObjectId) -> GalleryResult<Value>;

    /// Fetch the encoded bytes of an image
    async fn fetch_image(&self, url: &str) -> GalleryResult<Vec<u8>>;
}

/// `CollectionClient` backed by reqwest
pub struct HttpCollectionClient {
    client: reqwest::Client,
    search_url: String,
    object_url: String,
    /// Whether we've logged a connection error (log once)
    connection_error_logged: AtomicBool,
}

impl HttpCollectionClient {
    pub fn new(options: &Options) -> GalleryResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(format!("icy_gallery/{}", *crate::VERSION))
            .connect_timeout(options.request_timeout())
            .timeout(options.request_timeout())
            .build()?;
        Ok(Self {
            client,
            search_url: options.search_url.trim_end_matches('/').to_string(),
            object_url: options.object_url.trim_end_matches('/').to_string(),
            connection_error_logged: AtomicBool::new(false),
        })
    }

    fn log_connection_error(&self, err: &reqwest::Error) {
        if !self.connection_error_logged.swap(true, Ordering::Relaxed) {
            log::warn!("collection api connection error: {} (further errors suppressed)", err);
        }
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> GalleryResult<reqwest::Response> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                self.log_connection_error(&err);
                return Err(err.into());
            }
        };
        let status = response.status();
        if !status.is_success() {
            return Err(GalleryError::Http {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }
        Ok(response)
    }

    async fn fetch_json(&self, request: reqwest::RequestBuilder) -> GalleryResult<Value> {
        let response = self.send(request).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl CollectionClient for HttpCollectionClient {
    async fn search_ids(&self, query: &str) -> GalleryResult<Vec<ObjectId>> {
        let request = self.client.get(&self.search_url).query(&[("hasImages", "true"), ("q", query)]);
        let json = self.fetch_json(request).await?;
        Ok(parse_object_ids(&json))
    }

    async fn fetch_object(&self, id: ObjectId) -> GalleryResult<Value> {
        let url = format!("{}/{}", self.object_url, id);
        self.fetch_json(self.client.get(url)).await
    }

    async fn fetch_image(&self, url: &str) -> GalleryResult<Vec<u8>> {
        let response = self.send(self.client.get(url)).await?;
        Ok(response.bytes().await?.to_vec())
    }
}
