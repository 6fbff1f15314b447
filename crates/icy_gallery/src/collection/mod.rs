mod client;
mod fetcher;
mod record;

pub use client::*;
pub use fetcher::*;
pub use record::*;

/// Opaque key of a collection object
pub type ObjectId = u64;

/// Build the public web page URL for an object
pub fn detail_page_url(web_url: &str, id: ObjectId) -> String {
    format!("{}/search/{}", web_url.trim_end_matches('/'), id)
}
