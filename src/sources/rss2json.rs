use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::errors::{FeederError, FeederResult};
use crate::sources::traits::{ApiItem, ApiResponse, FeedApi};

/// Client for an RSS-to-JSON conversion service (rss2json.com compatible)
pub struct Rss2JsonClient {
    client: Client,
    endpoint: Url,
}

impl Rss2JsonClient {
    pub fn new(endpoint: Url, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
            endpoint,
        }
    }

    /// Build the conversion request URL; the feed URL is percent-encoded as `rss_url`
    pub fn request_url(&self, feed_url: &str) -> FeederResult<Url> {
        Url::parse_with_params(self.endpoint.as_str(), &[("rss_url", feed_url)])
            .map_err(|e| FeederError::InvalidUrl(e.to_string()))
    }

    fn parse_body(body: &[u8]) -> FeederResult<Vec<ApiItem>> {
        let response: ApiResponse = serde_json::from_slice(body)?;
        response.into_items()
    }
}

impl FeedApi for Rss2JsonClient {
    fn fetch_items(&self, feed_url: &str) -> FeederResult<Vec<ApiItem>> {
        let url = self.request_url(feed_url)?;
        tracing::debug!(%url, "requesting feed conversion");

        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeederError::HttpStatus(status.as_u16()));
        }

        let bytes = response.bytes()?;
        Self::parse_body(&bytes)
    }
}
