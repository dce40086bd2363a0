use serde::Deserialize;

use crate::errors::{FeederError, FeederResult};

/// Envelope returned by the feed conversion API
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub items: Vec<ApiItem>,
}

impl ApiResponse {
    /// Unwrap the item list, treating any status other than "ok" as an error
    pub fn into_items(self) -> FeederResult<Vec<ApiItem>> {
        if self.status == "ok" {
            Ok(self.items)
        } else {
            Err(FeederError::ApiStatus(
                self.message.unwrap_or_else(|| format!("status '{}'", self.status)),
            ))
        }
    }
}

/// One raw entry as delivered by the conversion API, before normalization
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    #[serde(rename = "pubDate")]
    pub pub_date: Option<String>,
    /// Either `{ "link": ... }`, an empty object or an empty array depending on the feed
    pub enclosure: Option<serde_json::Value>,
    pub thumbnail: Option<String>,
}

impl ApiItem {
    pub fn enclosure_link(&self) -> Option<&str> {
        self.enclosure
            .as_ref()?
            .get("link")?
            .as_str()
            .filter(|link| !link.is_empty())
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref().filter(|t| !t.is_empty())
    }

    /// Raw markup body: the description, falling back to the content
    pub fn markup(&self) -> Option<&str> {
        non_empty(&self.description).or_else(|| non_empty(&self.content))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg_attr(test, mockall::automock)]
pub trait FeedApi: Send + Sync {
    /// Fetch the converted items of the feed at `feed_url`
    fn fetch_items(&self, feed_url: &str) -> FeederResult<Vec<ApiItem>>;
}
