use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::FeedSource;

/// A normalized article drawn from one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub source: String,
    pub source_color: String,
    pub source_index: usize,
    pub title: String,
    pub link: String,
    pub description: String,
    pub published: DateTime<Utc>,
    pub image: Option<String>,
}

impl FeedItem {
    pub fn new(source: &FeedSource, source_index: usize, title: String, link: String) -> Self {
        Self {
            source: source.name.clone(),
            source_color: source.color.clone(),
            source_index,
            title,
            link,
            description: String::new(),
            published: DateTime::<Utc>::UNIX_EPOCH,
            image: None,
        }
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = description;
        self
    }

    pub fn with_published(mut self, published: DateTime<Utc>) -> Self {
        self.published = published;
        self
    }

    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }
}
