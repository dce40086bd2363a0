use crate::domain::{FeedSource, Filter};
use crate::errors::{FeederError, FeederResult};

/// Feeds shown by default, in display order; the position is the source index
const DEFAULT_FEEDS: &[(&str, &str, &str)] = &[
    ("TechCrunch", "https://techcrunch.com/feed/", "#0A9E00"),
    ("Hacker News", "https://news.ycombinator.com/rss", "#FF6600"),
    ("The Verge", "https://www.theverge.com/rss/index.xml", "#FA4D56"),
];

pub struct SourceRegistry {
    sources: Vec<FeedSource>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self::from_sources(
            DEFAULT_FEEDS
                .iter()
                .map(|(name, url, color)| FeedSource::new(*name, *url, *color))
                .collect(),
        )
    }

    pub fn from_sources(sources: Vec<FeedSource>) -> Self {
        Self { sources }
    }

    pub fn get(&self, index: usize) -> Option<&FeedSource> {
        self.sources.get(index)
    }

    pub fn sources(&self) -> &[FeedSource] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Reject filters pointing past the end of the registry
    pub fn check_filter(&self, filter: Filter) -> FeederResult<Filter> {
        match filter {
            Filter::Source(index) if index >= self.sources.len() => Err(FeederError::InvalidInput(
                format!(
                    "Source index {} out of range (registry has {} sources)",
                    index,
                    self.sources.len()
                ),
            )),
            _ => Ok(filter),
        }
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
