use chrono::{DateTime, Utc};

use crate::domain::{FeedItem, FeedSource};
use crate::errors::{FeederError, FeederResult};
use crate::services::demo::demo_items;
use crate::services::normalizer;
use crate::sources::{FeedApi, SourceRegistry};

/// Result of one aggregation pass over every registered source
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateOutcome {
    /// Newest first
    pub items: Vec<FeedItem>,
    /// Names of sources whose fetch failed, in registry order
    pub failed_sources: Vec<String>,
    /// True when nothing was loaded and the demonstration dataset stands in
    pub is_demo: bool,
}

pub struct FetchService<A: FeedApi> {
    api: A,
    source_registry: SourceRegistry,
}

impl<A: FeedApi> FetchService<A> {
    pub fn new(api: A, source_registry: SourceRegistry) -> Self {
        Self {
            api,
            source_registry,
        }
    }

    pub fn registry(&self) -> &SourceRegistry {
        &self.source_registry
    }

    /// Fetch and normalize the items of a single source
    pub fn fetch_source(&self, source: &FeedSource, index: usize) -> FeederResult<Vec<FeedItem>> {
        let raw_items = self.api.fetch_items(&source.url)?;

        Ok(raw_items
            .iter()
            .map(|item| normalizer::normalize(source, index, item))
            .collect())
    }

    /// Fetch every registered source concurrently and wait for all of them
    pub fn fetch_all(&self) -> Vec<(&FeedSource, FeederResult<Vec<FeedItem>>)> {
        std::thread::scope(|scope| {
            let handles: Vec<_> = self
                .source_registry
                .sources()
                .iter()
                .enumerate()
                .map(|(index, source)| {
                    (source, scope.spawn(move || self.fetch_source(source, index)))
                })
                .collect();

            handles
                .into_iter()
                .map(|(source, handle)| {
                    let result = handle
                        .join()
                        .unwrap_or_else(|_| Err(FeederError::FetchAborted(source.name.clone())));
                    (source, result)
                })
                .collect()
        })
    }

    /// Merge all sources newest first, substituting demo data when nothing loaded
    pub fn aggregate(&self, now: DateTime<Utc>) -> AggregateOutcome {
        let mut items = Vec::new();
        let mut failed_sources = Vec::new();

        for (source, result) in self.fetch_all() {
            match result {
                Ok(mut source_items) => {
                    tracing::debug!(source = %source.name, count = source_items.len(), "fetched source");
                    items.append(&mut source_items);
                }
                Err(e) => {
                    // Log error but continue with other sources
                    tracing::warn!(source = %source.name, error = %e, "failed to fetch source");
                    failed_sources.push(source.name.clone());
                }
            }
        }

        if items.is_empty() {
            tracing::info!("no feeds loaded, using demonstration data");
            return AggregateOutcome {
                items: demo_items(now),
                failed_sources,
                is_demo: true,
            };
        }

        sort_newest_first(&mut items);

        AggregateOutcome {
            items,
            failed_sources,
            is_demo: false,
        }
    }
}

pub fn sort_newest_first(items: &mut [FeedItem]) {
    items.sort_by(|a, b| b.published.cmp(&a.published));
}
