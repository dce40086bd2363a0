use crate::domain::{FeedItem, Filter};
use crate::services::fetch_service::AggregateOutcome;

/// Retained item set of the current cycle plus the active filter selection
#[derive(Debug, Default)]
pub struct FilterController {
    items: Vec<FeedItem>,
    failed_sources: Vec<String>,
    is_demo: bool,
    filter: Filter,
}

impl FilterController {
    pub fn new(filter: Filter) -> Self {
        Self {
            filter,
            ..Default::default()
        }
    }

    /// Replace the retained items wholesale; the filter selection is kept
    pub fn replace(&mut self, outcome: AggregateOutcome) {
        self.items = outcome.items;
        self.failed_sources = outcome.failed_sources;
        self.is_demo = outcome.is_demo;
    }

    /// Make `filter` the single active selection
    pub fn select(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn items(&self) -> &[FeedItem] {
        &self.items
    }

    pub fn failed_sources(&self) -> &[String] {
        &self.failed_sources
    }

    pub fn is_demo(&self) -> bool {
        self.is_demo
    }

    /// Items matching the active filter, in retained order
    pub fn visible(&self) -> Vec<&FeedItem> {
        self.items
            .iter()
            .filter(|item| self.filter.matches(item.source_index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FeedSource;

    fn outcome(indices: &[usize]) -> AggregateOutcome {
        let source = FeedSource::new("S", "https://s.example/feed", "#000000");
        AggregateOutcome {
            items: indices
                .iter()
                .enumerate()
                .map(|(pos, index)| {
                    FeedItem::new(&source, *index, format!("item-{}", pos), String::new())
                })
                .collect(),
            failed_sources: Vec::new(),
            is_demo: false,
        }
    }

    fn titles(items: &[&FeedItem]) -> Vec<String> {
        items.iter().map(|i| i.title.clone()).collect()
    }

    #[test]
    fn test_all_returns_everything_unchanged() {
        let mut controller = FilterController::new(Filter::All);
        controller.replace(outcome(&[0, 1, 2, 1]));

        let visible = controller.visible();
        assert_eq!(visible.len(), 4);
        let all: Vec<&FeedItem> = controller.items().iter().collect();
        assert_eq!(visible, all);
    }

    #[test]
    fn test_source_filter_keeps_relative_order() {
        let mut controller = FilterController::new(Filter::All);
        controller.replace(outcome(&[1, 0, 1, 2, 1]));

        controller.select(Filter::Source(1));

        assert_eq!(
            titles(&controller.visible()),
            vec!["item-0", "item-2", "item-4"]
        );
        assert!(controller.visible().iter().all(|i| i.source_index == 1));
    }

    #[test]
    fn test_new_selection_replaces_previous() {
        let mut controller = FilterController::new(Filter::Source(0));
        controller.replace(outcome(&[0, 1, 2]));

        controller.select(Filter::Source(2));
        assert_eq!(controller.filter(), Filter::Source(2));
        assert_eq!(titles(&controller.visible()), vec!["item-2"]);

        controller.select(Filter::All);
        assert_eq!(controller.visible().len(), 3);
    }

    #[test]
    fn test_filter_survives_replace() {
        let mut controller = FilterController::new(Filter::Source(2));
        controller.replace(outcome(&[0, 2]));
        controller.replace(outcome(&[2, 2, 0]));

        assert_eq!(controller.filter(), Filter::Source(2));
        assert_eq!(titles(&controller.visible()), vec!["item-0", "item-1"]);
    }

    #[test]
    fn test_unmatched_source_yields_empty() {
        let mut controller = FilterController::new(Filter::Source(5));
        controller.replace(outcome(&[0, 1]));

        assert!(controller.visible().is_empty());
    }
}
