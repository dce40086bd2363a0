pub mod normalizer;
pub mod demo;
pub mod fetch_service;
pub mod filter_service;
pub mod refresh;

pub use fetch_service::{AggregateOutcome, FetchService};
pub use filter_service::FilterController;
pub use refresh::{refresh_cycle, RefreshLoop};
