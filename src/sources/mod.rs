pub mod traits;
pub mod rss2json;
pub mod registry;

pub use traits::{ApiItem, ApiResponse, FeedApi};
pub use rss2json::Rss2JsonClient;
pub use registry::SourceRegistry;
