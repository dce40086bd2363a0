pub mod feed;
pub mod article;
pub mod filter;

pub use feed::FeedSource;
pub use article::FeedItem;
pub use filter::Filter;
