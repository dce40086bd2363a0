use serde::{Deserialize, Serialize};

/// A registered feed origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSource {
    pub name: String,
    pub url: String,
    /// CSS color used for the source label
    pub color: String,
}

impl FeedSource {
    pub fn new(name: impl Into<String>, url: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            color: color.into(),
        }
    }
}

impl std::fmt::Display for FeedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.url)
    }
}
