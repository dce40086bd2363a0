use serde::{Deserialize, Serialize};

/// Subset criterion for the displayed items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Source(usize),
}

impl Filter {
    /// Value carried by the matching filter button's `data-feed` attribute
    pub fn as_data_value(&self) -> String {
        match self {
            Filter::All => "all".to_string(),
            Filter::Source(index) => index.to_string(),
        }
    }

    pub fn matches(&self, source_index: usize) -> bool {
        match self {
            Filter::All => true,
            Filter::Source(index) => *index == source_index,
        }
    }
}

impl std::str::FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(Filter::All);
        }

        s.parse::<usize>()
            .map(Filter::Source)
            .map_err(|_| format!("Unknown filter: {} (expected 'all' or a source index)", s))
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_data_value())
    }
}
