use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeederError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Feed errors
    #[error("Invalid feed URL: {0}")]
    InvalidUrl(String),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Conversion API returned HTTP {0}")]
    HttpStatus(u16),

    #[error("Conversion API reported an error: {0}")]
    ApiStatus(String),

    #[error("Fetch of {0} aborted")]
    FetchAborted(String),

    // Parsing errors
    #[error("Response parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // User input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type FeederResult<T> = Result<T, FeederError>;
