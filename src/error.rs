use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ScraperError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server responded with {status}: {reason}")]
    Status { status: StatusCode, reason: String },

    #[error("No dataset available, run a scrape first")]
    NoDataset,
}
