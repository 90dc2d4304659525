use crate::error::ScraperError;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::debug;

pub const SCRAPING_URL: &str = "https://webscraper.io/test-sites/e-commerce/allinone";

// Standard browser identity, enough to get past trivial bot blocking.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new() -> Result<Fetcher, ScraperError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;
        Ok(Fetcher { client })
    }

    /// One plain GET. No retries, no timeout override, library-default
    /// redirect handling.
    pub async fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::Status {
                status,
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }
        Ok(response.text().await?)
    }
}
