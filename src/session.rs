use crate::error::ScraperError;
use crate::extractor;
use crate::fetcher::{Fetcher, SCRAPING_URL};
use crate::product::Dataset;
use scraper::Html;
use tokio::sync::mpsc::Sender;
use tracing::{info, warn};

/// The whole fetch -> parse -> extract pipeline as one unit of work.
pub async fn run_scrape(fetcher: &Fetcher) -> Result<Dataset, ScraperError> {
    let html = fetcher.fetch(SCRAPING_URL).await?;
    let doc = Html::parse_document(&html);
    Ok(extractor::extract(&doc))
}

/// Dispatches one scrape to a worker task so the caller's context is never
/// blocked on the network. Exactly one result message comes back on `tx`.
pub fn spawn_scrape(fetcher: Fetcher, tx: Sender<Result<Dataset, ScraperError>>) {
    tokio::spawn(async move {
        let result = run_scrape(&fetcher).await;
        if tx.send(result).await.is_err() {
            warn!("Scrape result dropped, receiver is gone");
        }
    });
}

/// Holds the single dataset slot between scrapes.
#[derive(Debug, Default)]
pub struct Session {
    dataset: Option<Dataset>,
}

impl Session {
    pub fn new() -> Session {
        Session::default()
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// Installs a successful scrape wholesale. A failed scrape leaves the
    /// previous dataset in place so last-known-good data stays visible.
    pub fn apply(&mut self, result: Result<Dataset, ScraperError>) -> Result<(), ScraperError> {
        match result {
            Ok(dataset) => {
                info!("Successfully scraped {} products", dataset.len());
                self.dataset = Some(dataset);
                Ok(())
            }
            Err(err) => {
                warn!("Scrape failed: {}", err);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductRecord;
    use pretty_assertions::assert_eq;
    use reqwest::StatusCode;

    fn sample_dataset(names: &[&str]) -> Dataset {
        names
            .iter()
            .map(|n| ProductRecord::new(n.to_string(), 10.0, 3.0).expect("valid record"))
            .collect()
    }

    fn transport_error() -> ScraperError {
        ScraperError::Status {
            status: StatusCode::SERVICE_UNAVAILABLE,
            reason: "Service Unavailable".to_string(),
        }
    }

    #[test]
    fn starts_without_a_dataset() {
        let session = Session::new();
        assert!(session.dataset().is_none());
    }

    #[test]
    fn successful_scrape_replaces_dataset_wholesale() {
        let mut session = Session::new();
        session
            .apply(Ok(sample_dataset(&["A", "B"])))
            .expect("first scrape");
        session
            .apply(Ok(sample_dataset(&["C"])))
            .expect("second scrape");

        let dataset = session.dataset().expect("dataset installed");
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].name, "C");
    }

    #[test]
    fn failed_scrape_preserves_previous_dataset() {
        let mut session = Session::new();
        session
            .apply(Ok(sample_dataset(&["A", "B"])))
            .expect("first scrape");
        let before = session.dataset().cloned().expect("dataset installed");

        let outcome = session.apply(Err(transport_error()));
        assert!(matches!(outcome, Err(ScraperError::Status { .. })));
        assert_eq!(session.dataset(), Some(&before));
    }

    #[test]
    fn failed_first_scrape_leaves_no_dataset() {
        let mut session = Session::new();
        assert!(session.apply(Err(transport_error())).is_err());
        assert!(session.dataset().is_none());
    }
}
