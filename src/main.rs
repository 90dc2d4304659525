use ecommerce_scraper::analysis::{self, Analysis};
use ecommerce_scraper::{Fetcher, ScraperError, Session};
use tokio::sync::mpsc;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| {
                "info,html5ever=error,selectors=error,hyper=warn,reqwest=info".into()
            }),
        )
        .with(ErrorLayer::default())
        .init();

    let fetcher = Fetcher::new()?;
    let (tx, mut rx) = mpsc::channel(1);

    info!("Scraping data... Please wait");
    ecommerce_scraper::spawn_scrape(fetcher, tx);

    let mut session = Session::new();
    if let Some(result) = rx.recv().await {
        session.apply(result)?;
    }
    let dataset = session.dataset().ok_or(ScraperError::NoDataset)?;

    println!(
        "{:<45} {:>10} {:>7} {:<12} {}",
        "Name", "Price", "Rating", "Category", "Date"
    );
    for record in dataset.iter() {
        println!("{}", record);
    }

    for option in Analysis::ALL {
        println!("\n== {} ==", option);
        let series = match option {
            Analysis::PriceDistribution => {
                serde_json::to_string_pretty(&analysis::price_distribution(dataset)?)?
            }
            Analysis::PriceOverTime => {
                serde_json::to_string_pretty(&analysis::average_price_by_date(dataset)?)?
            }
            Analysis::TopRatedProducts => serde_json::to_string_pretty(&analysis::top_rated(
                dataset,
                analysis::TOP_RATED_COUNT,
            )?)?,
            Analysis::CategoryDistribution => {
                serde_json::to_string_pretty(&analysis::category_counts(dataset)?)?
            }
        };
        println!("{}", series);
    }

    Ok(())
}
