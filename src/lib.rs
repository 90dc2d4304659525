pub mod analysis;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod product;
pub mod session;

pub use error::ScraperError;
pub use fetcher::Fetcher;
pub use product::{Dataset, ProductRecord};
pub use session::{run_scrape, spawn_scrape, Session};
