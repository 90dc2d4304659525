use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// The source site carries no category data, so every record gets this.
pub const PLACEHOLDER_CATEGORY: &str = "Electronics";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRecord {
    pub name: String,
    pub price: f64,
    pub rating: f64,
    pub category: String,
    pub observed_date: NaiveDate,
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct InvalidRecord(&'static str);

impl ProductRecord {
    /// Builds a record stamped with today's date. Empty names and negative
    /// prices are rejected here rather than carried into the dataset.
    pub fn new(name: String, price: f64, rating: f64) -> Result<ProductRecord, InvalidRecord> {
        if name.is_empty() {
            return Err(InvalidRecord("empty product name"));
        }
        if price < 0.0 {
            return Err(InvalidRecord("negative price"));
        }
        Ok(ProductRecord {
            name,
            price,
            rating,
            category: PLACEHOLDER_CATEGORY.to_string(),
            observed_date: chrono::Local::now().date_naive(),
        })
    }
}

impl fmt::Display for ProductRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<45} {:>10.2} {:>7.1} {:<12} {}",
            self.name, self.price, self.rating, self.category, self.observed_date
        )
    }
}

/// All records from the most recent successful scrape, in document order.
/// Replaced wholesale per scrape, never merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset(Vec<ProductRecord>);

impl Dataset {
    pub fn new(records: Vec<ProductRecord>) -> Dataset {
        Dataset(records)
    }

    pub fn records(&self) -> &[ProductRecord] {
        self.0.as_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProductRecord> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ProductRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = ProductRecord>>(iter: I) -> Dataset {
        Dataset(iter.into_iter().collect())
    }
}
