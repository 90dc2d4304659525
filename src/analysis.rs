use crate::error::ScraperError;
use crate::product::{Dataset, ProductRecord};
use chrono::NaiveDate;
use itertools::Itertools;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

pub const PRICE_BUCKETS: usize = 20;
pub const TOP_RATED_COUNT: usize = 10;

/// The four chart options offered by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Analysis {
    PriceDistribution,
    PriceOverTime,
    TopRatedProducts,
    CategoryDistribution,
}

impl Analysis {
    pub const ALL: [Analysis; 4] = [
        Analysis::PriceDistribution,
        Analysis::PriceOverTime,
        Analysis::TopRatedProducts,
        Analysis::CategoryDistribution,
    ];
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Analysis::PriceDistribution => "Price Distribution",
            Analysis::PriceOverTime => "Price Over Time",
            Analysis::TopRatedProducts => "Top Rated Products",
            Analysis::CategoryDistribution => "Category Distribution",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBucket {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatePoint {
    pub date: NaiveDate,
    pub mean_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Counts records into `PRICE_BUCKETS` equal-width buckets over the observed
/// price range. When every price is identical the width degenerates to zero
/// and all records land in the first bucket; bucket counts always sum to the
/// dataset size.
pub fn price_distribution(dataset: &Dataset) -> Result<Vec<PriceBucket>, ScraperError> {
    let records = non_empty(dataset)?;

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for record in records {
        min = min.min(record.price);
        max = max.max(record.price);
    }

    let width = (max - min) / PRICE_BUCKETS as f64;
    let mut buckets: Vec<PriceBucket> = (0..PRICE_BUCKETS)
        .map(|i| PriceBucket {
            lower: min + width * i as f64,
            upper: min + width * (i + 1) as f64,
            count: 0,
        })
        .collect();

    for record in records {
        let idx = if width > 0.0 {
            (((record.price - min) / width) as usize).min(PRICE_BUCKETS - 1)
        } else {
            0
        };
        buckets[idx].count += 1;
    }
    Ok(buckets)
}

/// Mean price per observed date, ascending by date. A single scrape stamps
/// one date on everything, so this is usually one point, but datasets
/// accumulated across sessions group correctly.
pub fn average_price_by_date(dataset: &Dataset) -> Result<Vec<DatePoint>, ScraperError> {
    let records = non_empty(dataset)?;

    let mut groups: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for record in records {
        let entry = groups.entry(record.observed_date).or_insert((0.0, 0));
        entry.0 += record.price;
        entry.1 += 1;
    }
    Ok(groups
        .into_iter()
        .map(|(date, (sum, count))| DatePoint {
            date,
            mean_price: sum / count as f64,
        })
        .collect())
}

/// The `n` highest-rated records. The sort is stable, so ties keep their
/// document order.
pub fn top_rated<'a>(
    dataset: &'a Dataset,
    n: usize,
) -> Result<Vec<&'a ProductRecord>, ScraperError> {
    let records = non_empty(dataset)?;

    let mut ranked: Vec<&ProductRecord> = records.iter().collect();
    ranked.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));
    ranked.truncate(n);
    Ok(ranked)
}

/// Record count per distinct category, descending by count. With the
/// placeholder category this is one entry covering the whole dataset.
pub fn category_counts(dataset: &Dataset) -> Result<Vec<CategoryCount>, ScraperError> {
    let records = non_empty(dataset)?;

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.category.as_str()).or_default() += 1;
    }
    Ok(counts
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)))
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect())
}

fn non_empty(dataset: &Dataset) -> Result<&[ProductRecord], ScraperError> {
    if dataset.is_empty() {
        return Err(ScraperError::NoDataset);
    }
    Ok(dataset.records())
}
