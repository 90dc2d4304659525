use crate::product::{Dataset, InvalidRecord, ProductRecord};
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

const E: &str = "Invalid selector";
lazy_static! {
    static ref PRODUCT_CARD: Selector = Selector::parse("div.product-wrapper").expect(E);
    static ref TITLE: Selector = Selector::parse("a.title").expect(E);
    static ref PRICE: Selector = Selector::parse("h4.price").expect(E);
    static ref RATINGS: Selector = Selector::parse("div.ratings").expect(E);
}

const RATING_ATTR: &str = "data-rating";

#[derive(Debug, thiserror::Error)]
enum CandidateError {
    #[error("missing {0} element")]
    Missing(&'static str),

    #[error("unparseable {field} value {value:?}")]
    Unparseable { field: &'static str, value: String },

    #[error(transparent)]
    Invalid(#[from] InvalidRecord),
}

/// Walks every product card in document order. A candidate that fails any
/// field extraction is dropped with a diagnostic; the rest still make it in.
/// A page with no matching cards yields an empty dataset, not an error.
pub fn extract(doc: &Html) -> Dataset {
    let mut records = Vec::new();
    for (i, card) in doc.select(&PRODUCT_CARD).enumerate() {
        match extract_candidate(card) {
            Ok(record) => records.push(record),
            Err(err) => warn!("Skipping product card {}: {}", i, err),
        }
    }
    debug!("Extracted {} product records", records.len());
    Dataset::new(records)
}

fn extract_candidate(card: ElementRef) -> Result<ProductRecord, CandidateError> {
    let name = card
        .select(&TITLE)
        .next()
        .ok_or(CandidateError::Missing("title"))?
        .text()
        .collect::<String>()
        .trim()
        .to_string();

    let price_text = card
        .select(&PRICE)
        .next()
        .ok_or(CandidateError::Missing("price"))?
        .text()
        .collect::<String>();
    let price_text = price_text.trim();
    let price = price_text
        .trim_start_matches('$')
        .parse::<f64>()
        .map_err(|_| CandidateError::Unparseable {
            field: "price",
            value: price_text.to_string(),
        })?;

    // Absent attribute means unrated, which counts as 0.
    let rating = match card
        .select(&RATINGS)
        .next()
        .ok_or(CandidateError::Missing("ratings"))?
        .value()
        .attr(RATING_ATTR)
    {
        Some(raw) => raw.parse::<f64>().map_err(|_| CandidateError::Unparseable {
            field: "rating",
            value: raw.to_string(),
        })?,
        None => 0.0,
    };

    Ok(ProductRecord::new(name, price, rating)?)
}
