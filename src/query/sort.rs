//! Sort stage.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Recognized sort keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Name, A-Z (case-insensitive).
    Name,
    /// Newest first (created_at descending).
    Newest,
    /// Highest rated first (missing rating counts as 0).
    Rating,
}

impl SortKey {
    /// Parse a wire value. Unrecognized values yield `None`, which the
    /// sort stage treats as "preserve incoming order", not as an error.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "price-asc" => Some(SortKey::PriceAsc),
            "price-desc" => Some(SortKey::PriceDesc),
            "name" => Some(SortKey::Name),
            "newest" => Some(SortKey::Newest),
            "rating" => Some(SortKey::Rating),
            _ => None,
        }
    }

    /// The wire form of this key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Name => "name",
            SortKey::Newest => "newest",
            SortKey::Rating => "rating",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::Name => "Name: A-Z",
            SortKey::Newest => "Newest",
            SortKey::Rating => "Highest Rated",
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::PriceAsc => a.price.amount_minor.cmp(&b.price.amount_minor),
            SortKey::PriceDesc => b.price.amount_minor.cmp(&a.price.amount_minor),
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Newest => b.created_at.cmp(&a.created_at),
            SortKey::Rating => {
                let rating = |p: &Product| p.rating.map(|r| r.average).unwrap_or(0.0);
                rating(b).total_cmp(&rating(a))
            }
        }
    }
}

/// Return a reordered copy of the input under the given key.
///
/// `None` is an identity pass-through. The sort is stable: products with
/// equal keys keep their incoming relative order, and the input slice is
/// never mutated.
pub fn apply(products: &[Product], key: Option<SortKey>) -> Vec<Product> {
    let mut out = products.to_vec();
    if let Some(key) = key {
        out.sort_by(|a, b| key.compare(a, b));
    }
    out
}
