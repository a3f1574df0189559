//! Facet summary stage.
//!
//! Derives the available filter options from a result set so a UI can
//! build its filter sidebar. Computed over the filtered, pre-pagination
//! set, keeping the options consistent with the active filter scope.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Observed price range, in minor currency units.
///
/// The minimum and maximum over an empty set are undefined, so an empty
/// input yields the documented sentinel `{min: 0, max: 0}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PriceRange {
    /// Lowest price in the set.
    pub min: i64,
    /// Highest price in the set.
    pub max: i64,
}

/// Available filter options derived from a result set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FacetSummary {
    /// Distinct categories, sorted ascending.
    pub categories: Vec<String>,
    /// Distinct tags, sorted ascending.
    pub tags: Vec<String>,
    /// Price range over the set.
    pub price_range: PriceRange,
}

impl FacetSummary {
    /// Check if no facet options are available.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.tags.is_empty()
    }
}

/// Summarize the filter options present in a product set.
///
/// Categories and tags are deduplicated and sorted ascending (ordinal).
pub fn summarize(products: &[Product]) -> FacetSummary {
    let mut categories = BTreeSet::new();
    let mut tags = BTreeSet::new();
    let mut min = i64::MAX;
    let mut max = i64::MIN;

    for product in products {
        categories.insert(product.category.clone());
        for tag in &product.tags {
            tags.insert(tag.clone());
        }
        min = min.min(product.price.amount_minor);
        max = max.max(product.price.amount_minor);
    }

    let price_range = if products.is_empty() {
        PriceRange::default()
    } else {
        PriceRange { min, max }
    };

    FacetSummary {
        categories: categories.into_iter().collect(),
        tags: tags.into_iter().collect(),
        price_range,
    }
}
