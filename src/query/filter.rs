//! Filter specification and filter stage.

use crate::catalog::Product;
use crate::query::sort::SortKey;
use serde::{Deserialize, Serialize};

/// A structured filter specification.
///
/// Every field is independently optional: absence means "no constraint",
/// never "exclude all". Fields combine with AND semantics; the `tags` field
/// alone matches any-of (OR) within itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Exact category match (case-sensitive).
    pub category: Option<String>,
    /// Inclusive lower price bound, in minor currency units.
    pub min_price: Option<i64>,
    /// Inclusive upper price bound, in minor currency units.
    pub max_price: Option<i64>,
    /// If `Some(true)`, only in-stock products pass.
    pub in_stock: Option<bool>,
    /// Match products carrying any of these tags. Empty = no constraint.
    pub tags: Vec<String>,
    /// Free-text search query.
    pub search: Option<String>,
    /// Sort key. `None` preserves incoming order.
    pub sort: Option<SortKey>,
    /// Requested page (1-indexed).
    pub page: Option<i64>,
    /// Items per page.
    pub limit: Option<i64>,
}

impl FilterSpec {
    /// Create an unconstrained spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category constraint.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set inclusive price bounds (minor units). Either side may be open.
    pub fn with_price_range(mut self, min: Option<i64>, max: Option<i64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Restrict to in-stock products.
    pub fn with_in_stock(mut self) -> Self {
        self.in_stock = Some(true);
        self
    }

    /// Add a tag to the match-any tag set.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Set the free-text search query.
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        if !query.trim().is_empty() {
            self.search = Some(query);
        }
        self
    }

    /// Set the sort key.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Set pagination parameters.
    pub fn with_page(mut self, page: i64, limit: i64) -> Self {
        self.page = Some(page);
        self.limit = Some(limit);
        self
    }

    /// Parse a spec from a URL query string.
    ///
    /// Wire mapping: `tags` is a comma-separated list, booleans accept
    /// `"true"`/`"1"` (and `"false"`/`"0"`), and numeric fields with invalid
    /// values are ignored, never coerced to zero.
    pub fn from_query_string(qs: &str) -> Self {
        let mut spec = FilterSpec::new();

        for pair in qs.split('&') {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or("");
            let value = parts.next().unwrap_or("");
            let decoded = url_decode(value);

            match key {
                "category" => {
                    if !decoded.is_empty() {
                        spec.category = Some(decoded);
                    }
                }
                "min_price" => spec.min_price = decoded.parse().ok(),
                "max_price" => spec.max_price = decoded.parse().ok(),
                "in_stock" => spec.in_stock = parse_bool(&decoded),
                "tags" => {
                    spec.tags = decoded
                        .split(',')
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .map(String::from)
                        .collect();
                }
                "q" | "search" => {
                    if !decoded.trim().is_empty() {
                        spec.search = Some(decoded);
                    }
                }
                "sort" => spec.sort = SortKey::parse(&decoded),
                "page" => spec.page = decoded.parse().ok(),
                "limit" => spec.limit = decoded.parse().ok(),
                _ => {}
            }
        }

        spec
    }

    /// Generate a deterministic cache key for this spec.
    pub fn cache_key(&self) -> String {
        format!(
            "catalog:{}:{}:{}-{}:{}:{}:{}:{}:{}",
            self.search
                .as_deref()
                .unwrap_or("")
                .trim()
                .to_lowercase()
                .replace(' ', "_"),
            self.category.as_deref().unwrap_or("all"),
            self.min_price.map(|p| p.to_string()).unwrap_or_default(),
            self.max_price.map(|p| p.to_string()).unwrap_or_default(),
            self.in_stock.map(|b| b.to_string()).unwrap_or_default(),
            self.tags.join(","),
            self.sort.map(|s| s.as_str()).unwrap_or(""),
            self.page.unwrap_or(1),
            self.limit.unwrap_or(super::paginate::DEFAULT_LIMIT),
        )
    }

    /// Check whether a product passes every constraint in this spec.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if product.category != *category {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if product.price.amount_minor < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.price.amount_minor > max {
                return false;
            }
        }
        if self.in_stock == Some(true) && !product.inventory.in_stock {
            return false;
        }
        if !self.tags.is_empty() {
            let any_tag = self.tags.iter().any(|t| product.tags.contains(t));
            if !any_tag {
                return false;
            }
        }
        true
    }
}

/// Reduce a product slice to those matching the spec.
///
/// Stable: matching products keep their relative input order. The input is
/// never mutated.
pub fn apply(products: &[Product], spec: &FilterSpec) -> Vec<Product> {
    products
        .iter()
        .filter(|p| spec.matches(p))
        .cloned()
        .collect()
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Percent-decode a query string value ('+' as space).
///
/// Escapes decode to raw bytes first so multi-byte UTF-8 sequences
/// (e.g. `%C3%A9`) come out intact; invalid sequences are replaced,
/// never an error.
fn url_decode(s: &str) -> String {
    let mut bytes = Vec::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '%' {
            let hex: String = chars.by_ref().take(2).collect();
            if let Ok(byte) = u8::from_str_radix(&hex, 16) {
                bytes.push(byte);
            }
        } else if c == '+' {
            bytes.push(b' ');
        } else {
            let mut buf = [0u8; 4];
            bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
        }
    }

    String::from_utf8_lossy(&bytes).into_owned()
}
