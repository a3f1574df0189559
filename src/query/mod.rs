//! Query pipeline.
//!
//! Composes the four stages in fixed order over an immutable product
//! snapshot: filter, search (when a query is present), sort, paginate,
//! with the facet summary taken from the pre-pagination result set.
//! Every stage is a pure function; the orchestrator performs no I/O.

pub mod facets;
pub mod filter;
pub mod paginate;
pub mod search;
pub mod sort;

pub use facets::{FacetSummary, PriceRange};
pub use filter::FilterSpec;
pub use paginate::{PageInfo, PageResult, DEFAULT_LIMIT, MAX_LIMIT};
pub use sort::SortKey;

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// The filters section of the response envelope: what the caller asked
/// for, and what options remain available within that scope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterContext {
    /// The spec as applied, after wire parsing.
    pub applied: FilterSpec,
    /// Facet options derived from the filtered result set.
    pub available: FacetSummary,
}

/// The full response envelope for a catalog query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryResponse {
    /// The products on the requested page.
    pub data: Vec<Product>,
    /// Page metadata.
    pub pagination: PageInfo,
    /// Applied and available filters.
    pub filters: FilterContext,
}

/// Run the full query pipeline over a product snapshot.
///
/// Stage order is fixed: filter, then search when the spec carries a
/// non-empty query, then sort, then pagination. An explicitly requested
/// sort key overrides relevance order from the search stage (sort runs
/// last, so whichever ordering ran last wins). This function is total:
/// empty results, page overshoot, and empty facet sources all resolve to
/// documented values, never errors.
pub fn execute(products: &[Product], spec: &FilterSpec) -> QueryResponse {
    let filtered = filter::apply(products, spec);
    let filtered_count = filtered.len();

    let matched = match spec.search.as_deref() {
        Some(query) if !query.trim().is_empty() => search::rank(&filtered, query),
        _ => filtered,
    };

    let ordered = sort::apply(&matched, spec.sort);
    let available = facets::summarize(&ordered);

    let page = spec.page.unwrap_or(1);
    let limit = spec.limit.unwrap_or(DEFAULT_LIMIT);
    let result = paginate::paginate(&ordered, page, limit);

    tracing::debug!(
        input = products.len(),
        filtered = filtered_count,
        total = result.pagination.total,
        page = result.pagination.page,
        "catalog query executed"
    );

    QueryResponse {
        data: result.data,
        pagination: result.pagination,
        filters: FilterContext {
            applied: spec.clone(),
            available,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn product(id: &str, name: &str, price: i64, category: &str, tags: &[&str]) -> Product {
        let mut p = Product::new(
            id,
            format!("slug-{}", id),
            format!("SKU-{}", id),
            name,
            Money::new(price, Currency::USD),
            category,
        );
        p.tags = tags.iter().map(|t| t.to_string()).collect();
        p.inventory.in_stock = true;
        p
    }

    fn fixture() -> Vec<Product> {
        vec![
            product("p1", "Wireless Headphones", 2999, "audio", &["wireless", "audio"]),
            product("p2", "Wired Mouse", 999, "accessories", &["wired"]),
            product("p3", "Wireless Keyboard", 4999, "accessories", &["wireless"]),
            product("p4", "Phone Case", 1499, "accessories", &[]),
        ]
    }

    #[test]
    fn test_unconstrained_query_returns_everything() {
        let products = fixture();
        let response = execute(&products, &FilterSpec::new());

        assert_eq!(response.data.len(), 4);
        assert_eq!(response.pagination.total, 4);
        assert_eq!(response.pagination.limit, DEFAULT_LIMIT);
        assert_eq!(
            response.filters.available.categories,
            vec!["accessories", "audio"]
        );
    }

    #[test]
    fn test_filter_then_search() {
        let products = fixture();
        let spec = FilterSpec::new()
            .with_category("accessories")
            .with_search("wireless");
        let response = execute(&products, &spec);

        // The headphones match the query but not the category filter.
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].id.as_str(), "p3");
    }

    #[test]
    fn test_explicit_sort_overrides_relevance() {
        let products = fixture();

        // Relevance ties resolve to input order: p1 before p3.
        let by_relevance = execute(&products, &FilterSpec::new().with_search("wireless"));
        let ids: Vec<&str> = by_relevance.data.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p3"]);

        // An explicit key reorders the same result set.
        let spec = FilterSpec::new()
            .with_search("wireless")
            .with_sort(SortKey::PriceDesc);
        let by_price = execute(&products, &spec);
        let ids: Vec<&str> = by_price.data.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p3", "p1"]);
    }

    #[test]
    fn test_facets_reflect_filtered_scope_not_the_page() {
        let products = fixture();
        let spec = FilterSpec::new()
            .with_category("accessories")
            .with_page(1, 1);
        let response = execute(&products, &spec);

        // One item per page, but facets cover all three accessories.
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.pagination.total, 3);
        assert_eq!(response.filters.available.categories, vec!["accessories"]);
        assert_eq!(response.filters.available.price_range.min, 999);
        assert_eq!(response.filters.available.price_range.max, 4999);
    }

    #[test]
    fn test_blank_search_is_skipped() {
        let products = fixture();
        let spec = FilterSpec {
            search: Some("   ".to_string()),
            ..FilterSpec::new()
        };
        let response = execute(&products, &spec);
        assert_eq!(response.data.len(), 4);
    }

    #[test]
    fn test_empty_result_envelope() {
        let products = fixture();
        let spec = FilterSpec::new().with_category("nonexistent");
        let response = execute(&products, &spec);

        assert!(response.data.is_empty());
        assert_eq!(response.pagination.total, 0);
        assert_eq!(response.pagination.total_pages, 0);
        assert!(!response.pagination.has_next);
        assert!(!response.pagination.has_prev);
        assert!(response.filters.available.is_empty());
        assert_eq!(response.filters.available.price_range.min, 0);
        assert_eq!(response.filters.available.price_range.max, 0);
    }

    #[test]
    fn test_wire_page_overshoot_yields_empty_page() {
        let products = fixture();
        // The largest page number the wire can express must still resolve
        // to an empty page with valid metadata, never a panic.
        let spec = FilterSpec::from_query_string("page=9223372036854775807");
        let response = execute(&products, &spec);

        assert!(response.data.is_empty());
        assert_eq!(response.pagination.total, 4);
        assert!(!response.pagination.has_next);
        assert!(response.pagination.has_prev);
    }

    #[test]
    fn test_applied_filters_echoed_back() {
        let products = fixture();
        let spec = FilterSpec::new().with_category("audio").with_in_stock();
        let response = execute(&products, &spec);
        assert_eq!(response.filters.applied, spec);
    }

    #[test]
    fn test_pages_partition_the_result_set() {
        let products: Vec<Product> = (0..25i64)
            .map(|i| {
                product(
                    &format!("p{}", i),
                    &format!("Product {}", i),
                    1000 + i,
                    "general",
                    &[],
                )
            })
            .collect();

        let mut seen = Vec::new();
        let total_pages = execute(&products, &FilterSpec::new().with_page(1, 10))
            .pagination
            .total_pages;
        assert_eq!(total_pages, 3);

        for page in 1..=total_pages {
            let response = execute(&products, &FilterSpec::new().with_page(page, 10));
            seen.extend(response.data.into_iter().map(|p| p.id));
        }

        let expected: Vec<_> = products.iter().map(|p| p.id.clone()).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_wire_to_envelope_round_trip() {
        let products = fixture();
        let spec =
            FilterSpec::from_query_string("q=wireless&category=audio&sort=price-asc&limit=12");
        let response = execute(&products, &spec);

        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].id.as_str(), "p1");

        // The envelope serializes cleanly for an HTTP layer.
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("data").is_some());
        assert!(json.get("pagination").is_some());
        assert!(json["filters"].get("applied").is_some());
        assert!(json["filters"].get("available").is_some());
    }

    #[test]
    fn test_input_snapshot_is_never_mutated() {
        let products = fixture();
        let before = products.clone();
        let spec = FilterSpec::new()
            .with_search("wireless")
            .with_sort(SortKey::PriceDesc);
        let _ = execute(&products, &spec);
        assert_eq!(products, before);
    }
}
