//! Free-text relevance search stage.
//!
//! The scorer is a linear pass over the product slice, not an inverted
//! index: each product is scored against the lower-cased query with a
//! table of weighted rules, products scoring zero are discarded, and the
//! survivors are ordered by descending score. Ties keep their original
//! relative order (stable sort), so ranking is deterministic.

use crate::catalog::Product;

/// Name exactly equals the query.
const NAME_EXACT: i64 = 100;
/// Name contains the query (not exact).
const NAME_CONTAINS: i64 = 50;
/// Extra points when a containing name also starts with the query.
const NAME_PREFIX: i64 = 10;
/// Description contains the query.
const DESCRIPTION_CONTAINS: i64 = 20;
/// Long description contains the query.
const LONG_DESCRIPTION_CONTAINS: i64 = 10;
/// A tag exactly equals the query (per tag).
const TAG_EXACT: i64 = 30;
/// A tag contains the query without equaling it (per tag).
const TAG_CONTAINS: i64 = 10;
/// Category contains the query.
const CATEGORY_CONTAINS: i64 = 5;
/// Bonus for featured products that already matched on text.
const FEATURED_BONUS: i64 = 3;
/// Bonus for in-stock products that already matched on text.
const IN_STOCK_BONUS: i64 = 3;

/// A text scoring rule: points contributed by one product field.
type TextRule = fn(&Product, &str) -> i64;

/// The scoring table. Contributions are additive and unbounded; a product
/// can accumulate several bonuses for the same query.
const TEXT_RULES: &[TextRule] = &[
    name_score,
    description_score,
    long_description_score,
    tag_score,
    category_score,
];

fn name_score(product: &Product, query: &str) -> i64 {
    let name = product.name.to_lowercase();
    if name == query {
        NAME_EXACT
    } else if name.contains(query) {
        let prefix = if name.starts_with(query) {
            NAME_PREFIX
        } else {
            0
        };
        NAME_CONTAINS + prefix
    } else {
        0
    }
}

fn description_score(product: &Product, query: &str) -> i64 {
    match &product.description {
        Some(d) if d.to_lowercase().contains(query) => DESCRIPTION_CONTAINS,
        _ => 0,
    }
}

fn long_description_score(product: &Product, query: &str) -> i64 {
    match &product.long_description {
        Some(d) if d.to_lowercase().contains(query) => LONG_DESCRIPTION_CONTAINS,
        _ => 0,
    }
}

fn tag_score(product: &Product, query: &str) -> i64 {
    product
        .tags
        .iter()
        .map(|tag| {
            let tag = tag.to_lowercase();
            if tag == query {
                TAG_EXACT
            } else if tag.contains(query) {
                TAG_CONTAINS
            } else {
                0
            }
        })
        .sum()
}

fn category_score(product: &Product, query: &str) -> i64 {
    if product.category.to_lowercase().contains(query) {
        CATEGORY_CONTAINS
    } else {
        0
    }
}

/// Compute the relevance score of a product against a lower-cased query.
///
/// The `featured` and `in_stock` bonuses only apply to products that
/// already matched on a text field; without that gate every in-stock
/// product would match every query.
fn relevance(product: &Product, query: &str) -> i64 {
    let text: i64 = TEXT_RULES.iter().map(|rule| rule(product, query)).sum();
    if text == 0 {
        return 0;
    }

    let mut score = text;
    if product.featured {
        score += FEATURED_BONUS;
    }
    if product.inventory.in_stock {
        score += IN_STOCK_BONUS;
    }
    score
}

/// Score products against a free-text query and return matches in
/// descending relevance order.
///
/// A query that is empty after trimming passes the input through
/// unchanged. Scores are used only for ordering and never exposed.
pub fn rank(products: &[Product], query: &str) -> Vec<Product> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return products.to_vec();
    }

    let mut scored: Vec<(i64, &Product)> = products
        .iter()
        .filter_map(|p| {
            let score = relevance(p, &query);
            (score > 0).then_some((score, p))
        })
        .collect();

    // Stable: equal scores keep their pre-sort relative order.
    scored.sort_by_key(|&(score, _)| std::cmp::Reverse(score));

    scored.into_iter().map(|(_, p)| p.clone()).collect()
}
