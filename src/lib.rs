//! Catalog query engine.
//!
//! This crate turns a loosely-typed set of request parameters into a
//! filtered, searched, sorted, and paginated slice of a product catalog,
//! plus the facet summary a filter UI needs:
//!
//! - **Catalog**: products, inventory, ratings, and an in-memory store
//! - **Query**: filter, relevance search, sort, pagination, facets
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_query::prelude::*;
//!
//! let spec = FilterSpec::default()
//!     .with_category("electronics")
//!     .with_search("wireless")
//!     .with_sort(SortKey::PriceAsc)
//!     .with_page(1, 24);
//!
//! let response = execute(catalog.all(), &spec);
//! println!("{} of {} products", response.data.len(), response.pagination.total);
//! ```
//!
//! The engine is a pure, synchronous pipeline: every stage takes a read-only
//! product slice and returns a fresh `Vec`. It never mutates its input and
//! holds no state across calls, so concurrent requests need no coordination
//! as long as each is handed a consistent snapshot.

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod query;

pub use error::CatalogError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Inventory, Product, Rating};

    // Query pipeline
    pub use crate::query::{
        execute, FacetSummary, FilterContext, FilterSpec, PageInfo, PageResult, PriceRange,
        QueryResponse, SortKey,
    };
}
