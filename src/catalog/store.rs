//! In-memory catalog store.
//!
//! Owns the full product collection and maintains id/slug indexes for
//! point lookups. The store only hands out read-only views; the query
//! pipeline receives the product slice as an immutable snapshot.

use crate::catalog::Product;
use crate::error::CatalogError;
use crate::ids::ProductId;
use std::collections::HashMap;

/// The full in-memory product collection with lookup indexes.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    by_id: HashMap<ProductId, usize>,
    by_slug: HashMap<String, usize>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a product collection.
    ///
    /// Fails if two products share an id or a slug.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for product in products {
            catalog.insert(product)?;
        }
        tracing::debug!(count = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Build a catalog from a JSON array of products (e.g., a seed file).
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::from_products(products)
    }

    /// Insert a product, rejecting duplicate ids and slugs.
    pub fn insert(&mut self, product: Product) -> Result<(), CatalogError> {
        if self.by_id.contains_key(&product.id) {
            return Err(CatalogError::DuplicateId(product.id.as_str().to_string()));
        }
        if self.by_slug.contains_key(&product.slug) {
            return Err(CatalogError::DuplicateSlug(product.slug.clone()));
        }
        let index = self.products.len();
        self.by_id.insert(product.id.clone(), index);
        self.by_slug.insert(product.slug.clone(), index);
        self.products.push(product);
        Ok(())
    }

    /// All products, in insertion order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn by_id(&self, id: &ProductId) -> Option<&Product> {
        self.by_id.get(id).map(|&i| &self.products[i])
    }

    /// Look up a product by slug.
    pub fn by_slug(&self, slug: &str) -> Option<&Product> {
        self.by_slug.get(slug).map(|&i| &self.products[i])
    }

    /// Look up a product by id, treating a miss as an error.
    pub fn get(&self, id: &ProductId) -> Result<&Product, CatalogError> {
        self.by_id(id)
            .ok_or_else(|| CatalogError::ProductNotFound(id.as_str().to_string()))
    }

    /// Look up a product by slug, treating a miss as an error.
    pub fn get_by_slug(&self, slug: &str) -> Result<&Product, CatalogError> {
        self.by_slug(slug)
            .ok_or_else(|| CatalogError::SlugNotFound(slug.to_string()))
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn product(id: &str, slug: &str) -> Product {
        Product::new(
            id,
            slug,
            format!("SKU-{}", id),
            "Product",
            Money::new(1000, Currency::USD),
            "general",
        )
    }

    #[test]
    fn test_insert_and_lookup() {
        let catalog = Catalog::from_products(vec![
            product("p1", "first"),
            product("p2", "second"),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.by_id(&"p1".into()).unwrap().slug, "first");
        assert_eq!(catalog.by_slug("second").unwrap().id.as_str(), "p2");
        assert!(catalog.by_id(&"p3".into()).is_none());
        assert!(catalog.by_slug("missing").is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut catalog = Catalog::new();
        catalog.insert(product("p1", "first")).unwrap();

        let err = catalog.insert(product("p1", "other")).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(_)));
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let mut catalog = Catalog::new();
        catalog.insert(product("p1", "first")).unwrap();

        let err = catalog.insert(product("p2", "first")).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateSlug(_)));
    }

    #[test]
    fn test_get_miss_is_error() {
        let catalog = Catalog::new();
        let err = catalog.get(&"nope".into()).unwrap_err();
        assert!(matches!(err, CatalogError::ProductNotFound(_)));
    }

    #[test]
    fn test_get_by_slug() {
        let catalog = Catalog::from_products(vec![product("p1", "first")]).unwrap();
        assert_eq!(catalog.get_by_slug("first").unwrap().id.as_str(), "p1");

        let err = catalog.get_by_slug("missing").unwrap_err();
        assert!(matches!(err, CatalogError::SlugNotFound(_)));
    }

    #[test]
    fn test_from_json() {
        let products = vec![product("p1", "first"), product("p2", "second")];
        let json = serde_json::to_string(&products).unwrap();

        let catalog = Catalog::from_json(&json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.by_slug("second").unwrap().id.as_str(), "p2");
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let err = Catalog::from_json("not json").unwrap_err();
        assert!(matches!(err, CatalogError::SerializationError(_)));
    }

    #[test]
    fn test_all_preserves_insertion_order() {
        let catalog = Catalog::from_products(vec![
            product("b", "b"),
            product("a", "a"),
            product("c", "c"),
        ])
        .unwrap();

        let ids: Vec<&str> = catalog.all().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }
}
