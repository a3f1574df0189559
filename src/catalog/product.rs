//! Product record types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Inventory state for a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Inventory {
    /// Whether the product is currently purchasable.
    pub in_stock: bool,
    /// Total quantity on hand.
    pub quantity: i64,
    /// Threshold below which stock is considered low.
    pub low_stock_threshold: i64,
    /// Quantity reserved for pending orders.
    pub reserved_quantity: i64,
}

impl Inventory {
    /// Create an in-stock inventory record.
    pub fn new(quantity: i64) -> Self {
        Self {
            in_stock: quantity > 0,
            quantity,
            low_stock_threshold: 0,
            reserved_quantity: 0,
        }
    }

    /// Quantity available for sale (total minus reserved).
    pub fn available(&self) -> i64 {
        self.quantity - self.reserved_quantity
    }

    /// Check if stock is at or below the low-stock threshold.
    pub fn is_low_stock(&self) -> bool {
        self.low_stock_threshold > 0 && self.available() <= self.low_stock_threshold
    }
}

/// Aggregate customer rating for a product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Rating {
    /// Average rating, 0.0 to 5.0.
    pub average: f64,
    /// Number of ratings contributing to the average.
    pub count: i64,
}

/// A product in the catalog.
///
/// Products are immutable inputs to the query engine: constructed once,
/// never mutated by any pipeline stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Stock keeping unit (unique).
    pub sku: String,
    /// Product name.
    pub name: String,
    /// Short description for listings.
    pub description: Option<String>,
    /// Full description (may contain HTML/markdown).
    pub long_description: Option<String>,
    /// Current price.
    pub price: Money,
    /// Original price before markdown, for showing discounts.
    pub original_price: Option<Money>,
    /// Category this product belongs to.
    pub category: String,
    /// Tags for filtering/search. Match order-irrelevant, display order preserved.
    pub tags: Vec<String>,
    /// Inventory state.
    pub inventory: Inventory,
    /// Aggregate customer rating, if any ratings exist.
    pub rating: Option<Rating>,
    /// Whether this product is featured.
    pub featured: bool,
    /// Whether this product is flagged as new.
    pub is_new: bool,
    /// Free-form attribute map (e.g., color, material).
    pub attributes: serde_json::Map<String, serde_json::Value>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
    /// Unix timestamp of publication, if published.
    pub published_at: Option<i64>,
}

impl Product {
    /// Create a new product with the required identity fields.
    pub fn new(
        id: impl Into<ProductId>,
        slug: impl Into<String>,
        sku: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            sku: sku.into(),
            name: name.into(),
            description: None,
            long_description: None,
            price,
            original_price: None,
            category: category.into(),
            tags: Vec::new(),
            inventory: Inventory::default(),
            rating: None,
            featured: false,
            is_new: false,
            attributes: serde_json::Map::new(),
            created_at: 0,
            updated_at: 0,
            published_at: None,
        }
    }

    /// Check if this product is on sale.
    ///
    /// A discount is recognized only when the original price is strictly
    /// greater than the current price.
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|orig| orig.amount_minor > self.price.amount_minor)
            .unwrap_or(false)
    }

    /// Calculate the discount percentage if on sale.
    pub fn discount_percentage(&self) -> Option<f64> {
        self.original_price.and_then(|orig| {
            if orig.amount_minor > self.price.amount_minor {
                let savings = orig.amount_minor - self.price.amount_minor;
                Some((savings as f64 / orig.amount_minor as f64) * 100.0)
            } else {
                None
            }
        })
    }

    /// Add a tag to this product.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }
}
