//! # Domain Types
//!
//! Core domain types of the kitchen catalog.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐                 ┌─────────────────┐               │
//! │  │    Product      │                 │      Menu       │               │
//! │  │  ─────────────  │                 │  ─────────────  │               │
//! │  │  id (UUID)      │◄──product_id────│  id             │               │
//! │  │  name           │                 │  name, price    │               │
//! │  │  price (Money)  │                 │  displayed      │               │
//! │  │  version        │                 │  items[] ───────┼──► MenuItem   │
//! │  └─────────────────┘                 └─────────────────┘               │
//! │                                                                         │
//! │  ProductDraft: caller-supplied candidate, every field optional          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A product never points at the menus that use it; the only link is the
//! `product_id` on each [`MenuItem`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4 when generated). Immutable.
    pub id: String,

    /// Display name, checked for profanity at creation.
    pub name: String,

    /// Current price, never negative once stored.
    pub price: Money,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,

    /// Write counter owned by the store. A save carrying a stale version is
    /// rejected as a conflict.
    pub version: i64,
}

impl Product {
    /// Builds a fresh, never-saved product (`version` 0).
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        let now = Utc::now();
        Product {
            id: id.into(),
            name: name.into(),
            price,
            created_at: now,
            updated_at: now,
            version: 0,
        }
    }

    /// Returns a copy carrying `price`, touching `updated_at`.
    pub fn with_price(&self, price: Money) -> Self {
        Product {
            price,
            updated_at: Utc::now(),
            ..self.clone()
        }
    }
}

/// Generates a new product id.
pub fn generate_product_id() -> String {
    Uuid::new_v4().to_string()
}

/// Candidate product sent by a caller.
///
/// Every field is optional so that absence can be reported as an invalid
/// argument instead of being lost at deserialization time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductDraft {
    pub id: Option<String>,
    pub name: Option<String>,
    pub price: Option<Money>,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        ProductDraft {
            id: None,
            name: Some(name.into()),
            price: Some(price),
        }
    }

    /// A draft that only carries a price, as sent for a price change.
    pub fn price_only(price: Money) -> Self {
        ProductDraft {
            price: Some(price),
            ..Default::default()
        }
    }
}

// =============================================================================
// Menu
// =============================================================================

/// A fixed-price bundle of products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Menu {
    pub id: String,
    pub name: String,
    pub price: Money,

    /// Visibility in customer-facing listings. The catalog only ever turns
    /// this off.
    pub displayed: bool,

    pub items: Vec<MenuItem>,
}

impl Menu {
    /// Whether any line of this menu uses `product_id`.
    pub fn references(&self, product_id: &str) -> bool {
        self.items.iter().any(|item| item.product_id == product_id)
    }
}

/// One line of a menu: a product and how many of it.
///
/// `product_price` is a denormalized copy of the product's price and may be
/// stale until re-resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MenuItem {
    pub product_id: String,
    pub product_price: Money,
    /// Always >= 1.
    pub quantity: i64,
}

impl MenuItem {
    pub fn new(product: &Product, quantity: i64) -> Self {
        MenuItem {
            product_id: product.id.clone(),
            product_price: product.price,
            quantity,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
