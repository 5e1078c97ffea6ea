//! # Collaborator Ports
//!
//! Traits the catalog service calls into. They are declared here, next to the
//! types they move, and implemented elsewhere:
//!
//! ```text
//! ┌────────────────────┬──────────────────────────┬──────────────────────────┐
//! │ Port               │ kitchen-db               │ kitchen-catalog          │
//! ├────────────────────┼──────────────────────────┼──────────────────────────┤
//! │ ProductStore       │ ProductRepository        │ InMemoryProductStore     │
//! │ MenuStore          │ MenuRepository           │ InMemoryMenuStore        │
//! │ ProfanityChecker   │ -                        │ WordListChecker          │
//! └────────────────────┴──────────────────────────┴──────────────────────────┘
//! ```
//!
//! Timeouts and retries belong to the implementations, never to the caller.

use async_trait::async_trait;

use crate::error::{CheckerError, StoreError};
use crate::types::{Menu, Product};

/// Durable keyed storage for products.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Inserts or updates by id and returns the stored entity.
    ///
    /// Updating a product whose `version` no longer matches the stored one
    /// fails with [`StoreError::Conflict`]; the returned product carries the
    /// new version.
    async fn save(&self, product: Product) -> Result<Product, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, StoreError>;

    /// All products, in store-defined order.
    async fn find_all(&self) -> Result<Vec<Product>, StoreError>;
}

/// Durable storage for menus, read-only from the catalog except for the
/// `displayed` flag.
#[async_trait]
pub trait MenuStore: Send + Sync {
    /// All menus with their items. Each item must carry a product price good
    /// enough to compute the menu floor without further lookups.
    async fn find_all(&self) -> Result<Vec<Menu>, StoreError>;

    async fn update_displayed(&self, menu_id: &str, displayed: bool) -> Result<(), StoreError>;
}

/// Decides whether text contains disallowed content.
#[async_trait]
pub trait ProfanityChecker: Send + Sync {
    async fn contains_profanity(&self, text: &str) -> Result<bool, CheckerError>;
}
