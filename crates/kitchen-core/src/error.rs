//! # Error Types
//!
//! Error taxonomy for the catalog.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  CatalogError                                                          │
//! │  ├── Validation(ValidationError) - invalid argument, nothing written   │
//! │  ├── ProductNotFound             - unknown product id                  │
//! │  ├── Cascade(CascadeError)       - price committed, menu repair failed │
//! │  ├── Store(StoreError)           - store failure, passed through       │
//! │  └── ProfanityCheck(CheckerError)- checker failure, passed through     │
//! │                                                                         │
//! │  kitchen-db                                                            │
//! │  └── DbError ──► StoreError (at the port boundary)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. `thiserror` derives, never hand-written `Display`
//! 2. Context (ids, field names) lives in the variant
//! 3. A cascade failure is never confused with a rejection: the price change
//!    it follows has already been committed

use thiserror::Error;

use crate::types::Product;

// =============================================================================
// Catalog Error
// =============================================================================

/// Errors returned by the catalog service.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Input rejected before any write.
    #[error("Invalid argument: {0}")]
    Validation(#[from] ValidationError),

    /// The product id given to a price change does not resolve.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The price change was committed but one or more menus could not be
    /// withdrawn from display.
    #[error(transparent)]
    Cascade(#[from] CascadeError),

    /// A store failed; the error is passed through untouched.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// The profanity checker failed; treated as a hard failure.
    #[error("Profanity check failed: {0}")]
    ProfanityCheck(#[from] CheckerError),
}

/// Coarse classification of a [`CatalogError`] for callers that only need to
/// decide between "fix the input", "recheck the id", "reconcile menus" and
/// "collaborator trouble".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    CascadePartialFailure,
    Collaborator,
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Validation(_) => ErrorKind::InvalidArgument,
            CatalogError::ProductNotFound(_) => ErrorKind::NotFound,
            CatalogError::Cascade(_) => ErrorKind::CascadePartialFailure,
            CatalogError::Store(_) | CatalogError::ProfanityCheck(_) => ErrorKind::Collaborator,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors ("invalid argument").
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is absent or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// A numeric field is below zero.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// The name was flagged by the profanity checker.
    #[error("{field} contains disallowed words")]
    Profane { field: String },

    /// Text could not be parsed (e.g. a price with three decimals).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Cascade Error
// =============================================================================

/// Post-commit repair failure raised by the menu cascade.
///
/// The price in `product` is already durable. `hidden` lists the menus that
/// were withdrawn successfully; `failures` lists what could not be repaired.
/// Retrying the whole price change is safe.
#[derive(Debug, Error)]
#[error(
    "Price of product {} changed to {} but {} menu repair(s) failed",
    .product.id,
    .product.price,
    .failures.len()
)]
pub struct CascadeError {
    pub product: Product,
    pub hidden: Vec<String>,
    pub failures: Vec<MenuRepairFailure>,
}

/// One thing the cascade could not do.
#[derive(Debug, Error)]
pub enum MenuRepairFailure {
    /// Menus could not be listed, so none were evaluated.
    #[error("could not load menus: {0}")]
    LoadMenus(#[source] StoreError),

    /// A menu that needed withdrawing could not be persisted.
    #[error("could not withdraw menu {menu_id}: {source}")]
    Withdraw {
        menu_id: String,
        #[source]
        source: StoreError,
    },
}

// =============================================================================
// Collaborator Errors
// =============================================================================

/// Failures reported by a Product or Menu store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The addressed record does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// The record changed since it was read (stale version).
    #[error("{entity} {id} was modified concurrently")]
    Conflict { entity: String, id: String },

    /// The backing storage failed.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    pub fn conflict(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::Conflict {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// The profanity checker could not produce an answer.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct CheckerError(pub String);

// =============================================================================
// Result Type Alias
// =============================================================================

pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use chrono::Utc;

    fn product() -> Product {
        let now = Utc::now();
        Product {
            id: "p-1".to_string(),
            name: "Fried Chicken".to_string(),
            price: Money::from_cents(1600),
            created_at: now,
            updated_at: now,
            version: 1,
        }
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price is required");

        let err = ValidationError::Negative {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must not be negative");
    }

    #[test]
    fn test_error_kinds() {
        let err: CatalogError = ValidationError::Profane {
            field: "name".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.is_invalid_argument());

        let err = CatalogError::ProductNotFound("p-404".to_string());
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Product not found: p-404");

        let err: CatalogError = StoreError::conflict("Product", "p-1").into();
        assert_eq!(err.kind(), ErrorKind::Collaborator);

        let err: CatalogError = CheckerError("timeout".to_string()).into();
        assert_eq!(err.kind(), ErrorKind::Collaborator);
    }

    #[test]
    fn test_cascade_error_is_distinct() {
        let err: CatalogError = CascadeError {
            product: product(),
            hidden: vec![],
            failures: vec![MenuRepairFailure::Withdraw {
                menu_id: "m-1".to_string(),
                source: StoreError::Unavailable("disk full".to_string()),
            }],
        }
        .into();

        assert_eq!(err.kind(), ErrorKind::CascadePartialFailure);
        assert_eq!(
            err.to_string(),
            "Price of product p-1 changed to $16.00 but 1 menu repair(s) failed"
        );
    }
}
