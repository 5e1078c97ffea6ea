//! # kitchen-core: Pure Catalog Logic
//!
//! This crate holds the domain model of the kitchen catalog and every rule
//! that can be decided without touching storage or the network.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Kitchen Catalog Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │           Presentation layer (outside this workspace)           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │        kitchen-catalog: CatalogService + menu cascade           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kitchen-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │   ports   │  │   │
//! │  │   │  Product  │  │   Money   │  │   floor   │  │  stores   │  │   │
//! │  │   │   Menu    │  │           │  │  checks   │  │  checker  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              kitchen-db (SQLite implementations)                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductDraft, Menu, MenuItem)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Menu floor computation and withdrawal decision
//! - [`validation`] - Product input rules
//! - [`ports`] - Collaborator traits (stores, profanity checker)
//! - [`error`] - Error taxonomy
//!
//! ## Example Usage
//!
//! ```rust
//! use kitchen_core::money::Money;
//!
//! let price = Money::from_cents(1099); // $10.99
//! let line = price.checked_multiply_quantity(2).unwrap();
//! assert_eq!(line.cents(), 2198);
//! ```

pub mod error;
pub mod money;
pub mod ports;
pub mod pricing;
pub mod types;
pub mod validation;

pub use error::{
    CascadeError, CatalogError, CatalogResult, CheckerError, ErrorKind, MenuRepairFailure,
    StoreError, ValidationError,
};
pub use money::Money;
pub use ports::{MenuStore, ProductStore, ProfanityChecker};
pub use types::*;
