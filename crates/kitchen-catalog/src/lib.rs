//! # kitchen-catalog: Product Catalog Service
//!
//! Creates products, changes their prices and withdraws menus that a price
//! change leaves priced above their components.
//!
//! ## Wiring
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CatalogConfig::load() ──► DbConfig ──► kitchen_db::Database            │
//! │                                              │                          │
//! │               ┌──────────────────────────────┴───────────┐              │
//! │               ▼                                          ▼              │
//! │     ProductRepository                           MenuRepository          │
//! │     (or InMemoryProductStore)                   (or InMemoryMenuStore)  │
//! │               │                                          │              │
//! │               └──────────────┐        ┌──────────────────┘              │
//! │                              ▼        ▼                                 │
//! │                          CatalogService ◄── WordListChecker             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`service`] - create, change_price, find_all and the menu cascade
//! - [`memory`] - in-memory stores
//! - [`profanity`] - word-list profanity checker
//! - [`config`] - environment configuration
//! - [`telemetry`] - tracing subscriber setup

pub mod config;
pub mod memory;
pub mod profanity;
pub mod service;
pub mod telemetry;

pub use config::{CatalogConfig, ConfigError};
pub use memory::{InMemoryMenuStore, InMemoryProductStore};
pub use profanity::WordListChecker;
pub use service::CatalogService;
