//! # Repository Module
//!
//! Database repositories, each also implementing the matching store port.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CatalogService                                                         │
//! │       │  store.find_all() / store.save(product)                         │
//! │       ▼                                                                 │
//! │  impl ProductStore for ProductRepository   ──► upsert / get_by_id /     │
//! │  impl MenuStore    for MenuRepository      ──► list_all / set_displayed │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - [`ProductRepository`](product::ProductRepository) - version-checked product writes
//! - [`MenuRepository`](menu::MenuRepository) - menus with their lines priced from `products`

pub mod menu;
pub mod product;
