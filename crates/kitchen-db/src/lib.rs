//! # kitchen-db: Database Layer for the Kitchen Catalog
//!
//! SQLite storage for products and menus, exposed through the
//! [`ProductStore`](kitchen_core::ProductStore) and
//! [`MenuStore`](kitchen_core::MenuStore) ports.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Kitchen Catalog Data Flow                           │
//! │                                                                         │
//! │  CatalogService::change_price                                          │
//! │       │  Arc<dyn ProductStore>, Arc<dyn MenuStore>                      │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    kitchen-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories  │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ ProductRepo    │    │  (embedded)  │  │   │
//! │  │   │ SqlitePool    │◄───│ MenuRepo       │    │ 001_init.sql │  │   │
//! │  │   └───────────────┘    └────────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file (or :memory: in tests)                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kitchen_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./kitchen.db")).await?;
//! let menus = db.menus().list_all().await?;
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::menu::MenuRepository;
pub use repository::product::ProductRepository;
