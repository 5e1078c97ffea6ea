//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Optimistic Versioning
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Concurrent price changes                             │
//! │                                                                         │
//! │  Caller A reads product (version 3)     Caller B reads product (v3)    │
//! │       │                                        │                        │
//! │       ▼                                        │                        │
//! │  UPDATE ... SET version = 4                    │                        │
//! │  WHERE id = ? AND version = 3   ✓ 1 row        │                        │
//! │                                                ▼                        │
//! │                               UPDATE ... WHERE version = 3  ✗ 0 rows   │
//! │                                                │                        │
//! │                                                ▼                        │
//! │                               DbError::Conflict (never a blind write)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use kitchen_core::{Money, Product, ProductStore, StoreError};

const ENTITY: &str = "Product";

/// Row shape of the `products` table.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: String,
    name: String,
    price_cents: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    version: i64,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            price: Money::from_cents(row.price_cents),
            created_at: row.created_at,
            updated_at: row.updated_at,
            version: row.version,
        }
    }
}

/// Repository for product database operations.
///
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
/// let saved = repo.upsert(&product).await?;
/// let all = repo.list_all().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts or updates a product by id.
    ///
    /// ## Returns
    /// * `Ok(Product)` - stored product with its new `version`
    /// * `Err(DbError::Conflict)` - the stored version differs from `product.version`
    /// * `Err(DbError::NotFound)` - a previously saved product (version > 0) is gone
    pub async fn upsert(&self, product: &Product) -> DbResult<Product> {
        let mut tx = self.pool.begin().await?;

        let stored_version: Option<i64> =
            sqlx::query_scalar("SELECT version FROM products WHERE id = ?1")
                .bind(&product.id)
                .fetch_optional(&mut *tx)
                .await?;

        let saved = match stored_version {
            None if product.version > 0 => {
                return Err(DbError::not_found(ENTITY, &product.id));
            }
            None => {
                debug!(id = %product.id, "Inserting product");

                sqlx::query(
                    r#"
                    INSERT INTO products (id, name, price_cents, created_at, updated_at, version)
                    VALUES (?1, ?2, ?3, ?4, ?5, 1)
                    "#,
                )
                .bind(&product.id)
                .bind(&product.name)
                .bind(product.price.cents())
                .bind(product.created_at)
                .bind(product.updated_at)
                .execute(&mut *tx)
                .await?;

                Product {
                    version: 1,
                    ..product.clone()
                }
            }
            Some(stored) if stored != product.version => {
                debug!(id = %product.id, stored, given = product.version, "Stale product version");
                return Err(DbError::conflict(ENTITY, &product.id));
            }
            Some(_) => {
                debug!(id = %product.id, version = product.version, "Updating product");

                let result = sqlx::query(
                    r#"
                    UPDATE products SET
                        name = ?2,
                        price_cents = ?3,
                        updated_at = ?4,
                        version = version + 1
                    WHERE id = ?1 AND version = ?5
                    "#,
                )
                .bind(&product.id)
                .bind(&product.name)
                .bind(product.price.cents())
                .bind(product.updated_at)
                .bind(product.version)
                .execute(&mut *tx)
                .await?;

                if result.rows_affected() == 0 {
                    return Err(DbError::conflict(ENTITY, &product.id));
                }

                Product {
                    version: product.version + 1,
                    ..product.clone()
                }
            }
        };

        tx.commit().await?;
        Ok(saved)
    }

    /// Gets a product by its id.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, price_cents, created_at, updated_at, version
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Product::from))
    }

    /// Lists every product in insertion order.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, price_cents, created_at, updated_at, version
            FROM products
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Listed products");
        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Counts products (for diagnostics and the seed tool).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Port Implementation
// =============================================================================

#[async_trait]
impl ProductStore for ProductRepository {
    async fn save(&self, product: Product) -> Result<Product, StoreError> {
        Ok(self.upsert(&product).await?)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
        Ok(self.get_by_id(id).await?)
    }

    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.list_all().await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
