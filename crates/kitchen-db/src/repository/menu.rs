//! # Menu Repository
//!
//! Menus and their lines. Lines are read back joined with `products`, so each
//! [`MenuItem::product_price`] is the price currently stored for the product.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use std::collections::HashMap;
use tracing::debug;

use crate::error::{DbError, DbResult};
use kitchen_core::{Menu, MenuItem, MenuStore, Money, StoreError};

const ENTITY: &str = "Menu";

#[derive(Debug, sqlx::FromRow)]
struct MenuRow {
    id: String,
    name: String,
    price_cents: i64,
    displayed: bool,
}

#[derive(Debug, sqlx::FromRow)]
struct MenuItemRow {
    menu_id: String,
    product_id: String,
    product_price_cents: i64,
    quantity: i64,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        MenuItem {
            product_id: row.product_id,
            product_price: Money::from_cents(row.product_price_cents),
            quantity: row.quantity,
        }
    }
}

impl MenuRow {
    fn into_menu(self, items: Vec<MenuItem>) -> Menu {
        Menu {
            id: self.id,
            name: self.name,
            price: Money::from_cents(self.price_cents),
            displayed: self.displayed,
            items,
        }
    }
}

/// Repository for menu database operations.
#[derive(Debug, Clone)]
pub struct MenuRepository {
    pool: SqlitePool,
}

impl MenuRepository {
    pub fn new(pool: SqlitePool) -> Self {
        MenuRepository { pool }
    }

    /// Inserts a menu with its lines in one transaction.
    ///
    /// Line order is kept through the `position` column. Every line must name
    /// an existing product (`DbError::ForeignKeyViolation` otherwise).
    pub async fn insert(&self, menu: &Menu) -> DbResult<()> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO menus (id, name, price_cents, displayed, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?5)
            "#,
        )
        .bind(&menu.id)
        .bind(&menu.name)
        .bind(menu.price.cents())
        .bind(menu.displayed)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        for (position, item) in menu.items.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO menu_items (menu_id, product_id, quantity, position)
                VALUES (?1, ?2, ?3, ?4)
                "#,
            )
            .bind(&menu.id)
            .bind(&item.product_id)
            .bind(item.quantity)
            .bind(position as i64)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        debug!(menu_id = %menu.id, items = menu.items.len(), "Inserted menu");
        Ok(())
    }

    /// Lists every menu in insertion order, lines in position order.
    pub async fn list_all(&self) -> DbResult<Vec<Menu>> {
        // Single read transaction so menus and lines come from one snapshot.
        let mut tx = self.pool.begin().await?;

        let menus = sqlx::query_as::<_, MenuRow>(
            r#"
            SELECT id, name, price_cents, displayed
            FROM menus
            ORDER BY rowid
            "#,
        )
        .fetch_all(&mut *tx)
        .await?;

        let items = sqlx::query_as::<_, MenuItemRow>(
            r#"
            SELECT mi.menu_id, mi.product_id, p.price_cents AS product_price_cents, mi.quantity
            FROM menu_items mi
            JOIN products p ON p.id = mi.product_id
            ORDER BY mi.menu_id, mi.position
            "#,
        )
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        let mut lines: HashMap<String, Vec<MenuItem>> = HashMap::new();
        for row in items {
            lines.entry(row.menu_id.clone()).or_default().push(row.into());
        }

        debug!(count = menus.len(), "Listed menus");

        Ok(menus
            .into_iter()
            .map(|row| {
                let items = lines.remove(&row.id).unwrap_or_default();
                row.into_menu(items)
            })
            .collect())
    }

    /// Gets a menu with its lines.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Menu>> {
        let mut tx = self.pool.begin().await?;

        let menu = sqlx::query_as::<_, MenuRow>(
            r#"
            SELECT id, name, price_cents, displayed
            FROM menus
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(menu) = menu else {
            tx.commit().await?;
            return Ok(None);
        };

        let items = sqlx::query_as::<_, MenuItemRow>(
            r#"
            SELECT mi.menu_id, mi.product_id, p.price_cents AS product_price_cents, mi.quantity
            FROM menu_items mi
            JOIN products p ON p.id = mi.product_id
            WHERE mi.menu_id = ?1
            ORDER BY mi.position
            "#,
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(
            menu.into_menu(items.into_iter().map(MenuItem::from).collect()),
        ))
    }

    /// Sets the `displayed` flag of one menu.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - no menu with this id
    pub async fn set_displayed(&self, id: &str, displayed: bool) -> DbResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE menus SET displayed = ?2, updated_at = ?3
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(displayed)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(ENTITY, id));
        }

        debug!(menu_id = %id, displayed, "Updated menu visibility");
        Ok(())
    }

    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM menus")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Port Implementation
// =============================================================================

#[async_trait]
impl MenuStore for MenuRepository {
    async fn find_all(&self) -> Result<Vec<Menu>, StoreError> {
        Ok(self.list_all().await?)
    }

    async fn update_displayed(&self, menu_id: &str, displayed: bool) -> Result<(), StoreError> {
        Ok(self.set_displayed(menu_id, displayed).await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use kitchen_core::Product;

    async fn setup() -> (Database, Product, Product) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let products = db.products();

        let chicken = products
            .upsert(&Product::new("chicken", "Fried Chicken", Money::from_cents(1600)))
            .await
            .unwrap();
        let cola = products
            .upsert(&Product::new("cola", "Cola", Money::from_cents(200)))
            .await
            .unwrap();

        (db, chicken, cola)
    }

    fn menu(id: &str, price: i64, items: Vec<MenuItem>) -> Menu {
        Menu {
            id: id.to_string(),
            name: format!("{id} set"),
            price: Money::from_cents(price),
            displayed: true,
            items,
        }
    }

    #[tokio::test]
    async fn test_insert_and_list_keeps_line_order() {
        let (db, chicken, cola) = setup().await;
        let repo = db.menus();

        repo.insert(&menu(
            "combo",
            3000,
            vec![MenuItem::new(&cola, 1), MenuItem::new(&chicken, 2)],
        ))
        .await
        .unwrap();
        repo.insert(&menu("solo", 1500, vec![MenuItem::new(&chicken, 1)]))
            .await
            .unwrap();

        let menus = repo.list_all().await.unwrap();
        assert_eq!(menus.len(), 2);
        assert_eq!(menus[0].id, "combo");
        assert_eq!(menus[0].items[0].product_id, "cola");
        assert_eq!(menus[0].items[1].quantity, 2);
        assert_eq!(menus[1].items.len(), 1);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_lines_carry_current_product_price() {
        let (db, chicken, _) = setup().await;
        let repo = db.menus();
        repo.insert(&menu("solo", 1500, vec![MenuItem::new(&chicken, 1)]))
            .await
            .unwrap();

        db.products()
            .upsert(&chicken.with_price(Money::from_cents(900)))
            .await
            .unwrap();

        let solo = repo.get_by_id("solo").await.unwrap().unwrap();
        assert_eq!(solo.items[0].product_price, Money::from_cents(900));
    }

    #[tokio::test]
    async fn test_set_displayed() {
        let (db, chicken, _) = setup().await;
        let repo = db.menus();
        repo.insert(&menu("solo", 1500, vec![MenuItem::new(&chicken, 1)]))
            .await
            .unwrap();

        repo.set_displayed("solo", false).await.unwrap();
        assert!(!repo.get_by_id("solo").await.unwrap().unwrap().displayed);

        let err = repo.set_displayed("missing", false).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_line_with_unknown_product_is_rejected() {
        let (db, chicken, _) = setup().await;
        let repo = db.menus();
        let ghost = Product::new("ghost", "Ghost", Money::from_cents(1));

        let err = repo
            .insert(&menu(
                "broken",
                100,
                vec![MenuItem::new(&chicken, 1), MenuItem::new(&ghost, 1)],
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));

        // The menu row was rolled back with its lines.
        assert!(repo.get_by_id("broken").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_store_port_reports_missing_menu() {
        let (db, _, _) = setup().await;
        let repo = db.menus();

        let err = MenuStore::update_displayed(&repo, "missing", false)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
        assert!(MenuStore::find_all(&repo).await.unwrap().is_empty());
    }
}
