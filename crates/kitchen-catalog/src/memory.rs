//! # In-Memory Stores
//!
//! Process-local [`ProductStore`] and [`MenuStore`] implementations, used by
//! tests and by callers that do not need durability.
//!
//! Both keep insertion order and follow the same rules as the SQLite
//! repositories: a save with a stale `version` is a conflict, updating a
//! missing record is not found.
//!
//! ```text
//! Arc<InMemoryProductStore> ──► tokio::sync::RwLock<Vec<Product>>
//! Arc<InMemoryMenuStore>    ──► tokio::sync::RwLock<Vec<Menu>>
//! ```

use async_trait::async_trait;
use tokio::sync::RwLock;

use kitchen_core::{Menu, MenuStore, Product, ProductStore, StoreError};

// =============================================================================
// Products
// =============================================================================

#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn save(&self, product: Product) -> Result<Product, StoreError> {
        let mut products = self.products.write().await;

        match products.iter_mut().find(|stored| stored.id == product.id) {
            Some(stored) if stored.version != product.version => {
                Err(StoreError::conflict("Product", &product.id))
            }
            Some(stored) => {
                let saved = Product {
                    version: product.version + 1,
                    ..product
                };
                *stored = saved.clone();
                Ok(saved)
            }
            None if product.version > 0 => Err(StoreError::not_found("Product", &product.id)),
            None => {
                let saved = Product {
                    version: 1,
                    ..product
                };
                products.push(saved.clone());
                Ok(saved)
            }
        }
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.products.read().await.clone())
    }
}

// =============================================================================
// Menus
// =============================================================================

/// Menus are stored as given; item prices are whatever snapshot the caller
/// inserted.
#[derive(Debug, Default)]
pub struct InMemoryMenuStore {
    menus: RwLock<Vec<Menu>>,
}

impl InMemoryMenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_menus(menus: impl IntoIterator<Item = Menu>) -> Self {
        InMemoryMenuStore {
            menus: RwLock::new(menus.into_iter().collect()),
        }
    }

    pub async fn get(&self, id: &str) -> Option<Menu> {
        self.menus.read().await.iter().find(|m| m.id == id).cloned()
    }
}

#[async_trait]
impl MenuStore for InMemoryMenuStore {
    async fn find_all(&self) -> Result<Vec<Menu>, StoreError> {
        Ok(self.menus.read().await.clone())
    }

    async fn update_displayed(&self, menu_id: &str, displayed: bool) -> Result<(), StoreError> {
        let mut menus = self.menus.write().await;
        let menu = menus
            .iter_mut()
            .find(|m| m.id == menu_id)
            .ok_or_else(|| StoreError::not_found("Menu", menu_id))?;

        menu.displayed = displayed;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use kitchen_core::{MenuItem, Money};

    #[tokio::test]
    async fn test_product_versions() {
        let store = InMemoryProductStore::new();
        let saved = store
            .save(Product::new("p-1", "Cola", Money::from_cents(200)))
            .await
            .unwrap();
        assert_eq!(saved.version, 1);

        let updated = store
            .save(saved.with_price(Money::from_cents(250)))
            .await
            .unwrap();
        assert_eq!(updated.version, 2);

        let err = store.save(saved).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict { .. }));

        let ghost = Product {
            version: 3,
            ..Product::new("ghost", "Ghost", Money::from_cents(1))
        };
        assert!(matches!(
            store.save(ghost).await.unwrap_err(),
            StoreError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_products_keep_insertion_order() {
        let store = InMemoryProductStore::new();
        for id in ["z", "a", "m"] {
            store
                .save(Product::new(id, id, Money::from_cents(1)))
                .await
                .unwrap();
        }

        let ids: Vec<_> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, ["z", "a", "m"]);
    }

    #[tokio::test]
    async fn test_menu_visibility() {
        let cola = Product::new("cola", "Cola", Money::from_cents(200));
        let store = InMemoryMenuStore::with_menus([Menu {
            id: "m-1".to_string(),
            name: "Drinks".to_string(),
            price: Money::from_cents(200),
            displayed: true,
            items: vec![MenuItem::new(&cola, 1)],
        }]);

        store.update_displayed("m-1", false).await.unwrap();
        assert!(!store.get("m-1").await.unwrap().displayed);

        let err = store.update_displayed("m-404", false).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }
}
