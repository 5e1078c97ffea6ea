//! # Catalog Service
//!
//! Product creation, price changes and the menu withdrawal cascade.
//!
//! ## Price Change Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  change_price(id, draft)                                                │
//! │       │                                                                 │
//! │       ├── validate_price(draft.price) ──✗──► Validation (nothing saved) │
//! │       ├── products.find_by_id(id)     ──✗──► ProductNotFound            │
//! │       ├── products.save(with_price)   ──✗──► Store (e.g. Conflict)      │
//! │       │                                                                 │
//! │       ▼  price committed                                                │
//! │  withdraw_overpriced_menus(product)                                     │
//! │       ├── menus.find_all()            ──✗──► Cascade(LoadMenus)         │
//! │       └── for each menu using the product:                              │
//! │             evaluate_menu ──► Withdraw? ──► update_displayed(false)     │
//! │                                              ──✗──► collected, go on    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Ok(product)  or  Err(Cascade { product, hidden, failures })            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Hide, Don't Block
//! A price change is never refused because of the menus it affects. Menus
//! that end up priced above their components are hidden instead.

use std::sync::Arc;
use tracing::{debug, info, warn};

use kitchen_core::pricing::{evaluate_menu, MenuVerdict};
use kitchen_core::validation::{validate_price, validate_product_name};
use kitchen_core::{
    generate_product_id, CascadeError, CatalogError, CatalogResult, MenuRepairFailure, MenuStore,
    Product, ProductDraft, ProductStore, ProfanityChecker, StoreError, ValidationError,
};

/// The product catalog.
///
/// Holds no state of its own between calls; clones share the collaborators.
///
/// ```rust,ignore
/// let catalog = CatalogService::new(products, menus, Arc::new(WordListChecker::default()));
/// let chicken = catalog.create(ProductDraft::new("Fried Chicken", "16.00".parse()?)).await?;
/// catalog.change_price(&chicken.id, ProductDraft::price_only("18.00".parse()?)).await?;
/// ```
#[derive(Clone)]
pub struct CatalogService {
    products: Arc<dyn ProductStore>,
    menus: Arc<dyn MenuStore>,
    profanity: Arc<dyn ProfanityChecker>,
}

impl CatalogService {
    pub fn new(
        products: Arc<dyn ProductStore>,
        menus: Arc<dyn MenuStore>,
        profanity: Arc<dyn ProfanityChecker>,
    ) -> Self {
        CatalogService {
            products,
            menus,
            profanity,
        }
    }

    // =========================================================================
    // Create
    // =========================================================================

    /// Creates a product from a draft.
    ///
    /// ## Returns
    /// * `Ok(Product)` - the stored product, id generated if the draft had none
    /// * `Err(CatalogError::Validation)` - price missing/negative, name
    ///   missing/blank/profane; nothing was written
    /// * `Err(CatalogError::ProfanityCheck)` - the checker could not answer
    pub async fn create(&self, draft: ProductDraft) -> CatalogResult<Product> {
        let price = validate_price(draft.price).map_err(rejected)?;
        let name = validate_product_name(draft.name.as_deref()).map_err(rejected)?;

        if self.profanity.contains_profanity(name).await? {
            return Err(rejected(ValidationError::Profane {
                field: "name".to_string(),
            }));
        }

        let id = draft.id.clone().unwrap_or_else(generate_product_id);
        let saved = self.products.save(Product::new(id, name, price)).await?;

        info!(product_id = %saved.id, price = %saved.price, "Product created");
        Ok(saved)
    }

    // =========================================================================
    // Price Change
    // =========================================================================

    /// Changes the price of an existing product, then withdraws every
    /// displayed menu the new price leaves overpriced.
    ///
    /// Only `draft.price` is read.
    ///
    /// ## Returns
    /// * `Ok(Product)` - price stored and all affected menus repaired
    /// * `Err(CatalogError::Validation)` - price missing or negative
    /// * `Err(CatalogError::ProductNotFound)` - no product with this id
    /// * `Err(CatalogError::Store)` - the save failed (a concurrent write
    ///   shows up as `StoreError::Conflict`)
    /// * `Err(CatalogError::Cascade)` - price stored, some menus not repaired
    pub async fn change_price(&self, product_id: &str, draft: ProductDraft) -> CatalogResult<Product> {
        let price = validate_price(draft.price).map_err(rejected)?;

        let current = self
            .products
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| not_found(product_id))?;

        let saved = self
            .products
            .save(current.with_price(price))
            .await
            .map_err(|err| match err {
                StoreError::NotFound { .. } => not_found(product_id),
                other => CatalogError::Store(other),
            })?;

        info!(
            product_id = %saved.id,
            old_price = %current.price,
            price = %saved.price,
            "Product price changed"
        );

        self.withdraw_overpriced_menus(&saved).await?;
        Ok(saved)
    }

    // =========================================================================
    // Menu Cascade
    // =========================================================================

    /// Hides every displayed menu that uses `product` and is now priced above
    /// its floor. Returns the ids of the menus hidden by this pass.
    ///
    /// Hidden menus are never re-shown or rewritten, so a second pass with no
    /// price change in between does nothing. A menu that cannot be withdrawn
    /// does not stop the pass; every failure is reported in the
    /// [`CascadeError`] at the end.
    pub async fn withdraw_overpriced_menus(
        &self,
        product: &Product,
    ) -> Result<Vec<String>, CascadeError> {
        let menus = match self.menus.find_all().await {
            Ok(menus) => menus,
            Err(err) => {
                warn!(product_id = %product.id, error = %err, "Could not load menus");
                return Err(CascadeError {
                    product: product.clone(),
                    hidden: Vec::new(),
                    failures: vec![MenuRepairFailure::LoadMenus(err)],
                });
            }
        };

        let mut hidden = Vec::new();
        let mut failures = Vec::new();

        for menu in &menus {
            let verdict = evaluate_menu(menu, product);
            match verdict {
                MenuVerdict::Unaffected => continue,
                MenuVerdict::WithinFloor { floor } | MenuVerdict::AlreadyHidden { floor } => {
                    debug!(menu_id = %menu.id, price = %menu.price, %floor, ?verdict, "Menu left as is");
                }
                MenuVerdict::Withdraw { floor } => {
                    match self.menus.update_displayed(&menu.id, false).await {
                        Ok(()) => {
                            info!(
                                menu_id = %menu.id,
                                price = %menu.price,
                                %floor,
                                "Menu withdrawn: priced above its components"
                            );
                            hidden.push(menu.id.clone());
                        }
                        Err(err) => {
                            warn!(menu_id = %menu.id, error = %err, "Could not withdraw menu");
                            failures.push(MenuRepairFailure::Withdraw {
                                menu_id: menu.id.clone(),
                                source: err,
                            });
                        }
                    }
                }
            }
        }

        if failures.is_empty() {
            Ok(hidden)
        } else {
            Err(CascadeError {
                product: product.clone(),
                hidden,
                failures,
            })
        }
    }

    // =========================================================================
    // Read
    // =========================================================================

    /// All products, exactly as the store returns them.
    pub async fn find_all(&self) -> CatalogResult<Vec<Product>> {
        Ok(self.products.find_all().await?)
    }
}

fn rejected(err: ValidationError) -> CatalogError {
    warn!(error = %err, "Product rejected");
    CatalogError::Validation(err)
}

fn not_found(product_id: &str) -> CatalogError {
    warn!(product_id = %product_id, "Price change for unknown product");
    CatalogError::ProductNotFound(product_id.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
