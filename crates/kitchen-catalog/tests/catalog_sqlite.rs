//! End-to-end catalog checks over the SQLite repositories.

use std::sync::Arc;

use kitchen_catalog::{CatalogService, WordListChecker};
use kitchen_core::{CatalogError, ErrorKind, Menu, MenuItem, Money, Product, ProductDraft, StoreError};
use kitchen_db::{Database, DbConfig};

async fn setup() -> (Database, CatalogService) {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let catalog = CatalogService::new(
        Arc::new(db.products()),
        Arc::new(db.menus()),
        Arc::new(WordListChecker::default()),
    );
    (db, catalog)
}

async fn add_menu(db: &Database, id: &str, cents: i64, items: Vec<MenuItem>) {
    db.menus()
        .insert(&Menu {
            id: id.to_string(),
            name: id.to_string(),
            price: Money::from_cents(cents),
            displayed: true,
            items,
        })
        .await
        .unwrap();
}

async fn create(catalog: &CatalogService, name: &str, price: &str) -> Product {
    catalog
        .create(ProductDraft::new(name, price.parse().unwrap()))
        .await
        .unwrap()
}

#[tokio::test]
async fn price_cut_withdraws_only_overpriced_menu() {
    let (db, catalog) = setup().await;
    let chicken = create(&catalog, "Fried Chicken", "16.00").await;
    let cola = create(&catalog, "Cola", "2.00").await;

    add_menu(
        &db,
        "bucket",
        3000,
        vec![MenuItem::new(&chicken, 2), MenuItem::new(&cola, 1)],
    )
    .await;
    add_menu(&db, "solo", 1500, vec![MenuItem::new(&chicken, 1)]).await;

    // bucket floor: 2 × 14.00 + 2.00 = 30.00, solo floor: 14.00 < 15.00
    let changed = catalog
        .change_price(&chicken.id, ProductDraft::price_only("14.00".parse().unwrap()))
        .await
        .unwrap();
    assert_eq!(changed.price, Money::from_cents(1400));

    let menus = db.menus();
    assert!(menus.get_by_id("bucket").await.unwrap().unwrap().displayed);
    assert!(!menus.get_by_id("solo").await.unwrap().unwrap().displayed);

    let stored = db.products().get_by_id(&chicken.id).await.unwrap().unwrap();
    assert_eq!(stored.price, Money::from_cents(1400));
}

#[tokio::test]
async fn repeated_price_change_is_safe() {
    let (db, catalog) = setup().await;
    let chicken = create(&catalog, "Fried Chicken", "16.00").await;
    add_menu(&db, "solo", 1500, vec![MenuItem::new(&chicken, 1)]).await;

    for _ in 0..2 {
        catalog
            .change_price(&chicken.id, ProductDraft::price_only(Money::from_cents(1000)))
            .await
            .unwrap();
    }

    let solo = db.menus().get_by_id("solo").await.unwrap().unwrap();
    assert!(!solo.displayed);

    // Raising the price again does not bring the menu back.
    catalog
        .change_price(&chicken.id, ProductDraft::price_only(Money::from_cents(9000)))
        .await
        .unwrap();
    assert!(!db.menus().get_by_id("solo").await.unwrap().unwrap().displayed);
}

#[tokio::test]
async fn unknown_product_and_invalid_price() {
    let (db, catalog) = setup().await;

    let err = catalog
        .change_price("p-404", ProductDraft::price_only(Money::from_cents(100)))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = catalog
        .create(ProductDraft::new("Cola", Money::from_cents(-1)))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    assert_eq!(db.products().count().await.unwrap(), 0);
}

#[tokio::test]
async fn duplicate_id_is_a_conflict() {
    let (_db, catalog) = setup().await;
    let draft = ProductDraft {
        id: Some("cola".to_string()),
        ..ProductDraft::new("Cola", Money::from_cents(200))
    };

    catalog.create(draft.clone()).await.unwrap();
    let err = catalog.create(draft).await.unwrap_err();

    assert!(matches!(
        err,
        CatalogError::Store(StoreError::Conflict { .. })
    ));
}

#[tokio::test]
async fn find_all_lists_products_in_creation_order() {
    let (_db, catalog) = setup().await;
    for name in ["Onion Rings", "Apple Pie", "Cola"] {
        create(&catalog, name, "3.50").await;
    }

    let names: Vec<String> = catalog
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, ["Onion Rings", "Apple Pie", "Cola"]);
}

#[tokio::test]
async fn closed_database_surfaces_store_errors() {
    let (db, catalog) = setup().await;
    let chicken = create(&catalog, "Fried Chicken", "16.00").await;
    db.close().await;

    let err = catalog
        .change_price(&chicken.id, ProductDraft::price_only(Money::from_cents(1000)))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Collaborator);
}
