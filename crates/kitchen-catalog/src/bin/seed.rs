//! # Seed Data Generator
//!
//! Populates the database with a small demo catalog and shows the menu
//! cascade in action.
//!
//! ## Usage
//! ```bash
//! # Seed ./kitchen_dev.db (or $KITCHEN_DATABASE_PATH)
//! cargo run -p kitchen-catalog --bin seed
//!
//! # Specify database path
//! cargo run -p kitchen-catalog --bin seed -- --db ./data/kitchen.db
//! ```
//!
//! ## What It Does
//! 1. Creates products through [`CatalogService::create`], so validation and
//!    the profanity check apply
//! 2. Inserts menus built from those products
//! 3. Cuts the price of one product and reports which menus were withdrawn

use std::env;
use std::sync::Arc;

use kitchen_catalog::{telemetry, CatalogConfig, CatalogService, WordListChecker};
use kitchen_core::{CatalogError, Menu, MenuItem, Money, Product, ProductDraft};
use kitchen_db::Database;

/// (name, price in cents)
const PRODUCTS: &[(&str, i64)] = &[
    ("Fried Chicken", 1600),
    ("Cheeseburger", 1250),
    ("French Fries", 450),
    ("Onion Rings", 500),
    ("Cola", 250),
    ("Lemonade", 300),
    ("Apple Pie", 400),
];

/// (menu name, menu price in cents, [(product index, quantity)])
const MENUS: &[(&str, i64, &[(usize, i64)])] = &[
    ("Chicken Bucket", 3600, &[(0, 2), (2, 1), (4, 1)]),
    ("Burger Combo", 1900, &[(1, 1), (2, 1), (4, 1)]),
    ("Chicken Solo", 1500, &[(0, 1)]),
    ("Sweet Tooth", 650, &[(6, 1), (5, 1)]),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init();

    let mut config = CatalogConfig::load()?;

    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    config.database_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Kitchen Catalog Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: $KITCHEN_DATABASE_PATH or ./kitchen_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Kitchen Catalog Seed Data Generator");
    println!("=====================================");
    println!("Database: {}", config.database_path);
    println!();

    let db = Database::new(config.db_config()).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let catalog = CatalogService::new(
        Arc::new(db.products()),
        Arc::new(db.menus()),
        Arc::new(WordListChecker::new(&config.profanity_words)),
    );

    // Products
    println!();
    println!("Creating products...");

    let mut products: Vec<Product> = Vec::with_capacity(PRODUCTS.len());
    for (name, cents) in PRODUCTS {
        let product = catalog
            .create(ProductDraft::new(*name, Money::from_cents(*cents)))
            .await?;
        println!("  {:<16} {}", product.name, product.price);
        products.push(product);
    }

    // The profanity check rejects this one.
    match catalog
        .create(ProductDraft::new("Damn Good Wings", Money::from_cents(900)))
        .await
    {
        Err(err) => println!("  rejected: {}", err),
        Ok(product) => println!("  accepted {} (no matching word configured)", product.name),
    }

    // Menus
    println!();
    println!("Creating menus...");

    let menu_repo = db.menus();
    for (index, (name, cents, lines)) in MENUS.iter().enumerate() {
        let menu = Menu {
            id: format!("menu-{:02}", index + 1),
            name: name.to_string(),
            price: Money::from_cents(*cents),
            displayed: true,
            items: lines
                .iter()
                .map(|(product, quantity)| MenuItem::new(&products[*product], *quantity))
                .collect(),
        };
        menu_repo.insert(&menu).await?;
        println!("  {:<16} {}", menu.name, menu.price);
    }

    // Price change
    let chicken = &products[0];
    let new_price = Money::from_cents(700);

    println!();
    println!(
        "Changing price of {} from {} to {}...",
        chicken.name, chicken.price, new_price
    );

    match catalog
        .change_price(&chicken.id, ProductDraft::price_only(new_price))
        .await
    {
        Ok(product) => println!("✓ {} now costs {}", product.name, product.price),
        Err(CatalogError::Cascade(err)) => {
            println!("⚠ {}", err);
            for failure in &err.failures {
                println!("    {}", failure);
            }
        }
        Err(err) => return Err(err.into()),
    }

    println!();
    println!("Menus:");
    for menu in menu_repo.list_all().await? {
        let state = if menu.displayed { "displayed" } else { "withdrawn" };
        println!("  {:<16} {:>8}  {}", menu.name, menu.price.to_string(), state);
    }

    db.close().await;

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
