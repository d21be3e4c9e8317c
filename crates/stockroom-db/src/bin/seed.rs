//! # Seed Data Generator
//!
//! Populates the products table with sample rows for development.
//!
//! ## Usage
//! ```bash
//! # Generate 50 products (default)
//! cargo run -p stockroom-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p stockroom-db --bin seed -- --count 200
//!
//! # Specify database path
//! cargo run -p stockroom-db --bin seed -- --db ./data/stockroom.db
//! ```
//!
//! Each product gets:
//! - Name: `{item} {size}`
//! - Price: $0.99 - $24.98, always two decimals
//! - Stock: 0 - 100

use std::env;

use stockroom_core::{Money, ProductDraft};
use stockroom_db::{Database, DbConfig};

const DEFAULT_COUNT: usize = 50;

const ITEMS: &[&str] = &[
    "Widget",
    "Gadget",
    "Sprocket",
    "Flange",
    "Gizmo",
    "Bracket",
    "Hinge",
    "Spindle",
    "Coupler",
    "Grommet",
];

/// Size variants and their price addon in cents.
const SIZES: &[(&str, i64)] = &[
    ("Mini", 0),
    ("Standard", 250),
    ("Large", 600),
    ("Pro", 1200),
    ("Bulk Pack", 1500),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count = DEFAULT_COUNT;
    let mut db_path = String::from("./stockroom_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(DEFAULT_COUNT);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Stockroom Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 50)");
                println!("  -d, --db <PATH>    Database file path (default: ./stockroom_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Stockroom Seed Data Generator");
    println!("=============================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        db.close().await;
        return Ok(());
    }

    let start = std::time::Instant::now();
    let mut generated = 0;

    for seed in 0..count {
        let draft = generate_product(seed);

        if let Err(e) = db.products().insert(&draft).await {
            eprintln!("Failed to insert {}: {}", draft.name, e);
            continue;
        }

        generated += 1;
        if generated % 25 == 0 {
            println!("  Generated {} products...", generated);
        }
    }

    println!();
    println!("✓ Generated {} products in {:?}", generated, start.elapsed());

    let matches = db.products().search_by_name("Widget").await?;
    println!("  Search 'Widget': {} results", matches.len());

    db.close().await;
    println!("✓ Seed complete!");

    Ok(())
}

/// Generates the `seed`-th sample product.
fn generate_product(seed: usize) -> ProductDraft {
    let item = ITEMS[seed % ITEMS.len()];
    let (size, price_addon) = SIZES[(seed / ITEMS.len()) % SIZES.len()];

    // $0.99 - $9.98 base
    let base_cents = 99 + ((seed * 37) % 900) as i64;

    ProductDraft {
        name: format!("{} {}", item, size),
        price: Money::from_cents(base_cents + price_addon),
        stock: (seed % 101) as i64,
    }
}
