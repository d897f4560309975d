//! # Seed Data Generator
//!
//! Populates the database with sample customers and purchases for development.
//!
//! ## Usage
//! ```bash
//! # Generate 10 customers (default)
//! cargo run -p reward-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p reward-db --bin seed -- --customers 50
//!
//! # Specify database path
//! cargo run -p reward-db --bin seed -- --db ./data/rewards.db
//! ```
//!
//! ## Generated Data
//! Each customer gets one to four purchases in each of three months. Amounts
//! cycle through every reward tier ($25 up to $240) so the report shows zero,
//! one-point and two-point purchases.

use reward_core::{Customer, Money, Transaction};
use reward_db::{Database, DbConfig};
use std::env;

/// Sample customer names
const NAMES: &[&str] = &[
    "Alice Johnson",
    "Bob Smith",
    "Carla Gomez",
    "Deepak Rao",
    "Emma Brown",
    "Farid Haddad",
    "Grace Lee",
    "Hiro Tanaka",
    "Ines Duarte",
    "Jonas Weber",
];

/// Months each customer shops in
const MONTHS: &[&str] = &["January", "February", "March"];

/// Purchase amounts in cents, one per reward tier region
const AMOUNTS_CENTS: &[i64] = &[2500, 4999, 5150, 7000, 9999, 10950, 12000, 15000, 24000];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut customers: usize = 10;
    let mut db_path = String::from("./rewards_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--customers" | "-c" => {
                if i + 1 < args.len() {
                    customers = args[i + 1].parse().unwrap_or(10);
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
                println!("Loyalty Rewards Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --customers <N>  Number of customers to generate (default: 10)");
                println!("  -d, --db <PATH>      Database file path (default: ./rewards_dev.db)");
                println!("  -h, --help           Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Loyalty Rewards Seed Data Generator");
    println!("===================================");
    println!("Database:  {}", db_path);
    println!("Customers: {}", customers);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.customers().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} customers", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let start = std::time::Instant::now();
    let mut transactions = 0usize;

    for seed in 0..customers {
        let base_name = NAMES[seed % NAMES.len()];
        let name = if seed < NAMES.len() {
            base_name.to_string()
        } else {
            format!("{} {}", base_name, seed / NAMES.len() + 1)
        };

        let customer = db.customers().insert(&Customer::new(&name)?).await?;

        for (month_idx, month) in MONTHS.iter().enumerate() {
            let purchases = 1 + (seed + month_idx) % 4;
            for purchase in 0..purchases {
                let amount = AMOUNTS_CENTS[(seed * 7 + month_idx * 3 + purchase) % AMOUNTS_CENTS.len()];
                let transaction =
                    Transaction::new(&customer.id, Money::from_cents(amount), month)?;

                if let Err(e) = db.transactions().insert(&transaction).await {
                    eprintln!("Failed to insert transaction for {}: {}", customer.name, e);
                    continue;
                }
                transactions += 1;
            }
        }
    }

    println!();
    println!(
        "✓ Generated {} customers and {} transactions in {:?}",
        customers,
        transactions,
        start.elapsed()
    );
    println!();
    println!("✓ Seed complete!");

    Ok(())
}
