//! # Seed Data Generator
//!
//! Populates a database with sample repair intakes for development, e.g. to
//! look at a multi-page export.
//!
//! ## Usage
//! ```bash
//! # Generate 50 intakes (default)
//! cargo run -p intake-db --bin seed
//!
//! # Generate custom amount into a specific file
//! cargo run -p intake-db --bin seed -- --count 200 --db ./data/clientes.db
//! ```

use chrono::{Duration, Local};
use intake_core::timestamp::format_intake_timestamp;
use intake_core::NewCustomer;
use intake_db::{Database, DbConfig};
use std::env;

const NAMES: &[&str] = &[
    "Ana Torres",
    "Luis Gomez",
    "Marta Diaz",
    "Jorge Ruiz",
    "Carmen Vega",
    "Pablo Herrera",
    "Lucia Romero",
    "Diego Castro",
];

const DEVICES: &[(&str, &[&str])] = &[
    ("Samsung", &["Galaxy A52", "Galaxy S21", "Smart TV UN50"]),
    ("LG", &["K62", "OLED55", "Microondas MS2043"]),
    ("Lenovo", &["IdeaPad 3", "ThinkPad T14"]),
    ("Xiaomi", &["Redmi Note 11", "Poco X3"]),
];

const FAULTS: &[&str] = &[
    "no enciende",
    "pantalla rota",
    "no carga",
    "se reinicia solo",
    "sin sonido",
    "puerto USB flojo",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let mut count: usize = 50;
    let mut db_path = intake_core::DEFAULT_DATABASE_FILE.to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(50);
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
                println!("Repair Intake Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of intakes to generate (default: 50)");
                println!("  -d, --db <PATH>    Database file path (default: ./clientes.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Repair Intake Seed Data Generator");
    println!("=================================");
    println!("Database: {}", db_path);
    println!("Intakes:  {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database");

    let existing = db.customers().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} customers", existing);
        println!("  Skipping seed to avoid duplicates.");
        return Ok(());
    }

    let start = std::time::Instant::now();
    for seed in 0..count {
        let customer = generate_customer(seed);
        db.customers().insert(&customer).await?;
    }

    println!("✓ Generated {} intakes in {:?}", count, start.elapsed());
    db.close().await;

    Ok(())
}

/// Generates a single intake with plausible data.
fn generate_customer(seed: usize) -> NewCustomer {
    let (brand, models) = DEVICES[seed % DEVICES.len()];
    let model = models[seed % models.len()];
    let received = Local::now().naive_local() - Duration::hours(seed as i64 * 5);

    NewCustomer {
        name: format!("{} {}", NAMES[seed % NAMES.len()], seed + 1),
        phone: format!("555-{:04}", 1000 + seed),
        address: format!("Calle {} #{}", 1 + seed % 40, 100 + seed),
        brand: brand.to_string(),
        model: model.to_string(),
        fault: FAULTS[seed % FAULTS.len()].to_string(),
        note: if seed % 3 == 0 {
            "Cliente deja cargador.\nLlamar antes de reparar.".to_string()
        } else {
            String::new()
        },
        intake_timestamp: format_intake_timestamp(received),
    }
}
