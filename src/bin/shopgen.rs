//! shopgen CLI - writes the synthetic store database
//!
//! Runs with no arguments: generates the default dataset into `ecommerce.db`
//! and prints the row count of each generated table.

use clap::Parser;
use shopgen::config::DB_FILENAME;
use shopgen::{check_integrity, Database, GeneratorConfig, RunSummary, ShopgenError};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// Tables reported on stdout, in print order.
const REPORTED_TABLES: [&str; 5] = ["Customers", "Products", "Orders", "Order_Items", "Shipments"];

#[derive(Parser)]
#[command(name = "shopgen")]
#[command(version, about = "Generate a synthetic e-commerce SQLite database", long_about = None)]
struct Cli {
    /// Database file to (re)create
    #[arg(short, long, default_value = DB_FILENAME)]
    output: PathBuf,

    /// YAML file overriding generation parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Check integrity of the written database
    #[arg(long)]
    verify: bool,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = generate(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn generate(cli: &Cli) -> Result<(), ShopgenError> {
    let config = match &cli.config {
        Some(path) => GeneratorConfig::load_from_file(path)?,
        None => GeneratorConfig::default(),
    };

    let summary = shopgen::run(&config, &cli.output)?;

    if cli.verify {
        let db = Database::open(&cli.output)?;
        let mut conn = db.get_connection()?;
        check_integrity(&mut conn)?.into_result()?;
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    for table in REPORTED_TABLES {
        println!("{}: {}", table, summary.count(table).unwrap_or(0));
    }
    println!("Database generated: {}", summary.database.display());
}
