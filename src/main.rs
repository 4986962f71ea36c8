use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rusqlite::Connection;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use category_classifier::{
    classify, classify_all, load_transactions_csv_path, migrate_store, setup_store, table,
    totals_by_category, VERSION,
};

/// Classify aggregator merchant-category codes.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify one or more category codes, one JSON record per line
    Classify {
        #[arg(required = true)]
        codes: Vec<String>,
    },

    /// Classify every transaction in a CSV export
    ClassifyCsv {
        path: PathBuf,

        /// Print per-category totals for this user instead of records
        #[arg(long)]
        totals_for: Option<String>,
    },

    /// List the built-in table
    List {
        /// Only entries with this short label
        #[arg(long)]
        label: Option<String>,
    },

    /// Print the table fingerprint
    Fingerprint,

    /// Upgrade stored classifications to the current schema
    Migrate { db_path: PathBuf },
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    match args.command {
        Command::Classify { codes } => {
            for code in codes {
                println!("{}", serde_json::to_string(&classify(&code))?);
            }
        }
        Command::ClassifyCsv { path, totals_for } => {
            let classified = classify_all(load_transactions_csv_path(&path)?);
            tracing::info!("Classified {} transactions from {:?}", classified.len(), path);

            match totals_for {
                Some(uid) => {
                    for total in totals_by_category(&uid, &classified) {
                        println!("{}", serde_json::to_string(&total)?);
                    }
                }
                None => {
                    for transaction in &classified {
                        println!("{}", serde_json::to_string(transaction)?);
                    }
                }
            }
        }
        Command::List { label } => {
            let entries: Vec<_> = match label.as_deref() {
                Some(label) => table().with_short_label(label).collect(),
                None => table().iter().collect(),
            };
            for entry in entries {
                println!(
                    "{}\t{}\t{}\t{}",
                    entry.code,
                    if entry.is_physical_location { "physical" } else { "remote" },
                    entry.kind,
                    entry.detailed_label
                );
            }
        }
        Command::Fingerprint => {
            println!("{} ({} entries, v{})", table().fingerprint(), table().len(), VERSION);
        }
        Command::Migrate { db_path } => {
            let conn = Connection::open(&db_path)
                .with_context(|| format!("Failed to open database: {:?}", db_path))?;
            setup_store(&conn)?;
            let report = migrate_store(&conn)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
