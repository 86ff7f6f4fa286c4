use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use trivia_api::db::transfer::{export_data, import_data};
use trivia_api::db::{establish_connection, run_migrations};
use trivia_api::telemetry::init_tracing;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Database url, e.g. sqlite:trivia.db
    db_url: String,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or upgrade the schema
    Migrate,
    /// Load categories.csv and questions.csv from a directory
    Import { path: PathBuf },
    /// Dump categories and questions to csv files in a directory
    Export { path: PathBuf },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let pool = establish_connection(&cli.db_url)
        .await
        .context("Cannot connect to DB")?;
    match cli.command {
        Commands::Migrate => run_migrations(&pool).await.context("Migrations failed")?,
        Commands::Import { path } => {
            run_migrations(&pool).await.context("Migrations failed")?;
            import_data(&pool, &path).await.context("Cannot import")?
        }
        Commands::Export { path } => export_data(&pool, &path).await.context("Cannot export")?,
    }
    Ok(())
}
