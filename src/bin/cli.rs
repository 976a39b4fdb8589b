use clap::{Parser, Subcommand};
use obras_sociales_search::{LookupConfig, LookupEngine};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "obras-cli")]
#[command(about = "Obras Sociales lookup CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Local dataset path
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// API base URL to fetch the dataset from before the local file
    #[arg(short, long)]
    remote: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ranked matches for a query
    Search {
        /// Search query
        query: String,

        /// Maximum results
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Autocomplete suggestions for a query
    Suggest {
        /// Search query
        query: String,
    },

    /// Show the best match as a result card
    Show {
        /// Search query
        query: String,
    },

    /// Dataset statistics
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut config = LookupConfig::from_env()?;
    if let Some(data) = cli.data {
        config.data_path = data;
    }
    if let Some(remote) = cli.remote {
        config = config.with_api_base(remote);
    }

    let engine = LookupEngine::from_config(&config).await?;

    match cli.command {
        Commands::Search { query, limit } => {
            println!("🔍 Searching for: {}", query);

            let results = engine.search_scored(&query);
            if results.is_empty() {
                println!("\nNo se encontraron resultados");
                return Ok(());
            }

            println!("\n📋 {} matches:", results.len());
            for (i, m) in results.iter().take(limit).enumerate() {
                println!(
                    "   {}. {} [{}] - {} ({:?})",
                    i + 1,
                    m.record.name,
                    m.record.acronyms_label(),
                    m.score,
                    m.kind
                );
            }
        }

        Commands::Suggest { query } => {
            for suggestion in engine.suggest(&query) {
                println!("{}", suggestion.name);
                println!("   {}", suggestion.acronyms);
            }
        }

        Commands::Show { query } => match engine.resolve(&query) {
            Some(record) => {
                println!("\n✅ {}", record.name);
                println!("   Tipo: {}", record.category_label());
                if !record.acronyms.is_empty() {
                    println!("   También conocida como: {}", record.acronyms);
                }
                if !record.region.is_empty() {
                    println!("   Provincia: {}", record.region);
                }
            }
            None => {
                println!("🔍 No se encontraron resultados");
                println!("   Intenta buscar con otro nombre o sigla");
            }
        },

        Commands::Stats => {
            let catalog = engine.catalog();

            println!("📊 {}", engine.stats());
            println!("   Origin: {:?}", catalog.origin());
            println!("   Loaded: {}", catalog.loaded_at().format("%Y-%m-%d %H:%M:%S"));
        }
    }

    Ok(())
}
