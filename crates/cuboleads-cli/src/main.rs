mod analyze;
mod search;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "cuboleads-cli")]
#[command(about = "Find local businesses that need web-presence work")]
#[command(after_help = "GOOGLE_API_KEY must be set (environment or .env) for every command.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search a business category in a location and rank the leads found
    Search {
        /// Business category, e.g. "Dentistas"
        #[arg(long, default_value = "Dentistas")]
        category: String,

        /// City or region, e.g. "Sumaré, SP"
        #[arg(long, default_value = "Sumaré, SP")]
        location: String,

        /// CSV output path (defaults to `leads_<category>_<location>.csv`)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Skip the CSV export
        #[arg(long, conflicts_with = "output")]
        no_export: bool,

        /// Print leads as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Drop places whose details cannot be fetched instead of failing the search
        #[arg(long)]
        skip_failed_details: bool,
    },
    /// Run the site analyzer against a single URL (GOOGLE_API_KEY must still be set)
    Analyze {
        /// Website to analyze
        url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = cuboleads_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Commands::Search {
            category,
            location,
            output,
            no_export,
            json,
            skip_failed_details,
        } => {
            let options = search::SearchOptions {
                output,
                export: !no_export,
                json,
                skip_failed_details,
            };
            search::run_search(&config, category, location, &options).await?;
        }
        Commands::Analyze { url } => analyze::run_analyze(&config, &url).await?,
    }

    Ok(())
}
