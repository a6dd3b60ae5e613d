//! CLI entry point for pagegen

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pagegen")]
#[command(version = "0.1.0")]
#[command(about = "A content routing and page generation engine for markdown blogs", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the route manifest
    #[command(alias = "g")]
    Generate,

    /// List site information
    List {
        /// Type of content to list (route, tag, document)
        #[arg(default_value = "route")]
        r#type: String,
    },

    /// Clean the public folder
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "pagegen=debug,info"
    } else {
        "pagegen=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Generate => {
            let app = pagegen::Pagegen::new(&base_dir)?;
            tracing::info!("Generating route manifest...");
            app.generate().await?;
            println!("Generated successfully!");
        }

        Commands::List { r#type } => {
            let app = pagegen::Pagegen::new(&base_dir)?;
            pagegen::commands::list::run(&app, &r#type).await?;
        }

        Commands::Clean => {
            let app = pagegen::Pagegen::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            app.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("pagegen version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
