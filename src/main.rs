//! CLI entry point for forside-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "forside-rs")]
#[command(version)]
#[command(about = "Builds a landing page from YAML content and an HTML template", long_about = None)]
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
    /// Build the page
    #[command(alias = "b")]
    Build {
        /// Content file, relative to the base directory
        #[arg(long)]
        content: Option<String>,

        /// Template file, relative to the base directory
        #[arg(long)]
        template: Option<String>,

        /// Output directory, relative to the base directory
        #[arg(short, long)]
        out_dir: Option<String>,
    },

    /// Remove the output directory
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "forside_rs=debug,info"
    } else {
        "forside_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Build {
            content,
            template,
            out_dir,
        } => {
            let site = forside_rs::Site::new(&base_dir)?;
            let mut config = site.config.clone();
            if let Some(content) = content {
                config.content_file = content;
            }
            if let Some(template) = template {
                config.template_file = template;
            }
            if let Some(out_dir) = out_dir {
                config.public_dir = out_dir;
            }
            let site = forside_rs::Site::with_config(site.base_dir, config);

            tracing::info!("Building {:?}...", site.output_path());
            match site.build().await {
                Ok(report) => {
                    println!("Built {}", report.output_path.display());
                }
                Err(e) => {
                    tracing::error!("Build failed: {:#}", e);
                    return Err(e);
                }
            }
        }

        Commands::Clean => {
            let site = forside_rs::Site::new(&base_dir)?;
            tracing::info!("Cleaning output folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("forside-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
