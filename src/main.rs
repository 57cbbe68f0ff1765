//! CLI entry point for folio

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Read, list and validate the markdown posts of a portfolio blog", long_about = None)]
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
    /// List posts, newest first
    #[command(alias = "ls")]
    List {
        /// Only show one page of the listing (starting at 0)
        #[arg(short, long)]
        page: Option<usize>,

        /// Print metadata as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a post by file name (without .md)
    Show {
        slug: String,

        /// Render the body to HTML
        #[arg(long, conflicts_with = "json")]
        html: bool,

        /// Print the post as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate every post and report all problems
    Check {
        /// Treat slug warnings as failures
        #[arg(long)]
        strict: bool,
    },

    /// Create a new post named after its title
    New {
        /// Title of the new post
        title: String,

        /// Summary shown on the listing card
        #[arg(short, long, default_value = "")]
        summary: String,

        /// Tag for the post (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio=debug,info"
    } else {
        "folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };
    let folio = folio::Folio::new(&base_dir)?;

    match cli.command {
        Commands::List { page, json } => {
            folio::commands::list::run(&folio, page, json)?;
        }

        Commands::Show { slug, html, json } => {
            folio::commands::show::run(&folio, &slug, html, json)?;
        }

        Commands::Check { strict } => {
            tracing::info!("Checking posts in {:?}", folio.posts_dir);
            folio::commands::check::run(&folio, strict)?;
        }

        Commands::New {
            title,
            summary,
            tags,
        } => {
            tracing::info!("Creating new post with title: {}", title);
            let path = folio::commands::new::create_post(&folio, &title, &summary, &tags)?;
            println!("Created: {:?}", path);
        }
    }

    Ok(())
}
