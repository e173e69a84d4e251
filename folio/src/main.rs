use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;

mod content;
mod render;
mod server;

/// A personal portfolio site generator with animated canvas flourishes.
#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Site content file (.yaml) - used when no subcommand specified
    #[arg(short, long, global = true)]
    content: Option<PathBuf>,

    /// Output directory for the generated site
    #[arg(short, long, global = true, default_value = "dist")]
    output: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the site (default behavior)
    Build {
        /// Site content file (.yaml)
        #[arg(short, long)]
        content: PathBuf,

        /// Output directory for the generated site
        #[arg(short, long, default_value = "dist")]
        output: PathBuf,
    },
    /// Start development server with hot reload
    Serve {
        /// Site content file (.yaml)
        #[arg(short, long)]
        content: PathBuf,

        /// Output directory for the generated site
        #[arg(short, long, default_value = "dist")]
        output: PathBuf,

        /// Port to run the server on
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
}

fn build(content_path: &Path, output: &Path) -> anyhow::Result<()> {
    let content = content::SiteContent::from_path(content_path)?;
    render::render(&content, output)?;
    info!(name = %content.name, output = %output.display(), "generated site");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Build { content, output }) => {
            build(&content, &output)?;
        }
        Some(Commands::Serve {
            content,
            output,
            port,
        }) => {
            server::serve(&content, &output, port).await?;
        }
        None => {
            // Default behavior: build if a content file was provided
            if let Some(content) = cli.content {
                build(&content, &cli.output)?;
            } else {
                println!("folio: no content file specified. Use --help for usage.");
            }
        }
    }

    Ok(())
}
