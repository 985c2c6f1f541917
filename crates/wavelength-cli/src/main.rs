mod analyze;
mod export;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wavelength_report::Section;

use crate::output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "wavelength")]
#[command(about = "Turn a product website into a paid-ads strategy")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape a website and generate a strategy for one ad platform
    Analyze {
        /// Product website (scheme optional)
        #[arg(long)]
        url: String,
        /// What the product does, at least 10 characters
        #[arg(long)]
        description: String,
        /// Target platform: meta, google, tiktok, linkedin, youtube, reddit
        #[arg(long)]
        platform: String,
        /// Optional tone and style guidance for ad copy
        #[arg(long)]
        brand_voice: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Print a single report section (text output only)
        #[arg(long)]
        section: Option<Section>,
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Render a previously saved JSON result
    Export {
        /// JSON file holding a result or an analyze envelope
        #[arg(long)]
        input: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Print a single report section (text output only)
        #[arg(long)]
        section: Option<Section>,
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = wavelength_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Analyze {
            url,
            description,
            platform,
            brand_voice,
            format,
            section,
            output,
        } => {
            let request = analyze::AnalyzeRequest {
                url,
                description,
                platform,
                brand_voice,
            };
            analyze::run_analyze(&config, request, format, section, output.as_deref()).await?;
        }
        Commands::Export {
            input,
            format,
            section,
            output,
        } => export::run_export(&input, format, section, output.as_deref())?,
    }

    Ok(())
}
