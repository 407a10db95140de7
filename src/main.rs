// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! autopiclabel: rename images after what a local vision model sees in them

use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

use autopiclabel::config::AppConfig;
use autopiclabel::describer::VisionDescriber;
use autopiclabel::pipeline::Labeler;
use autopiclabel::{ModelError, Result};

/// Rename every image in a directory from a vision model's description
#[derive(Parser, Debug)]
#[command(name = "autopiclabel")]
#[command(version)]
#[command(about = "Process a directory of images to generate new names and rename the files.", long_about = None)]
struct Cli {
    /// The path to the directory containing the images
    directory_path: PathBuf,

    /// Path to configuration file (JSON format)
    #[arg(short, long, default_value = "autopiclabel.json")]
    config: PathBuf,

    /// Vision model to use (overrides config)
    #[arg(short, long)]
    model: Option<String>,

    /// Ollama server URL (overrides config)
    #[arg(long)]
    url: Option<String>,

    /// Show the new names without renaming anything
    #[arg(long)]
    dry_run: bool,

    /// Verify the Ollama server and model before processing
    #[arg(long)]
    health_check: bool,

    /// Write the effective configuration to this path before processing
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    verbose: bool,

    /// Enable trace logging (most verbose)
    #[arg(long)]
    trace: bool,

    /// Suppress non-essential output (quiet mode)
    #[arg(short, long, conflicts_with_all = ["verbose", "trace"])]
    quiet: bool,
}

impl Cli {
    fn log_filter(&self) -> &'static str {
        if self.trace {
            "trace"
        } else if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }

    /// Apply command-line overrides on top of the loaded config
    fn apply_overrides(&self, mut config: AppConfig) -> Result<AppConfig> {
        if let Some(ref model) = self.model {
            config.ai_engine.model = model.clone();
        }
        if let Some(ref url) = self.url {
            config.ai_engine.url = url.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(cli.log_filter())
        .with_target(false)
        .init();

    let config = cli.apply_overrides(AppConfig::load(&cli.config)?)?;

    if let Some(ref path) = cli.write_config {
        config.save(path)?;
        info!("Wrote configuration to {:?}", path);
    }

    let describer = VisionDescriber::from_config(&config)?;

    if cli.health_check {
        check_engine(&describer).await?;
    }

    if cli.dry_run {
        warn!("DRY RUN MODE - files will not be renamed");
    }

    info!("Labeling images in {:?} with model '{}'", cli.directory_path, config.ai_engine.model);

    Labeler::new(describer)
        .dry_run(cli.dry_run)
        .process_directory(&cli.directory_path)
        .await?;

    Ok(())
}

/// Fail fast when the server is down; only warn about a missing model
async fn check_engine(describer: &VisionDescriber) -> Result<()> {
    let client = describer.client();
    info!("Checking Ollama availability at {}...", client.base_url());

    client.health_check().await.map_err(|e| {
        ModelError::Unavailable(format!("{}. Is `ollama serve` running?", e))
    })?;
    info!("Ollama is running");

    let model = describer.model();
    if client.model_available(model).await? {
        info!("Vision model '{}' available", model);
    } else {
        warn!("Vision model '{}' not found. Try: ollama pull {}", model, model);
    }

    Ok(())
}
