//! SiteAudit - website accessibility checker
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use siteaudit_app::config;
use siteaudit_core::logging;
use siteaudit_core::prelude::*;

/// SiteAudit - scan a website for accessibility issues
#[derive(Parser, Debug)]
#[command(name = "siteaudit", version)]
#[command(about = "Free website accessibility checker", long_about = None)]
struct Args {
    /// Website to scan on startup (https:// is added when no scheme is given)
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Run in headless mode (JSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Directory holding .siteaudit/config.toml (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Write a default config file into the config directory and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let result = run(args).await;
    if let Err(e) = &result {
        error!("Exiting with error: {:?}", e);
        if let Ok(path) = logging::get_current_log_file() {
            eprintln!("See logs under {}", path.display());
        }
    }
    Ok(result?)
}

async fn run(args: Args) -> Result<()> {
    let base_dir = match args.config_dir {
        Some(dir) => {
            if !dir.is_dir() {
                return Err(Error::ConfigNotFound { path: dir });
            }
            dir
        }
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    if args.init_config {
        let path = config::init_config_dir(&base_dir).context("Writing default config")?;
        println!("Config file: {}", path.display());
        return Ok(());
    }

    let settings = config::load_settings(&base_dir);
    info!(
        "Loaded settings: delay_ms={}, seeded={}",
        settings.scan.delay_ms,
        settings.scan.seed.is_some()
    );

    if args.headless {
        siteaudit::run_headless(settings, args.url).await
    } else {
        siteaudit::run(settings, args.url).await
    }
}
