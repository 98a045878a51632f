//! # homegen
//!
//! Static homepage generator for the RoboFIS documentation site.
//!
//! Loads the feature catalog (built-in, or a JSON file via `--config`),
//! renders the homepage with [`homepage_leptos`], and writes the HTML to
//! disk. Runs as one step of the site build, before link destinations
//! are checked by the docs build itself.
//!
//! ```bash
//! # Built-in catalog, full page
//! homegen --out index.html
//!
//! # Custom catalog, section fragment only
//! homegen --config features.json --section-only --out section.html
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use homepage_leptos::types::HomepageConfig;
use homepage_leptos::{render_features_section, render_homepage};

#[derive(Parser, Debug)]
#[command(name = "homegen")]
#[command(about = "Static homepage generator for the RoboFIS documentation site")]
#[command(version)]
struct Args {
    /// JSON feature catalog; the built-in catalog is used if omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output file for the rendered HTML
    #[arg(long, default_value = "index.html")]
    out: PathBuf,

    /// Emit only the feature <section> fragment instead of a full document
    #[arg(long)]
    section_only: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logging goes to stderr; stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    let config = match &args.config {
        Some(path) => HomepageConfig::load_from_path(path)
            .with_context(|| format!("invalid feature catalog {}", path.display()))?,
        None => HomepageConfig::builtin(),
    };

    info!("rendering {} feature cards", config.features.len());

    let html = if args.section_only {
        render_features_section(&config)
    } else {
        render_homepage(&config)
    };

    fs::write(&args.out, &html)
        .with_context(|| format!("failed to write {}", args.out.display()))?;

    info!("wrote {} ({} bytes)", args.out.display(), html.len());

    Ok(())
}
