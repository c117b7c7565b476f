//! Pharmacology search CLI
//!
//! Builds a widget from an options file, runs one fetch and prints the
//! rendered markup to stdout.

mod config;
mod logging;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use pharmsearch_client::{Credentials, PharmacologyApiClient};
use pharmsearch_widget::{
    FetchOutcome, MemoryTarget, QueryController, TemplateRenderer, WidgetOptions,
};

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(
    name = "pharmsearch",
    version,
    about = "Query target pharmacology and render a results table"
)]
struct Cli {
    /// Widget options as JSON (URI, filters, sort, paging, target).
    #[arg(short, long)]
    options: PathBuf,

    /// Configuration file (TOML, YAML or JSON).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fetch this page with the body-only template instead of the initial load.
    #[arg(short, long)]
    page: Option<u32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    logging::init_logging(&config.logging).context("Failed to initialize logging")?;

    let raw = std::fs::read_to_string(&cli.options)
        .with_context(|| format!("Failed to read options file {}", cli.options.display()))?;
    let options = WidgetOptions::from_json_str(&raw)?;

    let credentials = options
        .credentials()
        .or_else(|| match (&config.api.app_id, &config.api.app_key) {
            (Some(app_id), Some(app_key)) => Some(Credentials {
                app_id: app_id.clone(),
                app_key: app_key.clone(),
            }),
            _ => None,
        })
        .context("No API credentials: set appID/appKey in the options or api.app_id/api.app_key")?;
    let base_url = options
        .app_url
        .clone()
        .unwrap_or_else(|| config.api.base_url.clone());

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %base_url,
        uri = %options.uri,
        "Starting pharmacology query"
    );

    let client = PharmacologyApiClient::with_timeout(
        base_url,
        credentials,
        Duration::from_secs(config.api.timeout_secs),
    )?;
    let target = Arc::new(MemoryTarget::new());
    let mut controller = QueryController::from_options(
        &options,
        Arc::new(client),
        Arc::new(TemplateRenderer),
        target.clone(),
    )?;

    let outcome = match cli.page {
        Some(page) => controller.fetch_page(page, None, None).await?,
        None => controller.load().await?,
    };

    match outcome {
        FetchOutcome::Empty => {
            eprintln!("No pharmacology records match the given filters.");
        }
        FetchOutcome::Rendered { total, page, .. } => {
            if let Some(markup) = target.content(controller.target_id()) {
                println!("{markup}");
            }
            let pages = controller.pagination().total_pages(total);
            eprintln!("Page {page} of {pages} ({total} records)");
        }
    }

    Ok(())
}
