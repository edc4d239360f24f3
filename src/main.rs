//! search-filter-rs: Google Custom Search with client-side result filtering
//!
//! This is the main entry point for the application.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use search_filter::{config, console::Console, execute_filtered_search, Fetcher};
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so stdout only carries results
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    info!("Starting search-filter-rs v{}", search_filter::VERSION);

    let settings = config::load(cli.config.as_deref()).context("failed to load settings")?;
    let fetcher = Fetcher::from_settings(&settings)?;

    match cli.query.as_deref() {
        Some(query) => {
            let criteria = cli.criteria(&settings.filter)?;
            let results = execute_filtered_search(&fetcher, query, &criteria).await?;

            let stdout = io::stdout();
            let mut out = stdout.lock();
            search_filter::console::render::render(&mut out, &results, cli.format)?;
            out.flush()?;
        }
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Console::new(stdin.lock(), stdout.lock(), &fetcher, settings.filter.clone())
                .with_format(cli.format)
                .run()
                .await?;
        }
    }

    Ok(())
}
