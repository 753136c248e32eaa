//! Facet catalog tasks.

use anyhow::{Context, Result};
use clap::Subcommand;
use facet_catalog::{generate_catalog, CatalogClient};
use std::io::Write;

/// Facet subcommands.
#[derive(Debug, Subcommand)]
pub enum FacetsCommands {
    /// Fetch the facet catalog and print it as indented JSON
    GenerateCatalog,
}

/// Run a facets subcommand.
pub async fn run(command: FacetsCommands) -> Result<()> {
    match command {
        FacetsCommands::GenerateCatalog => run_generate_catalog().await,
    }
}

/// A failed fetch is reported on stdout and still counts as a completed task.
#[tracing::instrument]
async fn run_generate_catalog() -> Result<()> {
    let start_time = std::time::Instant::now();
    let client = CatalogClient::new();

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    let succeeded = generate_catalog(&client, &mut handle)
        .await
        .context("Failed to write to stdout")?;
    handle.flush().context("Failed to write to stdout")?;

    tracing::info!(
        succeeded,
        elapsed_secs = start_time.elapsed().as_secs_f64(),
        "Catalog task finished"
    );
    Ok(())
}
