//! Facet catalog retrieval.
//!
//! This crate sends one fixed GraphQL query to the content service, asking for
//! the questionnaire categories ("facets") of a compiled-in tenant, and renders
//! the answer as indented JSON.
//!
//! # Examples
//!
//! ## Print the catalog
//!
//! ```no_run
//! use facet_catalog::{generate_catalog, CatalogClient};
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let mut stdout = std::io::stdout().lock();
//!     generate_catalog(&CatalogClient::new(), &mut stdout).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Work with the decoded catalog
//!
//! ```no_run
//! use facet_catalog::CatalogClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = CatalogClient::new().fetch().await?;
//!     for facet in &catalog.all_facets {
//!         println!("{}: {}", facet.nature, facet.facet_names.join(", "));
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod query;
mod render;
mod types;

pub use client::CatalogClient;
pub use error::{CatalogError, Result};
pub use query::{
    catalog_query, request_body, FieldAlias, QueryVariables, CATALOG_ENDPOINT, FIELD_ALIASES,
    TENANT_ID,
};
pub use render::{render_catalog, running_query_line};
pub use types::*;

use std::io::Write;

/// Fetches the catalog and writes it to `out`.
///
/// Writes the `Running query` line first. On success the indented JSON
/// follows and `true` is returned. On any fetch or render failure the error
/// text is written instead, no JSON is emitted, and `false` is returned.
///
/// # Errors
///
/// Only fails if writing to `out` fails. Catalog failures are reported in
/// the output, not as an error.
#[tracing::instrument(skip_all, fields(endpoint = client.endpoint()))]
pub async fn generate_catalog<W: Write>(
    client: &CatalogClient,
    out: &mut W,
) -> std::io::Result<bool> {
    writeln!(out, "{}", running_query_line(&CatalogResult::default()))?;

    let rendered = client
        .fetch()
        .await
        .and_then(|catalog| render_catalog(&catalog));

    match rendered {
        Ok(json) => {
            writeln!(out, "{json}")?;
            Ok(true)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Catalog generation failed");
            writeln!(out, "{e}")?;
            Ok(false)
        }
    }
}
