//! Rendering of the decoded catalog.

use crate::{CatalogResult, Result};

/// Renders the catalog as indented JSON.
///
/// Keys are the query aliases. Facets and names keep the order the server
/// returned them in.
pub fn render_catalog(catalog: &CatalogResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(catalog)?)
}

/// The line announcing the query about to run.
#[must_use]
pub fn running_query_line(pending: &CatalogResult) -> String {
    format!("Running query {pending:?}")
}
