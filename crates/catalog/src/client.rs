//! HTTP client for the catalog query.
//!
//! Each call makes exactly one request. Failures are returned to the caller
//! as-is; nothing is retried. Timeouts are reqwest's defaults.

use crate::{
    request_body, CatalogError, CatalogResult, GraphQLResponse, QueryVariables, Result,
    CATALOG_ENDPOINT,
};

/// Client that sends the catalog query to a GraphQL endpoint.
///
/// ```no_run
/// use facet_catalog::CatalogClient;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = CatalogClient::new().fetch().await?;
/// println!("{} facets", catalog.all_facets.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CatalogClient {
    endpoint: String,
    variables: QueryVariables,
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogClient {
    /// Creates a client bound to [`CATALOG_ENDPOINT`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_endpoint(CATALOG_ENDPOINT)
    }

    /// Creates a client bound to another endpoint, e.g. a local mock server.
    #[must_use]
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            variables: QueryVariables::new(),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub fn variables(&self) -> &QueryVariables {
        &self.variables
    }

    /// Fetches and decodes the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The network request fails
    /// - The server returns an HTTP error status
    /// - The response reports GraphQL errors
    /// - The body is not a GraphQL response of the expected shape
    #[tracing::instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn fetch(&self) -> Result<CatalogResult> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| CatalogError::Network(format!("Failed to create HTTP client: {e}")))?;

        tracing::info!(tenant_id = self.variables.tenant_id(), "Sending catalog query");
        let response = client
            .post(&self.endpoint)
            .json(&request_body(&self.variables))
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Received response");

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %error_body, "HTTP error response");
            return Err(CatalogError::Http(status.as_u16(), error_body));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        tracing::debug!("Parsing catalog response");
        let catalog = decode_response(&body).inspect_err(|e| {
            tracing::error!(error = %e, "Failed to decode catalog response");
        })?;

        tracing::info!(facets = catalog.all_facets.len(), "Catalog fetched");
        Ok(catalog)
    }
}

/// Decodes a GraphQL response body, checking reported errors before the data.
fn decode_response(body: &[u8]) -> Result<CatalogResult> {
    let response: GraphQLResponse =
        serde_json::from_slice(body).map_err(|e| CatalogError::Parse(e.to_string()))?;
    response.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FacetEntry, TENANT_ID};

    #[test]
    fn test_client_default() {
        let client = CatalogClient::new();
        assert_eq!(client.endpoint(), "https://graphql.medigy.com/graphql");
        assert_eq!(client.variables().tenant_id(), TENANT_ID);
    }

    #[test]
    fn test_client_with_endpoint_keeps_tenant() {
        let client = CatalogClient::with_endpoint("http://127.0.0.1:4000/graphql");
        assert_eq!(client.endpoint(), "http://127.0.0.1:4000/graphql");
        assert_eq!(client.variables(), &QueryVariables::new());
    }

    #[test]
    fn test_decode_response_partial_error_keeps_message() {
        let body = br#"{
            "data": { "allFacets": [ { "nature": null, "facetNames": ["A"] } ] },
            "errors": [ { "message": "category resolver failed" } ]
        }"#;

        let err = decode_response(body).unwrap_err();
        assert_eq!(err.to_string(), "GraphQL error: category resolver failed");
    }

    #[test]
    fn test_decode_response_null_fields_without_errors() {
        let body = br#"{ "data": { "allFacets": [ { "nature": null, "facetNames": ["A", null] } ] } }"#;

        let catalog = decode_response(body).unwrap();
        assert_eq!(
            catalog.all_facets,
            vec![FacetEntry {
                nature: String::new(),
                facet_names: vec!["A".to_string(), String::new()],
            }]
        );
    }

    #[test]
    fn test_decode_response_parse_error_names_the_cause() {
        let err = decode_response(b"<html>not json</html>").unwrap_err();

        assert!(matches!(err, CatalogError::Parse(_)));
        assert!(
            err.to_string()
                .starts_with("Failed to parse catalog response: expected value at line 1 column 1"),
            "{err}"
        );
    }

    #[tokio::test]
    async fn test_fetch_invalid_url_is_network_error() {
        let client = CatalogClient::with_endpoint("not a url");
        assert!(matches!(
            client.fetch().await,
            Err(CatalogError::Network(_))
        ));
    }
}
