use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error {0}: {1}")]
    Http(u16, String),

    #[error("Failed to parse catalog response: {0}")]
    Parse(String),

    #[error("GraphQL error: {}", .0.join("; "))]
    GraphQL(Vec<String>),

    #[error("Failed to render catalog: {0}")]
    Render(#[from] serde_json::Error),
}
