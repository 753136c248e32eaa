//! Type definitions for the facet catalog response.
//!
//! Field names follow the aliases in [`FIELD_ALIASES`](crate::FIELD_ALIASES),
//! not the server's own field names. A `null` anywhere in the catalog reads
//! as the empty value of its type.

use crate::{CatalogError, Result};
use serde::{Deserialize, Deserializer, Serialize};

/// Top-level GraphQL response wrapper.
///
/// `data` is kept undecoded so that reported errors win over a payload
/// that does not fit [`CatalogResult`].
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLResponse {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub errors: Vec<GraphQLErrorEntry>,
}

/// One entry of a GraphQL `errors` array.
///
/// Only the message is kept; locations, paths and extensions are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLErrorEntry {
    pub message: String,
}

impl GraphQLResponse {
    /// Unwraps the catalog, treating any reported error as a failure.
    ///
    /// A missing or `null` `data` without errors is an empty catalog.
    pub fn into_result(self) -> Result<CatalogResult> {
        if !self.errors.is_empty() {
            return Err(CatalogError::GraphQL(
                self.errors.into_iter().map(|e| e.message).collect(),
            ));
        }

        match self.data {
            None | Some(serde_json::Value::Null) => Ok(CatalogResult::default()),
            Some(data) => {
                serde_json::from_value(data).map_err(|e| CatalogError::Parse(e.to_string()))
            }
        }
    }
}

/// The decoded catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogResult {
    #[serde(rename = "allFacets", deserialize_with = "null_as_empty")]
    pub all_facets: Vec<FacetEntry>,
}

/// One category with the questionnaires filed under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub nature: String,
    #[serde(
        rename = "facetNames",
        default,
        deserialize_with = "null_items_as_default"
    )]
    pub facet_names: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    null_as_default(deserializer)
}

fn null_items_as_default<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let items: Vec<Option<T>> = null_as_default(deserializer)?;
    Ok(items.into_iter().map(Option::unwrap_or_default).collect())
}
