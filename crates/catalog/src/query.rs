//! The facet catalog query document and its variables.

use serde::Serialize;
use std::fmt::Write;

/// GraphQL endpoint of the content service.
pub const CATALOG_ENDPOINT: &str = "https://graphql.medigy.com/graphql";

/// Tenant whose facets are listed.
pub const TENANT_ID: &str = "7822da54-c0ba-11e8-85c1-6301a0c839d6";

/// A response key and the server field it is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldAlias {
    pub alias: &'static str,
    pub field: &'static str,
}

/// Alias table for the catalog query.
///
/// The first entry is the root selection; the rest are selected on each
/// item it returns. `CatalogResult` and `FacetEntry` are keyed by these
/// aliases.
pub const FIELD_ALIASES: [FieldAlias; 3] = [
    FieldAlias {
        alias: "allFacets",
        field: "getCategoryListWithQuestionnaire",
    },
    FieldAlias {
        alias: "nature",
        field: "category",
    },
    FieldAlias {
        alias: "facetNames",
        field: "questionnaireName",
    },
];

/// Builds the query document from [`FIELD_ALIASES`].
///
/// ```
/// let query = facet_catalog::catalog_query();
/// assert!(query.contains("nature: category"));
/// ```
#[must_use]
pub fn catalog_query() -> String {
    let [root, selections @ ..] = &FIELD_ALIASES;

    let mut doc = String::from("query FacetCatalog($tenantId: String!) {\n");
    let _ = writeln!(
        doc,
        "  {}: {}(tenantId: $tenantId) {{",
        root.alias, root.field
    );
    for selection in selections {
        let _ = writeln!(doc, "    {}: {}", selection.alias, selection.field);
    }
    doc.push_str("  }\n}\n");
    doc
}

/// Variables sent alongside the catalog query.
///
/// Always carries exactly the compiled-in [`TENANT_ID`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryVariables {
    #[serde(rename = "tenantId")]
    tenant_id: &'static str,
}

impl Default for QueryVariables {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryVariables {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tenant_id: TENANT_ID,
        }
    }

    #[must_use]
    pub const fn tenant_id(&self) -> &'static str {
        self.tenant_id
    }
}

/// JSON body of the catalog request.
#[must_use]
pub fn request_body(variables: &QueryVariables) -> serde_json::Value {
    serde_json::json!({
        "query": catalog_query(),
        "variables": variables,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_query_document() {
        let expected = "\
query FacetCatalog($tenantId: String!) {
  allFacets: getCategoryListWithQuestionnaire(tenantId: $tenantId) {
    nature: category
    facetNames: questionnaireName
  }
}
";
        assert_eq!(catalog_query(), expected);
    }

    #[test]
    fn test_catalog_query_uses_every_alias() {
        let query = catalog_query();
        for FieldAlias { alias, field } in FIELD_ALIASES {
            assert!(
                query.contains(&format!("{alias}: {field}")),
                "missing alias {alias}"
            );
        }
    }

    #[test]
    fn test_variables_only_contain_tenant_id() {
        let value = serde_json::to_value(QueryVariables::new()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 1);
        assert_eq!(
            object.get("tenantId").and_then(|v| v.as_str()),
            Some("7822da54-c0ba-11e8-85c1-6301a0c839d6")
        );
    }

    #[test]
    fn test_variables_default_matches_new() {
        assert_eq!(QueryVariables::default(), QueryVariables::new());
        assert_eq!(QueryVariables::new().tenant_id(), TENANT_ID);
    }

    #[test]
    fn test_request_body_shape() {
        let body = request_body(&QueryVariables::new());

        assert_eq!(body["query"], catalog_query());
        assert_eq!(body["variables"]["tenantId"], TENANT_ID);
        assert_eq!(body.as_object().unwrap().len(), 2);
    }
}
