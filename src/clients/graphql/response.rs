//! The GraphQL response envelope.

use serde::{Deserialize, Serialize};

/// A GraphQL response body: `{ "data": ..., "errors": [...] }`.
///
/// Both members are optional. A `null` or missing `data` decodes to `None`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct GraphqlResponse<T> {
    /// The `data` member.
    pub data: Option<T>,
    /// The `errors` member.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<GraphqlResponseError>>,
}

impl<T> Default for GraphqlResponse<T> {
    fn default() -> Self {
        Self {
            data: None,
            errors: None,
        }
    }
}

impl<T> GraphqlResponse<T> {
    /// Returns `true` if the response carries a non-empty `errors` array.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|errors| !errors.is_empty())
    }
}

/// One entry of a GraphQL `errors` array.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct GraphqlResponseError {
    /// Human readable description.
    #[serde(default)]
    pub message: String,
    /// Vendor details (Contentful puts `contentful.code` here).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Value>,
}
