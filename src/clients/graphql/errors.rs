//! GraphQL-specific error types for the knowledge articles client.
//!
//! Only transport-level failures are errors. GraphQL-level errors returned in
//! a successful response body are exposed on
//! [`GraphqlResponse::errors`](crate::clients::graphql::GraphqlResponse) and
//! are the caller's to inspect.
//!
//! - [`GraphqlError::Http`]: Wraps underlying HTTP errors
//! - [`GraphqlError::Decode`]: The body was not a JSON response envelope

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for GraphQL API operations.
///
/// # Example
///
/// ```rust
/// use knowledge_articles::clients::graphql::GraphqlError;
/// use knowledge_articles::clients::{HttpError, HttpResponseError};
///
/// let http_error = HttpError::Response(HttpResponseError {
///     code: 401,
///     message: r#"{"message":"Unauthorized"}"#.to_string(),
///     error_reference: None,
/// });
/// let graphql_error: GraphqlError = http_error.into();
/// assert!(graphql_error.to_string().contains("Unauthorized"));
/// ```
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// An HTTP-level error occurred (network failure or non-2xx response).
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response body could not be decoded as a GraphQL response envelope.
    #[error("Invalid GraphQL response body: {0}")]
    Decode(#[from] serde_json::Error),
}
