//! HTTP-specific error types for the knowledge articles client.
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use knowledge_articles::clients::HttpError;
//!
//! match client.execute(query, false).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(GraphqlError::Http(HttpError::Response(e))) => {
//!         println!("API error {}: {}", e.code, e.message);
//!     }
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request receives a non-successful response.
///
/// The message holds the JSON-serialized `errors`/`message` fields of the
/// response body, plus a reference line when the API returned a request id.
///
/// # Example
///
/// ```rust
/// use knowledge_articles::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 401,
///     message: r#"{"message":"The access token you sent could not be found or is invalid."}"#.to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// assert!(error.to_string().contains("access token"));
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Reference ID for error reporting (from the `X-Contentful-Request-Id` header).
    pub error_reference: Option<String>,
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
