//! HTTP response type for the knowledge articles client.

use std::collections::HashMap;

/// Header carrying the request id Contentful assigns to every API call.
pub const REQUEST_ID_HEADER: &str = "x-contentful-request-id";

/// Header carrying the computed complexity of a GraphQL query.
pub const QUERY_COST_HEADER: &str = "x-contentful-graphql-query-cost";

/// A raw HTTP response from the GraphQL Content API.
///
/// Header names are lowercased; a header may carry several values.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Contentful-Request-Id` header value, if present.
    ///
    /// Contentful support asks for this id when investigating a failed call.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header(REQUEST_ID_HEADER)
    }

    /// Returns the query complexity reported by the API, if present.
    #[must_use]
    pub fn query_cost(&self) -> Option<u32> {
        self.header(QUERY_COST_HEADER)
            .and_then(|value| value.trim().parse().ok())
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
