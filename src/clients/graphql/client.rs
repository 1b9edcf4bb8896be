//! GraphQL client for the Contentful GraphQL Content API.
//!
//! This module provides the [`GraphqlClient`] type, which posts a query to the
//! space endpoint with the delivery or preview bearer token and decodes the
//! JSON response.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::graphql::token::{ContentToken, AUTHORIZATION_HEADER};
use crate::clients::graphql::{GraphqlError, GraphqlResponse};
use crate::clients::http_response::HttpResponse;
use crate::clients::CLIENT_VERSION;
use crate::config::ContentConfig;

/// GraphQL client for one Contentful space.
///
/// The client holds both credentials of the space and picks one per call:
/// the preview token when `preview` is `true`, the delivery token otherwise.
/// Each call issues exactly one request; there is no retry.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use knowledge_articles::{ContentConfig, GraphqlClient};
///
/// let config = ContentConfig::from_env()?;
/// let client = GraphqlClient::new(&config);
///
/// let response: GraphqlResponse<serde_json::Value> = client
///     .fetch_graphql("query { knowledgeArticleCollection(limit: 1) { total } }", false)
///     .await?;
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Full endpoint URL, space (and environment) included.
    endpoint: String,
    /// Content Delivery API credential.
    delivery_token: ContentToken,
    /// Content Preview API credential.
    preview_token: ContentToken,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client from a configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &ContentConfig) -> Self {
        let endpoint = Self::build_endpoint(config);

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Knowledge Articles Client v{CLIENT_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint,
            delivery_token: ContentToken::select(config, false),
            preview_token: ContentToken::select(config, true),
            default_headers,
        }
    }

    /// `{host}/content/v1/spaces/{space}[/environments/{environment}]`
    fn build_endpoint(config: &ContentConfig) -> String {
        let mut endpoint = format!(
            "{}/content/v1/spaces/{}",
            config.graphql_host().as_ref(),
            urlencoding::encode(config.space_id().as_ref())
        );
        if let Some(environment) = config.environment() {
            endpoint.push_str("/environments/");
            endpoint.push_str(&urlencoding::encode(environment.as_ref()));
        }
        endpoint
    }

    /// Returns the endpoint URL requests are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the default headers for this client.
    ///
    /// The `Authorization` header is not included; it is chosen per call.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the credential used for a call with the given `preview` flag.
    #[must_use]
    pub const fn token(&self, preview: bool) -> &ContentToken {
        if preview {
            &self.preview_token
        } else {
            &self.delivery_token
        }
    }

    /// Executes a query and decodes the response envelope.
    ///
    /// Sends `{"query": query}` with the preview token when `preview` is
    /// `true`, the delivery token otherwise. GraphQL `errors` in a successful
    /// response are logged and returned on the envelope, not raised.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] for network failures and non-2xx
    /// responses, and [`GraphqlError::Decode`] if the body is not a JSON
    /// response envelope whose `data` decodes as `T`.
    pub async fn fetch_graphql<T>(
        &self,
        query: &str,
        preview: bool,
    ) -> Result<GraphqlResponse<T>, GraphqlError>
    where
        T: DeserializeOwned,
    {
        let response = self.execute(query, preview).await?;

        if let Some(cost) = response.query_cost() {
            tracing::trace!("GraphQL query cost reported by Contentful: {}", cost);
        }

        let envelope: GraphqlResponse<T> = serde_json::from_value(response.body)?;
        if let Some(errors) = envelope.errors.as_deref().filter(|e| !e.is_empty()) {
            let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
            tracing::warn!(
                "GraphQL response from {} contained errors: {}",
                self.endpoint,
                messages.join("; ")
            );
        }

        Ok(envelope)
    }

    /// Executes a query and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] for network failures and non-2xx
    /// responses, and [`GraphqlError::Decode`] if a 2xx body is not JSON.
    pub async fn execute(&self, query: &str, preview: bool) -> Result<HttpResponse, GraphqlError> {
        let token = self.token(preview);
        tracing::debug!(
            "Posting GraphQL query to {} (preview: {})",
            self.endpoint,
            preview
        );

        let mut req_builder = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION_HEADER, token.header_value());
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        let body = serde_json::json!({ "query": query });
        let res = req_builder
            .body(body.to_string())
            .send()
            .await
            .map_err(HttpError::from)?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.map_err(HttpError::from)?;

        // Error bodies may be plain text; success bodies must be JSON
        let (body, decode_error) = match serde_json::from_str::<serde_json::Value>(&body_text) {
            Ok(body) => (body, None),
            Err(error) => (serde_json::json!({ "raw_body": body_text }), Some(error)),
        };
        let response = HttpResponse::new(code, res_headers, body);

        if !response.is_ok() {
            tracing::warn!(
                "GraphQL request to {} failed with status {}",
                self.endpoint,
                code
            );
            return Err(HttpError::Response(HttpResponseError {
                code,
                message: Self::serialize_error(&response),
                error_reference: response.request_id().map(String::from),
            })
            .into());
        }

        match decode_error {
            Some(error) => Err(error.into()),
            None => Ok(response),
        }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes an error response body to a compact JSON message.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        for field in ["errors", "message", "sys", "raw_body"] {
            if let Some(value) = response.body.get(field) {
                error_body.insert(field.to_string(), value.clone());
            }
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}
