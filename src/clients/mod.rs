//! Transport layer for the Contentful GraphQL Content API.
//!
//! # Overview
//!
//! - [`graphql::GraphqlClient`]: Sends one GraphQL query per call
//! - [`graphql::ContentToken`]: Delivery/preview bearer credential
//! - [`HttpResponse`]: A raw response with lowercased headers and a JSON body
//! - [`HttpError`]: Network failures and non-2xx responses
//!
//! # Example
//!
//! ```rust,ignore
//! use knowledge_articles::clients::graphql::{GraphqlClient, GraphqlResponse};
//! use knowledge_articles::ContentConfig;
//!
//! let client = GraphqlClient::new(&ContentConfig::from_env()?);
//! let response: GraphqlResponse<serde_json::Value> =
//!     client.fetch_graphql("query { __typename }", false).await?;
//! ```

mod errors;
pub mod graphql;
mod http_response;

pub use errors::{HttpError, HttpResponseError};
pub use http_response::{HttpResponse, QUERY_COST_HEADER, REQUEST_ID_HEADER};

pub use graphql::{ContentToken, GraphqlClient, GraphqlError, GraphqlResponse};

/// Crate version, reported in the `User-Agent` header.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");
