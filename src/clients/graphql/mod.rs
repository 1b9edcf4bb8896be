//! GraphQL client for the Contentful GraphQL Content API.
//!
//! # Overview
//!
//! - [`GraphqlClient`]: Posts a query to a space endpoint and decodes the response
//! - [`GraphqlResponse`]: The `{ data, errors }` response envelope
//! - [`ContentToken`]: The delivery or preview bearer credential used per call
//! - [`GraphqlError`]: Error type for GraphQL API operations
//!
//! # Response Structure
//!
//! GraphQL responses contain these fields in the body:
//!
//! - `data`: The query result data
//! - `errors`: Any GraphQL errors (may accompany partial `data`)
//!
//! # Retry Behavior
//!
//! None. Each call issues one request and surfaces any failure directly.

mod client;
mod errors;
mod response;
mod token;

pub use client::GraphqlClient;
pub use errors::GraphqlError;
pub use response::{GraphqlResponse, GraphqlResponseError};
pub use token::{ContentToken, AUTHORIZATION_HEADER};
