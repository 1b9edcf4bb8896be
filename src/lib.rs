//! # Knowledge Articles
//!
//! A client for knowledge articles stored in Contentful and served by the
//! GraphQL Content API.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ContentConfig`] and [`ContentConfigBuilder`]
//! - Validated newtypes for the space, environment, host and access tokens
//! - A GraphQL transport that picks the delivery or preview token per call
//! - [`ArticleClient`] with `get_all_articles` and `get_article`
//!
//! ## Quick Start
//!
//! ```rust
//! use knowledge_articles::{AccessToken, ArticleClient, ContentConfig, SpaceId};
//!
//! let config = ContentConfig::builder()
//!     .space_id(SpaceId::new("your-space-id").unwrap())
//!     .access_token(AccessToken::new("your-delivery-token").unwrap())
//!     .preview_access_token(AccessToken::new("your-preview-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = ArticleClient::new(&config);
//! ```
//!
//! ## Fetching Articles
//!
//! ```rust,ignore
//! use knowledge_articles::{ArticleClient, ContentConfig};
//!
//! // Reads CONTENTFUL_SPACE_ID, CONTENTFUL_ACCESS_TOKEN and
//! // CONTENTFUL_PREVIEW_ACCESS_TOKEN once, here.
//! let client = ArticleClient::new(&ContentConfig::from_env()?);
//!
//! // Latest three published articles; `None` means the response had no collection
//! let articles = client.get_all_articles(None, false).await?;
//!
//! // A single article in draft mode (preview token, `preview: true`)
//! let article = client.get_article("getting-started", true).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Absence is not an error**: Missing response levels yield `None`
//! - **One request per call**: No retry, no cache
//! - **Thread-safe**: All client types are `Send + Sync`

pub mod articles;
pub mod clients;
pub mod config;
pub mod error;

pub use articles::{Article, ArticleClient, DEFAULT_ARTICLE_LIMIT};
pub use config::{
    AccessToken, ContentConfig, ContentConfigBuilder, EnvironmentId, HostUrl, SpaceId,
};
pub use error::ConfigError;

pub use clients::{
    ContentToken, GraphqlClient, GraphqlError, GraphqlResponse, HttpError, HttpResponse,
    HttpResponseError,
};
