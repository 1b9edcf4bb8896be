//! Error types for the knowledge articles client.
//!
//! This module contains error types used throughout the crate for configuration
//! and validation errors. Transport errors live in [`crate::clients`].
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use knowledge_articles::{SpaceId, ConfigError};
//!
//! let result = SpaceId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptySpaceId)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`ContentConfig`](crate::ContentConfig).
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Space ID cannot be empty.
    #[error("Space ID cannot be empty. Please provide the Contentful space identifier.")]
    EmptySpaceId,

    /// Delivery access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a Content Delivery API token.")]
    EmptyAccessToken,

    /// Preview access token cannot be empty.
    #[error("Preview access token cannot be empty. Please provide a Content Preview API token.")]
    EmptyPreviewAccessToken,

    /// Environment identifier is invalid.
    #[error("Invalid environment '{environment}'. Expected a non-empty identifier without '/'.")]
    InvalidEnvironment {
        /// The invalid environment that was provided.
        environment: String,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://graphql.contentful.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A required environment variable is not set.
    #[error("Missing environment variable '{name}'.")]
    MissingEnvVar {
        /// The name of the variable.
        name: &'static str,
    },
}
