//! Configuration types for the knowledge articles client.
//!
//! This module provides the configuration value that is handed to the client
//! at construction time. Nothing in the crate reads process-wide state while
//! a request is in flight.
//!
//! # Overview
//!
//! - [`ContentConfig`]: The configuration struct holding the space and credentials
//! - [`ContentConfigBuilder`]: A builder for constructing [`ContentConfig`] instances
//! - [`SpaceId`]: A validated space identifier
//! - [`AccessToken`]: A validated access token with masked debug output
//! - [`EnvironmentId`]: A validated environment identifier
//! - [`HostUrl`]: A validated GraphQL API base URL
//!
//! # Example
//!
//! ```rust
//! use knowledge_articles::{AccessToken, ContentConfig, SpaceId};
//!
//! let config = ContentConfig::builder()
//!     .space_id(SpaceId::new("my-space").unwrap())
//!     .access_token(AccessToken::new("delivery-token").unwrap())
//!     .preview_access_token(AccessToken::new("preview-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.space_id().as_ref(), "my-space");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, EnvironmentId, HostUrl, SpaceId};

use crate::error::ConfigError;

/// Default base URL of the Contentful GraphQL Content API.
pub const DEFAULT_GRAPHQL_HOST: &str = "https://graphql.contentful.com";

/// Environment variable holding the space identifier.
pub const SPACE_ID_ENV: &str = "CONTENTFUL_SPACE_ID";
/// Environment variable holding the Content Delivery API token.
pub const ACCESS_TOKEN_ENV: &str = "CONTENTFUL_ACCESS_TOKEN";
/// Environment variable holding the Content Preview API token.
pub const PREVIEW_ACCESS_TOKEN_ENV: &str = "CONTENTFUL_PREVIEW_ACCESS_TOKEN";
/// Optional environment variable selecting a space environment.
pub const ENVIRONMENT_ENV: &str = "CONTENTFUL_ENVIRONMENT";

/// Configuration for the knowledge articles client.
///
/// # Thread Safety
///
/// `ContentConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use knowledge_articles::{AccessToken, ContentConfig, EnvironmentId, SpaceId};
///
/// let config = ContentConfig::builder()
///     .space_id(SpaceId::new("my-space").unwrap())
///     .access_token(AccessToken::new("delivery-token").unwrap())
///     .preview_access_token(AccessToken::new("preview-token").unwrap())
///     .environment(EnvironmentId::new("staging").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.environment().unwrap().as_ref(), "staging");
/// ```
#[derive(Clone, Debug)]
pub struct ContentConfig {
    space_id: SpaceId,
    access_token: AccessToken,
    preview_access_token: AccessToken,
    environment: Option<EnvironmentId>,
    graphql_host: HostUrl,
    user_agent_prefix: Option<String>,
}

impl ContentConfig {
    /// Creates a new builder for constructing a `ContentConfig`.
    #[must_use]
    pub fn builder() -> ContentConfigBuilder {
        ContentConfigBuilder::new()
    }

    /// Builds a configuration from the `CONTENTFUL_*` environment variables.
    ///
    /// Reads [`SPACE_ID_ENV`], [`ACCESS_TOKEN_ENV`] and
    /// [`PREVIEW_ACCESS_TOKEN_ENV`], plus the optional [`ENVIRONMENT_ENV`].
    /// The variables are read once, here; the resulting value is what the
    /// client uses for every request.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if a required variable is unset,
    /// or the matching validation error if a value is empty or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    ///
    /// This is what [`from_env`](Self::from_env) uses; it is public so callers
    /// can source the same variables from somewhere other than the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Same as [`from_env`](Self::from_env).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::MissingEnvVar { name });

        let preview_access_token = AccessToken::new(required(PREVIEW_ACCESS_TOKEN_ENV)?)
            .map_err(|_| ConfigError::EmptyPreviewAccessToken)?;

        let mut builder = Self::builder()
            .space_id(SpaceId::new(required(SPACE_ID_ENV)?)?)
            .access_token(AccessToken::new(required(ACCESS_TOKEN_ENV)?)?)
            .preview_access_token(preview_access_token);

        if let Some(environment) = lookup(ENVIRONMENT_ENV).filter(|e| !e.trim().is_empty()) {
            builder = builder.environment(EnvironmentId::new(environment)?);
        }

        builder.build()
    }

    /// Returns the space identifier.
    #[must_use]
    pub const fn space_id(&self) -> &SpaceId {
        &self.space_id
    }

    /// Returns the Content Delivery API token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the Content Preview API token.
    #[must_use]
    pub const fn preview_access_token(&self) -> &AccessToken {
        &self.preview_access_token
    }

    /// Returns the space environment, if configured.
    #[must_use]
    pub const fn environment(&self) -> Option<&EnvironmentId> {
        self.environment.as_ref()
    }

    /// Returns the GraphQL API base URL.
    #[must_use]
    pub const fn graphql_host(&self) -> &HostUrl {
        &self.graphql_host
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ContentConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ContentConfig>();
};

/// Builder for constructing [`ContentConfig`] instances.
///
/// Required fields are `space_id`, `access_token` and `preview_access_token`.
///
/// # Defaults
///
/// - `environment`: `None` (the space's master environment)
/// - `graphql_host`: [`DEFAULT_GRAPHQL_HOST`]
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ContentConfigBuilder {
    space_id: Option<SpaceId>,
    access_token: Option<AccessToken>,
    preview_access_token: Option<AccessToken>,
    environment: Option<EnvironmentId>,
    graphql_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ContentConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the space identifier (required).
    #[must_use]
    pub fn space_id(mut self, space_id: SpaceId) -> Self {
        self.space_id = Some(space_id);
        self
    }

    /// Sets the Content Delivery API token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the Content Preview API token (required).
    #[must_use]
    pub fn preview_access_token(mut self, token: AccessToken) -> Self {
        self.preview_access_token = Some(token);
        self
    }

    /// Sets the space environment.
    #[must_use]
    pub fn environment(mut self, environment: EnvironmentId) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Overrides the GraphQL API base URL.
    ///
    /// Mostly useful for pointing the client at a proxy or a mock server.
    #[must_use]
    pub fn graphql_host(mut self, host: HostUrl) -> Self {
        self.graphql_host = Some(host);
        self
    }

    /// Sets a prefix for the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ContentConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if a required field is not set.
    pub fn build(self) -> Result<ContentConfig, ConfigError> {
        let space_id = self
            .space_id
            .ok_or(ConfigError::MissingRequiredField { field: "space_id" })?;
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;
        let preview_access_token =
            self.preview_access_token
                .ok_or(ConfigError::MissingRequiredField {
                    field: "preview_access_token",
                })?;

        let graphql_host = match self.graphql_host {
            Some(host) => host,
            None => HostUrl::new(DEFAULT_GRAPHQL_HOST)?,
        };

        Ok(ContentConfig {
            space_id,
            access_token,
            preview_access_token,
            environment: self.environment,
            graphql_host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base_builder() -> ContentConfigBuilder {
        ContentConfig::builder()
            .space_id(SpaceId::new("space").unwrap())
            .access_token(AccessToken::new("delivery").unwrap())
            .preview_access_token(AccessToken::new("preview").unwrap())
    }

    fn lookup_from(vars: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> =
            vars.iter().map(|(k, v)| (*k, (*v).to_string())).collect();
        move |name: &'static str| map.get(name).cloned()
    }

    #[test]
    fn test_builder_applies_defaults() {
        let config = base_builder().build().unwrap();

        assert_eq!(config.space_id().as_ref(), "space");
        assert_eq!(config.access_token().as_ref(), "delivery");
        assert_eq!(config.preview_access_token().as_ref(), "preview");
        assert_eq!(config.graphql_host().as_ref(), DEFAULT_GRAPHQL_HOST);
        assert!(config.environment().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_requires_space_id() {
        let result = ContentConfig::builder()
            .access_token(AccessToken::new("delivery").unwrap())
            .preview_access_token(AccessToken::new("preview").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "space_id" })
        ));
    }

    #[test]
    fn test_builder_requires_preview_access_token() {
        let result = ContentConfig::builder()
            .space_id(SpaceId::new("space").unwrap())
            .access_token(AccessToken::new("delivery").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "preview_access_token"
            })
        ));
    }

    #[test]
    fn test_builder_overrides() {
        let config = base_builder()
            .graphql_host(HostUrl::new("http://localhost:8080").unwrap())
            .environment(EnvironmentId::new("staging").unwrap())
            .user_agent_prefix("KnowledgeBase/2.0")
            .build()
            .unwrap();

        assert_eq!(config.graphql_host().as_ref(), "http://localhost:8080");
        assert_eq!(config.environment().unwrap().as_ref(), "staging");
        assert_eq!(config.user_agent_prefix(), Some("KnowledgeBase/2.0"));
    }

    #[test]
    fn test_debug_output_masks_tokens() {
        let config = base_builder().build().unwrap();
        let debug = format!("{config:?}");

        assert!(!debug.contains("delivery"));
        assert!(!debug.contains("\"preview\""));
        assert!(debug.contains("AccessToken(*****)"));
    }

    #[test]
    fn test_from_lookup_reads_all_variables() {
        let config = ContentConfig::from_lookup(lookup_from(&[
            (SPACE_ID_ENV, "space-from-env"),
            (ACCESS_TOKEN_ENV, "delivery-from-env"),
            (PREVIEW_ACCESS_TOKEN_ENV, "preview-from-env"),
            (ENVIRONMENT_ENV, "staging"),
        ]))
        .unwrap();

        assert_eq!(config.space_id().as_ref(), "space-from-env");
        assert_eq!(config.access_token().as_ref(), "delivery-from-env");
        assert_eq!(config.preview_access_token().as_ref(), "preview-from-env");
        assert_eq!(config.environment().unwrap().as_ref(), "staging");
    }

    #[test]
    fn test_from_lookup_reports_missing_variable() {
        let result = ContentConfig::from_lookup(lookup_from(&[
            (SPACE_ID_ENV, "space"),
            (PREVIEW_ACCESS_TOKEN_ENV, "preview"),
        ]));

        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingEnvVar {
                name: ACCESS_TOKEN_ENV
            }
        );
    }

    #[test]
    fn test_from_lookup_rejects_empty_preview_token() {
        let result = ContentConfig::from_lookup(lookup_from(&[
            (SPACE_ID_ENV, "space"),
            (ACCESS_TOKEN_ENV, "delivery"),
            (PREVIEW_ACCESS_TOKEN_ENV, ""),
        ]));

        assert_eq!(result.unwrap_err(), ConfigError::EmptyPreviewAccessToken);
    }

    #[test]
    fn test_from_lookup_ignores_blank_environment() {
        let config = ContentConfig::from_lookup(lookup_from(&[
            (SPACE_ID_ENV, "space"),
            (ACCESS_TOKEN_ENV, "delivery"),
            (PREVIEW_ACCESS_TOKEN_ENV, "preview"),
            (ENVIRONMENT_ENV, "  "),
        ]))
        .unwrap();

        assert!(config.environment().is_none());
    }
}
