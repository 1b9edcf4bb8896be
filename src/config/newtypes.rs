//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Contentful space identifier.
///
/// # Example
///
/// ```rust
/// use knowledge_articles::SpaceId;
///
/// let space = SpaceId::new("abc123xyz").unwrap();
/// assert_eq!(space.as_ref(), "abc123xyz");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpaceId(String);

impl SpaceId {
    /// Creates a new validated space ID.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySpaceId`] if the ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into().trim().to_string();
        if id.is_empty() {
            return Err(ConfigError::EmptySpaceId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for SpaceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated Contentful API access token.
///
/// Used for both the Content Delivery API token and the Content Preview API
/// token. The `Debug` implementation masks the value so tokens never end up
/// in logs.
///
/// # Example
///
/// ```rust
/// use knowledge_articles::AccessToken;
///
/// let token = AccessToken::new("my-token").unwrap();
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated Contentful environment identifier (e.g. `master`, `staging`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvironmentId(String);

impl EnvironmentId {
    /// Creates a new validated environment ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvironment`] if the ID is empty or
    /// contains a `/`.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into().trim().to_string();
        if id.is_empty() || id.contains('/') {
            return Err(ConfigError::InvalidEnvironment { environment: id });
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for EnvironmentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated base URL for the GraphQL Content API.
///
/// Only the scheme and host are checked; any trailing `/` is dropped so the
/// API path can be appended directly.
///
/// # Example
///
/// ```rust
/// use knowledge_articles::HostUrl;
///
/// let url = HostUrl::new("https://graphql.contentful.com/").unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), Some("graphql.contentful.com"));
/// assert_eq!(url.as_ref(), "https://graphql.contentful.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidHostUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}
