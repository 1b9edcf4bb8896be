//! Bearer credentials for the GraphQL Content API.
//!
//! Contentful issues two kinds of token per space:
//!
//! - **Delivery tokens** read published content only.
//! - **Preview tokens** also read drafts, and are required whenever a query
//!   passes `preview: true`.
//!
//! Both are sent as `Authorization: Bearer {token}`. [`ContentToken`] masks the
//! secret in its `Debug` output.
//!
//! # Example
//!
//! ```rust
//! use knowledge_articles::ContentToken;
//!
//! let token = ContentToken::Preview("preview-secret".to_string());
//! assert_eq!(token.header_value(), "Bearer preview-secret");
//! assert!(token.is_preview());
//! assert_eq!(format!("{:?}", token), "ContentToken::Preview(*****)");
//! ```

use std::fmt;

use crate::config::ContentConfig;

/// HTTP header carrying the bearer credential.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// A Contentful access token, tagged with the API it belongs to.
#[derive(Clone, PartialEq, Eq)]
pub enum ContentToken {
    /// Content Delivery API token (published content).
    Delivery(String),

    /// Content Preview API token (published and draft content).
    Preview(String),
}

impl ContentToken {
    /// Picks the token matching the `preview` flag from a configuration.
    #[must_use]
    pub fn select(config: &ContentConfig, preview: bool) -> Self {
        if preview {
            Self::Preview(config.preview_access_token().as_ref().to_string())
        } else {
            Self::Delivery(config.access_token().as_ref().to_string())
        }
    }

    /// Returns the raw secret.
    #[must_use]
    pub fn secret(&self) -> &str {
        match self {
            Self::Delivery(token) | Self::Preview(token) => token,
        }
    }

    /// Returns the `Authorization` header value (`Bearer {token}`).
    #[must_use]
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.secret())
    }

    /// Returns `true` for a preview token.
    #[must_use]
    pub const fn is_preview(&self) -> bool {
        matches!(self, Self::Preview(_))
    }
}

impl fmt::Debug for ContentToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delivery(_) => f.write_str("ContentToken::Delivery(*****)"),
            Self::Preview(_) => f.write_str("ContentToken::Preview(*****)"),
        }
    }
}
