//! The article-level client.

use crate::articles::query::{build_list_query, build_single_query};
use crate::articles::types::{extract_article_entries, Article, FetchResponse};
use crate::clients::graphql::{GraphqlClient, GraphqlError};
use crate::config::ContentConfig;

/// Number of articles [`ArticleClient::get_all_articles`] fetches when no
/// limit is given.
pub const DEFAULT_ARTICLE_LIMIT: u32 = 3;

/// Client for reading knowledge articles from one space.
///
/// Each call builds a query, performs one request, and extracts the items.
/// Nothing is cached and nothing is shared between calls, so concurrent
/// calls are fully independent.
///
/// # Example
///
/// ```rust,ignore
/// use knowledge_articles::{ArticleClient, ContentConfig};
///
/// let client = ArticleClient::new(&ContentConfig::from_env()?);
///
/// // The three most recent published articles
/// let latest = client.get_all_articles(None, false).await?.unwrap_or_default();
///
/// // One article, including unpublished changes
/// if let Some(article) = client.get_article("getting-started", true).await? {
///     println!("{}", article.title.unwrap_or_default());
/// }
/// ```
#[derive(Debug)]
pub struct ArticleClient {
    graphql: GraphqlClient,
}

// Verify ArticleClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ArticleClient>();
};

impl ArticleClient {
    /// Creates a new article client from a configuration.
    #[must_use]
    pub fn new(config: &ContentConfig) -> Self {
        Self::with_graphql_client(GraphqlClient::new(config))
    }

    /// Wraps an existing GraphQL client.
    #[must_use]
    pub const fn with_graphql_client(graphql: GraphqlClient) -> Self {
        Self { graphql }
    }

    /// Returns the underlying GraphQL client.
    #[must_use]
    pub const fn graphql_client(&self) -> &GraphqlClient {
        &self.graphql
    }

    /// Fetches the most recent articles that have a slug, newest first.
    ///
    /// `limit` defaults to [`DEFAULT_ARTICLE_LIMIT`]. With `is_draft_mode`
    /// the query runs against the preview API and includes unpublished
    /// changes.
    ///
    /// Returns `Ok(None)` if the response has no article collection.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the body is not a
    /// JSON response envelope.
    pub async fn get_all_articles(
        &self,
        limit: Option<u32>,
        is_draft_mode: bool,
    ) -> Result<Option<Vec<Article>>, GraphqlError> {
        let query = build_list_query(limit.unwrap_or(DEFAULT_ARTICLE_LIMIT), is_draft_mode);
        let response: FetchResponse = self.graphql.fetch_graphql(&query, is_draft_mode).await?;
        Ok(extract_article_entries(response))
    }

    /// Fetches the article whose slug equals `slug`.
    ///
    /// The slug is placed in the query verbatim; see
    /// [`escape_graphql_string`](crate::articles::escape_graphql_string) for
    /// input that may contain quotes or backslashes.
    ///
    /// Returns `Ok(None)` if no article matches or the response has no
    /// article collection.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the body is not a
    /// JSON response envelope.
    pub async fn get_article(
        &self,
        slug: &str,
        is_draft_mode: bool,
    ) -> Result<Option<Article>, GraphqlError> {
        let query = build_single_query(slug, is_draft_mode);
        let response: FetchResponse = self.graphql.fetch_graphql(&query, is_draft_mode).await?;
        Ok(extract_article_entries(response).and_then(|articles| articles.into_iter().next()))
    }
}
