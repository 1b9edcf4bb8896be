//! Article records and the collection response envelope.
//!
//! Every field is optional: the client passes through whatever the API
//! returned and never fails on a `null` or missing article field.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

use crate::clients::graphql::GraphqlResponse;

/// System metadata of an entry or asset.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Sys {
    /// Entry or asset ID.
    #[serde(default)]
    pub id: Option<String>,
}

/// An asset embedded in an article body.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct AssetBlock {
    #[serde(default)]
    pub sys: Option<Sys>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Assets linked from a rich text field.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct AssetLinks {
    /// Block-level embedded assets. `null` entries (unresolvable links) are
    /// skipped and a `null` list is empty.
    #[serde(default, deserialize_with = "entries_or_empty")]
    pub block: Vec<AssetBlock>,
}

/// Links of a rich text field.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct DetailsLinks {
    #[serde(default)]
    pub assets: Option<AssetLinks>,
}

/// The rich text body of an article.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Details {
    /// The rich text document, kept as raw JSON.
    #[serde(default)]
    pub json: serde_json::Value,
    #[serde(default)]
    pub links: Option<DetailsLinks>,
}

/// The cover image of an article.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ArticleImage {
    #[serde(default)]
    pub url: Option<String>,
}

/// A knowledge article.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub sys: Option<Sys>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub details: Option<Details>,
    /// Publish date as sent by the API (ISO 8601).
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub article_image: Option<ArticleImage>,
}

impl Article {
    /// Returns the entry ID, if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.sys.as_ref()?.id.as_deref()
    }

    /// Parses [`date`](Self::date) as an RFC 3339 timestamp.
    ///
    /// Returns `None` if the date is missing or not RFC 3339.
    #[must_use]
    pub fn published_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(self.date.as_deref()?).ok()
    }

    /// Returns the cover image URL, if present.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.article_image.as_ref()?.url.as_deref()
    }

    /// Returns the assets embedded in the body, or an empty slice.
    #[must_use]
    pub fn embedded_assets(&self) -> &[AssetBlock] {
        self.details
            .as_ref()
            .and_then(|details| details.links.as_ref())
            .and_then(|links| links.assets.as_ref())
            .map(|assets| assets.block.as_slice())
            .unwrap_or_default()
    }
}

/// `knowledgeArticleCollection { items }`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ArticleCollection {
    /// `null` entries are skipped.
    #[serde(default, deserialize_with = "nullable_entries")]
    pub items: Option<Vec<Article>>,
}

/// Decodes a nullable list whose entries may themselves be `null`.
fn nullable_entries<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let entries: Option<Vec<Option<T>>> = Option::deserialize(deserializer)?;
    Ok(entries.map(|entries| entries.into_iter().flatten().collect()))
}

fn entries_or_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(nullable_entries(deserializer)?.unwrap_or_default())
}

/// The `data` member of an article query response.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleData {
    #[serde(default)]
    pub knowledge_article_collection: Option<ArticleCollection>,
}

/// The response envelope of an article query.
pub type FetchResponse = GraphqlResponse<ArticleData>;

/// Pulls `data.knowledgeArticleCollection.items` out of a response.
///
/// Returns `None` when any level is absent; the items are returned in API
/// order with `null` entries skipped.
///
/// ```rust
/// use knowledge_articles::articles::{extract_article_entries, FetchResponse};
/// use serde_json::json;
///
/// let empty: FetchResponse = serde_json::from_value(json!({})).unwrap();
/// assert!(extract_article_entries(empty).is_none());
///
/// let listed: FetchResponse = serde_json::from_value(json!({
///     "data": { "knowledgeArticleCollection": { "items": [] } }
/// }))
/// .unwrap();
/// assert_eq!(extract_article_entries(listed), Some(vec![]));
/// ```
#[must_use]
pub fn extract_article_entries(response: FetchResponse) -> Option<Vec<Article>> {
    response.data?.knowledge_article_collection?.items
}
