//! Query text for the `knowledgeArticleCollection` field.
//!
//! Both query shapes select [`ARTICLE_GRAPHQL_FIELDS`], so every article has
//! the same shape whichever entry point fetched it.
//!
//! Caller input is interpolated as-is: `limit` is a `u32` and cannot break
//! the query, but a slug containing `"` or `\` produces a malformed query
//! that the API rejects. Pass untrusted slugs through
//! [`escape_graphql_string`] first.

/// Field selection shared by every article query.
pub const ARTICLE_GRAPHQL_FIELDS: &str = r"
  sys {
    id
  }
  title
  slug
  summary
  details {
    json
    links {
      assets {
        block {
          sys {
            id
          }
          url
          description
        }
      }
    }
  }
  date
  authorName
  categoryName
  articleImage {
    url
  }
";

/// Builds the query for the `limit` most recent articles that have a slug.
///
/// ```rust
/// use knowledge_articles::articles::build_list_query;
///
/// let query = build_list_query(5, true);
/// assert!(query.contains("limit: 5"));
/// assert!(query.contains("preview: true"));
/// assert!(query.contains("order: date_DESC"));
/// ```
#[must_use]
pub fn build_list_query(limit: u32, is_draft_mode: bool) -> String {
    format!(
        "query {{
    knowledgeArticleCollection(where:{{slug_exists: true}}, order: date_DESC, limit: {limit}, preview: {is_draft_mode}) {{
      items {{
        {ARTICLE_GRAPHQL_FIELDS}
      }}
    }}
  }}"
    )
}

/// Builds the query for the single article whose slug equals `slug`.
///
/// ```rust
/// use knowledge_articles::articles::build_single_query;
///
/// let query = build_single_query("getting-started", false);
/// assert!(query.contains(r#"slug: "getting-started""#));
/// assert!(query.contains("limit: 1"));
/// assert!(query.contains("preview: false"));
/// ```
#[must_use]
pub fn build_single_query(slug: &str, is_draft_mode: bool) -> String {
    format!(
        "query {{
    knowledgeArticleCollection(where:{{slug: \"{slug}\"}}, limit: 1, preview: {is_draft_mode}) {{
      items {{
        {ARTICLE_GRAPHQL_FIELDS}
      }}
    }}
  }}"
    )
}

/// Escapes a value for use inside a GraphQL string literal.
///
/// Quotes and backslashes are backslash-escaped, and control characters are
/// written as `\n`, `\r`, `\t` or `\uXXXX`.
///
/// ```rust
/// use knowledge_articles::articles::escape_graphql_string;
///
/// assert_eq!(escape_graphql_string(r#"a"b\c"#), r#"a\"b\\c"#);
/// assert_eq!(escape_graphql_string("plain-slug"), "plain-slug");
/// ```
#[must_use]
pub fn escape_graphql_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => escaped.push_str(&format!("\\u{:04X}", u32::from(c))),
            c => escaped.push(c),
        }
    }
    escaped
}
