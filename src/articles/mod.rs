//! Knowledge article retrieval.
//!
//! # Overview
//!
//! - [`ArticleClient`]: `get_all_articles` and `get_article`
//! - [`build_list_query`] / [`build_single_query`]: Query text for both shapes
//! - [`extract_article_entries`]: Pulls the item list out of a response
//! - [`Article`]: One knowledge article
//!
//! Every call is build → fetch → extract. A response without
//! `data.knowledgeArticleCollection.items` is not an error; it yields `None`.

mod client;
mod query;
mod types;

pub use client::{ArticleClient, DEFAULT_ARTICLE_LIMIT};
pub use query::{
    build_list_query, build_single_query, escape_graphql_string, ARTICLE_GRAPHQL_FIELDS,
};
pub use types::{
    extract_article_entries, Article, ArticleCollection, ArticleData, ArticleImage, AssetBlock,
    AssetLinks, Details, DetailsLinks, FetchResponse, Sys,
};
