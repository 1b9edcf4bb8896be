//! Integration tests for article retrieval.
//!
//! A mock server stands in for the GraphQL Content API; each test checks
//! what the client sent and what it made of the response.

use knowledge_articles::articles::build_single_query;
use knowledge_articles::{
    AccessToken, Article, ArticleClient, ContentConfig, GraphqlError, HostUrl, SpaceId,
};
use serde_json::{json, Value};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SPACE_PATH: &str = "/content/v1/spaces/kb-space";

fn client_for(server: &MockServer) -> ArticleClient {
    let config = ContentConfig::builder()
        .space_id(SpaceId::new("kb-space").unwrap())
        .access_token(AccessToken::new("delivery-token").unwrap())
        .preview_access_token(AccessToken::new("preview-token").unwrap())
        .graphql_host(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    ArticleClient::new(&config)
}

fn article_json(slug: &str, title: &str) -> Value {
    json!({
        "sys": { "id": format!("id-{slug}") },
        "title": title,
        "slug": slug,
        "summary": format!("Summary of {title}"),
        "details": {
            "json": { "nodeType": "document", "data": {}, "content": [] },
            "links": { "assets": { "block": [] } }
        },
        "date": "2024-05-01T00:00:00.000Z",
        "authorName": "Support Team",
        "categoryName": "Guides",
        "articleImage": { "url": format!("https://images.ctfassets.net/{slug}.png") }
    })
}

fn collection(items: &[Value]) -> Value {
    json!({ "data": { "knowledgeArticleCollection": { "items": items } } })
}

async fn mount_collection(server: &MockServer, items: &[Value]) {
    Mock::given(method("POST"))
        .and(path(SPACE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection(items)))
        .mount(server)
        .await;
}

// ============================================================================
// get_all_articles
// ============================================================================

#[tokio::test]
async fn test_get_all_articles_returns_items_unchanged() {
    let server = MockServer::start().await;
    let items = [
        article_json("c", "Third"),
        article_json("a", "First"),
        article_json("b", "Second"),
    ];
    mount_collection(&server, &items).await;

    let articles = client_for(&server)
        .get_all_articles(Some(3), false)
        .await
        .unwrap()
        .unwrap();

    let expected: Vec<Article> = items
        .iter()
        .map(|item| serde_json::from_value(item.clone()).unwrap())
        .collect();
    assert_eq!(articles, expected);
    let slugs: Vec<_> = articles.iter().filter_map(|a| a.slug.as_deref()).collect();
    assert_eq!(slugs, ["c", "a", "b"]);
}

#[tokio::test]
async fn test_get_all_articles_defaults_to_limit_three() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SPACE_PATH))
        .and(body_string_contains("limit: 3"))
        .and(body_string_contains("preview: false"))
        .and(body_string_contains("order: date_DESC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection(&[])))
        .expect(1)
        .mount(&server)
        .await;

    let articles = client_for(&server)
        .get_all_articles(None, false)
        .await
        .unwrap();

    assert_eq!(articles, Some(vec![]));
}

#[tokio::test]
async fn test_get_all_articles_draft_mode_uses_preview_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("Authorization", "Bearer preview-token"))
        .and(body_string_contains("preview: true"))
        .and(body_string_contains("limit: 10"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(collection(&[article_json("d", "Draft")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let articles = client_for(&server)
        .get_all_articles(Some(10), true)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].title.as_deref(), Some("Draft"));
}

#[tokio::test]
async fn test_get_all_articles_published_mode_uses_delivery_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("Authorization", "Bearer delivery-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection(&[])))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .get_all_articles(None, false)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_all_articles_missing_collection_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .mount(&server)
        .await;

    let articles = client_for(&server)
        .get_all_articles(None, false)
        .await
        .unwrap();

    assert!(articles.is_none());
}

#[tokio::test]
async fn test_get_all_articles_graphql_errors_without_data_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{ "message": "Query execution error" }]
        })))
        .mount(&server)
        .await;

    let articles = client_for(&server)
        .get_all_articles(None, false)
        .await
        .unwrap();

    assert!(articles.is_none());
}

#[tokio::test]
async fn test_get_all_articles_propagates_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let result = client_for(&server).get_all_articles(None, false).await;

    assert!(matches!(result, Err(GraphqlError::Http(_))));
}

#[tokio::test]
async fn test_get_all_articles_tolerates_null_asset_blocks() {
    let mut unresolved = article_json("unresolved", "Unresolved asset");
    unresolved["details"]["links"]["assets"]["block"] = json!([null]);
    let mut unlinked = article_json("unlinked", "No asset list");
    unlinked["details"]["links"]["assets"]["block"] = Value::Null;
    let server = MockServer::start().await;
    mount_collection(&server, &[unresolved, Value::Null, unlinked]).await;

    let articles = client_for(&server)
        .get_all_articles(None, false)
        .await
        .unwrap()
        .unwrap();

    let slugs: Vec<_> = articles.iter().filter_map(|a| a.slug.as_deref()).collect();
    assert_eq!(slugs, ["unresolved", "unlinked"]);
    assert!(articles.iter().all(|a| a.embedded_assets().is_empty()));
}

// ============================================================================
// get_article
// ============================================================================

#[tokio::test]
async fn test_get_article_with_unresolved_asset_block() {
    let server = MockServer::start().await;
    let mut article = article_json("broken-image", "Broken image");
    article["details"]["links"]["assets"]["block"] = json!([null]);
    mount_collection(&server, &[article]).await;

    let article = client_for(&server)
        .get_article("broken-image", false)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(article.title.as_deref(), Some("Broken image"));
    assert!(article.embedded_assets().is_empty());
}

#[tokio::test]
async fn test_get_article_with_null_asset_block_list() {
    let server = MockServer::start().await;
    let mut article = article_json("no-assets", "No assets");
    article["details"]["links"]["assets"]["block"] = Value::Null;
    mount_collection(&server, &[article]).await;

    let article = client_for(&server)
        .get_article("no-assets", true)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(article.slug.as_deref(), Some("no-assets"));
    assert!(article.embedded_assets().is_empty());
}

#[tokio::test]
async fn test_get_article_returns_first_item() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SPACE_PATH))
        .and(body_string_contains("limit: 1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(collection(&[article_json("x", "X marks")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let article = client_for(&server)
        .get_article("x", false)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(article.slug.as_deref(), Some("x"));
    assert_eq!(article.id(), Some("id-x"));
    assert_eq!(
        article.image_url(),
        Some("https://images.ctfassets.net/x.png")
    );
}

#[tokio::test]
async fn test_get_article_with_empty_items_is_none() {
    let server = MockServer::start().await;
    mount_collection(&server, &[]).await;

    let article = client_for(&server).get_article("x", false).await.unwrap();

    assert!(article.is_none());
}

#[tokio::test]
async fn test_get_article_with_missing_envelope_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let article = client_for(&server).get_article("x", false).await.unwrap();

    assert!(article.is_none());
}

#[tokio::test]
async fn test_get_article_sends_single_query_verbatim() {
    let server = MockServer::start().await;
    let expected_body = json!({ "query": build_single_query("reset-password", true) });
    Mock::given(method("POST"))
        .and(wiremock::matchers::body_json(expected_body))
        .and(header("Authorization", "Bearer preview-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection(&[])))
        .expect(1)
        .mount(&server)
        .await;

    let article = client_for(&server)
        .get_article("reset-password", true)
        .await
        .unwrap();

    assert!(article.is_none());
}

#[tokio::test]
async fn test_get_article_published_mode_uses_delivery_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("Authorization", "Bearer delivery-token"))
        .and(body_string_contains(r#"slug: \"faq\""#))
        .and(body_string_contains("preview: false"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(collection(&[article_json("faq", "FAQ")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let article = client_for(&server)
        .get_article("faq", false)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(article.title.as_deref(), Some("FAQ"));
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("limit: 1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(collection(&[article_json("one", "One")])),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("limit: 2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection(&[
            article_json("a", "A"),
            article_json("b", "B"),
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let (single, list) = tokio::join!(
        client.get_article("one", false),
        client.get_all_articles(Some(2), false)
    );

    assert_eq!(single.unwrap().unwrap().slug.as_deref(), Some("one"));
    assert_eq!(list.unwrap().unwrap().len(), 2);
}
