//! Provider HTTP client tests against a mock server

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bookcode_server::providers::{
    GoogleBooksProvider, MetadataProvider, NdlProvider, OpenBdProvider, OpenLibraryProvider,
};

const ISBN: &str = "9784101010137";

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_millis(500))
        .build()
        .expect("Failed to build client")
}

#[tokio::test]
async fn test_openbd_unknown_isbn() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get"))
        .and(query_param("isbn", ISBN))
        .respond_with(ResponseTemplate::new(200).set_body_string("[null]"))
        .mount(&server)
        .await;

    let provider = OpenBdProvider::new(client(), &server.uri());
    assert_eq!(provider.fetch_by_isbn(ISBN).await, None);
}

#[tokio::test]
async fn test_google_books_sends_query_and_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/volumes"))
        .and(query_param("q", format!("isbn:{}", ISBN)))
        .and(query_param("key", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalItems": 1,
            "items": [{ "volumeInfo": { "title": "こころ", "authors": ["夏目漱石"] } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = GoogleBooksProvider::new(client(), &server.uri(), Some("secret".to_string()));
    let metadata = provider.fetch_by_isbn(ISBN).await.expect("metadata");

    assert_eq!(metadata.title.as_deref(), Some("こころ"));
    assert_eq!(metadata.authors, vec!["夏目漱石".to_string()]);
}

#[tokio::test]
async fn test_google_books_invalid_body_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/volumes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>quota exceeded</html>"))
        .mount(&server)
        .await;

    let provider = GoogleBooksProvider::new(client(), &server.uri(), None);
    assert_eq!(provider.fetch_by_isbn(ISBN).await, None);
}

#[tokio::test]
async fn test_ndl_opensearch() {
    let server = MockServer::start().await;
    let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcndl="http://ndl.go.jp/dcndl/terms/"
     xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" version="2.0">
  <channel>
    <item>
      <dc:title>こころ</dc:title>
      <dc:creator>夏目, 漱石</dc:creator>
      <dc:publisher>新潮社</dc:publisher>
      <dc:subject xsi:type="dcndl:NDC10">913.6</dc:subject>
    </item>
  </channel>
</rss>"#;
    Mock::given(method("GET"))
        .and(path("/api/opensearch"))
        .and(query_param("isbn", ISBN))
        .respond_with(ResponseTemplate::new(200).set_body_string(xml))
        .mount(&server)
        .await;

    let provider = NdlProvider::new(client(), &server.uri());
    let metadata = provider.fetch_by_isbn(ISBN).await.expect("metadata");

    assert_eq!(metadata.title.as_deref(), Some("こころ"));
    assert_eq!(metadata.publisher.as_deref(), Some("新潮社"));
    assert_eq!(metadata.ndc.as_deref(), Some("913.6"));
}

#[tokio::test]
async fn test_open_library_bibkeys() {
    let server = MockServer::start().await;
    let bibkey = format!("ISBN:{}", ISBN);
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .and(query_param("bibkeys", bibkey.as_str()))
        .and(query_param("format", "json"))
        .and(query_param("jscmd", "data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            (bibkey.clone()): {
                "title": "Kokoro",
                "publishers": [{ "name": "Shinchōsha" }]
            }
        })))
        .mount(&server)
        .await;

    let provider = OpenLibraryProvider::new(client(), &format!("{}/", server.uri()));
    let metadata = provider.fetch_by_isbn(ISBN).await.expect("metadata");

    assert_eq!(metadata.title.as_deref(), Some("Kokoro"));
    assert_eq!(metadata.publisher.as_deref(), Some("Shinchōsha"));
}

#[tokio::test]
async fn test_slow_provider_times_out_as_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("[null]")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let provider = OpenBdProvider::new(client(), &server.uri());
    assert_eq!(provider.fetch_by_isbn(ISBN).await, None);
}
