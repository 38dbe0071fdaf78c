//! Google Books provider

use async_trait::async_trait;
use serde::Deserialize;

use super::{get_text, settle, trim_base_url, MetadataProvider};
use crate::{
    error::{AppError, AppResult},
    models::{metadata::non_blank, BookMetadata},
};

#[derive(Debug, Deserialize)]
struct GoogleBooksResponse {
    items: Option<Vec<GoogleBookItem>>,
}

#[derive(Debug, Deserialize)]
struct GoogleBookItem {
    #[serde(rename = "volumeInfo")]
    volume_info: GoogleVolumeInfo,
}

#[derive(Debug, Deserialize)]
struct GoogleVolumeInfo {
    title: Option<String>,
    subtitle: Option<String>,
    authors: Option<Vec<String>>,
    publisher: Option<String>,
    #[serde(rename = "imageLinks")]
    image_links: Option<GoogleImageLinks>,
}

#[derive(Debug, Deserialize)]
struct GoogleImageLinks {
    thumbnail: Option<String>,
}

pub struct GoogleBooksProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GoogleBooksProvider {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url: trim_base_url(base_url),
            api_key,
        }
    }

    async fn fetch(&self, isbn: &str) -> AppResult<Option<BookMetadata>> {
        let url = format!("{}/volumes", self.base_url);
        let q = format!("isbn:{}", isbn);

        let mut query = vec![("q", q.as_str())];
        if let Some(key) = self.api_key.as_deref() {
            query.push(("key", key));
        }

        let body = get_text(&self.client, &url, &query).await?;
        parse_response(&body)
    }
}

#[async_trait]
impl MetadataProvider for GoogleBooksProvider {
    fn name(&self) -> &'static str {
        "google_books"
    }

    async fn fetch_by_isbn(&self, isbn: &str) -> Option<BookMetadata> {
        settle(self.name(), isbn, self.fetch(isbn).await)
    }
}

fn parse_response(body: &str) -> AppResult<Option<BookMetadata>> {
    let parsed: GoogleBooksResponse = serde_json::from_str(body)
        .map_err(|e| AppError::Provider(format!("Invalid Google Books response: {}", e)))?;

    let Some(info) = parsed
        .items
        .and_then(|items| items.into_iter().next())
        .map(|item| item.volume_info)
    else {
        return Ok(None);
    };

    Ok(Some(BookMetadata {
        title: non_blank(info.title.as_deref()),
        subtitle: non_blank(info.subtitle.as_deref()),
        volume: None,
        publisher: non_blank(info.publisher.as_deref()),
        authors: info
            .authors
            .unwrap_or_default()
            .iter()
            .filter_map(|a| non_blank(Some(a.as_str())))
            .collect(),
        category_code: None,
        ndc: None,
        // Google Books often returns http links, upgrade to https
        cover_url: info
            .image_links
            .and_then(|links| links.thumbnail)
            .map(|thumb| thumb.replace("http://", "https://")),
    }))
}
