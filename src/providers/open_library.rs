//! Open Library provider

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;

use super::{get_text, settle, trim_base_url, MetadataProvider};
use crate::{
    error::{AppError, AppResult},
    models::{metadata::non_blank, BookMetadata},
};

#[derive(Debug, Deserialize)]
struct OpenLibraryResponse {
    #[serde(flatten)]
    books: HashMap<String, OpenLibraryBook>,
}

#[derive(Debug, Deserialize)]
struct OpenLibraryBook {
    title: Option<String>,
    subtitle: Option<String>,
    authors: Option<Vec<OpenLibraryName>>,
    publishers: Option<Vec<OpenLibraryName>>,
    cover: Option<OpenLibraryCover>,
}

#[derive(Debug, Deserialize)]
struct OpenLibraryName {
    name: String,
}

#[derive(Debug, Deserialize)]
struct OpenLibraryCover {
    medium: Option<String>,
    large: Option<String>,
}

pub struct OpenLibraryProvider {
    client: reqwest::Client,
    base_url: String,
}

impl OpenLibraryProvider {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: trim_base_url(base_url),
        }
    }

    async fn fetch(&self, isbn: &str) -> AppResult<Option<BookMetadata>> {
        let url = format!("{}/api/books", self.base_url);
        let bibkey = format!("ISBN:{}", isbn);
        let query = [("bibkeys", bibkey.as_str()), ("format", "json"), ("jscmd", "data")];

        let body = get_text(&self.client, &url, &query).await?;
        parse_response(&body, &bibkey)
    }
}

#[async_trait]
impl MetadataProvider for OpenLibraryProvider {
    fn name(&self) -> &'static str {
        "open_library"
    }

    async fn fetch_by_isbn(&self, isbn: &str) -> Option<BookMetadata> {
        settle(self.name(), isbn, self.fetch(isbn).await)
    }
}

fn parse_response(body: &str, bibkey: &str) -> AppResult<Option<BookMetadata>> {
    let mut parsed: OpenLibraryResponse = serde_json::from_str(body)
        .map_err(|e| AppError::Provider(format!("Invalid Open Library response: {}", e)))?;

    let Some(book) = parsed.books.remove(bibkey) else {
        return Ok(None);
    };

    let authors = book
        .authors
        .unwrap_or_default()
        .iter()
        .filter(|author| {
            let n = author.name.trim();
            !n.eq_ignore_ascii_case("unknown author") && !n.eq_ignore_ascii_case("unknown")
        })
        .filter_map(|author| non_blank(Some(author.name.as_str())))
        .collect();

    Ok(Some(BookMetadata {
        title: non_blank(book.title.as_deref()),
        subtitle: non_blank(book.subtitle.as_deref()),
        volume: None,
        publisher: book
            .publishers
            .as_ref()
            .and_then(|p| p.first())
            .and_then(|p| non_blank(Some(p.name.as_str()))),
        authors,
        category_code: None,
        ndc: None,
        cover_url: book.cover.and_then(|c| c.large.or(c.medium)),
    }))
}
