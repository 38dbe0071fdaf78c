//! openBD (https://openbd.jp) provider
//!
//! openBD answers with a JSON array holding one entry per requested ISBN,
//! `null` for unknown books. The summary block has the display fields and
//! the ONIX block carries the subtitle and the C-code.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use super::{get_text, settle, trim_base_url, MetadataProvider};
use crate::{
    error::{AppError, AppResult},
    models::{metadata::non_blank, BookMetadata},
};

/// ONIX subject scheme identifier of the Japanese C-code
const CCODE_SCHEME: &str = "78";

#[derive(Debug, Deserialize)]
struct OpenBdEntry {
    summary: Option<OpenBdSummary>,
    #[serde(default)]
    onix: Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OpenBdSummary {
    title: Option<String>,
    volume: Option<String>,
    publisher: Option<String>,
    author: Option<String>,
    cover: Option<String>,
}

pub struct OpenBdProvider {
    client: reqwest::Client,
    base_url: String,
}

impl OpenBdProvider {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: trim_base_url(base_url),
        }
    }

    async fn fetch(&self, isbn: &str) -> AppResult<Option<BookMetadata>> {
        let url = format!("{}/get", self.base_url);
        let body = get_text(&self.client, &url, &[("isbn", isbn)]).await?;
        parse_response(&body)
    }
}

#[async_trait]
impl MetadataProvider for OpenBdProvider {
    fn name(&self) -> &'static str {
        "openbd"
    }

    async fn fetch_by_isbn(&self, isbn: &str) -> Option<BookMetadata> {
        settle(self.name(), isbn, self.fetch(isbn).await)
    }
}

fn parse_response(body: &str) -> AppResult<Option<BookMetadata>> {
    let entries: Vec<Option<OpenBdEntry>> = serde_json::from_str(body)
        .map_err(|e| AppError::Provider(format!("Invalid openBD response: {}", e)))?;

    let Some(entry) = entries.into_iter().flatten().next() else {
        return Ok(None);
    };

    let summary = entry.summary.unwrap_or_default();

    Ok(Some(BookMetadata {
        title: non_blank(summary.title.as_deref()),
        subtitle: non_blank(
            entry
                .onix
                .pointer("/DescriptiveDetail/TitleDetail/TitleElement/Subtitle/content")
                .and_then(Value::as_str),
        ),
        volume: non_blank(summary.volume.as_deref()),
        publisher: non_blank(summary.publisher.as_deref()),
        authors: summary.author.as_deref().map(split_authors).unwrap_or_default(),
        category_code: ccode_subject(&entry.onix),
        ndc: None,
        cover_url: non_blank(summary.cover.as_deref()),
    }))
}

/// "夏目漱石／著 山田太郎／解説" -> ["夏目漱石", "山田太郎"]
fn split_authors(author: &str) -> Vec<String> {
    author
        .split_whitespace()
        .filter_map(|part| non_blank(part.split('／').next()))
        .collect()
}

fn ccode_subject(onix: &Value) -> Option<String> {
    onix.pointer("/DescriptiveDetail/Subject")?
        .as_array()?
        .iter()
        .find(|subject| subject["SubjectSchemeIdentifier"].as_str() == Some(CCODE_SCHEME))
        .and_then(|subject| non_blank(subject["SubjectCode"].as_str()))
}
