//! National Diet Library (NDL Search) provider
//!
//! Uses the OpenSearch endpoint, which answers with an RSS document. Only the
//! first `<item>` is read. NDL is the provider that reports the NDC.

use async_trait::async_trait;
use quick_xml::events::Event;
use quick_xml::reader::Reader;

use super::{get_text, settle, trim_base_url, MetadataProvider};
use crate::{
    error::{AppError, AppResult},
    models::{metadata::non_blank, BookMetadata},
};

pub struct NdlProvider {
    client: reqwest::Client,
    base_url: String,
}

impl NdlProvider {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: trim_base_url(base_url),
        }
    }

    async fn fetch(&self, isbn: &str) -> AppResult<Option<BookMetadata>> {
        let url = format!("{}/api/opensearch", self.base_url);
        let body = get_text(&self.client, &url, &[("isbn", isbn)]).await?;
        parse_response(&body)
    }
}

#[async_trait]
impl MetadataProvider for NdlProvider {
    fn name(&self) -> &'static str {
        "ndl"
    }

    async fn fetch_by_isbn(&self, isbn: &str) -> Option<BookMetadata> {
        settle(self.name(), isbn, self.fetch(isbn).await)
    }
}

fn parse_response(xml: &str) -> AppResult<Option<BookMetadata>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut metadata = BookMetadata::default();
    let mut in_item = false;
    let mut found = false;
    let mut current_tag = String::new();
    let mut current_type: Option<String> = None;
    // RSS <author> is a display string, used only when no dc:creator is given
    let mut rss_author: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if name == "item" {
                    in_item = true;
                    found = true;
                } else if in_item {
                    // dc:subject carries its scheme in xsi:type
                    current_type = e
                        .attributes()
                        .flatten()
                        .find(|a| a.key.as_ref() == b"xsi:type")
                        .map(|a| String::from_utf8_lossy(&a.value).into_owned());
                    current_tag = name;
                }
            }
            Ok(Event::Text(e)) if in_item => {
                let text = e
                    .unescape()
                    .map_err(|e| AppError::Provider(format!("Invalid NDL response: {}", e)))?;
                if current_tag == "author" {
                    if rss_author.is_none() {
                        rss_author = non_blank(Some(text.as_ref()));
                    }
                } else {
                    apply_field(&mut metadata, &current_tag, current_type.as_deref(), &text);
                }
            }
            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"item" {
                    break;
                }
                current_tag.clear();
                current_type = None;
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(AppError::Provider(format!("Invalid NDL response: {}", e)));
            }
            _ => (),
        }
    }

    if metadata.authors.is_empty() {
        metadata.authors.extend(rss_author);
    }

    Ok(found.then_some(metadata))
}

fn apply_field(metadata: &mut BookMetadata, tag: &str, xsi_type: Option<&str>, text: &str) {
    let Some(value) = non_blank(Some(text)) else {
        return;
    };

    match tag {
        "dc:title" | "title" if metadata.title.is_none() => metadata.title = Some(value),
        "dcndl:volume" if metadata.volume.is_none() => metadata.volume = Some(value),
        "dc:creator" => metadata.authors.push(value),
        "dc:publisher" if metadata.publisher.is_none() => metadata.publisher = Some(value),
        "dc:subject" if metadata.ndc.is_none() => {
            if xsi_type.is_some_and(|t| t.starts_with("dcndl:NDC")) {
                metadata.ndc = Some(value);
            }
        }
        _ => (),
    }
}
