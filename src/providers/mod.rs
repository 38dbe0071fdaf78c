//! Bibliographic metadata providers
//!
//! Each provider wraps one external lookup service behind the common
//! [`MetadataProvider`] capability. Field mapping stays local to the
//! provider; failures are logged and reported as "no metadata".

pub mod google_books;
pub mod ndl;
pub mod openbd;
pub mod open_library;

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::{
    config::{
        ProvidersConfig, GOOGLE_BOOKS_BASE_URL, NDL_BASE_URL, OPENBD_BASE_URL,
        OPEN_LIBRARY_BASE_URL,
    },
    error::{AppError, AppResult},
    models::BookMetadata,
};

pub use google_books::GoogleBooksProvider;
pub use ndl::NdlProvider;
pub use open_library::OpenLibraryProvider;
pub use openbd::OpenBdProvider;

/// Fetch-by-ISBN capability shared by every provider
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Stable provider name, used as the key in lookup results
    fn name(&self) -> &'static str;

    /// Look up a book. Never fails: errors and empty records yield `None`.
    async fn fetch_by_isbn(&self, isbn: &str) -> Option<BookMetadata>;
}

/// Build the enabled providers, in display order
pub fn from_config(config: &ProvidersConfig) -> AppResult<Vec<Arc<dyn MetadataProvider>>> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.as_str())
        .build()?;

    let mut providers: Vec<Arc<dyn MetadataProvider>> = Vec::new();

    if config.openbd.enabled {
        providers.push(Arc::new(OpenBdProvider::new(
            client.clone(),
            config.openbd.base_url_or(OPENBD_BASE_URL),
        )));
    }
    if config.google_books.enabled {
        providers.push(Arc::new(GoogleBooksProvider::new(
            client.clone(),
            config.google_books.base_url_or(GOOGLE_BOOKS_BASE_URL),
            config.google_books.api_key.clone(),
        )));
    }
    if config.ndl.enabled {
        providers.push(Arc::new(NdlProvider::new(
            client.clone(),
            config.ndl.base_url_or(NDL_BASE_URL),
        )));
    }
    if config.open_library.enabled {
        providers.push(Arc::new(OpenLibraryProvider::new(
            client,
            config.open_library.base_url_or(OPEN_LIBRARY_BASE_URL),
        )));
    }

    tracing::info!(
        "Enabled metadata providers: {:?}",
        providers.iter().map(|p| p.name()).collect::<Vec<_>>()
    );

    Ok(providers)
}

/// GET a provider endpoint and return the body of a successful response
pub(crate) async fn get_text(
    client: &reqwest::Client,
    url: &str,
    query: &[(&str, &str)],
) -> AppResult<String> {
    let resp = client.get(url).query(query).send().await?;

    if !resp.status().is_success() {
        return Err(AppError::Provider(format!(
            "{} returned status {}",
            url,
            resp.status()
        )));
    }

    Ok(resp.text().await?)
}

/// Collapse a provider outcome into the optional record callers see
pub(crate) fn settle(
    provider: &str,
    isbn: &str,
    result: AppResult<Option<BookMetadata>>,
) -> Option<BookMetadata> {
    match result {
        Ok(Some(metadata)) if !metadata.is_empty() => {
            tracing::debug!("{} found a record for {}", provider, isbn);
            Some(metadata)
        }
        Ok(_) => {
            tracing::debug!("{} has no record for {}", provider, isbn);
            None
        }
        Err(e) => {
            tracing::warn!("{} lookup for {} failed: {}", provider, isbn, e);
            None
        }
    }
}

/// Strip the trailing slash so paths can be appended
pub(crate) fn trim_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}
