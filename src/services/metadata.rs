//! Metadata lookup service
//!
//! Queries every enabled provider concurrently and returns their answers
//! side by side, without reconciling them.

use futures::future::join_all;
use std::sync::Arc;

use crate::{models::ProviderResults, providers::MetadataProvider};

#[derive(Clone)]
pub struct MetadataService {
    providers: Vec<Arc<dyn MetadataProvider>>,
}

impl MetadataService {
    pub fn new(providers: Vec<Arc<dyn MetadataProvider>>) -> Self {
        Self { providers }
    }

    /// Names of the enabled providers, in result order
    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Fetch metadata for an ISBN from every provider
    pub async fn fetch_all(&self, isbn: &str) -> ProviderResults {
        tracing::info!("Metadata lookup for {} across {} providers", isbn, self.providers.len());
        let start = std::time::Instant::now();

        let lookups = self.providers.iter().map(|provider| async move {
            (provider.name().to_string(), provider.fetch_by_isbn(isbn).await)
        });
        let results: ProviderResults = join_all(lookups).await.into_iter().collect();

        tracing::info!(
            "Metadata lookup for {} completed in {:?}, {} of {} providers answered",
            isbn,
            start.elapsed(),
            results.values().filter(|m| m.is_some()).count(),
            results.len()
        );

        results
    }
}
