//! Bibliographic metadata returned by lookup providers

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Book metadata normalized from a provider response
///
/// Every field is optional, providers fill what they know.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookMetadata {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub volume: Option<String>,
    pub publisher: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    /// C-code reported by the provider
    pub category_code: Option<String>,
    /// Nippon Decimal Classification
    pub ndc: Option<String>,
    pub cover_url: Option<String>,
}

impl BookMetadata {
    /// True when the provider returned a record without any usable field
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Trim a provider string, dropping it when blank
pub(crate) fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}
