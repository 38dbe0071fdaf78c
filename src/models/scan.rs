//! Scan request and result models

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::BookMetadata;
use crate::classification::{ClassificationCode, DecodedClassification};

/// Raw barcode input
///
/// `primary` holds the JAN/ISBN field and `secondary` the C-code field. A
/// form with a single combined field sends `primary` only.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct ScanRequest {
    #[validate(length(max = 512))]
    #[schema(example = "9784101001012")]
    pub primary: Option<String>,
    #[validate(length(max = 512))]
    #[schema(example = "1920093005804")]
    pub secondary: Option<String>,
}

/// Extracted and decoded barcode data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct ScanResult {
    #[schema(example = "9784101001012")]
    pub isbn: Option<String>,
    #[schema(value_type = Option<String>, example = "0093")]
    pub ccode: Option<ClassificationCode>,
    pub decoded: Option<DecodedClassification>,
}

/// Provider name to metadata, in provider order; `null` when a provider had nothing
pub type ProviderResults = IndexMap<String, Option<BookMetadata>>;

/// Scan result enriched with metadata from every enabled provider
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LookupResult {
    #[serde(flatten)]
    pub scan: ScanResult,
    #[schema(value_type = Object)]
    pub metadata: ProviderResults,
}
