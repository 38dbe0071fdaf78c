//! ISBN metadata endpoint

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    barcode,
    error::{AppError, AppResult},
    models::ProviderResults,
    AppState,
};

#[derive(Serialize, ToSchema)]
pub struct MetadataResponse {
    /// ISBN that was looked up, separators removed
    pub isbn: String,
    /// Provider name to metadata, `null` when a provider had no record
    #[schema(value_type = Object)]
    pub metadata: ProviderResults,
}

/// Look an ISBN up with every enabled metadata provider
#[utoipa::path(
    get,
    path = "/isbn/{isbn}/metadata",
    tag = "metadata",
    params(
        ("isbn" = String, Path, description = "ISBN-13, separators allowed")
    ),
    responses(
        (status = 200, description = "Metadata per provider", body = MetadataResponse),
        (status = 400, description = "No ISBN found in the input")
    )
)]
pub async fn get_metadata(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<MetadataResponse>> {
    let isbn = barcode::extract_isbn(&isbn)
        .ok_or_else(|| AppError::BadRequest(format!("No ISBN found in '{}'", isbn)))?;

    let metadata = state.services.metadata.fetch_all(&isbn).await;

    Ok(Json(MetadataResponse { isbn, metadata }))
}
