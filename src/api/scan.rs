//! Barcode scan and lookup endpoints

use axum::{extract::State, Json};
use validator::Validate;

use crate::{
    error::AppResult,
    models::{LookupResult, ScanRequest, ScanResult},
    AppState,
};

/// Extract the ISBN and C-code from raw input and decode the C-code
#[utoipa::path(
    post,
    path = "/scan",
    tag = "scan",
    request_body = ScanRequest,
    responses(
        (status = 200, description = "Extracted barcode data", body = ScanResult),
        (status = 400, description = "No input given"),
        (status = 422, description = "Classification code could not be decoded")
    )
)]
pub async fn scan(
    State(state): State<AppState>,
    Json(request): Json<ScanRequest>,
) -> AppResult<Json<ScanResult>> {
    request.validate()?;

    let result = state.services.scan.scan(&request)?;

    Ok(Json(result))
}

/// Scan, then look the ISBN up with every enabled metadata provider
#[utoipa::path(
    post,
    path = "/lookup",
    tag = "scan",
    request_body = ScanRequest,
    responses(
        (status = 200, description = "Barcode data with provider metadata", body = LookupResult),
        (status = 400, description = "No input given"),
        (status = 422, description = "Classification code could not be decoded")
    )
)]
pub async fn lookup(
    State(state): State<AppState>,
    Json(request): Json<ScanRequest>,
) -> AppResult<Json<LookupResult>> {
    request.validate()?;

    let scan = state.services.scan.scan(&request)?;

    // A missing ISBN only means there is nothing to look up
    let metadata = match scan.isbn.as_deref() {
        Some(isbn) => state.services.metadata.fetch_all(isbn).await,
        None => Default::default(),
    };

    Ok(Json(LookupResult { scan, metadata }))
}
