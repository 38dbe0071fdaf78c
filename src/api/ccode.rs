//! C-code decoding endpoint

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{classification::DecodedClassification, error::AppResult, AppState};

/// Decode a four-digit C-code
#[utoipa::path(
    get,
    path = "/ccode/{code}",
    tag = "ccode",
    params(
        ("code" = String, Path, description = "Four-digit C-code")
    ),
    responses(
        (status = 200, description = "Decoded classification", body = DecodedClassification),
        (status = 422, description = "Classification code could not be decoded")
    )
)]
pub async fn decode_ccode(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<DecodedClassification>> {
    let decoded = state.services.scan.decode(&code)?;

    Ok(Json(decoded))
}
