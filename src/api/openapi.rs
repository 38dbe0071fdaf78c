//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{ccode, health, metadata, scan};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookcode API",
        version = "0.3.0",
        description = "JAN/ISBN and C-code barcode recognition and bibliographic lookup REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Scan
        scan::scan,
        scan::lookup,
        // C-code
        ccode::decode_ccode,
        // Metadata
        metadata::get_metadata,
    ),
    components(
        schemas(
            // Scan
            crate::models::ScanRequest,
            crate::models::ScanResult,
            crate::models::LookupResult,
            // C-code
            crate::classification::DecodedClassification,
            // Metadata
            crate::models::BookMetadata,
            metadata::MetadataResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "scan", description = "Barcode extraction and lookup"),
        (name = "ccode", description = "C-code decoding"),
        (name = "metadata", description = "Bibliographic metadata providers")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
