//! HTTP API around [`CardClassifier`].
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | POST | `/check` | Check and classify one card number |
//! | GET | `/health` | Liveness and version |
//! | GET | `/swagger-ui/` | Interactive API documentation |
//!
//! # Feature
//!
//! Requires the `server` feature.

use crate::classifier::CardClassifier;
use crate::error::ValidationError;
use crate::mask::{mask_result, mask_string};
use axum::{
    body::Bytes,
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

/// Body of the `400` response for structurally invalid numbers.
pub const INVALID_CARD_NUMBER: &str = "Invalid card number";

// ============================================================================
// OpenAPI Documentation
// ============================================================================

/// OpenAPI document served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Card Checker API",
        version = "0.1.0",
        description = "Luhn check and issuing network classification for payment card numbers. No auth or rate limiting.",
        license(name = "MIT")
    ),
    tags(
        (name = "Check", description = "Card number check and classification"),
        (name = "System", description = "Health and status endpoints")
    ),
    paths(check_card, health),
    components(schemas(CheckRequest, CheckResponse, HealthResponse))
)]
pub struct ApiDoc;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Body of `POST /check`.
#[derive(Debug, Deserialize, ToSchema)]
#[schema(example = json!({"card_number": "4532-0151-1283-0366"}))]
pub struct CheckRequest {
    /// Card number to check. Spaces and hyphens are ignored.
    pub card_number: String,
}

/// Result of `POST /check`.
#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({
    "card_number": "4532-0151-1283-0366",
    "valid": true,
    "network": "Visa"
}))]
pub struct CheckResponse {
    /// The card number exactly as submitted
    pub card_number: String,
    /// Whether the number passed the Luhn checksum
    pub valid: bool,
    /// Issuing network; omitted when no rule matched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
}

/// Result of `GET /health`.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// API version
    pub version: String,
}

// ============================================================================
// Errors
// ============================================================================

/// Client errors returned by the API.
#[derive(Debug)]
pub enum ApiError {
    /// The body was not a JSON object with a string `card_number`.
    /// The `Content-Type` header is not consulted.
    MalformedRequest(String),
    /// The card number was not 8 to 19 digits after normalization.
    InvalidFormat(ValidationError),
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::MalformedRequest(format!("Failed to parse the request body as JSON: {}", e))
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::InvalidFormat(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::MalformedRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            Self::InvalidFormat(_) => {
                (StatusCode::BAD_REQUEST, INVALID_CARD_NUMBER).into_response()
            }
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Check a card number and classify its issuing network
#[utoipa::path(
    post,
    path = "/check",
    request_body = CheckRequest,
    responses(
        (status = 200, description = "Check result", body = CheckResponse),
        (status = 400, description = "Malformed request or invalid card number", body = String)
    ),
    tag = "Check"
)]
pub async fn check_card(
    State(classifier): State<CardClassifier>,
    body: Bytes,
) -> Result<Json<CheckResponse>, ApiError> {
    let req: CheckRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "rejected malformed request");
        ApiError::from(e)
    })?;

    let result = classifier.check(&req.card_number).map_err(|e| {
        tracing::debug!(card = %mask_string(&req.card_number), error = %e, "rejected card number");
        ApiError::from(e)
    })?;

    tracing::debug!(
        card = %mask_result(&result),
        valid = result.is_valid(),
        network = result.network().unwrap_or("-"),
        "checked card number"
    );

    Ok(Json(CheckResponse {
        valid: result.is_valid(),
        network: result.network().map(str::to_string),
        card_number: req.card_number,
    }))
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "System"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Router
// ============================================================================

/// Builds the application router around `classifier`.
pub fn router(classifier: CardClassifier) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(Any);

    Router::new()
        .route("/check", post(check_card))
        .route("/health", get(health))
        .with_state(classifier)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
