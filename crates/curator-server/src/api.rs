use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::perplexity::PerplexityClient;
use crate::prompt::{build_prompt, format_timestamp, parse_curator_csv, SYSTEM_PROMPT};

/// Multipart field carrying the curator-list CSV.
const UPLOAD_FIELD: &str = "file";

#[derive(Clone)]
pub struct AppState {
    pub perplexity: Arc<PerplexityClient>,
}

#[derive(Debug, Serialize)]
struct AnalysisBody {
    analysis: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

/// JSON error body: `{"error": "<message>"}`.
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    status: StatusCode,
    error: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self)).into_response()
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/analyze", post(analyze))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors()),
        )
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(HealthData { status: "ok" })
}

async fn analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisBody>, ApiError> {
    let mut multipart = multipart.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let csv = read_upload(&mut multipart).await?;

    let set = parse_curator_csv(&csv).map_err(|e| {
        tracing::warn!(error = %e, "rejecting unparseable curator list");
        ApiError::internal(e.to_string())
    })?;
    tracing::info!(
        brand = %set.brand,
        influencers = set.influencers.len(),
        competitors = set.competitors.len(),
        "running brand analysis"
    );

    let prompt = build_prompt(&set, &format_timestamp(&chrono::Local::now()));
    let analysis = state
        .perplexity
        .complete(SYSTEM_PROMPT, &prompt)
        .await
        .map_err(|e| {
            tracing::error!(brand = %set.brand, error = %e, "brand analysis failed");
            ApiError::internal(e.to_string())
        })?;

    Ok(Json(AnalysisBody { analysis }))
}

async fn read_upload(multipart: &mut Multipart) -> Result<String, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(e.body_text()))?
    {
        if field.name() == Some(UPLOAD_FIELD) {
            return field
                .text()
                .await
                .map_err(|e| ApiError::bad_request(e.body_text()));
        }
    }
    Err(ApiError::bad_request(format!(
        "missing multipart field '{UPLOAD_FIELD}'"
    )))
}
