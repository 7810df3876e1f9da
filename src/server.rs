//! REST endpoints for extraction and document generation.
//!
//! Every request is independent: extract the record from the posted email
//! text, optionally render it into a template, return the result. No state
//! is shared between requests beyond the compiled patterns and the template
//! store.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::error::RenderError;
use crate::extract::Extractor;
use crate::render::Renderer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<Extractor>,
    pub renderer: Arc<Renderer>,
}

/// Build the Axum router with extraction and document routes.
///
/// The API carries no credentials and is meant to be called from office
/// tooling on other origins, so CORS is wide open.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/extract", post(extract_record))
        .route("/api/documents/{template}", post(render_document))
        .layer(cors)
        .with_state(state)
}

// ── Health ──────────────────────────────────────────────────────────────

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ── Extraction ──────────────────────────────────────────────────────────

/// Request body for both endpoints.
#[derive(Debug, Deserialize)]
struct NotificationBody {
    /// Raw text of the shipment-notification email.
    text: String,
}

/// POST /api/extract
///
/// Returns the structured shipment record for the posted email text.
/// Extraction is best-effort: this endpoint never fails for any text,
/// it just returns a partial (possibly empty) record.
async fn extract_record(
    State(state): State<AppState>,
    Json(body): Json<NotificationBody>,
) -> impl IntoResponse {
    let record = state.extractor.extract(&body.text);
    info!(
        line_items = record.line_items.len(),
        purchase_order = record.purchase_order_number.as_deref().unwrap_or("-"),
        "Extracted shipment record"
    );
    Json(record)
}

// ── Documents ───────────────────────────────────────────────────────────

/// POST /api/documents/{template}
///
/// Extracts a shipment record from the posted email text and renders it
/// into the named template (e.g. `commercial_invoice`, `bill_of_lading`).
/// Returns HTML, or 404 if the template does not exist.
async fn render_document(
    State(state): State<AppState>,
    Path(template): Path<String>,
    Json(body): Json<NotificationBody>,
) -> impl IntoResponse {
    let record = state.extractor.extract(&body.text);
    match state.renderer.render(&template, &record).await {
        Ok(html) => Html(html).into_response(),
        Err(RenderError::TemplateNotFound { name }) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": format!("template not found: {name}") })),
        )
            .into_response(),
        Err(e) => {
            warn!(error = %e, template = %template, "Document rendering failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "render failed" })),
            )
                .into_response()
        }
    }
}
