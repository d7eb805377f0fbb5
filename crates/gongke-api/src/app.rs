//! The submission handler and router.
//!
//! One handler serves every path, dispatching on method: `OPTIONS` answers
//! preflight, `POST` relays the submission, anything else is a 405. CORS
//! headers are attached to every response before any validation runs.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{json, Value};

use gongke_core::Submission;
use gongke_notion::{CreatePage, PageWriter};

/// Shared, read-only state: the downstream writer and the destination
/// database id. Cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    /// The downstream create-page capability.
    pub writer: Arc<dyn PageWriter>,
    /// Fixed destination database id, configured at startup.
    pub database_id: String,
}

impl AppState {
    /// Build state from a writer and destination id.
    pub fn new(writer: Arc<dyn PageWriter>, database_id: impl Into<String>) -> Self {
        Self {
            writer,
            database_id: database_id.into(),
        }
    }
}

/// Build the application router: a single fallback handler on every path.
pub fn app(state: AppState) -> Router {
    Router::new().fallback(handle).with_state(state)
}

/// Attach permissive CORS headers. Applied to every response regardless of
/// outcome.
fn with_cors(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}

fn json_response(status: StatusCode, body: Value) -> Response {
    with_cors((status, Json(body)).into_response())
}

fn error_response(status: StatusCode, message: &str) -> Response {
    json_response(status, json!({ "error": message }))
}

/// The submission handler.
async fn handle(State(state): State<AppState>, method: Method, body: Bytes) -> Response {
    if method == Method::OPTIONS {
        return with_cors(StatusCode::OK.into_response());
    }
    if method != Method::POST {
        return error_response(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed");
    }

    // A missing or malformed body behaves like an empty object, so the
    // only validation failure is a missing title.
    let raw: Value = serde_json::from_slice(&body).unwrap_or_else(|_| json!({}));

    let submission = match Submission::from_value(&raw) {
        Ok(sub) => sub,
        Err(err) => {
            log::debug!("Rejected submission: {err}");
            return error_response(StatusCode::BAD_REQUEST, &err.to_string());
        }
    };

    let page = CreatePage {
        database_id: state.database_id.clone(),
        properties: submission.properties(),
        children: submission.children(),
    };

    match state.writer.create_page(page).await {
        Ok(created) => {
            log::info!("Relayed submission for '{}'", submission.title);
            json_response(StatusCode::OK, json!({ "ok": true, "pageId": created.id }))
        }
        Err(err) => {
            log::error!("Downstream write failed: {err}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &err.surface_message())
        }
    }
}
