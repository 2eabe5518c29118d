use crate::infra::AppState;
use axum::body::Bytes;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::Local;
use job_ad::ad::{example_packet, parse_packet, validate_packet, AdValidationReport, Packet};
use job_ad::error::AppError;
use serde_json::json;
use tracing::info;

const INDEX_PAGE: &str = include_str!("../static/index.html");

pub(crate) fn ad_routes() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/hello-world", get(hello_world).post(hello_world))
        .route("/ad", post(create_ad_endpoint))
        .route("/ad/validate", post(validate_ad_endpoint))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

pub(crate) async fn hello_world() -> Json<serde_json::Value> {
    Json(json!({ "output": "Hello World!" }))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Builds the example ad and reports its validation errors.
///
/// Submission to the job board is not performed; the request body is ignored.
pub(crate) async fn create_ad_endpoint() -> Result<Json<AdValidationReport>, AppError> {
    let packet = example_packet(Local::now().date_naive())?;
    Ok(Json(report_for("/ad", &packet)))
}

/// Dry-run validation of the packet in the body, or of the example ad when the body is empty.
pub(crate) async fn validate_ad_endpoint(
    body: Bytes,
) -> Result<Json<AdValidationReport>, AppError> {
    let packet = if body.iter().all(u8::is_ascii_whitespace) {
        example_packet(Local::now().date_naive())?
    } else {
        parse_packet(&body)?
    };

    Ok(Json(report_for("/ad/validate", &packet)))
}

fn report_for(route: &'static str, packet: &Packet) -> AdValidationReport {
    let report = validate_packet(packet);
    info!(
        route,
        customer_id = %packet.customer_id,
        error_count = report.errors.len(),
        "validated job ad"
    );
    report
}
