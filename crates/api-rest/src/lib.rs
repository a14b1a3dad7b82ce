//! # API REST
//!
//! REST API implementation for TCR.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS)
//!
//! Uses `api-shared` for common types and utilities. The router is exposed
//! as [`app`] so the workspace's `tcr-run` binary and the standalone
//! `tcr-api-rest` binary serve the same surface.

#![warn(rust_2018_idioms)]

use axum::{
    extract::{Path as AxumPath, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{HealthRes, HealthService, SlugListRes};
use tcr_core::{ContentService, TreatmentDetail};
use tcr_types::Slug;

/// Application state for the REST API server
///
/// Contains shared state that needs to be accessible to all request handlers,
/// currently the ContentService instance for resolution operations.
#[derive(Clone)]
struct AppState {
    content_service: ContentService,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_treatments, get_treatment),
    components(schemas(
        HealthRes,
        SlugListRes,
        TreatmentDetail,
        tcr_core::Overview,
        tcr_core::ProcedureStep,
        tcr_core::Faq,
        tcr_core::CustomCta,
        tcr_core::TreatmentMeta,
        tcr_core::Reviewer,
    ))
)]
struct ApiDoc;

/// Builds the REST router with all routes, Swagger UI and CORS applied.
pub fn app() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/treatments", get(list_treatments))
        .route("/treatments/:slug", get(get_treatment))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(AppState {
            content_service: ContentService::new(),
        })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Returns the current health status of the TCR REST API service.
/// This endpoint is used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/treatments",
    responses(
        (status = 200, description = "All routing slugs in the catalogue", body = SlugListRes)
    )
)]
/// List every treatment and procedure slug
///
/// The page layer calls this at build time to enumerate which detail pages
/// to pre-render. The list is deduplicated; order is not meaningful.
#[axum::debug_handler]
async fn list_treatments(State(state): State<AppState>) -> Json<SlugListRes> {
    let slugs = state
        .content_service
        .list_slugs()
        .into_iter()
        .map(String::from)
        .collect();
    Json(SlugListRes { slugs })
}

#[utoipa::path(
    get,
    path = "/treatments/{slug}",
    params(
        ("slug" = String, Path, description = "Trailing URL segment of the detail page")
    ),
    responses(
        (status = 200, description = "Detail page content", body = TreatmentDetail),
        (status = 404, description = "No catalogue entry routes this slug")
    )
)]
/// Resolve a slug to its detail page content
///
/// The raw slug from the URL is normalised and resolved against the
/// catalogue. Slugs without a catalogue entry are a 404; catalogued slugs
/// always return a complete record, authored or generic.
#[axum::debug_handler]
async fn get_treatment(
    State(state): State<AppState>,
    AxumPath(raw_slug): AxumPath<String>,
) -> Result<Json<TreatmentDetail>, (StatusCode, &'static str)> {
    let slug = match Slug::new(&raw_slug) {
        Ok(slug) => slug,
        Err(e) => {
            tracing::debug!("rejected slug {:?}: {}", raw_slug, e);
            return Err((StatusCode::NOT_FOUND, "No such treatment"));
        }
    };

    match state.content_service.resolve(&slug) {
        Some(detail) => Ok(Json(detail)),
        None => Err((StatusCode::NOT_FOUND, "No such treatment")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
        };
        (status, json)
    }

    #[tokio::test]
    async fn health_reports_alive() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
    }

    #[tokio::test]
    async fn treatments_list_contains_known_slugs() {
        let (status, body) = get_json("/treatments").await;
        assert_eq!(status, StatusCode::OK);
        let slugs = body["slugs"].as_array().expect("slug array");
        assert!(slugs.iter().any(|s| s == "appendectomy"));
        assert!(slugs.iter().any(|s| s == "colonoscopy"));
    }

    #[tokio::test]
    async fn aliased_slug_resolves_to_canonical_record() {
        let (status, body) = get_json("/treatments/appendectomy").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["slug"], "appendicitis");
        assert_eq!(body["category"], "General & Laparoscopic Surgery");
    }

    #[tokio::test]
    async fn unknown_slug_is_not_found() {
        let (status, _) = get_json("/treatments/nonexistent-slug-xyz").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unnormalisable_slug_is_not_found() {
        let (status, _) = get_json("/treatments/bad_slug!").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn catalogued_slug_without_authored_record_still_renders() {
        let (status, body) = get_json("/treatments/colonoscopy").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["slug"], "colonoscopy");
        assert_eq!(body["title"], "Colonoscopy");
        assert_eq!(body["category"], "Gastroenterology");
    }
}
