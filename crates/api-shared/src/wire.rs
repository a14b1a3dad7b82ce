//! Wire types shared by the REST surface and the runner binary.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Response listing every routing slug in the catalogue.
///
/// Consumed by the page layer at build time to enumerate which detail pages
/// to pre-render.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SlugListRes {
    pub slugs: Vec<String>,
}
