//! # API Shared
//!
//! Shared wire types for TCR APIs.
//!
//! Contains:
//! - Response envelopes used by the REST surface (`wire` module)
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and the `tcr-run` binary for common functionality.

pub mod health;
pub mod wire;

pub use health::HealthService;
pub use wire::*;
