use crate::wire::HealthRes;

/// Simple health service usable by any API surface
///
/// This service provides a standardised way to check the health status of the
/// TCR system.
#[derive(Clone)]
pub struct HealthService;

impl HealthService {
    /// Creates a new instance of HealthService.
    pub fn new() -> Self {
        Self
    }

    /// Static method to check health without creating an instance
    ///
    /// This is the preferred method for health checks as it doesn't require
    /// instantiating the service.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "TCR is alive".into(),
        }
    }
}

impl Default for HealthService {
    fn default() -> Self {
        Self::new()
    }
}
