use crate::errors::ResqResult;
use crate::models::GeoPoint;

/// Device geolocation.
///
/// Fails with `LocationError::PermissionDenied` when access is refused and
/// `LocationError::Unavailable` when no fix can be obtained.
#[allow(async_fn_in_trait)]
pub trait ILocationProvider: Send + Sync {
    async fn current_location(&self) -> ResqResult<GeoPoint>;
}
