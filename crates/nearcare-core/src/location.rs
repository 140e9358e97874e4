//! Permission-gated, single-shot location resolution.
//!
//! [`LocationResolver`] asks a [`PositioningService`] for permission exactly
//! once per call and, if granted, requests one high-accuracy fix. There is no
//! retry loop and no fallback position: either failure ends the attempt and
//! the caller decides what to do next.

use std::future::Future;

use thiserror::Error;

use crate::types::Coordinates;

/// Outcome of a location permission prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// Why the positioning service could not produce a fix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("timed out waiting for a position fix")]
    Timeout,

    #[error("location services are disabled")]
    ServiceDisabled,

    #[error("positioning hardware error: {0}")]
    Hardware(String),

    #[error("no position fix available")]
    NoFix,
}

/// Terminal failures of a single [`LocationResolver::resolve`] attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("location unavailable: {0}")]
    LocationUnavailable(#[source] PositionError),
}

/// Device positioning backend.
pub trait PositioningService {
    /// Prompts for location access.
    fn request_permission(&self) -> impl Future<Output = Permission> + Send;

    /// Requests one high-accuracy fix. Implementations must not track
    /// continuously or retry internally.
    fn current_position(&self) -> impl Future<Output = Result<Coordinates, PositionError>> + Send;
}

/// Resolves the user's current coordinates through a [`PositioningService`].
pub struct LocationResolver<P> {
    positioning: P,
}

impl<P: PositioningService> LocationResolver<P> {
    pub fn new(positioning: P) -> Self {
        Self { positioning }
    }

    /// # Errors
    ///
    /// - [`LocationError::PermissionDenied`] if the user declines access. No
    ///   position fix is requested in that case.
    /// - [`LocationError::LocationUnavailable`] if the fix fails.
    pub async fn resolve(&self) -> Result<Coordinates, LocationError> {
        if self.positioning.request_permission().await == Permission::Denied {
            tracing::warn!("location permission denied");
            return Err(LocationError::PermissionDenied);
        }

        match self.positioning.current_position().await {
            Ok(coordinates) => {
                tracing::debug!(
                    latitude = coordinates.latitude(),
                    longitude = coordinates.longitude(),
                    "resolved current location"
                );
                Ok(coordinates)
            }
            Err(e) => {
                tracing::warn!(error = %e, "position fix failed");
                Err(LocationError::LocationUnavailable(e))
            }
        }
    }
}

/// A positioning service backed by caller-supplied coordinates.
///
/// Used where there is no device sensor, e.g. coordinates passed on the
/// command line. With no coordinates it reports [`PositionError::NoFix`].
#[derive(Debug, Clone)]
pub struct StaticPositioning {
    coordinates: Option<Coordinates>,
    permission: Permission,
}

impl StaticPositioning {
    #[must_use]
    pub fn new(coordinates: Option<Coordinates>) -> Self {
        Self {
            coordinates,
            permission: Permission::Granted,
        }
    }

    /// A service whose permission prompt is always declined.
    #[must_use]
    pub fn denied() -> Self {
        Self {
            coordinates: None,
            permission: Permission::Denied,
        }
    }
}

impl PositioningService for StaticPositioning {
    async fn request_permission(&self) -> Permission {
        self.permission
    }

    async fn current_position(&self) -> Result<Coordinates, PositionError> {
        self.coordinates.ok_or(PositionError::NoFix)
    }
}
