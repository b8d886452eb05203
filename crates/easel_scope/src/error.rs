//! Scope setup errors

use thiserror::Error;

use crate::surface::SurfaceId;

/// Errors raised while constructing a scope or wiring its frame callback.
///
/// Disposal never raises; it is best-effort by contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// The surface is already driving another live scope.
    #[error("surface {0:?} is already bound to a live scope")]
    SurfaceAlreadyBound(SurfaceId),

    /// The surface is unattached or has no drawable area.
    #[error("surface {0:?} has no drawable area")]
    InvalidSurface(SurfaceId),

    /// The scope handle no longer names a live scope.
    #[error("scope handle is no longer live")]
    ScopeGone,
}
