//! Easel scope management
//!
//! A scope is an isolated graphics environment: it owns a scene of objects,
//! a viewport mirroring its drawing surface, and at most one per-frame
//! callback. Scopes never share scene objects, and disposing one leaves
//! every other scope untouched.
//!
//! All object creation and mutation goes through an explicit [`ScopeId`]
//! handle on the [`ScopeManager`]; there is no ambient "current scope"
//! state. Frame callbacks are registered as explicit subscriptions whose
//! cancellation tokens are consumed by disposal.

pub mod error;
pub mod frame;
pub mod manager;
mod scope;
pub mod surface;

pub use error::SetupError;
pub use frame::{FrameCallback, FrameEvent, FrameSubscription};
pub use manager::{ScopeId, ScopeManager};
pub use surface::{Surface, SurfaceId, Viewport};
