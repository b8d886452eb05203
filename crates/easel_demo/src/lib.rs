//! Easel dual-scope demo
//!
//! Two independent scene scopes composed into one component: a geometry
//! scope whose shapes rotate, and a wave scope whose path and dot markers
//! bob and cycle hue, each driven by its own frame callback from a shared
//! cooperative pump.
//!
//! The [`headless`] module drives a mounted component for a fixed frame
//! budget with logical time, which is also how the integration tests
//! observe animation.

pub mod animate;
pub mod config;
pub mod dual_scope;
pub mod headless;

pub use config::DemoConfig;
pub use dual_scope::DualScope;
pub use headless::{HeadlessReport, HeadlessRunConfig};
