//! Easel scene model
//!
//! Retained 2D scene data for the scope layer: colors, shape primitives,
//! text labels, sampled paths, and the per-scope [`Scene`] container.
//!
//! # Features
//!
//! - Shape primitives (circle, rectangle, regular polygon)
//! - Text labels with size, weight, and justification
//! - Polyline paths sampled from continuous curves
//! - RGBA colors with hex and HSL construction
//!
//! Rasterization is not part of this crate; the scene is the data a
//! renderer would consume.

pub mod color;
pub mod geometry;
pub mod node;
pub mod path;
pub mod scene;

pub use color::Color;
pub use geometry::{Circle, Point, Rect, RegularPolygon};
pub use node::{FontWeight, Justification, SceneNode, Shape, Stroke, TextLabel};
pub use path::SampledPath;
pub use scene::{NodeId, Scene};
