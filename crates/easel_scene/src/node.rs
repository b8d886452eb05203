//! Scene objects: shapes with paint attributes

use crate::color::Color;
use crate::geometry::{Circle, Point, Rect, RegularPolygon};
use crate::path::SampledPath;

/// Stroke styling for outlined shapes and paths
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Justification {
    #[default]
    Left,
    Center,
    Right,
}

/// A positioned text label
#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    pub position: Point,
    pub content: String,
    pub font_size: f32,
    pub weight: FontWeight,
    pub justification: Justification,
}

/// Shape payload of a scene object
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Rect(Rect),
    RegularPolygon(RegularPolygon),
    Text(TextLabel),
    Path(SampledPath),
}

/// A scene object: one shape plus paint attributes and an accumulated
/// rotation about the shape's own center.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
    pub shape: Shape,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
    /// Rotation in degrees; accumulates without bound.
    pub rotation: f32,
}

impl SceneNode {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            fill: None,
            stroke: None,
            rotation: 0.0,
        }
    }

    pub fn filled(shape: Shape, color: Color) -> Self {
        Self {
            fill: Some(color),
            ..Self::new(shape)
        }
    }

    pub fn stroked(shape: Shape, stroke: Stroke) -> Self {
        Self {
            stroke: Some(stroke),
            ..Self::new(shape)
        }
    }

    /// Rotate by `degrees` about the shape's center
    pub fn rotate(&mut self, degrees: f32) {
        self.rotation += degrees;
    }
}
