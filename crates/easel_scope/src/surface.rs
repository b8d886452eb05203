//! Drawing surfaces and viewports

use easel_scene::Point;

/// Host-assigned identity for a drawing surface
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u64);

/// A drawing surface provided by the host environment.
///
/// The scope layer needs identity and pixel dimensions only; putting pixels
/// on the surface is the renderer's concern.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub id: SurfaceId,
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub const fn new(id: SurfaceId, width: f32, height: f32) -> Self {
        Self { id, width, height }
    }

    /// A degenerate surface has no drawable area and cannot host a scope
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0) || !(self.height > 0.0)
    }
}

/// Viewport of a live scope, mirroring its surface dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_surfaces() {
        assert!(Surface::new(SurfaceId(1), 0.0, 100.0).is_degenerate());
        assert!(Surface::new(SurfaceId(1), 100.0, -1.0).is_degenerate());
        assert!(Surface::new(SurfaceId(1), f32::NAN, 100.0).is_degenerate());
        assert!(!Surface::new(SurfaceId(1), 800.0, 400.0).is_degenerate());
    }

    #[test]
    fn viewport_center() {
        let viewport = Viewport {
            width: 800.0,
            height: 400.0,
        };
        assert_eq!(viewport.center(), Point::new(400.0, 200.0));
    }
}
