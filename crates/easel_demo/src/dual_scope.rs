//! The dual-scope component
//!
//! Composes two independent scopes the way the host UI would: mount builds
//! both scene graphs and wires their frame callbacks, unmount tears both
//! down. Dropping a mounted component unmounts it, so no teardown path can
//! leak a live callback.

use easel_scene::{
    Circle, Color, FontWeight, Justification, Point, Rect, RegularPolygon, SampledPath,
    SceneNode, Shape, Stroke, TextLabel,
};
use easel_scope::{ScopeId, ScopeManager, SetupError, Surface, SurfaceId};
use tracing::debug;

use crate::animate;
use crate::config::DemoConfig;

/// Surface identities for the component's two canvases
const GEOMETRY_SURFACE: SurfaceId = SurfaceId(1);
const WAVE_SURFACE: SurfaceId = SurfaceId(2);

/// Title rendered in the wave scope
pub const TITLE: &str = "Two scopes, one frame loop";

/// Two independent scopes behind one mount/unmount lifecycle.
///
/// The geometry scope carries a circle, a rectangle, a triangle, and an
/// accent dot; when animated, rectangle and triangle rotate in opposite
/// directions. The wave scope carries a title, a sine-wave path, and a row
/// of dot markers; when animated, the wave re-samples and the markers bob
/// and cycle hue on a fixed-step clock.
pub struct DualScope {
    manager: ScopeManager,
    geometry: ScopeId,
    wave: ScopeId,
}

impl DualScope {
    /// Build both scopes from a clean state.
    ///
    /// If the second scope fails to come up, the first is disposed before
    /// returning; a half-mounted component never escapes.
    pub fn mount(config: DemoConfig) -> Result<Self, SetupError> {
        let mut manager = ScopeManager::new();
        let geometry = build_geometry_scope(&mut manager, config)?;
        let wave = match build_wave_scope(&mut manager, config) {
            Ok(id) => id,
            Err(err) => {
                manager.dispose(geometry);
                return Err(err);
            }
        };
        debug!(?geometry, ?wave, "dual-scope component mounted");
        Ok(Self {
            manager,
            geometry,
            wave,
        })
    }

    /// Advance both scopes by one tick of `delta` seconds
    pub fn pump(&mut self, delta: f32) {
        self.manager.tick(delta);
    }

    pub fn geometry_scope(&self) -> ScopeId {
        self.geometry
    }

    pub fn wave_scope(&self) -> ScopeId {
        self.wave
    }

    pub fn manager(&self) -> &ScopeManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut ScopeManager {
        &mut self.manager
    }

    /// Dispose both scopes. Safe to call repeatedly.
    pub fn unmount(&mut self) {
        self.manager.dispose(self.geometry);
        self.manager.dispose(self.wave);
    }
}

impl Drop for DualScope {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn build_geometry_scope(
    manager: &mut ScopeManager,
    config: DemoConfig,
) -> Result<ScopeId, SetupError> {
    let DemoConfig {
        width,
        height,
        animated,
    } = config;
    let scope = manager.create(Surface::new(GEOMETRY_SURFACE, width, height))?;

    manager.insert(
        scope,
        SceneNode::filled(
            Shape::Circle(Circle::new(Point::new(width / 4.0, height / 2.0), 50.0)),
            Color::from_hex(0xE74C3C),
        ),
    )?;
    let rectangle = manager.insert(
        scope,
        SceneNode::filled(
            Shape::Rect(Rect::new(
                width / 2.0 - 50.0,
                height / 2.0 - 30.0,
                100.0,
                60.0,
            )),
            Color::from_hex(0x3498DB),
        ),
    )?;
    let triangle = manager.insert(
        scope,
        SceneNode::filled(
            Shape::RegularPolygon(RegularPolygon::new(
                Point::new(width * 3.0 / 4.0, height / 2.0),
                3,
                50.0,
            )),
            Color::from_hex(0x2ECC71),
        ),
    )?;

    // Accent dot at the viewport center.
    let center = manager.viewport(scope).ok_or(SetupError::ScopeGone)?.center();
    manager.insert(
        scope,
        SceneNode::filled(
            Shape::Circle(Circle::new(center, 10.0)),
            Color::from_hex(0xFFFF00),
        ),
    )?;

    if animated {
        manager.on_frame(
            scope,
            Box::new(move |scene, _event| {
                if let Some(node) = scene.get_mut(rectangle) {
                    node.rotate(animate::ROTATION_STEP);
                }
                if let Some(node) = scene.get_mut(triangle) {
                    node.rotate(-animate::ROTATION_STEP);
                }
            }),
        )?;
    }

    Ok(scope)
}

fn build_wave_scope(
    manager: &mut ScopeManager,
    config: DemoConfig,
) -> Result<ScopeId, SetupError> {
    let DemoConfig {
        width,
        height,
        animated,
    } = config;
    let scope = manager.create(Surface::new(WAVE_SURFACE, width, height))?;

    manager.insert(
        scope,
        SceneNode::filled(
            Shape::Text(TextLabel {
                position: Point::new(width / 2.0, 50.0),
                content: TITLE.to_string(),
                font_size: 24.0,
                weight: FontWeight::Bold,
                justification: Justification::Center,
            }),
            Color::from_hex(0x34495E),
        ),
    )?;

    let wavelength = animate::wavelength(width);
    let baseline = animate::wave_baseline(height);
    let mut path = SampledPath::new();
    let mut x = 0.0;
    while x <= width {
        path.push(Point::new(x, animate::wave_y(x, baseline, wavelength, 0.0)));
        x += animate::WAVE_SAMPLE_STEP;
    }
    let wave_path = manager.insert(
        scope,
        SceneNode::stroked(
            Shape::Path(path),
            Stroke {
                color: Color::from_hex(0x9B59B6),
                width: 3.0,
            },
        ),
    )?;

    let marker_baseline = animate::marker_baseline(height);
    let mut markers = Vec::with_capacity(animate::MARKER_COUNT);
    for index in 0..animate::MARKER_COUNT {
        let id = manager.insert(
            scope,
            SceneNode::filled(
                Shape::Circle(Circle::new(
                    Point::new(100.0 + index as f32 * 150.0, marker_baseline),
                    8.0,
                )),
                Color::from_hsl(
                    animate::marker_hue(0.0, index),
                    animate::MARKER_SATURATION,
                    animate::MARKER_LIGHTNESS,
                ),
            ),
        )?;
        markers.push(id);
    }

    if animated {
        // Fixed-step clock: animation depends on tick count, not wall time.
        let mut time = 0.0f32;
        manager.on_frame(
            scope,
            Box::new(move |scene, _event| {
                time += animate::TIME_STEP;

                if let Some(node) = scene.get_mut(wave_path) {
                    if let Shape::Path(path) = &mut node.shape {
                        for segment in path.segments_mut() {
                            segment.y = animate::wave_y(segment.x, baseline, wavelength, time);
                        }
                    }
                }

                for (index, &id) in markers.iter().enumerate() {
                    let Some(node) = scene.get_mut(id) else {
                        continue;
                    };
                    if let Shape::Circle(circle) = &mut node.shape {
                        circle.center.y = animate::marker_y(marker_baseline, time, index);
                    }
                    node.fill = Some(Color::from_hsl(
                        animate::marker_hue(time, index),
                        animate::MARKER_SATURATION,
                        animate::MARKER_LIGHTNESS,
                    ));
                }
            }),
        )?;
    }

    Ok(scope)
}
