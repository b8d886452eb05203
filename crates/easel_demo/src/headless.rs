//! Deterministic headless execution
//!
//! Drives a mounted component for a fixed frame budget with logical time,
//! so runs are reproducible regardless of the machine's actual refresh
//! rate.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::config::DemoConfig;
use crate::dual_scope::DualScope;

/// Configuration for a fixed-budget headless run
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct HeadlessRunConfig {
    /// Number of frames to execute
    pub max_frames: u32,
    /// Logical milliseconds between frames
    pub tick_ms: u64,
}

impl Default for HeadlessRunConfig {
    fn default() -> Self {
        Self {
            max_frames: 60,
            tick_ms: 16,
        }
    }
}

/// Frame context passed to the per-frame observer
#[derive(Debug, Clone, Copy)]
pub struct HeadlessContext {
    pub frame_index: u32,
    pub elapsed_ms: u64,
    /// Seconds handed to the scope pump each frame
    pub delta: f32,
}

/// Machine-readable summary of a headless run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlessReport {
    pub frames: u32,
    pub elapsed_ms: u64,
    pub live_scopes: usize,
    pub geometry_objects: usize,
    pub wave_objects: usize,
}

/// Drive a mounted component for `cfg.max_frames` frames, invoking
/// `observe` after each one.
pub fn run(
    demo: &mut DualScope,
    cfg: HeadlessRunConfig,
    mut observe: impl FnMut(&HeadlessContext, &DualScope),
) -> Result<HeadlessReport> {
    if cfg.max_frames == 0 {
        bail!("headless max_frames must be > 0");
    }
    if cfg.tick_ms == 0 {
        bail!("headless tick_ms must be > 0");
    }

    let delta = cfg.tick_ms as f32 / 1000.0;
    for frame in 0..cfg.max_frames {
        demo.pump(delta);
        observe(
            &HeadlessContext {
                frame_index: frame,
                elapsed_ms: cfg.tick_ms * u64::from(frame + 1),
                delta,
            },
            demo,
        );
    }

    Ok(report_for(demo, cfg))
}

/// Mount, run the full budget, and report
pub fn run_demo(config: DemoConfig, cfg: HeadlessRunConfig) -> Result<HeadlessReport> {
    let mut demo = DualScope::mount(config)?;
    run(&mut demo, cfg, |_, _| {})
}

fn report_for(demo: &DualScope, cfg: HeadlessRunConfig) -> HeadlessReport {
    let manager = demo.manager();
    HeadlessReport {
        frames: cfg.max_frames,
        elapsed_ms: cfg.tick_ms * u64::from(cfg.max_frames),
        live_scopes: manager.len(),
        geometry_objects: manager
            .scene(demo.geometry_scope())
            .map_or(0, |scene| scene.len()),
        wave_objects: manager
            .scene(demo.wave_scope())
            .map_or(0, |scene| scene.len()),
    }
}
