//! Closed-form animation functions for the demo scenes
//!
//! Every animated property is a pure function of the wave clock (and marker
//! index), so any frame can be reproduced exactly from `t` alone.

/// Degrees added to each rotating shape per tick
pub const ROTATION_STEP: f32 = 1.0;

/// Wave-clock advance per tick
pub const TIME_STEP: f32 = 0.05;

/// Peak vertical displacement of the wave path
pub const WAVE_AMPLITUDE: f32 = 30.0;

/// Horizontal distance between consecutive wave samples
pub const WAVE_SAMPLE_STEP: f32 = 10.0;

/// Number of animated dot markers
pub const MARKER_COUNT: usize = 5;

/// Peak vertical displacement of a marker
pub const MARKER_AMPLITUDE: f32 = 20.0;

/// Phase shift between neighboring markers, in radians
pub const MARKER_PHASE_OFFSET: f32 = 0.5;

/// Hue advance per unit of wave-clock time, in degrees
pub const HUE_RATE: f32 = 50.0;

/// Hue separation between neighboring markers, in degrees
pub const HUE_STEP: f32 = 60.0;

pub const MARKER_SATURATION: f32 = 0.7;
pub const MARKER_LIGHTNESS: f32 = 0.6;

/// Wavelength of the wave path for a given scene width
pub fn wavelength(width: f32) -> f32 {
    width / 8.0
}

/// Resting y of the wave path
pub fn wave_baseline(height: f32) -> f32 {
    height * 0.7
}

/// Resting y of the marker row
pub fn marker_baseline(height: f32) -> f32 {
    height * 0.3
}

/// Vertical coordinate of the wave at `x` for wave-clock time `time`
pub fn wave_y(x: f32, baseline: f32, wavelength: f32, time: f32) -> f32 {
    baseline + (x / wavelength + time).sin() * WAVE_AMPLITUDE
}

/// Vertical coordinate of marker `index` at wave-clock time `time`
pub fn marker_y(baseline: f32, time: f32, index: usize) -> f32 {
    baseline + (time + index as f32 * MARKER_PHASE_OFFSET).sin() * MARKER_AMPLITUDE
}

/// Hue of marker `index` at wave-clock time `time`, in degrees
pub fn marker_hue(time: f32, index: usize) -> f32 {
    (time * HUE_RATE + index as f32 * HUE_STEP) % 360.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wave_is_flat_at_phase_zero() {
        // sin(0) = 0, so the first sample sits on the baseline.
        assert_eq!(wave_y(0.0, 280.0, 100.0, 0.0), 280.0);
    }

    #[test]
    fn wave_peaks_at_quarter_period() {
        let wl = 100.0;
        let x = std::f32::consts::FRAC_PI_2 * wl;
        let y = wave_y(x, 280.0, wl, 0.0);
        assert!((y - (280.0 + WAVE_AMPLITUDE)).abs() < 1e-3);
    }

    #[test]
    fn markers_start_on_their_baseline_with_spread_hues() {
        assert_eq!(marker_y(120.0, 0.0, 0), 120.0);
        for index in 0..MARKER_COUNT {
            assert_eq!(marker_hue(0.0, index), index as f32 * HUE_STEP);
        }
    }

    #[test]
    fn hue_stays_within_a_turn() {
        let mut time = 0.0f32;
        for _ in 0..1000 {
            time += TIME_STEP;
            for index in 0..MARKER_COUNT {
                let hue = marker_hue(time, index);
                assert!((0.0..360.0).contains(&hue), "hue out of range: {hue}");
            }
        }
    }

    #[test]
    fn neighboring_markers_are_phase_shifted() {
        let t = 1.3;
        let a = marker_y(120.0, t, 0);
        let b = marker_y(120.0, t, 1);
        assert_eq!(b, 120.0 + (t + MARKER_PHASE_OFFSET).sin() * MARKER_AMPLITUDE);
        assert_ne!(a, b);
    }
}
