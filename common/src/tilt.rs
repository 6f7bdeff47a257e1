//! Simulated wrist tilt.
//!
//! Stands in for the accelerometer when running without hardware. The model
//! keeps a pitch and roll angle and reports the gravity component along the
//! watch X and Y axes in milli-g:
//!
//! ```text
//! x = 1000 * sin(roll)
//! y = 1000 * sin(pitch)
//! ```
//!
//! The pointer integrates *changes* between smoothed readings, so it moves
//! while the tilt changes and stops once the tilt holds steady.

use micromath::F32;

use crate::motion::MotionSample;

/// One standard gravity in milli-g.
pub const GRAVITY_MILLI_G: f32 = 1000.0;

/// Tilt limit in degrees on either axis.
pub const MAX_TILT_DEG: f32 = 90.0;

const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;

/// Pitch/roll state of the simulated watch.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltModel {
    pitch_deg: f32,
    roll_deg: f32,
}

impl TiltModel {
    /// Watch lying flat.
    pub const fn level() -> Self {
        Self {
            pitch_deg: 0.0,
            roll_deg: 0.0,
        }
    }

    #[inline]
    pub const fn pitch(&self) -> f32 { self.pitch_deg }

    #[inline]
    pub const fn roll(&self) -> f32 { self.roll_deg }

    /// Adjust both angles, clamping each to ±[`MAX_TILT_DEG`].
    pub fn tilt(
        &mut self,
        pitch_deg: f32,
        roll_deg: f32,
    ) {
        self.pitch_deg = (self.pitch_deg + pitch_deg).clamp(-MAX_TILT_DEG, MAX_TILT_DEG);
        self.roll_deg = (self.roll_deg + roll_deg).clamp(-MAX_TILT_DEG, MAX_TILT_DEG);
    }

    /// Return to level.
    #[inline]
    pub fn reset(&mut self) { *self = Self::level(); }

    /// Accelerometer reading for the current tilt.
    pub fn sample(&self) -> MotionSample {
        MotionSample::new(gravity_component(self.roll_deg), gravity_component(self.pitch_deg))
    }
}

fn gravity_component(angle_deg: f32) -> i32 {
    let scaled = F32(angle_deg * DEG_TO_RAD).sin().0 * GRAVITY_MILLI_G;
    // Round half away from zero
    if scaled >= 0.0 {
        (scaled + 0.5) as i32
    } else {
        (scaled - 0.5) as i32
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(
        actual: i32,
        expected: i32,
    ) {
        assert!((actual - expected).abs() <= 5, "expected ~{expected}, got {actual}");
    }

    #[test]
    fn test_level_reads_zero() {
        let sample = TiltModel::level().sample();
        assert_near(sample.x, 0);
        assert_near(sample.y, 0);
    }

    #[test]
    fn test_roll_drives_x_pitch_drives_y() {
        let mut model = TiltModel::level();
        model.tilt(0.0, 30.0);
        let sample = model.sample();
        assert_near(sample.x, 500);
        assert_near(sample.y, 0);

        model.tilt(-90.0, 0.0);
        assert_near(model.sample().y, -1000);
    }

    #[test]
    fn test_tilt_is_clamped() {
        let mut model = TiltModel::level();
        model.tilt(500.0, -500.0);
        assert_eq!(model.pitch(), MAX_TILT_DEG);
        assert_eq!(model.roll(), -MAX_TILT_DEG);
        assert_near(model.sample().x, -1000);
    }

    #[test]
    fn test_reset_levels_model() {
        let mut model = TiltModel::level();
        model.tilt(12.0, -7.0);
        model.reset();
        assert_eq!(model, TiltModel::level());
    }
}
