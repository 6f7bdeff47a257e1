//! Pointer integration.
//!
//! Turns the change between two smoothed readings into a pointer move.
//! The delta is `reference - average`, scaled down by [`DELTA_DIVISOR`], then
//! subtracted on X and added on Y (the axes are inverted independently to
//! match how the watch sits on the wrist). The result is clamped to the
//! frame, both ends inclusive.

use embedded_graphics::geometry::{Point, Size};

use crate::config::DELTA_DIVISOR;
use crate::motion::SmoothedReading;

/// Scaled per-axis displacement derived from one smoothed reading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Displacement {
    pub dx: i64,
    pub dy: i64,
}

impl Displacement {
    /// `(reference - average) / DELTA_DIVISOR` per axis, truncating toward zero.
    pub const fn from_reading(reading: SmoothedReading) -> Self {
        Self {
            dx: (reading.reference.x as i64 - reading.average.x as i64) / DELTA_DIVISOR,
            dy: (reading.reference.y as i64 - reading.average.y as i64) / DELTA_DIVISOR,
        }
    }
}

/// Pointer position bound to a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pointer {
    position: Point,
    frame: Size,
}

impl Pointer {
    /// Create a pointer at the center of `frame`.
    pub const fn centered(frame: Size) -> Self {
        Self {
            position: center_of(frame),
            frame,
        }
    }

    #[inline]
    pub const fn position(&self) -> Point { self.position }

    #[inline]
    pub const fn frame(&self) -> Size { self.frame }

    /// Move back to the frame center.
    #[inline]
    pub fn recenter(&mut self) { self.position = center_of(self.frame); }

    /// Apply one smoothed reading and return the new position.
    pub fn integrate(
        &mut self,
        reading: SmoothedReading,
    ) -> Point {
        let Displacement { dx, dy } = Displacement::from_reading(reading);
        let x = i64::from(self.position.x) - dx;
        let y = i64::from(self.position.y) + dy;
        self.position = Point::new(
            clamp_axis(x, self.frame.width),
            clamp_axis(y, self.frame.height),
        );
        self.position
    }
}

/// Frame center, rounding down on odd dimensions.
pub const fn center_of(frame: Size) -> Point { Point::new((frame.width / 2) as i32, (frame.height / 2) as i32) }

/// Clamp a widened coordinate into `[0, extent]`.
#[inline]
fn clamp_axis(
    value: i64,
    extent: u32,
) -> i32 {
    value.clamp(0, i64::from(extent)) as i32
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FRAME_SIZE;
    use crate::motion::MotionSample;

    fn reading(
        reference: (i32, i32),
        average: (i32, i32),
    ) -> SmoothedReading {
        SmoothedReading {
            reference: MotionSample::new(reference.0, reference.1),
            average: MotionSample::new(average.0, average.1),
        }
    }

    #[test]
    fn test_centered_on_creation() {
        let pointer = Pointer::centered(FRAME_SIZE);
        assert_eq!(pointer.position(), Point::new(72, 84));
    }

    #[test]
    fn test_center_rounds_down() {
        assert_eq!(center_of(Size::new(15, 9)), Point::new(7, 4));
    }

    #[test]
    fn test_displacement_is_scaled_and_truncated() {
        let d = Displacement::from_reading(reading((0, 0), (-59, 59)));
        assert_eq!(d, Displacement { dx: 5, dy: -5 });

        let tiny = Displacement::from_reading(reading((0, 0), (9, -9)));
        assert_eq!(tiny, Displacement { dx: 0, dy: 0 }, "deltas under the divisor vanish");
    }

    #[test]
    fn test_axes_are_inverted_independently() {
        let mut pointer = Pointer::centered(FRAME_SIZE);
        // reference - average = (+100, +100) -> dx = 10, dy = 10
        let pos = pointer.integrate(reading((100, 100), (0, 0)));
        assert_eq!(pos, Point::new(72 - 10, 84 + 10), "x decreases by dx, y increases by dy");
    }

    #[test]
    fn test_clamps_to_frame_edges_inclusive() {
        let mut pointer = Pointer::centered(FRAME_SIZE);
        assert_eq!(pointer.integrate(reading((0, 0), (100_000, 100_000))), Point::new(144, 0));
        assert_eq!(pointer.integrate(reading((0, 0), (-100_000, -100_000))), Point::new(0, 168));
    }

    #[test]
    fn test_extreme_readings_stay_in_bounds() {
        let extremes = [i32::MIN, -1, 0, 1, i32::MAX];
        for &a in &extremes {
            for &b in &extremes {
                let mut pointer = Pointer::centered(FRAME_SIZE);
                let pos = pointer.integrate(reading((a, b), (b, a)));
                assert!((0..=144).contains(&pos.x), "x out of bounds for ({a}, {b}): {pos:?}");
                assert!((0..=168).contains(&pos.y), "y out of bounds for ({a}, {b}): {pos:?}");
            }
        }
    }

    #[test]
    fn test_recenter_restores_center() {
        let mut pointer = Pointer::centered(FRAME_SIZE);
        pointer.integrate(reading((0, 0), (5000, 5000)));
        assert_ne!(pointer.position(), Point::new(72, 84));
        pointer.recenter();
        assert_eq!(pointer.position(), Point::new(72, 84));
    }
}
