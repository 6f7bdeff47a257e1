//! Accelerometer smoothing.
//!
//! Raw samples are collected into a fixed window of [`FILTER_WINDOW`] entries.
//! When the window is full it is folded into a single smoothed reading by
//! repeatedly averaging the running value with the next sample:
//!
//! ```text
//! running = w[0]
//! running = (running + w[1]) / 2
//! ...
//! running = (running + w[N-1]) / 2
//! ```
//!
//! This weights later samples more heavily than earlier ones and is NOT the
//! arithmetic mean. For `[10, 20, 30, 40, 50, 60]` it yields `50`, not `35`.
//! Division truncates toward zero at every step, so small deltas can vanish.
//!
//! The filter also keeps the two readings the pointer integrator works with:
//! the `reference_sample` (previous smoothed reading) and the
//! `current_average` (latest smoothed reading).

use heapless::Vec;

use crate::config::FILTER_WINDOW;

// =============================================================================
// Motion Sample
// =============================================================================

/// One 2-axis accelerometer reading in milli-g.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionSample {
    pub x: i32,
    pub y: i32,
}

impl MotionSample {
    /// Zero vector. Both reference slots start here on screen load.
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(
        x: i32,
        y: i32,
    ) -> Self {
        Self { x, y }
    }

    /// Average two samples per axis, truncating toward zero.
    ///
    /// The sum is widened so extreme readings cannot overflow; the halved
    /// result of two `i32` values always fits back into `i32`.
    #[inline]
    pub const fn halved_sum(
        self,
        next: Self,
    ) -> Self {
        Self {
            x: ((self.x as i64 + next.x as i64) / 2) as i32,
            y: ((self.y as i64 + next.y as i64) / 2) as i32,
        }
    }
}

// =============================================================================
// Window Result
// =============================================================================

/// Readings handed to the pointer integrator when a window completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SmoothedReading {
    /// Previous smoothed reading (OLD).
    pub reference: MotionSample,
    /// Freshly computed smoothed reading (NEW).
    pub average: MotionSample,
}

// =============================================================================
// Motion Filter
// =============================================================================

/// Sample history with the OLD/NEW reference readings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MotionFilter {
    window: Vec<MotionSample, FILTER_WINDOW>,
    reference_sample: MotionSample,
    current_average: MotionSample,
}

impl MotionFilter {
    /// Create an empty filter with both reference readings zeroed.
    pub const fn new() -> Self {
        Self {
            window: Vec::new(),
            reference_sample: MotionSample::ZERO,
            current_average: MotionSample::ZERO,
        }
    }

    /// Add one raw sample.
    ///
    /// Returns `Some` once every [`FILTER_WINDOW`] samples, after the window
    /// has been folded into `current_average` and emptied. The reference is
    /// left untouched until [`MotionFilter::commit`] is called.
    pub fn push(
        &mut self,
        sample: MotionSample,
    ) -> Option<SmoothedReading> {
        // Capacity equals the threshold, so the window is never full here.
        self.window.push(sample).ok();

        if !self.window.is_full() {
            return None;
        }

        self.current_average = fold_window(&self.window);
        self.window.clear();

        Some(SmoothedReading {
            reference: self.reference_sample,
            average: self.current_average,
        })
    }

    /// Promote the latest smoothed reading to be the new reference (OLD = NEW).
    #[inline]
    pub fn commit(&mut self) { self.reference_sample = self.current_average; }

    /// Previous smoothed reading (OLD).
    #[inline]
    pub const fn reference_sample(&self) -> MotionSample { self.reference_sample }

    /// Latest smoothed reading (NEW).
    #[inline]
    pub const fn current_average(&self) -> MotionSample { self.current_average }

    /// Number of raw samples waiting in the current window.
    #[inline]
    pub fn pending(&self) -> usize { self.window.len() }
}

impl Default for MotionFilter {
    fn default() -> Self { Self::new() }
}

/// Fold a window oldest-first with the iterative halving average.
///
/// An empty slice folds to [`MotionSample::ZERO`].
pub fn fold_window(samples: &[MotionSample]) -> MotionSample {
    let Some((first, rest)) = samples.split_first() else {
        return MotionSample::ZERO;
    };
    rest.iter().fold(*first, |running, next| running.halved_sum(*next))
}

// =============================================================================
// Tests
// =============================================================================
