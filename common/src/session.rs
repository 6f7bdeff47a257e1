//! Application state and the event transition function.
//!
//! A [`Session`] holds everything the main screen needs between callbacks:
//! the motion filter, the pointer, the grid and the highlight overlay. The
//! host owns one session per loaded screen and feeds it [`Event`]s; every
//! state change goes through [`Session::handle_event`].
//!
//! # Phases
//!
//! | Phase | Entered on |
//! |-------|------------|
//! | [`Phase::IdleCentered`] | Screen load, select press |
//! | [`Phase::Tracking`] | Every completed sample window |
//!
//! There is no terminal phase; the session simply ends when the screen is
//! unloaded.

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::grid::{CellIndex, Grid};
use crate::motion::{MotionFilter, MotionSample};
use crate::pointer::Pointer;

/// Inputs delivered by the host run loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// One accelerometer sample.
    Accel(MotionSample),
    /// Select button single click.
    Select,
}

/// Externally observable phase of the screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Pointer sits at the frame center and has not moved since.
    #[default]
    IdleCentered,
    /// Pointer is following the smoothed accelerometer readings.
    Tracking,
}

/// What the host has to do after an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Response {
    /// The pointer layer was invalidated.
    pub redraw: bool,
    /// New overlay bounds, if the highlight was repositioned.
    pub highlight: Option<Rectangle>,
}

/// Per-screen application state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    frame: Size,
    filter: MotionFilter,
    pointer: Pointer,
    grid: Grid,
    highlight: Rectangle,
    active_cell: Option<CellIndex>,
    phase: Phase,
    dirty: bool,
}

impl Session {
    /// Fresh state for a screen of size `frame`.
    ///
    /// The pointer starts centered, the history is zeroed and the highlight
    /// overlay covers the whole frame until the first window completes.
    pub fn new(frame: Size) -> Self {
        Self {
            frame,
            filter: MotionFilter::new(),
            pointer: Pointer::centered(frame),
            grid: Grid::new(frame),
            highlight: Rectangle::new(Point::zero(), frame),
            active_cell: None,
            phase: Phase::IdleCentered,
            dirty: false,
        }
    }

    /// Apply one event.
    pub fn handle_event(
        &mut self,
        event: Event,
    ) -> Response {
        match event {
            Event::Accel(sample) => self.on_sample(sample),
            Event::Select => self.on_select(),
        }
    }

    fn on_sample(
        &mut self,
        sample: MotionSample,
    ) -> Response {
        let Some(reading) = self.filter.push(sample) else {
            return Response::default();
        };

        let position = self.pointer.integrate(reading);

        // Highlight stays put if the pointer is on an uncovered edge strip
        let mut highlight = None;
        if let Some(index) = self.grid.cell_at(position) {
            let bounds = self.grid.cell(index);
            self.highlight = bounds;
            self.active_cell = Some(index);
            highlight = Some(bounds);
        }

        self.filter.commit();
        self.phase = Phase::Tracking;
        self.dirty = true;

        Response { redraw: true, highlight }
    }

    fn on_select(&mut self) -> Response {
        self.pointer.recenter();
        self.phase = Phase::IdleCentered;
        self.dirty = true;

        Response {
            redraw: true,
            highlight: None,
        }
    }

    /// Consume the invalidation flag. Returns `true` if a redraw is due.
    #[inline]
    pub fn take_dirty(&mut self) -> bool { core::mem::take(&mut self.dirty) }

    /// Force a redraw on the next [`Session::take_dirty`].
    #[inline]
    pub fn mark_dirty(&mut self) { self.dirty = true; }

    #[inline]
    pub const fn is_dirty(&self) -> bool { self.dirty }

    #[inline]
    pub const fn frame(&self) -> Size { self.frame }

    #[inline]
    pub const fn pointer(&self) -> Point { self.pointer.position() }

    #[inline]
    pub const fn grid(&self) -> &Grid { &self.grid }

    /// Current overlay bounds.
    #[inline]
    pub const fn highlight(&self) -> Rectangle { self.highlight }

    /// Cell under the pointer as of the last completed window.
    #[inline]
    pub const fn active_cell(&self) -> Option<CellIndex> { self.active_cell }

    #[inline]
    pub const fn phase(&self) -> Phase { self.phase }

    #[inline]
    pub const fn filter(&self) -> &MotionFilter { &self.filter }
}

// =============================================================================
// Tests
// =============================================================================
