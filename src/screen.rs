//! Main screen lifecycle.
//!
//! Owns the [`Session`] and the accelerometer subscription for as long as the
//! screen is loaded. Host callbacks (sensor sample, select click, redraw) map
//! one-to-one onto methods here.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use tiltgrid_common::{Event, MotionSample, Session, render};
use tracing::{debug, info, trace};

use crate::sensor::{AccelService, AccelSubscription};

/// The single screen of the app.
pub struct MainScreen<S: AccelService> {
    session: Session,
    subscription: AccelSubscription<S>,
}

impl<S: AccelService> MainScreen<S> {
    /// Load the screen for a display of size `frame` and start the sensor.
    pub fn load(
        frame: Size,
        service: S,
    ) -> Self {
        let mut session = Session::new(frame);
        // The first frame is always drawn when a screen appears
        session.mark_dirty();

        info!(width = frame.width, height = frame.height, "main screen loaded");

        Self {
            session,
            subscription: AccelSubscription::acquire(service),
        }
    }

    /// Sensor callback.
    pub fn on_accel(
        &mut self,
        sample: MotionSample,
    ) {
        let response = self.session.handle_event(Event::Accel(sample));
        if response.redraw {
            let pointer = self.session.pointer();
            trace!(x = pointer.x, y = pointer.y, "pointer moved");
        }
        if response.highlight.is_some()
            && let Some(cell) = self.session.active_cell()
        {
            trace!(row = cell.row, column = cell.column, "highlight moved");
        }
    }

    /// Select button callback.
    pub fn on_select(&mut self) {
        self.session.handle_event(Event::Select);
        debug!("pointer recentered");
    }

    /// Redraw if anything changed since the last call.
    ///
    /// Returns `Ok(true)` when the display was redrawn.
    pub fn draw<D>(
        &mut self,
        display: &mut D,
    ) -> Result<bool, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if !self.session.take_dirty() {
            return Ok(false);
        }
        render(&self.session, display)?;
        Ok(true)
    }

    /// Tear the screen down. The sensor subscription is released here, and
    /// also if the screen is dropped without calling this.
    pub fn unload(self) {
        info!("main screen unloaded");
    }

    #[inline]
    pub const fn session(&self) -> &Session { &self.session }

    #[inline]
    pub const fn sensor(&self) -> &S { self.subscription.service() }

    #[inline]
    pub fn sensor_mut(&mut self) -> &mut S { self.subscription.service_mut() }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics_simulator::SimulatorDisplay;
    use tiltgrid_common::Phase;
    use tiltgrid_common::colors::{BLACK, WHITE};
    use tiltgrid_common::config::{FILTER_WINDOW, FRAME_SIZE};

    use super::*;
    use crate::sensor::TiltSensor;

    fn display() -> SimulatorDisplay<Rgb565> { SimulatorDisplay::new(FRAME_SIZE) }

    /// Feed one full filter window from the simulated sensor.
    fn feed_window(screen: &mut MainScreen<TiltSensor>) {
        for _ in 0..FILTER_WINDOW {
            let sample = screen.sensor().read().unwrap();
            screen.on_accel(sample);
        }
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    #[test]
    fn test_load_subscribes_sensor() {
        let screen = MainScreen::load(FRAME_SIZE, TiltSensor::new());
        assert!(screen.sensor().is_subscribed(), "sensor should be live while loaded");
        assert_eq!(screen.session().phase(), Phase::IdleCentered);
        assert_eq!(screen.session().pointer(), Point::new(72, 84));
    }

    #[test]
    fn test_first_draw_then_clean() {
        let mut screen = MainScreen::load(FRAME_SIZE, TiltSensor::new());
        let mut display = display();

        assert_eq!(screen.draw(&mut display), Ok(true), "first frame must be drawn");
        assert_eq!(screen.draw(&mut display), Ok(false), "nothing changed since");

        // Whole frame starts highlighted, so the background shows inverted
        assert_eq!(display.get_pixel(Point::new(5, 5)), WHITE);
    }

    #[test]
    fn test_select_invalidates() {
        let mut screen = MainScreen::load(FRAME_SIZE, TiltSensor::new());
        let mut display = display();
        screen.draw(&mut display).ok();

        screen.on_select();
        assert_eq!(screen.draw(&mut display), Ok(true), "select should request a redraw");
    }

    #[test]
    fn test_partial_window_does_not_invalidate() {
        let mut screen = MainScreen::load(FRAME_SIZE, TiltSensor::new());
        let mut display = display();
        screen.draw(&mut display).ok();

        for _ in 0..FILTER_WINDOW - 1 {
            screen.on_accel(MotionSample::new(500, 500));
        }
        assert_eq!(screen.draw(&mut display), Ok(false), "window not complete yet");

        screen.on_accel(MotionSample::new(500, 500));
        assert_eq!(screen.draw(&mut display), Ok(true), "completed window should redraw");
    }

    // -------------------------------------------------------------------------
    // Tilt
    // -------------------------------------------------------------------------

    #[test]
    fn test_roll_right_moves_pointer_right() {
        let mut screen = MainScreen::load(FRAME_SIZE, TiltSensor::new());
        screen.sensor_mut().tilt(0.0, 30.0);
        feed_window(&mut screen);

        // ~500 mg on x from rest gives a displacement of ~50 px
        let pointer = screen.session().pointer();
        assert!((115..=129).contains(&pointer.x), "pointer should move right, got {pointer:?}");
        assert_eq!(pointer.y, 84, "no pitch, no vertical motion");
        assert_eq!(screen.session().phase(), Phase::Tracking);
    }

    #[test]
    fn test_pitch_up_moves_pointer_up() {
        let mut screen = MainScreen::load(FRAME_SIZE, TiltSensor::new());
        screen.sensor_mut().tilt(30.0, 0.0);
        feed_window(&mut screen);

        let pointer = screen.session().pointer();
        assert_eq!(pointer.x, 72, "no roll, no horizontal motion");
        assert!(pointer.y < 84 - 40, "pointer should move up, got {pointer:?}");
    }

    #[test]
    fn test_held_tilt_settles() {
        let mut screen = MainScreen::load(FRAME_SIZE, TiltSensor::new());
        screen.sensor_mut().tilt(0.0, 30.0);
        feed_window(&mut screen);
        let settled = screen.session().pointer();

        feed_window(&mut screen);
        assert_eq!(screen.session().pointer(), settled, "constant tilt should not move the pointer");
    }

    #[test]
    fn test_tracking_draws_cell_highlight() {
        let mut screen = MainScreen::load(FRAME_SIZE, TiltSensor::new());
        let mut display = display();
        screen.sensor_mut().tilt(0.0, 30.0);
        feed_window(&mut screen);
        screen.draw(&mut display).ok();

        // Far from the active cell the background is no longer inverted
        assert_eq!(display.get_pixel(Point::new(5, 5)), BLACK);
    }
}
