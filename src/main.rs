//! Tilt Grid desktop simulator.
//!
//! Runs the watch app in an `embedded-graphics-simulator` window. A simulated
//! accelerometer is sampled at 25 Hz; its tilt is changed from the keyboard.
//! The pointer follows changes in tilt (not the tilt itself), so it moves
//! while a key is being pressed and settles once the tilt holds.
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | `W` / `S` | Tilt top edge down / up (pointer up / down) |
//! | `A` / `D` | Roll left / right (pointer left / right) |
//! | `X` | Select button: recenter the pointer |
//! | `R` | Level the simulated watch |
//!
//! Closing the window unloads the screen, which releases the accelerometer.

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use tiltgrid::config::{SAMPLE_PERIOD, TILT_STEP_DEG, WINDOW_SCALE, WINDOW_TITLE};
use tiltgrid::logging::init_logging;
use tiltgrid::{MainScreen, TiltSensor};
use tiltgrid_common::colors::BACKGROUND;
use tiltgrid_common::config::FRAME_SIZE;

fn main() {
    init_logging();

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(FRAME_SIZE);
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new(WINDOW_TITLE, &output_settings);

    display.clear(BACKGROUND).ok();

    let mut screen = MainScreen::load(display.size(), TiltSensor::new());

    'running: loop {
        let tick_start = Instant::now();

        // Redraw only on invalidation; the window still needs pumping every tick
        screen.draw(&mut display).ok();
        window.update(&display);

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => match keycode {
                    Keycode::W => screen.sensor_mut().tilt(TILT_STEP_DEG, 0.0),
                    Keycode::S => screen.sensor_mut().tilt(-TILT_STEP_DEG, 0.0),
                    Keycode::A => screen.sensor_mut().tilt(0.0, -TILT_STEP_DEG),
                    Keycode::D => screen.sensor_mut().tilt(0.0, TILT_STEP_DEG),
                    // Ignore OS key repeat so holding the button is a single click
                    Keycode::X if !repeat => screen.on_select(),
                    Keycode::R if !repeat => screen.sensor_mut().level(),
                    _ => {}
                },
                _ => {}
            }
        }

        // One sample per sensor callback
        if let Some(sample) = screen.sensor().read() {
            screen.on_accel(sample);
        }

        if let Some(remaining) = SAMPLE_PERIOD.checked_sub(tick_start.elapsed()) {
            thread::sleep(remaining);
        }
    }

    screen.unload();
}
