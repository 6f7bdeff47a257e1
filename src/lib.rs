//! Host glue for the tilt grid watch app.
//!
//! The platform-independent logic lives in [`tiltgrid_common`]. This crate
//! adds what a host runtime provides on the watch:
//!
//! - [`screen`]: screen load/unload, callback dispatch and redraw on invalidation
//! - [`sensor`]: accelerometer service trait, scoped subscription and the
//!   keyboard-driven tilt sensor used by the simulator
//! - [`logging`]: tracing subscriber setup
//! - [`config`]: host timing and window constants
//!
//! The `simulator` binary (feature `window`) wires these to an SDL window.

pub mod config;
pub mod logging;
pub mod screen;
pub mod sensor;

pub use screen::MainScreen;
pub use sensor::{AccelService, AccelSubscription, TiltSensor};
