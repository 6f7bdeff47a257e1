//! Core logic for the tilt grid watch app.
//!
//! This crate contains everything that does not depend on a particular
//! display or sensor driver, so it can be shared between the desktop
//! simulator and watch firmware and tested on the host:
//!
//! - [`motion`]: accelerometer window and iterative halving average
//! - [`pointer`]: delta scaling, axis inversion and frame clamping
//! - [`grid`]: 7x7 cell layout and first-match hit-testing
//! - [`session`]: per-screen state and the event transition function
//! - [`render`]: pure drawing of a session onto any `DrawTarget`
//! - [`tilt`]: simulated wrist tilt producing accelerometer samples
//! - [`config`], [`colors`]: compile-time constants
//!
//! # Data flow
//!
//! ```text
//! sample -> MotionFilter -> Pointer -> Grid -> Session (dirty + highlight) -> render
//! ```
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests and never allocates.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod grid;
pub mod motion;
pub mod pointer;
pub mod render;
pub mod session;
pub mod tilt;

// Re-export commonly used items
pub use grid::{CellIndex, Grid};
pub use motion::{MotionFilter, MotionSample, SmoothedReading};
pub use pointer::Pointer;
pub use render::render;
pub use session::{Event, Phase, Response, Session};
pub use tilt::TiltModel;
