//! Host application configuration constants.
//!
//! Layout and motion constants live in [`tiltgrid_common::config`]; this
//! module only holds what the desktop host needs on top of that.

use std::time::Duration;

use tiltgrid_common::config::SAMPLE_RATE_HZ;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Interval between accelerometer samples (25 Hz -> 40 ms). The main loop
/// sleeps if a tick completes early.
pub const SAMPLE_PERIOD: Duration = Duration::from_millis(1000 / SAMPLE_RATE_HZ as u64);

// =============================================================================
// Window Configuration
// =============================================================================

/// Simulator window title.
pub const WINDOW_TITLE: &str = "Tilt Grid";

/// Pixel scale of the simulator window (144x168 is tiny on a desktop).
pub const WINDOW_SCALE: u32 = 3;

/// Degrees of tilt applied per key press.
pub const TILT_STEP_DEG: f32 = 5.0;

// =============================================================================
// Logging Configuration
// =============================================================================

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";
