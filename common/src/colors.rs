//! Color constants for the tilt grid.
//!
//! The watch face is monochrome in spirit: white strokes on black. The
//! constants are still `Rgb565` so the same renderer drives color panels and
//! the desktop simulator without conversion.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pure black (0, 0, 0).
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31).
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Window background.
pub const BACKGROUND: Rgb565 = BLACK;

/// Grid outlines, pointer outline and pointer center pixel.
pub const STROKE: Rgb565 = WHITE;

/// Pointer interior.
pub const FILL: Rgb565 = BLACK;
