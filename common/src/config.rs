//! Compile-time configuration for the tilt grid.
//!
//! Everything here is a `const` so the filter window and grid storage can be
//! sized at compile time and no arithmetic is repeated per sample.

use embedded_graphics::geometry::Size;

// =============================================================================
// Display Configuration
// =============================================================================

/// Frame width in pixels (Pebble-class 144x168 watch display).
pub const FRAME_WIDTH: u32 = 144;

/// Frame height in pixels.
pub const FRAME_HEIGHT: u32 = 168;

/// Default frame used by the simulator and tests.
pub const FRAME_SIZE: Size = Size::new(FRAME_WIDTH, FRAME_HEIGHT);

// =============================================================================
// Grid Configuration
// =============================================================================

/// Number of grid columns.
pub const GRID_COLUMNS: usize = 7;

/// Number of grid rows.
pub const GRID_ROWS: usize = 7;

/// Total number of cells, stored row-major.
pub const CELL_COUNT: usize = GRID_COLUMNS * GRID_ROWS;

/// Extra pixels added to every cell's width and height so neighbouring
/// outlines overlap instead of leaving sub-pixel gaps.
pub const CELL_PADDING: u32 = 1;

// =============================================================================
// Motion Configuration
// =============================================================================

/// Raw samples consumed per smoothed reading.
pub const FILTER_WINDOW: usize = 6;

/// Divisor applied to the averaged acceleration delta before it moves the pointer.
pub const DELTA_DIVISOR: i64 = 10;

/// Accelerometer sampling rate requested from the sensor service.
pub const SAMPLE_RATE_HZ: u32 = 25;

/// Samples delivered per sensor callback.
pub const SAMPLES_PER_UPDATE: u32 = 1;

// =============================================================================
// Pointer Configuration
// =============================================================================

/// Pointer circle radius in pixels.
pub const POINTER_RADIUS: u32 = 5;

/// Pointer circle diameter (embedded-graphics circles are sized by diameter).
pub const POINTER_DIAMETER: u32 = POINTER_RADIUS * 2 + 1;

const _: () = assert!(FILTER_WINDOW >= 1);
const _: () = assert!(DELTA_DIVISOR > 0);
const _: () = assert!(FRAME_WIDTH as usize >= GRID_COLUMNS);
const _: () = assert!(FRAME_HEIGHT as usize >= GRID_ROWS);
