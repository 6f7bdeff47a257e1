//! Pure rendering of a [`Session`].
//!
//! The screen is drawn in one pass:
//!
//! 1. clear to [`BACKGROUND`]
//! 2. outline every grid cell in [`STROKE`]
//! 3. pointer circle (stroke + fill) and its center pixel
//!
//! All of it goes through an [`Inverted`] view of the target, which flips
//! the color of any pixel that lands inside the highlight rectangle. That is
//! the same result a color-inverting overlay layer produces on the watch,
//! without needing to read pixels back from the display.

use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, ContainsPoint, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle};

use crate::colors::{BACKGROUND, FILL, STROKE};
use crate::config::POINTER_DIAMETER;
use crate::session::Session;

const GRID_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(STROKE, 1);

fn pointer_style() -> PrimitiveStyle<Rgb565> {
    PrimitiveStyleBuilder::new()
        .stroke_color(STROKE)
        .stroke_width(1)
        .fill_color(FILL)
        .build()
}

// =============================================================================
// Inverting View
// =============================================================================

/// Colors whose channels can be flipped.
pub trait Invert: PixelColor {
    #[must_use]
    fn invert(self) -> Self;
}

impl Invert for Rgb565 {
    #[inline]
    fn invert(self) -> Self {
        Self::new(
            Self::MAX_R - self.r(),
            Self::MAX_G - self.g(),
            Self::MAX_B - self.b(),
        )
    }
}

/// Draw target adapter that inverts every pixel inside `region`.
pub struct Inverted<'a, D> {
    target: &'a mut D,
    region: Rectangle,
}

impl<'a, D> Inverted<'a, D> {
    pub fn new(
        target: &'a mut D,
        region: Rectangle,
    ) -> Self {
        Self { target, region }
    }
}

impl<D> Dimensions for Inverted<'_, D>
where
    D: Dimensions,
{
    fn bounding_box(&self) -> Rectangle { self.target.bounding_box() }
}

impl<D> DrawTarget for Inverted<'_, D>
where
    D: DrawTarget,
    D::Color: Invert,
{
    type Color = D::Color;
    type Error = D::Error;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let region = self.region;
        self.target.draw_iter(pixels.into_iter().map(|Pixel(point, color)| {
            if region.contains(point) {
                Pixel(point, color.invert())
            } else {
                Pixel(point, color)
            }
        }))
    }
}

// =============================================================================
// Screen Rendering
// =============================================================================

/// Draw the whole screen for `session` into `display`.
pub fn render<D>(
    session: &Session,
    display: &mut D,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut view = Inverted::new(display, session.highlight());

    view.clear(BACKGROUND)?;
    draw_grid(session, &mut view)?;
    draw_pointer(session.pointer(), &mut view)
}

/// Outline every grid cell.
pub fn draw_grid<D>(
    session: &Session,
    display: &mut D,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    for cell in session.grid().cells() {
        cell.into_styled(GRID_STYLE).draw(display)?;
    }
    Ok(())
}

/// Pointer circle with a single marker pixel at its center.
pub fn draw_pointer<D>(
    center: Point,
    display: &mut D,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(center, POINTER_DIAMETER)
        .into_styled(pointer_style())
        .draw(display)?;
    Pixel(center, STROKE).draw(display)
}

// =============================================================================
// Tests
// =============================================================================
