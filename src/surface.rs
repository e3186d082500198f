use core::ops::{BitOr, Deref, DerefMut};

use embedded_graphics::{
    mono_font::{ascii::FONT_5X8, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Arc, Line, PrimitiveStyle, Rectangle, Sector},
    text::{Baseline, Text},
};

/// Quarter sections of a circle, as a bitmask.
///
/// Quadrants are named in screen coordinates, where y grows downward. They are
/// numbered in the direction of increasing angle from the +x axis, so a sweep
/// of `0..=pi` covers `LOWER_RIGHT | LOWER_LEFT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quadrants(u8);

impl Quadrants {
    pub const NONE: Self = Self(0x0);
    pub const LOWER_RIGHT: Self = Self(0x1);
    pub const LOWER_LEFT: Self = Self(0x2);
    pub const UPPER_LEFT: Self = Self(0x4);
    pub const UPPER_RIGHT: Self = Self(0x8);

    pub const LOWER_HALF: Self = Self(0x1 | 0x2);

    /// Keeps only the low four bits of `bits`.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0xf)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Start angle of each selected quadrant, in degrees from +x towards +y.
    pub fn start_angles(self) -> impl Iterator<Item = f32> {
        (0..4u8)
            .filter(move |i| self.0 & (1 << *i) != 0)
            .map(|i| f32::from(i) * 90.)
    }
}

impl BitOr for Quadrants {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// The drawing primitives the gauges are built from.
///
/// Anything that is an embedded-graphics [`DrawTarget`] over [`BinaryColor`]
/// is a `Surface`. Surfaces backed by a transport that benefits from grouping
/// writes can hook [`Surface::begin_batch`] and [`Surface::end_batch`].
pub trait Surface {
    type Error;

    fn dimensions(&self) -> Size;

    fn fill_rect(&mut self, area: Rectangle, color: BinaryColor) -> Result<(), Self::Error>;

    /// Outlines the selected quadrants of a circle of `radius` around `center`.
    fn draw_quadrants(
        &mut self,
        center: Point,
        radius: u32,
        quadrants: Quadrants,
        color: BinaryColor,
    ) -> Result<(), Self::Error>;

    /// Fills the selected quadrants of a disc of `radius` around `center`.
    fn fill_quadrants(
        &mut self,
        center: Point,
        radius: u32,
        quadrants: Quadrants,
        color: BinaryColor,
    ) -> Result<(), Self::Error>;

    fn draw_line(&mut self, from: Point, to: Point, color: BinaryColor) -> Result<(), Self::Error>;

    /// Draws `text` with its top left corner at `top_left`.
    fn draw_text(
        &mut self,
        text: &str,
        top_left: Point,
        color: BinaryColor,
    ) -> Result<(), Self::Error>;

    fn clear(&mut self, color: BinaryColor) -> Result<(), Self::Error>;

    fn begin_batch(&mut self) {}

    fn end_batch(&mut self) {}

    /// Groups every draw made through the returned guard into one batch.
    fn batch(&mut self) -> Batch<'_, Self>
    where
        Self: Sized,
    {
        Batch::new(self)
    }
}

/// A surface that keeps a frame buffer and pushes it to the hardware on demand.
pub trait Panel: Surface {
    fn refresh(&mut self) -> Result<(), Self::Error>;
}

/// Scoped draw batch. `end_batch` runs when the guard is dropped.
pub struct Batch<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> Batch<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        surface.begin_batch();
        Self { surface }
    }
}

impl<S: Surface + ?Sized> Deref for Batch<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for Batch<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for Batch<'_, S> {
    fn drop(&mut self) {
        self.surface.end_batch();
    }
}

impl<D> Surface for D
where
    D: DrawTarget<Color = BinaryColor> + OriginDimensions,
{
    type Error = D::Error;

    fn dimensions(&self) -> Size {
        OriginDimensions::size(self)
    }

    fn fill_rect(&mut self, area: Rectangle, color: BinaryColor) -> Result<(), D::Error> {
        self.fill_solid(&area, color)
    }

    fn draw_quadrants(
        &mut self,
        center: Point,
        radius: u32,
        quadrants: Quadrants,
        color: BinaryColor,
    ) -> Result<(), D::Error> {
        let style = PrimitiveStyle::with_stroke(color, 1);

        for start in quadrants.start_angles() {
            Arc::with_center(center, radius * 2 + 1, start.deg(), 90.0.deg())
                .into_styled(style)
                .draw(self)?;
        }

        Ok(())
    }

    fn fill_quadrants(
        &mut self,
        center: Point,
        radius: u32,
        quadrants: Quadrants,
        color: BinaryColor,
    ) -> Result<(), D::Error> {
        let style = PrimitiveStyle::with_fill(color);

        for start in quadrants.start_angles() {
            Sector::with_center(center, radius * 2 + 1, start.deg(), 90.0.deg())
                .into_styled(style)
                .draw(self)?;
        }

        Ok(())
    }

    fn draw_line(&mut self, from: Point, to: Point, color: BinaryColor) -> Result<(), D::Error> {
        Line::new(from, to)
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(self)
    }

    fn draw_text(
        &mut self,
        text: &str,
        top_left: Point,
        color: BinaryColor,
    ) -> Result<(), D::Error> {
        Text::with_baseline(
            text,
            top_left,
            MonoTextStyle::new(&FONT_5X8, color),
            Baseline::Top,
        )
        .draw(self)?;

        Ok(())
    }

    fn clear(&mut self, color: BinaryColor) -> Result<(), D::Error> {
        DrawTarget::clear(self, color)
    }
}
