//! Host-side fakes for the drawing and sampling seams.

use core::{convert::Infallible, ops::Range};

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*, primitives::Rectangle};
use heapless::Vec;

use crate::{
    sampler::{RawSample, SampleError, Sampler},
    surface::{Panel, Quadrants, Surface},
};

/// A monochrome frame buffer that counts refreshes.
pub struct FrameBuffer<const W: usize, const H: usize> {
    pixels: [[BinaryColor; W]; H],
    pub refreshes: u32,
}

impl<const W: usize, const H: usize> FrameBuffer<W, H> {
    pub fn new() -> Self {
        Self {
            pixels: [[BinaryColor::Off; W]; H],
            refreshes: 0,
        }
    }

    pub fn is_on(&self, x: usize, y: usize) -> bool {
        self.pixels[y][x].is_on()
    }

    pub fn lit(&self) -> usize {
        self.lit_in_rows(0..H)
    }

    pub fn lit_in_rows(&self, rows: Range<usize>) -> usize {
        self.pixels[rows]
            .iter()
            .flat_map(|row| row.iter())
            .filter(|pixel| pixel.is_on())
            .count()
    }

    /// Number of lit pixels in `row` counted from x = 0 up to the first gap.
    pub fn run_from_left(&self, row: usize) -> usize {
        self.pixels[row]
            .iter()
            .take_while(|pixel| pixel.is_on())
            .count()
    }

    pub fn snapshot(&self) -> [[BinaryColor; W]; H] {
        self.pixels
    }
}

impl<const W: usize, const H: usize> DrawTarget for FrameBuffer<W, H> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Infallible>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) {
                if x < W && y < H {
                    self.pixels[y][x] = color;
                }
            }
        }

        Ok(())
    }
}

impl<const W: usize, const H: usize> OriginDimensions for FrameBuffer<W, H> {
    fn size(&self) -> Size {
        Size::new(W as u32, H as u32)
    }
}

impl<const W: usize, const H: usize> Panel for FrameBuffer<W, H> {
    fn refresh(&mut self) -> Result<(), Infallible> {
        self.refreshes += 1;
        Ok(())
    }
}

/// A primitive call seen by the [`Recorder`].
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    FillRect {
        area: Rectangle,
        color: BinaryColor,
    },
    Quadrants {
        center: Point,
        radius: u32,
        quadrants: Quadrants,
        color: BinaryColor,
        filled: bool,
    },
    Line {
        from: Point,
        to: Point,
        color: BinaryColor,
    },
    Text {
        top_left: Point,
        color: BinaryColor,
    },
    Clear(BinaryColor),
    BeginBatch,
    EndBatch,
}

/// A surface that only records what it was asked to draw.
pub struct Recorder {
    size: Size,
    ops: Vec<Op, 32>,
}

impl Recorder {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn filled_rects(&self) -> impl Iterator<Item = (Rectangle, BinaryColor)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            Op::FillRect { area, color } => Some((*area, *color)),
            _ => None,
        })
    }

    fn push(&mut self, op: Op) {
        self.ops.push(op).expect("recorder is full");
    }
}

impl Surface for Recorder {
    type Error = Infallible;

    fn dimensions(&self) -> Size {
        self.size
    }

    fn fill_rect(&mut self, area: Rectangle, color: BinaryColor) -> Result<(), Infallible> {
        self.push(Op::FillRect { area, color });
        Ok(())
    }

    fn draw_quadrants(
        &mut self,
        center: Point,
        radius: u32,
        quadrants: Quadrants,
        color: BinaryColor,
    ) -> Result<(), Infallible> {
        self.push(Op::Quadrants {
            center,
            radius,
            quadrants,
            color,
            filled: false,
        });
        Ok(())
    }

    fn fill_quadrants(
        &mut self,
        center: Point,
        radius: u32,
        quadrants: Quadrants,
        color: BinaryColor,
    ) -> Result<(), Infallible> {
        self.push(Op::Quadrants {
            center,
            radius,
            quadrants,
            color,
            filled: true,
        });
        Ok(())
    }

    fn draw_line(&mut self, from: Point, to: Point, color: BinaryColor) -> Result<(), Infallible> {
        self.push(Op::Line { from, to, color });
        Ok(())
    }

    fn draw_text(
        &mut self,
        _text: &str,
        top_left: Point,
        color: BinaryColor,
    ) -> Result<(), Infallible> {
        self.push(Op::Text { top_left, color });
        Ok(())
    }

    fn clear(&mut self, color: BinaryColor) -> Result<(), Infallible> {
        self.push(Op::Clear(color));
        Ok(())
    }

    fn begin_batch(&mut self) {
        self.push(Op::BeginBatch);
    }

    fn end_batch(&mut self) {
        self.push(Op::EndBatch);
    }
}

/// Hands out a fixed list of readings, then fails.
pub struct Scripted<'a> {
    readings: &'a [u16],
}

impl<'a> Scripted<'a> {
    pub fn new(readings: &'a [u16]) -> Self {
        Self { readings }
    }
}

impl Sampler for Scripted<'_> {
    fn sample(&mut self) -> Result<RawSample, SampleError> {
        let (first, rest) = self
            .readings
            .split_first()
            .ok_or(SampleError::Conversion)?;
        self.readings = rest;

        Ok(RawSample::new(*first))
    }
}
