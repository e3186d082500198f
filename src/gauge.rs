//! Bar and dial gauges laid out on text lines.
//!
//! The screen is divided into horizontal lines of `line_height` pixels. Every
//! draw call names the line it belongs to, and a call on a line that does not
//! exist on the panel does nothing and reports [`DrawOutcome::Skipped`].

use core::f32::consts::PI;

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*, primitives::Rectangle};
use libm::{cosf, sinf};
use log::trace;

use crate::{
    ratio::{checked_ratio, clamp_unit, from_ratio},
    surface::{Quadrants, Surface},
};

const FOREGROUND: BinaryColor = BinaryColor::On;
const BACKGROUND: BinaryColor = BinaryColor::Off;

/// Where a gauge goes and which value range it shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeSpec {
    pub min: f32,
    pub max: f32,
    pub line: i32,
    /// Horizontal shift in pixels. Only the dial uses it.
    pub offset: i32,
}

impl Default for GaugeSpec {
    /// Unit range on the first line.
    fn default() -> Self {
        Self {
            min: 0.,
            max: 1.,
            line: 0,
            offset: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    Drawn,
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    LineOutOfRange { line: i32 },
    /// `min == max`, so no value can be placed.
    DegenerateRange,
    NotANumber,
}

/// True when `line` is one of the `screen_height / line_height` lines.
pub fn is_line_valid(screen_height: u32, line_height: u32, line: i32) -> bool {
    if line_height == 0 {
        return false;
    }

    u32::try_from(line).is_ok_and(|line| line < screen_height / line_height)
}

/// Dial angle for a ratio: 0 points along +x, pi along -x.
pub fn needle_angle(ratio: f32) -> f32 {
    from_ratio(ratio, 0., PI)
}

/// End of a needle of `radius` pixels at `angle`, relative to its pivot.
pub fn needle_tip(angle: f32, radius: u32) -> Point {
    let radius = radius as f32;

    Point::new((cosf(angle) * radius) as i32, (sinf(angle) * radius) as i32)
}

/// A drawing surface together with its line layout.
pub struct Screen<S> {
    surface: S,
    line_height: u32,
}

impl<S: Surface> Screen<S> {
    pub fn new(surface: S, line_height: u32) -> Self {
        Self {
            surface,
            line_height,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_inner(self) -> S {
        self.surface
    }

    pub const fn line_height(&self) -> u32 {
        self.line_height
    }

    pub fn line_count(&self) -> u32 {
        self.surface
            .dimensions()
            .height
            .checked_div(self.line_height)
            .unwrap_or(0)
    }

    pub fn is_line_valid(&self, line: i32) -> bool {
        is_line_valid(self.surface.dimensions().height, self.line_height, line)
    }

    fn line_top(&self, line: i32) -> i32 {
        line * self.line_height as i32
    }

    fn check(&self, line: i32, ratio: f32) -> Result<f32, SkipReason> {
        if !self.is_line_valid(line) {
            return Err(SkipReason::LineOutOfRange { line });
        }

        if ratio.is_nan() {
            return Err(SkipReason::NotANumber);
        }

        Ok(clamp_unit(ratio))
    }

    pub fn clear(&mut self) -> Result<(), S::Error> {
        self.surface.clear(BACKGROUND)
    }

    /// Full-width bar on `line`, filled from the left in proportion to `ratio`.
    ///
    /// Ratios outside `[0, 1]` are clamped.
    pub fn draw_dimmer(&mut self, ratio: f32, line: i32) -> Result<DrawOutcome, S::Error> {
        let ratio = match self.check(line, ratio) {
            Ok(ratio) => ratio,
            Err(reason) => return Ok(skip(reason)),
        };

        let width = self.surface.dimensions().width;
        let height = self.line_height - 1;
        let top = self.line_top(line);

        // Solid bar, then hollow it out to leave a 1px frame.
        self.surface.fill_rect(
            Rectangle::new(Point::new(0, top), Size::new(width, height)),
            FOREGROUND,
        )?;
        self.surface.fill_rect(
            Rectangle::new(
                Point::new(1, top + 1),
                Size::new(width.saturating_sub(2), height.saturating_sub(2)),
            ),
            BACKGROUND,
        )?;

        let filled = (width as f32 * ratio) as u32;

        self.surface.fill_rect(
            Rectangle::new(Point::new(0, top), Size::new(filled, height)),
            FOREGROUND,
        )?;

        Ok(DrawOutcome::Drawn)
    }

    /// Maps `value` through `spec`'s range and draws it as a bar.
    pub fn draw_gauge(&mut self, value: f32, spec: &GaugeSpec) -> Result<DrawOutcome, S::Error> {
        match checked_ratio(value, spec.min, spec.max) {
            Some(ratio) => self.draw_dimmer(ratio, spec.line),
            None => Ok(skip(SkipReason::DegenerateRange)),
        }
    }

    /// Half-disc dial hanging below `line`, with a needle sweeping from right
    /// (ratio 0) to left (ratio 1).
    ///
    /// The radius is three lines. `offset` shifts the dial to the right so
    /// several can share a line.
    pub fn draw_dial(
        &mut self,
        ratio: f32,
        line: i32,
        offset: i32,
    ) -> Result<DrawOutcome, S::Error> {
        let ratio = match self.check(line, ratio) {
            Ok(ratio) => ratio,
            Err(reason) => return Ok(skip(reason)),
        };

        let radius = 3 * self.line_height;
        let center = Point::new(radius as i32 + offset, self.line_top(line + 1));
        let tip = center + needle_tip(needle_angle(ratio), radius);

        let mut batch = self.surface.batch();

        batch.fill_quadrants(center, radius, Quadrants::LOWER_RIGHT, BACKGROUND)?;
        batch.fill_quadrants(center, radius, Quadrants::LOWER_LEFT, BACKGROUND)?;
        batch.draw_quadrants(center, radius, Quadrants::LOWER_RIGHT, FOREGROUND)?;
        batch.draw_quadrants(center, radius, Quadrants::LOWER_LEFT, FOREGROUND)?;
        batch.draw_line(center, tip, FOREGROUND)?;

        Ok(DrawOutcome::Drawn)
    }

    /// Maps `value` through `spec`'s range and draws it as a dial.
    pub fn draw_dial_gauge(
        &mut self,
        value: f32,
        spec: &GaugeSpec,
    ) -> Result<DrawOutcome, S::Error> {
        match checked_ratio(value, spec.min, spec.max) {
            Some(ratio) => self.draw_dial(ratio, spec.line, spec.offset),
            None => Ok(skip(SkipReason::DegenerateRange)),
        }
    }

    /// Replaces whatever is on `line` with `text`.
    pub fn write_line(&mut self, text: &str, line: i32) -> Result<DrawOutcome, S::Error> {
        if !self.is_line_valid(line) {
            return Ok(skip(SkipReason::LineOutOfRange { line }));
        }

        let top = self.line_top(line);
        let width = self.surface.dimensions().width;

        self.surface.fill_rect(
            Rectangle::new(Point::new(0, top), Size::new(width, self.line_height)),
            BACKGROUND,
        )?;
        self.surface.draw_text(text, Point::new(0, top), FOREGROUND)?;

        Ok(DrawOutcome::Drawn)
    }
}

fn skip(reason: SkipReason) -> DrawOutcome {
    trace!("Draw skipped: {:?}", reason);
    DrawOutcome::Skipped(reason)
}
