//! One screen of the potentiometer readout, redrawn from scratch every frame.

use core::fmt::Write as _;

use embedded_io::Write;
use heapless::String;
use log::{debug, warn};

use crate::{
    config::{AXIS_LABEL, BAR_GAUGE, DIAL_GAUGE, VALUE_LINE},
    errors::GaugeError,
    gauge::Screen,
    sampler::{RawSample, Sampler},
    surface::Panel,
    telemetry::emit_sample,
};

/// Longest decimal rendering of a [`RawSample`].
const SAMPLE_CHARS: usize = 5;

pub struct Dashboard<P, A, W> {
    screen: Screen<P>,
    sampler: A,
    serial: W,
}

impl<P, A, W> Dashboard<P, A, W>
where
    P: Panel,
    A: Sampler,
    W: Write,
{
    pub fn new(screen: Screen<P>, sampler: A, serial: W) -> Self {
        Self {
            screen,
            sampler,
            serial,
        }
    }

    pub fn screen(&self) -> &Screen<P> {
        &self.screen
    }

    pub fn release(self) -> (Screen<P>, A, W) {
        (self.screen, self.sampler, self.serial)
    }

    /// Pushes the previous frame to the panel, then samples and draws the next.
    pub fn tick(&mut self) -> Result<RawSample, GaugeError<P::Error>> {
        self.screen
            .surface_mut()
            .refresh()
            .map_err(GaugeError::Display)?;
        self.screen.clear().map_err(GaugeError::Display)?;

        let sample = self.sampler.sample()?;

        self.show(sample)?;

        Ok(sample)
    }

    /// Prints `sample` on the serial console and draws both gauges for it.
    pub fn show(&mut self, sample: RawSample) -> Result<(), GaugeError<P::Error>> {
        debug!("Sample = {}", sample);

        if let Err(e) = emit_sample(&mut self.serial, sample) {
            warn!("Serial error: {e}");
        }

        let value = f32::from(sample);

        let mut text: String<SAMPLE_CHARS> = String::new();
        // a u16 always fits
        let _ = write!(text, "{sample}");

        let screen = &mut self.screen;

        screen
            .draw_gauge(value, &BAR_GAUGE)
            .map_err(GaugeError::Display)?;
        screen
            .write_line(&text, VALUE_LINE)
            .map_err(GaugeError::Display)?;
        screen
            .write_line(AXIS_LABEL, DIAL_GAUGE.line)
            .map_err(GaugeError::Display)?;
        screen
            .draw_dial_gauge(value, &DIAL_GAUGE)
            .map_err(GaugeError::Display)?;

        Ok(())
    }
}
