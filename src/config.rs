//! Compile-time configuration of the gauge screen.

use crate::gauge::GaugeSpec;

/// Pixel height of one text line: 7 px font + 1 px leading.
pub const LINE_HEIGHT: u32 = 8;

/// Lowest raw reading of the 12-bit ADC.
pub const SAMPLE_MIN: f32 = 0.;
/// Highest raw reading of the 12-bit ADC.
pub const SAMPLE_MAX: f32 = 4095.;

pub const BAR_GAUGE: GaugeSpec = GaugeSpec {
    min: SAMPLE_MIN,
    max: SAMPLE_MAX,
    line: 0,
    offset: 0,
};

/// Line the raw reading is printed on.
pub const VALUE_LINE: i32 = 1;

/// The dial hangs below this line, centred on the 128 px panel.
pub const DIAL_GAUGE: GaugeSpec = GaugeSpec {
    min: SAMPLE_MIN,
    max: SAMPLE_MAX,
    line: 4,
    offset: 40,
};

/// Written on the dial's line: "max" to the left of the dial, "min" to the right.
pub const AXIS_LABEL: &str = "     max          min";

/// Delay between two frames.
pub const FRAME_PERIOD_MS: u64 = 20;
