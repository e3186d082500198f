use embedded_hal::i2c::I2c;
use log::info;
use ssd1306::{
    mode::BufferedGraphicsMode, prelude::*, size::DisplaySize, I2CDisplayInterface, Ssd1306,
};

use crate::{config::LINE_HEIGHT, gauge::Screen, surface::Panel};

pub use display_interface::DisplayError;

pub type Oled<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

impl<DI, SIZE> Panel for Ssd1306<DI, SIZE, BufferedGraphicsMode<SIZE>>
where
    DI: WriteOnlyDataCommand,
    SIZE: DisplaySize,
{
    fn refresh(&mut self) -> Result<(), DisplayError> {
        self.flush()
    }
}

/// Brings up the 128x64 panel in buffered graphics mode, blank.
pub fn init_display<I2C: I2c>(i2c: I2C) -> Result<Screen<Oled<I2C>>, DisplayError> {
    info!("Initialising screen...");

    let mut display = Ssd1306::new(
        I2CDisplayInterface::new(i2c),
        DisplaySize128x64,
        DisplayRotation::Rotate0,
    )
    .into_buffered_graphics_mode();
    display.init()?;
    display.clear_buffer();
    display.flush()?;

    info!("Screen Initialised!");

    Ok(Screen::new(display, LINE_HEIGHT))
}
