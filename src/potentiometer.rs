use esp_hal::{
    analog::adc::{Adc, AdcCalScheme, AdcChannel, AdcPin},
    peripherals::ADC1,
};

use crate::sampler::{RawSample, SampleError, Sampler};

#[cfg(target_arch = "xtensa")]
pub type AdcCal = ();
#[cfg(target_arch = "riscv32")]
pub type AdcCal = esp_hal::analog::adc::AdcCalCurve<ADC1>;

/// A potentiometer wiper on one ADC1 channel.
pub struct Potentiometer<'d, PIN, CS> {
    adc: Adc<'d, ADC1>,
    pin: AdcPin<PIN, ADC1, CS>,
}

impl<'d, PIN, CS> Potentiometer<'d, PIN, CS>
where
    PIN: AdcChannel,
    CS: AdcCalScheme<ADC1>,
{
    pub fn new(adc: Adc<'d, ADC1>, pin: AdcPin<PIN, ADC1, CS>) -> Self {
        Self { adc, pin }
    }

    pub fn read(&mut self) -> Result<u16, SampleError> {
        nb::block!(self.adc.read_oneshot(&mut self.pin)).map_err(|()| SampleError::Conversion)
    }
}

impl<PIN, CS> Sampler for Potentiometer<'_, PIN, CS>
where
    PIN: AdcChannel,
    CS: AdcCalScheme<ADC1>,
{
    fn sample(&mut self) -> Result<RawSample, SampleError> {
        self.read().map(RawSample::new)
    }
}
