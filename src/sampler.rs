use core::fmt::Display;

/// One raw ADC conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RawSample(u16);

impl RawSample {
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u16 {
        self.0
    }
}

impl From<RawSample> for f32 {
    fn from(sample: RawSample) -> Self {
        f32::from(sample.0)
    }
}

impl Display for RawSample {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleError {
    /// The converter did not produce a reading.
    Conversion,
}

impl Display for SampleError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::Conversion => write!(f, "ADC conversion failed"),
        }
    }
}

/// A source of raw analog readings.
pub trait Sampler {
    fn sample(&mut self) -> Result<RawSample, SampleError>;
}

impl<S: Sampler + ?Sized> Sampler for &mut S {
    fn sample(&mut self) -> Result<RawSample, SampleError> {
        (**self).sample()
    }
}
