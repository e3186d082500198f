use core::fmt::{Debug, Display};

use crate::{sampler::SampleError, telemetry::SerialError};

#[derive(Clone, Debug, PartialEq)]
pub enum GaugeError<D> {
    Display(D),
    Sample(SampleError),
    Serial(SerialError),
}

impl<D> From<SampleError> for GaugeError<D> {
    fn from(value: SampleError) -> Self {
        Self::Sample(value)
    }
}

impl<D> From<SerialError> for GaugeError<D> {
    fn from(value: SerialError) -> Self {
        Self::Serial(value)
    }
}

impl<D: Debug> Display for GaugeError<D> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self {
            Self::Display(e) => write!(f, "Display error: {:?}", e),
            Self::Sample(e) => write!(f, "Sampler error: {}", e),
            Self::Serial(e) => write!(f, "Serial error: {}", e),
        }
    }
}

impl<D: Debug> core::error::Error for GaugeError<D> {}
