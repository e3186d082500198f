#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod dashboard;
pub mod errors;
pub mod gauge;
pub mod logger;
pub mod ratio;
pub mod sampler;
pub mod surface;
pub mod telemetry;

#[cfg(target_os = "none")]
pub mod display;
#[cfg(target_os = "none")]
pub mod potentiometer;

#[cfg(test)]
mod testing;

pub mod prelude {
    pub use core::f32::consts::PI;

    pub use crate::{
        config::*,
        dashboard::Dashboard,
        errors::*,
        gauge::{DrawOutcome, GaugeSpec, Screen, SkipReason},
        sampler::{RawSample, Sampler},
        surface::{Panel, Surface},
    };

    pub use heapless::String;

    pub use log::{debug, error, info, log, trace, warn};

    #[cfg(target_os = "none")]
    pub use embassy_time::{Duration, Instant, Ticker, Timer};

    #[cfg(target_os = "none")]
    pub use esp_println::{print, println};
}
