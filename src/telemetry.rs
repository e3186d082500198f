//! Raw readings on the serial console, one decimal value per line.

use core::fmt::Display;

use embedded_io::{Write, WriteFmtError};

use crate::sampler::RawSample;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialError {
    Format,
    Write,
}

impl<E> From<WriteFmtError<E>> for SerialError {
    fn from(value: WriteFmtError<E>) -> Self {
        match value {
            WriteFmtError::FmtError => Self::Format,
            WriteFmtError::Other(_) => Self::Write,
        }
    }
}

impl Display for SerialError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::Format => write!(f, "formatting failed"),
            Self::Write => write!(f, "write failed"),
        }
    }
}

/// Writes `sample` as `"{value}\r\n"` and flushes.
pub fn emit_sample<W: Write>(out: &mut W, sample: RawSample) -> Result<(), SerialError> {
    write!(out, "{}\r\n", sample)?;
    out.flush().map_err(|_| SerialError::Write)
}

#[cfg(target_os = "none")]
pub use console::Console;

#[cfg(target_os = "none")]
mod console {
    use core::convert::Infallible;

    use esp_println::Printer;

    /// The `esp-println` console as an [`embedded_io::Write`] sink.
    #[derive(Debug, Default)]
    pub struct Console;

    impl embedded_io::ErrorType for Console {
        type Error = Infallible;
    }

    impl embedded_io::Write for Console {
        fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            use core::fmt::Write;

            // Everything we print is ASCII.
            if let Ok(text) = core::str::from_utf8(buf) {
                let _ = Printer.write_str(text);
            }

            Ok(buf.len())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }
}
