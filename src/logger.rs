use core::str::FromStr;

use log::{Level, LevelFilter};

/// Whether `ESP_LOGTARGETS`-style overrides (`target=level,target=level`)
/// silence a record of `level` from `target`.
pub fn is_filtered(targets: &str, target: &str, level: Level) -> bool {
    targets
        .split(',')
        .filter_map(|line| line.split_once('='))
        .any(|(prefix, max)| {
            target.starts_with(prefix.trim())
                && LevelFilter::from_str(max.trim()).unwrap_or(LevelFilter::Off) < level
        })
}

#[cfg(target_os = "none")]
pub use esp::{init_logger, init_logger_from_env};

#[cfg(target_os = "none")]
mod esp {
    use core::str::FromStr;

    use embassy_time::Instant;
    use esp_println::println;
    use log::LevelFilter;

    use super::is_filtered;

    const LOG_TARGETS: Option<&'static str> = option_env!("ESP_LOGTARGETS");

    pub fn init_logger(level: LevelFilter) {
        unsafe {
            if log::set_logger_racy(&Logger).is_ok() {
                log::set_max_level_racy(level);
            }
        }
    }

    pub fn init_logger_from_env() {
        const LEVEL: Option<&'static str> = option_env!("ESP_LOGLEVEL");

        let level = LEVEL
            .and_then(|lvl| LevelFilter::from_str(lvl).ok())
            .unwrap_or(LevelFilter::Off);

        init_logger(level);
    }

    struct Logger;

    impl log::Log for Logger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            const RESET: &str = "\u{001B}[0m";
            const RED: &str = "\u{001B}[31m";
            const GREEN: &str = "\u{001B}[32m";
            const YELLOW: &str = "\u{001B}[33m";
            const BLUE: &str = "\u{001B}[34m";
            const CYAN: &str = "\u{001B}[35m";

            if LOG_TARGETS.is_some_and(|targets| {
                is_filtered(targets, record.target(), record.level())
            }) {
                return;
            }

            let color = match record.level() {
                log::Level::Error => RED,
                log::Level::Warn => YELLOW,
                log::Level::Info => GREEN,
                log::Level::Debug => BLUE,
                log::Level::Trace => CYAN,
            };

            let now = Instant::now().as_millis();

            println!(
                "[{}{} {} {}.{:03}s{}] {}",
                color,
                record.level(),
                record.target(),
                now / 1000,
                now % 1000,
                RESET,
                record.args()
            );
        }

        fn flush(&self) {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_silences_more_verbose_records() {
        let targets = "pot_gauge::gauge=info";

        assert!(is_filtered(targets, "pot_gauge::gauge", Level::Debug));
        assert!(is_filtered(targets, "pot_gauge::gauge", Level::Trace));
        assert!(!is_filtered(targets, "pot_gauge::gauge", Level::Info));
        assert!(!is_filtered(targets, "pot_gauge::gauge", Level::Error));
    }

    #[test]
    fn override_matches_by_prefix() {
        let targets = "esp_hal=warn, pot_gauge=trace";

        assert!(is_filtered(targets, "esp_hal::i2c", Level::Info));
        assert!(!is_filtered(targets, "pot_gauge::dashboard", Level::Trace));
        assert!(!is_filtered(targets, "embassy_time", Level::Trace));
    }

    #[test]
    fn malformed_entries() {
        // no '=' at all: ignored
        assert!(!is_filtered("pot_gauge", "pot_gauge", Level::Trace));
        // unknown level: treated as off
        assert!(is_filtered("pot_gauge=loud", "pot_gauge", Level::Error));
        assert!(!is_filtered("", "pot_gauge", Level::Trace));
    }
}
