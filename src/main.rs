#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]
#![cfg_attr(target_os = "none", feature(type_alias_impl_trait))]

#[cfg(target_os = "none")]
use esp_backtrace as _;

#[cfg(target_os = "none")]
#[esp_hal_embassy::main]
async fn main(_spawner: embassy_executor::Spawner) -> ! {
    use esp_hal::{
        analog::adc::{Adc, AdcConfig, Attenuation},
        clock::ClockControl,
        gpio::Io,
        i2c::I2C,
        peripherals::{Peripherals, ADC1},
        prelude::*,
        system::SystemControl,
        timer::timg::TimerGroup,
    };
    use pot_gauge::{
        display::init_display,
        potentiometer::Potentiometer,
        prelude::*,
        telemetry::Console,
    };

    // To change the log_level change the env section in .cargo/config.toml
    // or remove it and set ESP_LOGLEVEL manually before running cargo run
    // this requires a clean rebuild because of https://github.com/
    // rust-lang/cargo/issues/10358
    #[cfg(feature = "log")]
    pot_gauge::logger::init_logger_from_env();
    info!("Logger is setup");

    let peripherals = Peripherals::take();

    let system = SystemControl::new(peripherals.SYSTEM);

    let io = Io::new(peripherals.GPIO, peripherals.IO_MUX);

    let clocks = ClockControl::max(system.clock_control).freeze();

    let timer_group0 = TimerGroup::new_async(peripherals.TIMG0, &clocks);

    esp_hal_embassy::init(&clocks, timer_group0);

    let mut adc1_config = AdcConfig::new();

    #[cfg(target_arch = "xtensa")]
    let pot_pin = adc1_config.enable_pin(io.pins.gpio34, Attenuation::Attenuation11dB);
    #[cfg(target_arch = "riscv32")]
    let pot_pin = adc1_config.enable_pin_with_cal::<_, pot_gauge::potentiometer::AdcCal>(
        io.pins.gpio3,
        Attenuation::Attenuation11dB,
    );

    let adc1 = Adc::<ADC1>::new(peripherals.ADC1, adc1_config);

    let mut pot = Potentiometer::new(adc1, pot_pin);

    #[cfg(target_arch = "xtensa")]
    let (sda, scl) = (io.pins.gpio21, io.pins.gpio22);
    #[cfg(target_arch = "riscv32")]
    let (sda, scl) = (io.pins.gpio6, io.pins.gpio7);

    let mut i2c = I2C::new(peripherals.I2C0, sda, scl, 400u32.kHz(), &clocks);

    let mut console = Console;

    let mut ticker = Ticker::every(Duration::from_millis(FRAME_PERIOD_MS));

    loop {
        match init_display(&mut i2c) {
            Ok(screen) => {
                let mut dashboard = Dashboard::new(screen, &mut pot, &mut console);

                loop {
                    if let Err(e) = dashboard.tick() {
                        warn!("{e}");
                        break;
                    }

                    ticker.next().await;
                }
            }
            Err(e) => warn!("Display error: {e:?}"),
        }

        Timer::after_secs(1).await;
    }
}

#[cfg(not(target_os = "none"))]
fn main() {
    println!(
        "pot-gauge is firmware: build it with --target xtensa-esp32-none-elf --features esp32 \
         or --target riscv32imc-unknown-none-elf --features esp32c3"
    );
}
