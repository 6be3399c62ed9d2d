//! Extended demo: random background colour, counter, uptime clock,
//! colour readout, progress bar animation and button feedback, twice a
//! second until an operator stops it.

#![no_std]
#![no_main]

use core::cell::RefCell;
use defmt::{info, warn};
use defmt_rtt as _;
use embassy_embedded_hal::shared_bus::blocking::spi::SpiDeviceWithConfig;
use embassy_executor::Spawner;
use embassy_rp::{
    gpio::{Input, Level, Output, Pull},
    spi::{Config as SpiConfig, Spi},
};
use embassy_sync::blocking_mutex::{raw::NoopRawMutex, Mutex};
use embassy_time::{Delay, Duration, Instant, Timer};
use hotaru_firmware::{
    buttons::{Buttons, LongHold},
    display::{Panel, SCREEN_HEIGHT, SCREEN_WIDTH},
    entropy::RoscEntropy,
    watchdog,
};
use hotaru_ui::{
    colour::ColourPolicy,
    driver::{Driver, Inputs, StepOutcome},
};
use mipidsi::{
    interface::SpiInterface,
    models::ILI9342CRgb565,
    options::{ColorInversion, ColorOrder},
};
use panic_probe as _;
use portable_atomic as _;

/// Pause between iterations.
const FRAME_INTERVAL: Duration = Duration::from_millis(500);
/// Pause after a handled button press, so one physical push is not
/// reported over and over.
const DEBOUNCE_PAUSE: Duration = Duration::from_millis(100);
/// Pause before resuming after a failed iteration.
const FAULT_PAUSE: Duration = Duration::from_secs(1);
/// Holding button A this long stops the demo.
const STOP_HOLD: Duration = Duration::from_secs(3);

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    info!("Demo panel started");

    spawner.must_spawn(watchdog::feed_task(p.WATCHDOG, p.PIN_25));

    // Display on SPI0, write only
    let mut config = SpiConfig::default();
    config.frequency = 62_500_000;

    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, config.clone());
    let spi_bus: Mutex<NoopRawMutex, _> = Mutex::new(RefCell::new(spi));

    let display_spi =
        SpiDeviceWithConfig::new(&spi_bus, Output::new(p.PIN_17, Level::High), config);

    let dc = Output::new(p.PIN_20, Level::Low);
    let rst = Output::new(p.PIN_21, Level::Low);
    let _backlight = Output::new(p.PIN_22, Level::High);

    let mut buffer = [0_u8; 512];
    let interface = SpiInterface::new(display_spi, dc, &mut buffer);

    let display = mipidsi::Builder::new(ILI9342CRgb565, interface)
        .display_size(SCREEN_WIDTH, SCREEN_HEIGHT)
        .color_order(ColorOrder::Bgr)
        .invert_colors(ColorInversion::Inverted)
        .reset_pin(rst)
        .init(&mut Delay)
        .unwrap();

    let mut panel = Panel::new(display);

    let buttons = Buttons::new(
        Input::new(p.PIN_6, Pull::Up),
        Input::new(p.PIN_7, Pull::Up),
        Input::new(p.PIN_8, Pull::Up),
    );
    let mut stop = LongHold::new(STOP_HOLD);

    let mut entropy = RoscEntropy;
    let mut driver = Driver::new();
    let started = Instant::now();

    loop {
        let sample = buttons.sample();

        if stop.update(sample.a) {
            info!("Demo stopped by user");
            break;
        }

        let inputs = Inputs {
            elapsed_seconds: started.elapsed().as_secs() as u32,
            background: ColourPolicy::Rgb565Fields.draw(&mut entropy),
            buttons: sample,
        };

        match driver.step(&mut panel, &inputs) {
            StepOutcome::Drawn => {}
            StepOutcome::ButtonHandled => Timer::after(DEBOUNCE_PAUSE).await,
            StepOutcome::Faulted => {
                if let Some(message) = driver.fault() {
                    warn!("Iteration {} failed: {=str}", driver.count(), message);
                }
                Timer::after(FAULT_PAUSE).await;
                continue;
            }
        }

        Timer::after(FRAME_INTERVAL).await;
    }

    if panel.blank().is_err() {
        warn!("Failed to blank display");
    }
}
