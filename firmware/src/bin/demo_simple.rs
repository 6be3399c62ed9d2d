//! Simple demo: random background colour and a counter, once a second
//! until an operator stops it.

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
use embassy_time::{Delay, Duration, Timer};
use hotaru_firmware::{
    buttons::LongHold,
    display::{Panel, SCREEN_HEIGHT, SCREEN_WIDTH},
    entropy::RoscEntropy,
    watchdog,
};
use hotaru_ui::{
    colour::ColourPolicy,
    driver::{SimpleDriver, SimpleInputs, StepOutcome},
};
use mipidsi::{
    interface::SpiInterface,
    models::ILI9342CRgb565,
    options::{ColorInversion, ColorOrder},
};
use panic_probe as _;
use portable_atomic as _;

const FRAME_INTERVAL: Duration = Duration::from_secs(1);
const FAULT_PAUSE: Duration = Duration::from_secs(1);
const STOP_HOLD: Duration = Duration::from_secs(3);

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    info!("Simple demo started");

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

    let stop_button = Input::new(p.PIN_6, Pull::Up);
    let mut stop = LongHold::new(STOP_HOLD);

    let mut entropy = RoscEntropy;
    let mut driver = SimpleDriver::new();

    loop {
        if stop.update(stop_button.is_low()) {
            break;
        }

        let inputs = SimpleInputs {
            background: ColourPolicy::Flat.draw(&mut entropy),
            title_colour: ColourPolicy::Flat.draw(&mut entropy),
            info_colour: ColourPolicy::Flat.draw(&mut entropy),
        };

        match driver.step(&mut panel, &inputs) {
            StepOutcome::Drawn | StepOutcome::ButtonHandled => {}
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
