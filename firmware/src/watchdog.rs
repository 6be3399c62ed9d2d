//! Watchdog feed and status LED.

use embassy_rp::{
    gpio::{Level, Output},
    peripherals::{PIN_25, WATCHDOG},
    watchdog::Watchdog,
    Peri,
};
use embassy_time::{Duration, Timer};

const WATCHDOG_TIMEOUT: Duration = Duration::from_secs(5);
const FEED_INTERVAL: Duration = Duration::from_secs(1);

/// Feed the watchdog and flash the onboard LED to indicate normal
/// operation.
#[embassy_executor::task]
pub async fn feed_task(watchdog: Peri<'static, WATCHDOG>, led: Peri<'static, PIN_25>) {
    let mut watchdog = Watchdog::new(watchdog);
    watchdog.start(WATCHDOG_TIMEOUT);

    let mut led = Output::new(led, Level::Low);

    loop {
        Timer::after(FEED_INTERVAL).await;
        watchdog.feed();
        led.toggle();
    }
}
