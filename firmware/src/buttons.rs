//! Front panel buttons.
//!
//! Three momentary buttons, active low with pull ups. The demo loop
//! samples them once per iteration; there is no interrupt driven path.

use embassy_rp::gpio::Input;
use embassy_time::{Duration, Instant};
use hotaru_ui::frame::ButtonSample;

/// The three front buttons.
pub struct Buttons {
    a: Input<'static>,
    b: Input<'static>,
    c: Input<'static>,
}

impl Buttons {
    pub fn new(a: Input<'static>, b: Input<'static>, c: Input<'static>) -> Self {
        Self { a, b, c }
    }

    /// Non blocking read of the current button state.
    pub fn sample(&self) -> ButtonSample {
        ButtonSample {
            a: self.a.is_low(),
            b: self.b.is_low(),
            c: self.c.is_low(),
        }
    }
}

/// Detects a button held continuously for a threshold duration.
///
/// Fed one sample per loop iteration; releasing the button resets the
/// hold.
pub struct LongHold {
    threshold: Duration,
    held_since: Option<Instant>,
}

impl LongHold {
    pub fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            held_since: None,
        }
    }

    /// Feed one sample; returns true once the hold crosses the
    /// threshold.
    pub fn update(&mut self, pressed: bool) -> bool {
        if !pressed {
            self.held_since = None;
            return false;
        }

        let since = *self.held_since.get_or_insert_with(Instant::now);
        since.elapsed() >= self.threshold
    }
}
