//! Text formatting for the on-screen labels.

use core::fmt::Write;
use heapless::String;

/// Longest label is `Count: 4294967295` (17 characters).
pub const LABEL_LEN: usize = 20;

/// Render elapsed whole seconds as a zero padded `MM:SS` clock.
///
/// Minutes keep growing past 99, exactly like the value they are derived
/// from.
pub fn clock(elapsed_seconds: u32) -> String<LABEL_LEN> {
    let minutes = elapsed_seconds / 60;
    let seconds = elapsed_seconds % 60;

    let mut s = String::new();
    s.write_fmt(format_args!("{minutes:02}:{seconds:02}"))
        .expect("label buffer is sized for the longest possible clock");
    s
}

/// Render a colour value as an upper case, zero padded hex label.
pub fn colour(value: u32) -> String<LABEL_LEN> {
    let mut s = String::new();
    s.write_fmt(format_args!("RGB: 0x{value:06X}"))
        .expect("label buffer is sized for the longest possible colour");
    s
}

/// Render the iteration counter label.
pub fn counter(count: u32) -> String<LABEL_LEN> {
    let mut s = String::new();
    s.write_fmt(format_args!("Count: {count}"))
        .expect("label buffer is sized for the longest possible counter");
    s
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn clock_zero() {
        assert_eq!(clock(0).as_str(), "00:00");
    }

    #[test]
    fn clock_under_a_minute() {
        assert_eq!(clock(59).as_str(), "00:59");
    }

    #[test]
    fn clock_minutes_and_seconds() {
        assert_eq!(clock(125).as_str(), "02:05");
    }

    #[test]
    fn clock_does_not_truncate_long_runtimes() {
        assert_eq!(clock(100 * 60).as_str(), "100:00");
        assert_eq!(clock(u32::MAX).as_str(), "71582788:15");
    }

    #[test]
    fn colour_is_upper_case_and_zero_padded() {
        assert_eq!(colour(0x00ff88).as_str(), "RGB: 0x00FF88");
        assert_eq!(colour(0).as_str(), "RGB: 0x000000");
        assert_eq!(colour(0xffff).as_str(), "RGB: 0x00FFFF");
    }

    #[test]
    fn counter_label() {
        assert_eq!(counter(0).as_str(), "Count: 0");
        assert_eq!(counter(1).as_str(), "Count: 1");
        assert_eq!(counter(u32::MAX).as_str(), "Count: 4294967295");
    }
}
