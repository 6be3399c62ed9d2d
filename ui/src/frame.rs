//! Per-iteration display frames.
//!
//! A frame is what one loop iteration wants on the screen. Building one
//! is pure; putting it on the glass is the firmware's job.

use crate::{colour, format};
use core::fmt::Write;
use embedded_graphics::{pixelcolor::Rgb565, prelude::RgbColor};
use heapless::String;

/// Title colour palette, cycled one entry per iteration.
pub const TITLE_PALETTE: [Rgb565; 7] = [
    Rgb565::WHITE,
    Rgb565::RED,
    Rgb565::GREEN,
    Rgb565::BLUE,
    Rgb565::YELLOW,
    Rgb565::MAGENTA,
    Rgb565::CYAN,
];

/// Full travel of the progress bar fill, in pixels.
pub const PROGRESS_RANGE: u32 = 300;

// 0x0088ff
const READY_BLUE: Rgb565 = Rgb565::new(0, 34, 31);

/// Title colour for a given iteration.
pub fn title_colour(count: u32) -> Rgb565 {
    TITLE_PALETTE[count as usize % TITLE_PALETTE.len()]
}

/// Progress bar fill width for a given iteration.
///
/// The sine keeps the result within `0..=PROGRESS_RANGE` by construction.
pub fn progress_width(count: u32) -> u32 {
    let phase = libm::sinf(count as f32 * 0.2);
    libm::roundf((PROGRESS_RANGE as f32 / 2.0) * (phase + 1.0)) as u32
}

/// The status line, blinking between two phases while healthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    Active,
    Ready,
    Error,
}

impl Status {
    /// Status for an iteration: a captured fault overrides the blink.
    pub fn for_iteration(count: u32, fault_pending: bool) -> Self {
        if fault_pending {
            Status::Error
        } else if count % 4 < 2 {
            Status::Active
        } else {
            Status::Ready
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Status::Active => "Status: ACTIVE",
            Status::Ready => "Status: READY",
            Status::Error => "Status: ERROR",
        }
    }

    pub fn colour(&self) -> Rgb565 {
        match self {
            Status::Active => Rgb565::GREEN,
            Status::Ready => READY_BLUE,
            Status::Error => Rgb565::RED,
        }
    }
}

/// One of the three front buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    A,
    B,
    C,
}

impl Button {
    pub fn message(&self) -> &'static str {
        match self {
            Button::A => "Button A Pressed!",
            Button::B => "Button B Pressed!",
            Button::C => "Button C Pressed!",
        }
    }

    pub fn colour(&self) -> Rgb565 {
        match self {
            Button::A => Rgb565::RED,
            Button::B => Rgb565::GREEN,
            Button::C => Rgb565::BLUE,
        }
    }
}

/// Instantaneous state of the three buttons, sampled once per iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonSample {
    pub a: bool,
    pub b: bool,
    pub c: bool,
}

impl ButtonSample {
    /// The first pressed button in A, B, C priority order, if any.
    pub fn first_pressed(&self) -> Option<Button> {
        if self.a {
            Some(Button::A)
        } else if self.b {
            Some(Button::B)
        } else if self.c {
            Some(Button::C)
        } else {
            None
        }
    }
}

/// The subtitle line under the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subtitle {
    pub text: &'static str,
    pub colour: Rgb565,
}

impl Subtitle {
    fn for_sample(buttons: ButtonSample) -> Self {
        match buttons.first_pressed() {
            Some(button) => Subtitle {
                text: button.message(),
                colour: button.colour(),
            },
            None => Subtitle::default(),
        }
    }
}

impl Default for Subtitle {
    fn default() -> Self {
        Subtitle {
            text: "Random Color Background",
            colour: Rgb565::YELLOW,
        }
    }
}

/// Everything the extended demo shows for one iteration.
#[derive(Debug, Clone)]
pub struct Frame {
    pub background: Rgb565,
    pub title_colour: Rgb565,
    pub subtitle: Subtitle,
    pub status: Status,
    pub counter_text: String<{ format::LABEL_LEN }>,
    pub clock_text: String<{ format::LABEL_LEN }>,
    pub colour_text: String<{ format::LABEL_LEN }>,
    pub progress_px: u32,
}

impl Frame {
    /// Build the frame for one iteration of the extended demo.
    pub fn build(
        count: u32,
        elapsed_seconds: u32,
        background: u16,
        buttons: ButtonSample,
        fault_pending: bool,
    ) -> Self {
        let mut clock_text = String::new();
        clock_text
            .write_fmt(format_args!("Time: {}", format::clock(elapsed_seconds)))
            .expect("label buffer is sized for the longest possible clock");

        Self {
            background: colour::as_rgb565(background),
            title_colour: title_colour(count),
            subtitle: Subtitle::for_sample(buttons),
            status: Status::for_iteration(count, fault_pending),
            counter_text: format::counter(count),
            clock_text,
            colour_text: format::colour(u32::from(background)),
            progress_px: progress_width(count),
        }
    }
}

/// Everything the simple demo shows for one iteration.
#[derive(Debug, Clone)]
pub struct SimpleFrame {
    pub background: Rgb565,
    pub title_colour: Rgb565,
    pub info_colour: Rgb565,
    pub counter_text: String<{ format::LABEL_LEN }>,
}

impl SimpleFrame {
    /// Build the frame for one iteration of the simple demo.
    pub fn build(count: u32, background: u16, title: u16, info: u16) -> Self {
        let mut counter_text = String::new();
        counter_text
            .write_fmt(format_args!("{count}"))
            .expect("label buffer is sized for the longest possible counter");

        Self {
            background: colour::as_rgb565(background),
            title_colour: colour::as_rgb565(title),
            info_colour: colour::as_rgb565(info),
            counter_text,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn title_palette_order() {
        assert_eq!(title_colour(0), Rgb565::WHITE);
        assert_eq!(title_colour(1), Rgb565::RED);
        assert_eq!(title_colour(2), Rgb565::GREEN);
        assert_eq!(title_colour(3), Rgb565::BLUE);
        assert_eq!(title_colour(4), Rgb565::YELLOW);
        assert_eq!(title_colour(5), Rgb565::MAGENTA);
        assert_eq!(title_colour(6), Rgb565::CYAN);
    }

    #[test]
    fn title_palette_cycles_with_period_seven() {
        for count in 0..1000u32 {
            assert_eq!(
                title_colour(count),
                TITLE_PALETTE[count as usize % 7],
                "count {count}"
            );
        }
    }

    #[test]
    fn status_blinks_with_period_four() {
        for count in 0..1000u32 {
            let expected = if count % 4 < 2 {
                Status::Active
            } else {
                Status::Ready
            };
            assert_eq!(Status::for_iteration(count, false), expected, "count {count}");
        }
    }

    #[test]
    fn pending_fault_overrides_the_blink() {
        for count in 0..8u32 {
            assert_eq!(Status::for_iteration(count, true), Status::Error);
        }
    }

    #[test]
    fn progress_width_stays_in_range() {
        for count in 0..10_000u32 {
            let width = progress_width(count);
            assert!(width <= PROGRESS_RANGE, "count {count} gave width {width}");
        }
    }

    #[test]
    fn progress_width_starts_at_half_travel() {
        assert_eq!(progress_width(0), PROGRESS_RANGE / 2);
    }

    #[test]
    fn button_priority_is_a_then_b_then_c() {
        let all = ButtonSample {
            a: true,
            b: true,
            c: true,
        };
        assert_eq!(all.first_pressed(), Some(Button::A));

        let b_and_c = ButtonSample {
            a: false,
            b: true,
            c: true,
        };
        assert_eq!(b_and_c.first_pressed(), Some(Button::B));

        let c_only = ButtonSample {
            a: false,
            b: false,
            c: true,
        };
        assert_eq!(c_only.first_pressed(), Some(Button::C));

        assert_eq!(ButtonSample::default().first_pressed(), None);
    }

    #[test]
    fn subtitle_restores_default_when_nothing_is_pressed() {
        let subtitle = Subtitle::for_sample(ButtonSample::default());
        assert_eq!(subtitle.text, "Random Color Background");
        assert_eq!(subtitle.colour, Rgb565::YELLOW);
    }

    #[test]
    fn subtitle_reports_the_pressed_button() {
        let subtitle = Subtitle::for_sample(ButtonSample {
            a: false,
            b: true,
            c: false,
        });
        assert_eq!(subtitle.text, "Button B Pressed!");
        assert_eq!(subtitle.colour, Rgb565::GREEN);
    }

    #[test]
    fn extended_frame_composition() {
        let frame = Frame::build(7, 125, 0x1234, ButtonSample::default(), false);

        assert_eq!(frame.background, crate::colour::as_rgb565(0x1234));
        assert_eq!(frame.title_colour, TITLE_PALETTE[0]);
        assert_eq!(frame.status, Status::Ready);
        assert_eq!(frame.counter_text.as_str(), "Count: 7");
        assert_eq!(frame.clock_text.as_str(), "Time: 02:05");
        assert_eq!(frame.colour_text.as_str(), "RGB: 0x001234");
        assert_eq!(frame.progress_px, progress_width(7));
    }

    #[test]
    fn simple_frame_composition() {
        let frame = SimpleFrame::build(42, 0xffff, 0xf800, 0x07e0);

        assert_eq!(frame.background, Rgb565::WHITE);
        assert_eq!(frame.title_colour, Rgb565::RED);
        assert_eq!(frame.info_colour, Rgb565::GREEN);
        assert_eq!(frame.counter_text.as_str(), "42");
    }
}
