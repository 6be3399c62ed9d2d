//! The demo loop drivers.
//!
//! A driver owns the iteration counter and the fault captured from the
//! previous iteration. Each step builds a frame, hands it to the
//! renderer and turns a renderer error into a captured message instead
//! of letting it propagate, so one failed iteration never stops the
//! loop. Pacing (the sleeps between iterations) stays with the caller.

use crate::frame::{ButtonSample, Frame, SimpleFrame};
use core::fmt::{Debug, Write};
use heapless::String;

/// Capacity of a captured fault message; longer messages are truncated.
const FAULT_LEN: usize = 64;

/// Anything that can put a frame on the screen.
pub trait Render<F> {
    type Error: Debug;

    fn render(&mut self, frame: &F) -> Result<(), Self::Error>;
}

/// Inputs sampled by the firmware for one extended-demo iteration.
#[derive(Debug, Clone, Copy)]
pub struct Inputs {
    pub elapsed_seconds: u32,
    pub background: u16,
    pub buttons: ButtonSample,
}

/// Inputs drawn by the firmware for one simple-demo iteration.
#[derive(Debug, Clone, Copy)]
pub struct SimpleInputs {
    pub background: u16,
    pub title_colour: u16,
    pub info_colour: u16,
}

/// What happened during one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepOutcome {
    /// Frame rendered, nothing pressed.
    Drawn,
    /// Frame rendered with button feedback; the caller should add the
    /// debounce pause before the next iteration.
    ButtonHandled,
    /// The renderer failed; the fault is captured for the next frame and
    /// the caller should back off before continuing.
    Faulted,
}

fn capture<E: Debug>(error: E) -> String<FAULT_LEN> {
    let mut message = String::new();
    // Truncation on overflow is fine, the head of the message is the
    // useful part.
    let _ = message.write_fmt(format_args!("{error:?}"));
    message
}

/// Driver for the extended demo.
#[derive(Debug, Default)]
pub struct Driver {
    count: u32,
    fault: Option<String<FAULT_LEN>>,
}

impl Driver {
    pub const fn new() -> Self {
        Self {
            count: 0,
            fault: None,
        }
    }

    /// Iterations completed so far.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Message captured from the last failed iteration, if any.
    pub fn fault(&self) -> Option<&str> {
        self.fault.as_deref()
    }

    /// Run one iteration: build the frame and render it.
    ///
    /// A fault captured by the previous step shows up as this frame's
    /// ERROR status, then clears once a frame renders successfully.
    pub fn step<R: Render<Frame>>(&mut self, renderer: &mut R, inputs: &Inputs) -> StepOutcome {
        self.count = self.count.wrapping_add(1);

        let frame = Frame::build(
            self.count,
            inputs.elapsed_seconds,
            inputs.background,
            inputs.buttons,
            self.fault.is_some(),
        );
        self.fault = None;

        match renderer.render(&frame) {
            Ok(()) => {
                if inputs.buttons.first_pressed().is_some() {
                    StepOutcome::ButtonHandled
                } else {
                    StepOutcome::Drawn
                }
            }
            Err(error) => {
                self.fault = Some(capture(error));
                StepOutcome::Faulted
            }
        }
    }
}

/// Driver for the simple demo.
///
/// Same containment behaviour, but the reduced label set has no status
/// line, so a captured fault is only surfaced to the caller's log.
#[derive(Debug, Default)]
pub struct SimpleDriver {
    count: u32,
    fault: Option<String<FAULT_LEN>>,
}

impl SimpleDriver {
    pub const fn new() -> Self {
        Self {
            count: 0,
            fault: None,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn fault(&self) -> Option<&str> {
        self.fault.as_deref()
    }

    pub fn step<R: Render<SimpleFrame>>(
        &mut self,
        renderer: &mut R,
        inputs: &SimpleInputs,
    ) -> StepOutcome {
        self.count = self.count.wrapping_add(1);

        let frame = SimpleFrame::build(
            self.count,
            inputs.background,
            inputs.title_colour,
            inputs.info_colour,
        );
        self.fault = None;

        match renderer.render(&frame) {
            Ok(()) => StepOutcome::Drawn,
            Err(error) => {
                self.fault = Some(capture(error));
                StepOutcome::Faulted
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::frame::Status;
    use heapless::Vec;

    #[derive(Debug)]
    struct RenderBroken;

    #[derive(Default)]
    struct FlakyScreen {
        fail_next: bool,
        frames: Vec<Frame, 8>,
    }

    impl Render<Frame> for FlakyScreen {
        type Error = RenderBroken;

        fn render(&mut self, frame: &Frame) -> Result<(), RenderBroken> {
            if self.fail_next {
                self.fail_next = false;
                return Err(RenderBroken);
            }
            self.frames.push(frame.clone()).expect("frame log full");
            Ok(())
        }
    }

    fn inputs() -> Inputs {
        Inputs {
            elapsed_seconds: 0,
            background: 0,
            buttons: ButtonSample::default(),
        }
    }

    #[test]
    fn counter_increments_once_per_step() {
        let mut driver = Driver::new();
        let mut screen = FlakyScreen::default();

        for expected in 1..=5u32 {
            driver.step(&mut screen, &inputs());
            assert_eq!(driver.count(), expected);
        }
    }

    #[test]
    fn a_fault_does_not_stop_the_loop() {
        let mut driver = Driver::new();
        let mut screen = FlakyScreen::default();

        assert_eq!(driver.step(&mut screen, &inputs()), StepOutcome::Drawn);
        assert!(driver.fault().is_none());

        // Fault during the second iteration's rendering step.
        screen.fail_next = true;
        assert_eq!(driver.step(&mut screen, &inputs()), StepOutcome::Faulted);
        assert!(driver.fault().is_some());
        assert_eq!(screen.frames.len(), 1);

        // The next iteration still executes and carries the error
        // indicator.
        assert_eq!(driver.step(&mut screen, &inputs()), StepOutcome::Drawn);
        assert_eq!(screen.frames.len(), 2);
        assert_eq!(screen.frames[1].status, Status::Error);
        assert!(driver.fault().is_none());

        // And the one after that is back to the normal blink.
        assert_eq!(driver.step(&mut screen, &inputs()), StepOutcome::Drawn);
        assert_eq!(screen.frames[2].status, Status::Active);
    }

    #[test]
    fn fault_message_is_captured() {
        let mut driver = Driver::new();
        let mut screen = FlakyScreen::default();

        screen.fail_next = true;
        driver.step(&mut screen, &inputs());
        assert_eq!(driver.fault(), Some("RenderBroken"));
    }

    #[test]
    fn a_pressed_button_asks_for_the_debounce_pause() {
        let mut driver = Driver::new();
        let mut screen = FlakyScreen::default();

        let pressed = Inputs {
            buttons: ButtonSample {
                a: false,
                b: true,
                c: false,
            },
            ..inputs()
        };
        assert_eq!(driver.step(&mut screen, &pressed), StepOutcome::ButtonHandled);
        assert_eq!(screen.frames[0].subtitle.text, "Button B Pressed!");
    }

    #[derive(Default)]
    struct FlakySimpleScreen {
        fail_next: bool,
        frames: Vec<SimpleFrame, 8>,
    }

    impl Render<SimpleFrame> for FlakySimpleScreen {
        type Error = RenderBroken;

        fn render(&mut self, frame: &SimpleFrame) -> Result<(), RenderBroken> {
            if self.fail_next {
                self.fail_next = false;
                return Err(RenderBroken);
            }
            self.frames.push(frame.clone()).expect("frame log full");
            Ok(())
        }
    }

    #[test]
    fn simple_driver_contains_faults_too() {
        let mut driver = SimpleDriver::new();
        let mut screen = FlakySimpleScreen::default();
        let inputs = SimpleInputs {
            background: 0x0001,
            title_colour: 0x0002,
            info_colour: 0x0003,
        };

        assert_eq!(driver.step(&mut screen, &inputs), StepOutcome::Drawn);

        screen.fail_next = true;
        assert_eq!(driver.step(&mut screen, &inputs), StepOutcome::Faulted);
        assert_eq!(driver.fault(), Some("RenderBroken"));

        assert_eq!(driver.step(&mut screen, &inputs), StepOutcome::Drawn);
        assert_eq!(driver.count(), 3);
        assert_eq!(screen.frames[1].counter_text.as_str(), "3");
    }
}
