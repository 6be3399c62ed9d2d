//! Rendering of demo frames onto the panel.
//!
//! Layout mirrors the 320x240 panel: labels down the left edge, the
//! progress bar along the bottom.

pub(crate) mod drawables;

use self::drawables::{label::Label, progress_bar::ProgressBar};
use embedded_graphics::{
    mono_font::ascii::{FONT_10X20, FONT_6X10, FONT_9X15},
    pixelcolor::Rgb565,
    prelude::{DrawTarget, Point, RgbColor},
    Drawable,
};
use hotaru_ui::{
    driver::Render,
    frame::{Frame, SimpleFrame},
};

pub const SCREEN_WIDTH: u16 = 320;
pub const SCREEN_HEIGHT: u16 = 240;

const TITLE_TEXT: &str = "HOTARU DEMO";
const TITLE_ORIGIN: Point = Point::new(10, 20);
const SUBTITLE_ORIGIN: Point = Point::new(15, 50);
const STATUS_ORIGIN: Point = Point::new(10, 80);
const COUNTER_ORIGIN: Point = Point::new(10, 110);
const CLOCK_ORIGIN: Point = Point::new(10, 140);
const COLOUR_ORIGIN: Point = Point::new(10, 170);

const SIMPLE_TITLE_TEXT: &str = "HELLO HOTARU";
const SIMPLE_INFO_TEXT: &str = "Random Colors!";
const SIMPLE_TITLE_ORIGIN: Point = Point::new(50, 50);
const SIMPLE_INFO_ORIGIN: Point = Point::new(80, 100);
const SIMPLE_COUNTER_ORIGIN: Point = Point::new(100, 150);

/// The demo panel: renders frames onto any RGB565 draw target.
pub struct Panel<D> {
    target: D,
}

impl<D> Panel<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: D) -> Self {
        Self { target }
    }

    /// Blank the whole screen, used when the demo stops.
    pub fn blank(&mut self) -> Result<(), D::Error> {
        self.target.clear(Rgb565::BLACK)
    }
}

impl<D> Render<Frame> for Panel<D>
where
    D: DrawTarget<Color = Rgb565>,
    D::Error: core::fmt::Debug,
{
    type Error = D::Error;

    fn render(&mut self, frame: &Frame) -> Result<(), Self::Error> {
        self.target.clear(frame.background)?;

        Label::new(TITLE_ORIGIN, TITLE_TEXT, &FONT_10X20, frame.title_colour)
            .draw(&mut self.target)?;
        Label::new(
            SUBTITLE_ORIGIN,
            frame.subtitle.text,
            &FONT_6X10,
            frame.subtitle.colour,
        )
        .draw(&mut self.target)?;
        Label::new(
            STATUS_ORIGIN,
            frame.status.text(),
            &FONT_6X10,
            frame.status.colour(),
        )
        .draw(&mut self.target)?;
        Label::new(COUNTER_ORIGIN, &frame.counter_text, &FONT_9X15, Rgb565::CYAN)
            .draw(&mut self.target)?;
        Label::new(CLOCK_ORIGIN, &frame.clock_text, &FONT_6X10, Rgb565::WHITE)
            .draw(&mut self.target)?;
        Label::new(COLOUR_ORIGIN, &frame.colour_text, &FONT_6X10, Rgb565::WHITE)
            .draw(&mut self.target)?;

        ProgressBar::new(frame.progress_px).draw(&mut self.target)?;

        Ok(())
    }
}

impl<D> Render<SimpleFrame> for Panel<D>
where
    D: DrawTarget<Color = Rgb565>,
    D::Error: core::fmt::Debug,
{
    type Error = D::Error;

    fn render(&mut self, frame: &SimpleFrame) -> Result<(), Self::Error> {
        self.target.clear(frame.background)?;

        Label::new(
            SIMPLE_TITLE_ORIGIN,
            SIMPLE_TITLE_TEXT,
            &FONT_10X20,
            frame.title_colour,
        )
        .draw(&mut self.target)?;
        Label::new(
            SIMPLE_INFO_ORIGIN,
            SIMPLE_INFO_TEXT,
            &FONT_6X10,
            frame.info_colour,
        )
        .draw(&mut self.target)?;
        Label::new(
            SIMPLE_COUNTER_ORIGIN,
            &frame.counter_text,
            &FONT_9X15,
            Rgb565::YELLOW,
        )
        .draw(&mut self.target)?;

        Ok(())
    }
}
