use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::{DrawTarget, Point, Primitive, Size},
    primitives::{PrimitiveStyleBuilder, Rectangle},
    Drawable,
};

// 0x333333
const TRACK_COLOUR: Rgb565 = Rgb565::new(6, 12, 6);
// 0x00ff88
const FILL_COLOUR: Rgb565 = Rgb565::new(0, 63, 17);

const TRACK: Rectangle = Rectangle::new(Point::new(10, 200), Size::new(300, 20));
const FILL_ORIGIN: Point = Point::new(12, 202);
const FILL_HEIGHT: u32 = 16;

/// The sine animated progress bar: a fixed track with a variable width
/// fill drawn over it.
pub(crate) struct ProgressBar {
    fill_px: u32,
}

impl ProgressBar {
    pub(crate) fn new(fill_px: u32) -> Self {
        Self { fill_px }
    }
}

impl Drawable for ProgressBar {
    type Color = Rgb565;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let track_style = PrimitiveStyleBuilder::new()
            .fill_color(TRACK_COLOUR)
            .build();
        TRACK.into_styled(track_style).draw(target)?;

        let fill_style = PrimitiveStyleBuilder::new()
            .fill_color(FILL_COLOUR)
            .build();
        Rectangle::new(FILL_ORIGIN, Size::new(self.fill_px, FILL_HEIGHT))
            .into_styled(fill_style)
            .draw(target)?;

        Ok(())
    }
}
