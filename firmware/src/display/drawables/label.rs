use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::Rgb565,
    prelude::{DrawTarget, Point},
    text::{Baseline, Text},
    Drawable,
};

/// A positioned line of text in a single font and colour.
pub(crate) struct Label<'a> {
    origin: Point,
    text: &'a str,
    style: MonoTextStyle<'static, Rgb565>,
}

impl<'a> Label<'a> {
    pub(crate) fn new(
        origin: Point,
        text: &'a str,
        font: &'static MonoFont<'static>,
        colour: Rgb565,
    ) -> Self {
        Self {
            origin,
            text,
            style: MonoTextStyle::new(font, colour),
        }
    }
}

impl Drawable for Label<'_> {
    type Color = Rgb565;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        Text::with_baseline(self.text, self.origin, self.style, Baseline::Top).draw(target)?;

        Ok(())
    }
}
