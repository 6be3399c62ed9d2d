//! Colour handling.
//!
//! The panel works in RGB565: 5 bits red, 6 bits green, 5 bits blue,
//! packed into a `u16`.

use embedded_graphics::pixelcolor::{raw::RawU16, Rgb565};

/// Pack RGB565 component values into a single 16 bit colour.
///
/// Out of range components are masked to their field width.
pub const fn pack(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16 & 0x1f) << 11) | ((g as u16 & 0x3f) << 5) | (b as u16 & 0x1f)
}

/// Recover the (red, green, blue) components of a packed colour.
pub const fn components(colour: u16) -> (u8, u8, u8) {
    (
        ((colour >> 11) & 0x1f) as u8,
        ((colour >> 5) & 0x3f) as u8,
        (colour & 0x1f) as u8,
    )
}

/// Convert a packed RGB565 value into a drawable colour.
pub fn as_rgb565(colour: u16) -> Rgb565 {
    Rgb565::from(RawU16::new(colour))
}

/// A source of uniformly distributed random bits.
///
/// Implemented by the firmware over the hardware RNG; tests use scripted
/// values.
pub trait RandomBits {
    /// Return `n` uniformly random bits in the low end of the result.
    ///
    /// `n` must be in `1..=32`.
    fn random_bits(&mut self, n: u32) -> u32;
}

/// How a random colour is generated.
///
/// Fixed per binary, never switched at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColourPolicy {
    /// A flat 16 bit draw with no bit field structure.
    Flat,
    /// Three independent 5/6/5 bit draws packed into RGB565 layout.
    Rgb565Fields,
}

impl ColourPolicy {
    /// Draw a packed colour from the given entropy source.
    pub fn draw(&self, rng: &mut impl RandomBits) -> u16 {
        match self {
            ColourPolicy::Flat => rng.random_bits(16) as u16,
            ColourPolicy::Rgb565Fields => {
                let r = rng.random_bits(5) as u8;
                let g = rng.random_bits(6) as u8;
                let b = rng.random_bits(5) as u8;
                pack(r, g, b)
            }
        }
    }
}
