//! Entropy from the RP2040 ring oscillator.

use embassy_rp::clocks::RoscRng;
use hotaru_ui::colour::RandomBits;

/// [`RandomBits`] over the hardware ring oscillator RNG.
///
/// The ROSC is not a cryptographic source, which is fine here: the bits
/// only ever pick background colours.
pub struct RoscEntropy;

impl RandomBits for RoscEntropy {
    fn random_bits(&mut self, n: u32) -> u32 {
        debug_assert!((1..=32).contains(&n));

        let mut rng = RoscRng;
        (rng.next_u64() >> (64 - n)) as u32
    }
}
