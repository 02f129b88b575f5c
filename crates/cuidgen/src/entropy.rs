//! Uniform draws from a fallible random source.
//!
//! Every draw goes through [`RngCore::try_fill_bytes`] so that a failing
//! source surfaces as [`Error::RandomSource`](crate::Error::RandomSource)
//! instead of a panic. The bounded draw behind them is internal:
//!
//! ```compile_fail
//! let mut rng = rand::rngs::OsRng;
//! cuidgen::entropy::uniform_below(&mut rng, 0);
//! ```

use crate::error::Result;
use rand::RngCore;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ALPHABET_LEN: u64 = 26;

/// Draws an integer uniformly distributed in `[0, bound)`.
///
/// Values above the largest multiple of `bound` that fits in a `u64` are
/// rejected and redrawn, which keeps the result free of modulo bias. Callers
/// pass non-zero constants.
pub(crate) fn uniform_below<R: RngCore + ?Sized>(rng: &mut R, bound: u64) -> Result<u64> {
    assert!(bound > 0, "uniform bound must be positive");

    let zone = u64::MAX - u64::MAX % bound;
    let mut buf = [0_u8; 8];
    loop {
        rng.try_fill_bytes(&mut buf)?;
        let value = u64::from_le_bytes(buf);
        if value < zone {
            return Ok(value % bound);
        }
    }
}

/// Produces exactly `length` random base36 digits.
pub fn next_entropy<R: RngCore + ?Sized>(rng: &mut R, length: usize) -> Result<String> {
    let mut entropy = String::with_capacity(length);
    while entropy.len() < length {
        let digit = uniform_below(rng, BASE36_DIGITS.len() as u64)?;
        entropy.push(char::from(BASE36_DIGITS[digit as usize]));
    }
    Ok(entropy)
}

/// Draws one lowercase ASCII letter, uniform over `a..=z`.
pub fn random_letter<R: RngCore + ?Sized>(rng: &mut R) -> Result<char> {
    let offset = uniform_below(rng, ALPHABET_LEN)? as u8;
    Ok(char::from(b'a' + offset))
}
