//! Base36 rendering of big-endian byte buffers and signed integers.

use num_bigint::{BigInt, BigUint};

const RADIX: u32 = 36;

/// Renders `bytes` as a single big-endian unsigned integer in base 36.
///
/// Digits are `0-9a-z`. Leading zero bytes do not contribute digits, so
/// `[0, 0, 1]` and `[1]` both encode as `"1"`; an empty buffer encodes as `"0"`.
pub fn encode_base36(bytes: &[u8]) -> String {
    BigUint::from_bytes_be(bytes).to_str_radix(RADIX)
}

/// Renders a signed integer in base 36, with a leading `-` for negative values.
pub fn encode_i64(value: i64) -> String {
    BigInt::from(value).to_str_radix(RADIX)
}
