use crate::codec::encode_base36;
use sha3::{Digest, Sha3_512};

/// Hashes `input` with SHA3-512 and returns up to `length` base36 digits.
///
/// The first digit of the encoded digest is skipped: its range is bounded by
/// the 512-bit width of the digest, so it is not uniformly distributed.
pub fn hash(input: &str, length: usize) -> String {
    let digest = Sha3_512::digest(input.as_bytes());
    encode_base36(&digest).chars().skip(1).take(length).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_input_gives_same_output() {
        assert_eq!(hash("hello", 24), hash("hello", 24));
    }

    #[test]
    fn different_input_gives_different_output() {
        assert_ne!(hash("hello", 24), hash("hello!", 24));
    }

    #[test]
    fn output_is_truncated_to_length() {
        for length in [0, 1, 4, 24, 32] {
            assert_eq!(hash("some input", length).len(), length);
        }
        let long = hash("some input", 32);
        assert!(long.starts_with(&hash("some input", 4)));
    }

    #[test]
    fn skips_the_leading_digit() {
        let digest = Sha3_512::digest(b"abc");
        let encoded = encode_base36(&digest);
        assert_eq!(hash("abc", 10), &encoded[1..11]);
    }

    #[test]
    fn output_is_lowercase_base36() {
        assert!(hash("", 32)
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }
}
