//! Hash primitive shared by the seeded stream and the certificate.
//!
//! SHA-256 is pinned here for both uses. Swapping it would change every
//! seeded draw and every certificate ever issued, so any replacement must
//! ship under a new [`Algorithm`](crate::rng::Algorithm) label instead.

use sha2::{Digest, Sha256};

/// Length in bytes of a SHA-256 digest.
pub const DIGEST_LEN: usize = 32;

/// Computes the SHA-256 digest of `input`.
pub fn sha256(input: &[u8]) -> [u8; DIGEST_LEN] {
    Sha256::digest(input).into()
}

/// Renders bytes as lowercase hexadecimal.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_empty_input_matches_known_vector() {
        assert_eq!(
            to_hex(&sha256(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn to_hex_is_lowercase() {
        assert_eq!(to_hex(&[0xAB, 0x01, 0xFF]), "ab01ff");
    }
}
