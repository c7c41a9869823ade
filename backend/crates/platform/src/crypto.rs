//! Cryptographic Utilities

use base64::{Engine, engine::general_purpose};
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    rand::rng().fill_bytes(&mut bytes);
    bytes
}

/// Generate an opaque random token of `byte_len` random bytes
///
/// Encoded as URL-safe base64 without padding so it can travel in cookies
/// and URLs unescaped. 32 bytes yields 256 bits of entropy and 43 characters.
pub fn random_token(byte_len: usize) -> String {
    to_base64_url(&random_bytes(byte_len))
}

/// Compute SHA-256 hash
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Encode bytes as URL-safe base64 (no padding)
pub fn to_base64_url(bytes: &[u8]) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

/// Short, non-reversible identifier for a sensitive value in log lines
///
/// Client IPs and tokens are logged through this instead of verbatim.
pub fn log_fingerprint(value: &str) -> String {
    to_base64_url(&sha256(value.as_bytes())[..6])
}

/// Constant-time comparison to prevent timing attacks
///
/// The running time depends only on the length of `a`. On a length mismatch a
/// dummy comparison of `a` against itself is performed before returning
/// `false`, so a wrong length costs the same as a wrong value of `a`'s length.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        let _ = std::hint::black_box(xor_fold(a, a));
        return false;
    }
    xor_fold(a, b) == 0
}

#[inline(never)]
fn xor_fold(a: &[u8], b: &[u8]) -> u8 {
    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= std::hint::black_box(x ^ y);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_values() {
        // SHA-256 of empty string
        let hash = sha256(b"");
        let expected =
            hex::decode("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
                .unwrap();
        assert_eq!(hash.to_vec(), expected);

        // SHA-256 of "hello"
        let hash = sha256(b"hello");
        let expected =
            hex::decode("2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824")
                .unwrap();
        assert_eq!(hash.to_vec(), expected);
    }

    #[test]
    fn test_random_bytes() {
        let bytes = random_bytes(32);
        assert_eq!(bytes.len(), 32);
        // Should not be all zeros (statistically)
        assert!(bytes.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_random_token_shape() {
        let token = random_token(32);
        assert_eq!(token.len(), 43);
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
        assert_ne!(token, random_token(32));
    }

    #[test]
    fn test_log_fingerprint_is_stable_and_opaque() {
        let a = log_fingerprint("203.0.113.7");
        assert_eq!(a, log_fingerprint("203.0.113.7"));
        assert_ne!(a, log_fingerprint("203.0.113.8"));
        assert_eq!(a.len(), 8);
        assert!(!a.contains("203"));
    }

    #[test]
    fn test_constant_time_eq() {
        let a = [1u8, 2, 3, 4];
        let b = [1u8, 2, 3, 4];
        let c = [1u8, 2, 3, 5];
        assert!(constant_time_eq(&a, &b));
        assert!(!constant_time_eq(&a, &c));
    }

    #[test]
    fn test_constant_time_eq_length_mismatch() {
        assert!(!constant_time_eq(b"secret", b"secret!"));
        assert!(!constant_time_eq(b"secret!", b"secret"));
        assert!(!constant_time_eq(b"", b"x"));
        assert!(constant_time_eq(b"", b""));
    }
}
