//! Domain Services

use platform::crypto::constant_time_eq;

/// Compare a submitted password with the configured secret
///
/// Empty input on either side is rejected before any comparison. Otherwise the
/// comparison is constant-time in the content, and a length mismatch performs
/// a dummy comparison of equal cost before returning `false`.
pub fn verify_password(input: &str, expected: &str) -> bool {
    if input.is_empty() || expected.is_empty() {
        return false;
    }
    constant_time_eq(input.as_bytes(), expected.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_password_matches() {
        assert!(verify_password("p", "p"));
        assert!(verify_password("correct horse battery staple", "correct horse battery staple"));
        assert!(verify_password("päßwörd", "päßwörd"));
    }

    #[test]
    fn test_different_password_rejected() {
        assert!(!verify_password("secret1", "secret2"));
        assert!(!verify_password("Secret", "secret"));
    }

    #[test]
    fn test_length_only_difference_rejected() {
        assert!(!verify_password("secret", "secret "));
        assert!(!verify_password("secretsecret", "secret"));
    }

    #[test]
    fn test_empty_inputs_rejected() {
        assert!(!verify_password("", "x"));
        assert!(!verify_password("x", ""));
        assert!(!verify_password("", ""));
    }
}
