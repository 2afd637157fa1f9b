//! Short code generation.
//!
//! Codes are drawn uniformly from the 62 ASCII alphanumerics. The generator
//! is not cryptographically secure and does not guarantee uniqueness; the
//! caller checks candidates against the store.

use rand::Rng;

/// Alphabet used for generated codes (`[a-zA-Z0-9]`).
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Code length used by the shorten operation.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Source of candidate short codes.
///
/// Implemented by [`RandomCodeGenerator`] in production; tests substitute a
/// mock to script collisions.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Returns a code of exactly `length` characters.
    fn generate(&self, length: usize) -> String;
}

/// Generator backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self, length: usize) -> String {
        generate_code(length)
    }
}

/// Generates a random code of `length` characters from [`ALPHABET`].
///
/// # Examples
///
/// ```
/// use url_shortener::utils::code_generator::generate_code;
///
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_has_62_unique_chars() {
        let unique: HashSet<_> = ALPHABET.iter().collect();
        assert_eq!(ALPHABET.len(), 62);
        assert_eq!(unique.len(), 62);
    }

    #[test]
    fn test_generate_code_default_length() {
        let code = generate_code(DEFAULT_CODE_LENGTH);
        assert_eq!(code.len(), 6);
    }

    #[test]
    fn test_generate_code_respects_requested_length() {
        for length in [0, 1, 8, 32] {
            assert_eq!(generate_code(length).len(), length);
        }
    }

    #[test]
    fn test_generate_code_alphanumeric_only() {
        for _ in 0..500 {
            let code = generate_code(DEFAULT_CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_code_covers_alphabet() {
        let mut seen = HashSet::new();
        for _ in 0..2000 {
            seen.extend(generate_code(DEFAULT_CODE_LENGTH).chars());
        }
        assert_eq!(seen.len(), 62);
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let codes: HashSet<_> = (0..1000)
            .map(|_| generate_code(DEFAULT_CODE_LENGTH))
            .collect();

        // 62^6 possibilities; a handful of collisions would still be plausible
        assert!(codes.len() > 990);
    }

    #[test]
    fn test_random_generator_delegates() {
        let code = RandomCodeGenerator.generate(10);
        assert_eq!(code.len(), 10);
    }
}
