//! Short code generation.

use rand::Rng;

/// Symbols a short code is drawn from: lowercase, uppercase, digits.
pub const CODE_ALPHABET: &[u8; 62] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of codes issued by the shorten operation.
pub const CODE_LENGTH: usize = 6;

/// Generates a random code of exactly `length` characters.
///
/// Each character is sampled uniformly and independently from
/// [`CODE_ALPHABET`]. Randomness comes from the thread-local generator, which
/// is seeded from the operating system and periodically reseeded, so codes are
/// not predictable across restarts and concurrent callers never share state.
///
/// No uniqueness is guaranteed here; the shorten operation resolves collisions
/// with a conditional write.
///
/// # Examples
///
/// ```
/// use short_url::utils::code_generator::{CODE_ALPHABET, generate_code};
///
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.bytes().all(|b| CODE_ALPHABET.contains(&b)));
/// ```
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_has_62_distinct_symbols() {
        let unique: HashSet<u8> = CODE_ALPHABET.iter().copied().collect();
        assert_eq!(unique.len(), 62);
        assert!(CODE_ALPHABET.iter().all(|b| b.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_code_has_requested_length() {
        for length in [0, 1, 6, 8, 32, 100] {
            assert_eq!(generate_code(length).len(), length);
        }
    }

    #[test]
    fn test_generate_code_zero_length_is_empty() {
        assert!(generate_code(0).is_empty());
    }

    #[test]
    fn test_generate_code_uses_alphabet_only() {
        for _ in 0..200 {
            let code = generate_code(CODE_LENGTH);
            assert!(
                code.bytes().all(|b| CODE_ALPHABET.contains(&b)),
                "unexpected character in {code}"
            );
        }
    }

    #[test]
    fn test_generate_code_successive_calls_differ() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generate_code(CODE_LENGTH));
        }

        // 62^6 possibilities; a handful of collisions in 1000 draws would
        // already point at a broken generator.
        assert!(codes.len() >= 995);
    }

    #[test]
    fn test_generate_code_from_many_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| generate_code(CODE_LENGTH)))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().len(), CODE_LENGTH);
        }
    }
}
