//! Short code generation.
//!
//! Codes are drawn uniformly from the base58 alphabet, which excludes the
//! visually ambiguous `0`, `O`, `I` and `l` and contains no characters that
//! need escaping in a URL path segment.

use rand::Rng;

/// Base58 alphabet (Bitcoin ordering).
pub const BASE58_ALPHABET: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Default number of characters in a generated code.
///
/// 8 characters over 58 symbols give about 46 bits of entropy: collisions
/// are rare but possible, so callers must still handle them.
pub const DEFAULT_CODE_LENGTH: usize = 8;

/// Width of the `short_code` column.
pub const MAX_CODE_LENGTH: usize = 10;

/// Source of candidate short codes.
///
/// Implementations must be free of external side effects. Uniqueness is
/// not their responsibility; the store decides whether a code is taken.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Produces a fresh candidate code.
    fn generate(&self) -> String;
}

/// Random base58 code generator backed by the thread-local RNG.
#[derive(Debug, Clone, Copy)]
pub struct Base58CodeGenerator {
    length: usize,
}

impl Base58CodeGenerator {
    /// Creates a generator producing codes of `length` characters.
    ///
    /// `length` is clamped to `1..=MAX_CODE_LENGTH` so generated codes always
    /// fit the schema.
    pub fn new(length: usize) -> Self {
        Self {
            length: length.clamp(1, MAX_CODE_LENGTH),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for Base58CodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl CodeGenerator for Base58CodeGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();

        (0..self.length)
            .map(|_| BASE58_ALPHABET[rng.random_range(0..BASE58_ALPHABET.len())] as char)
            .collect()
    }
}

/// Returns true if `code` could have been produced by [`Base58CodeGenerator`].
///
/// Used by the admin CLI to reject obvious typos. Resolution does not call
/// it: an unknown code is simply not found.
pub fn is_valid_code(code: &str) -> bool {
    !code.is_empty()
        && code.len() <= MAX_CODE_LENGTH
        && code.bytes().all(|b| BASE58_ALPHABET.contains(&b))
}
