//! Short key generation.
//!
//! Keys are drawn uniformly from a 62-character alphabet. They are meant to be hard
//! to enumerate casually, not to be secrets, so a thread-local PRNG is sufficient.

use rand::Rng;

/// Alphabet used for generated keys: lowercase, uppercase, digits.
pub const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Default length of a generated key.
pub const DEFAULT_KEY_LENGTH: usize = 6;

/// Smallest and largest supported key lengths.
pub const MIN_KEY_LENGTH: usize = 6;
pub const MAX_KEY_LENGTH: usize = 8;

/// Source of candidate short keys.
///
/// Implementations are pure generators that don't consult storage; uniqueness is
/// enforced by the store, which keeps asking until it gets an unused key.
pub trait KeyGenerator: Send + Sync {
    /// Returns a new candidate key.
    fn generate(&self) -> String;
}

/// Random fixed-length key generator backed by the thread-local RNG.
#[derive(Debug, Clone)]
pub struct RandomKeyGenerator {
    length: usize,
}

impl RandomKeyGenerator {
    /// Creates a generator producing keys of `length` characters.
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Default for RandomKeyGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_LENGTH)
    }
}

impl KeyGenerator for RandomKeyGenerator {
    fn generate(&self) -> String {
        generate_key(self.length)
    }
}

/// Generates a random key of `length` characters from [`CHARSET`].
///
/// # Examples
///
/// ```ignore
/// let key = generate_key(6);
/// assert_eq!(key.len(), 6);
/// assert!(key.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_key(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}
