//! Short code generation.
//!
//! Codes are drawn uniformly at random from a 57-character alphabet that
//! leaves out look-alike characters (`0`, `1`, `I`, `O`, `l`). With the default
//! length of 8 the code space holds 57^8 (about 1.1e14) values, so collisions
//! are rare and codes cannot be enumerated sequentially.

use rand::Rng;

/// Default number of characters in a generated code.
pub const DEFAULT_CODE_LENGTH: usize = 8;

/// Default number of insert attempts before giving up on a create.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Characters a generated code may contain.
pub const ALPHABET: &[u8] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Source of candidate short codes.
///
/// The shortener asks for a fresh candidate on every attempt and never
/// assumes two calls return different values; uniqueness is checked by the
/// store.
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Generates random codes from [`ALPHABET`] using the thread-local CSPRNG.
#[derive(Debug, Clone)]
pub struct RandomCodeGenerator {
    length: usize,
}

impl RandomCodeGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        generate_code(self.length)
    }
}

/// Generates a random code of `length` characters.
///
/// # Examples
///
/// ```
/// use tinylink::utils::code_generator::{ALPHABET, generate_code};
///
/// let code = generate_code(8);
/// assert_eq!(code.len(), 8);
/// assert!(code.bytes().all(|b| ALPHABET.contains(&b)));
/// ```
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
