//! A library for generating pronounceable passwords from alternating consonants and vowels,
//! with optional digit and special character segments and random capitalization.
//!
//! A password is laid out as `word digits word specials`. The words alternate consonant and
//! vowel, starting with a consonant, and share whatever length the digits and specials leave.
//!
//! # Example
//!
//! ```
//! use human_friendly_passwords::{Alphabet, Capitalization, Generator};
//! use std::num::NonZeroU32;
//!
//! let odds = NonZeroU32::new(3).expect("non-zero");
//! let mut generator = Generator::new(Alphabet::default().with_capitalization(Capitalization::Odds(odds)));
//! let password = generator.generate(12, 2, 1)?;
//! println!("Generated password: {}", password);
//! # Ok::<(), human_friendly_passwords::PasswordError>(())
//! ```

pub mod alphabet;
pub mod capitalization;
pub mod config;
pub mod distribution;
pub mod error;
pub mod generator;
pub mod password;
pub mod pool;
pub mod request;

// Re-export main types for convenience
pub use alphabet::Alphabet;
pub use capitalization::Capitalization;
pub use config::GeneratorConfig;
pub use distribution::PasswordDist;
pub use error::{ConfigError, LengthError, PasswordError};
pub use generator::Generator;
pub use password::Password;
pub use pool::{CharacterPool, PoolKind};
pub use request::{PasswordRequest, SegmentLayout};

/// Result type for password generation.
pub type Result<T> = std::result::Result<T, PasswordError>;

/// Generate one password from the default alphabet using the thread-local RNG.
///
/// # Errors
///
/// See [`Generator::generate`].
pub fn generate(length: usize, digits: usize, specials: usize) -> Result<Password> {
    use rand::distr::Distribution;

    Alphabet::default()
        .distribution(PasswordRequest::new(length, digits, specials))
        .map(|dist| dist.sample(&mut rand::rng()))
}
