// src/generator.rs
//! Long-lived password generator owning its alphabet and random stream

use std::num::NonZeroU32;

use rand::{Rng, SeedableRng, distr::Distribution, rngs::StdRng};

use crate::{
    Alphabet, Capitalization, Password, PasswordRequest, Result, pool::CharacterPool,
};

/// Reusable password generator.
///
/// The random stream is seeded once, when the generator is built, and every draw of every
/// call advances that one stream. Nothing else survives a call, so repeated calls are
/// independent. Sharing one generator between threads needs a lock around [`Self::generate`];
/// alternatively share the [`Alphabet`] and give each thread its own RNG via
/// [`Alphabet::distribution`].
///
/// # Example
/// ```
/// use human_friendly_passwords::{Alphabet, Generator};
///
/// let mut generator = Generator::seeded(Alphabet::default(), 42);
/// let password = generator.generate(10, 2, 2)?;
/// assert_eq!(password.chars().count(), 10);
/// # Ok::<(), human_friendly_passwords::PasswordError>(())
/// ```
///
/// A generator cannot be cloned, since a copy would replay the same random stream:
/// ```compile_fail
/// use human_friendly_passwords::Generator;
///
/// let generator = Generator::default();
/// let copy: Generator = generator.clone();
/// ```
#[derive(Debug)]
pub struct Generator<R = StdRng> {
    /// Pools and capitalization policy.
    alphabet: Alphabet,
    /// The single stream used for all draws.
    rng: R,
}

impl Generator<StdRng> {
    /// Create a generator seeded from the operating system.
    pub fn new(alphabet: Alphabet) -> Self {
        Self::with_rng(alphabet, StdRng::from_os_rng())
    }

    /// Create a generator from four explicit pools and a capitalization flag and odds.
    pub fn from_pools(
        consonants: impl Into<CharacterPool>,
        vowels: impl Into<CharacterPool>,
        digits: impl Into<CharacterPool>,
        specials: impl Into<CharacterPool>,
        capitalize: bool,
        odds: NonZeroU32,
    ) -> Self {
        Self::new(Alphabet::new(
            consonants,
            vowels,
            digits,
            specials,
            Capitalization::new(capitalize, odds),
        ))
    }

    /// Create a generator whose output is fully determined by `seed`.
    pub fn seeded(alphabet: Alphabet, seed: u64) -> Self {
        Self::with_rng(alphabet, StdRng::seed_from_u64(seed))
    }
}

impl Default for Generator<StdRng> {
    fn default() -> Self {
        Self::new(Alphabet::default())
    }
}

impl<R: Rng> Generator<R> {
    /// Create a generator drawing from `rng`.
    pub const fn with_rng(alphabet: Alphabet, rng: R) -> Self {
        Self { alphabet, rng }
    }

    /// The alphabet passwords are drawn from.
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Generate a password of `length` characters, `digits` and `specials` of which are drawn
    /// from the digit and special pools.
    ///
    /// # Errors
    ///
    /// [`crate::PasswordError::InvalidLength`] when `length` is zero or smaller than
    /// `digits + specials`, [`crate::PasswordError::MissingPool`] when the consonant or vowel
    /// pool is empty. Nothing is generated on error.
    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    pub fn generate(&mut self, length: usize, digits: usize, specials: usize) -> Result<Password> {
        let dist = self
            .alphabet
            .distribution(PasswordRequest::new(length, digits, specials))?;
        log_layout(&self.alphabet, &dist);
        Ok(dist.sample(&mut self.rng))
    }

    /// [`Self::generate`] taking a prepared [`PasswordRequest`].
    pub fn generate_request(&mut self, request: PasswordRequest) -> Result<Password> {
        let PasswordRequest {
            length,
            digits,
            specials,
        } = request;
        self.generate(length, digits, specials)
    }

    /// Lazily generate up to `count` passwords for the same request, validating it once.
    ///
    /// Passwords are drawn as the iterator is advanced, so nothing is allocated up front and
    /// `count` may be arbitrarily large.
    ///
    /// # Errors
    ///
    /// As for [`Self::generate`], reported before any password is drawn.
    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    pub fn generate_many(
        &mut self,
        request: PasswordRequest,
        count: usize,
    ) -> Result<impl Iterator<Item = Password> + '_> {
        // Move `self` out of the closure `instrument(err)` wraps the body in, so it is `FnOnce`
        // and the returned iterator may borrow from it.
        let this = self;
        let dist = this.alphabet.distribution(request)?;
        log_layout(&this.alphabet, &dist);
        Ok(dist.sample_iter(&mut this.rng).take(count))
    }
}

/// Record the planned segments and any optional segment that will be skipped.
fn log_layout(alphabet: &Alphabet, dist: &crate::PasswordDist<'_>) {
    let layout = dist.layout();
    tracing::debug!(
        first_word = layout.first_word,
        digits = layout.digits,
        second_word = layout.second_word,
        specials = layout.specials,
        "Planned password segments"
    );

    if layout.digits > 0 && alphabet.digits().is_empty() {
        tracing::trace!(skipped = layout.digits, "Digit pool empty, skipping digit segment");
    }
    if layout.specials > 0 && alphabet.specials().is_empty() {
        tracing::trace!(
            skipped = layout.specials,
            "Special pool empty, skipping special segment"
        );
    }
}
