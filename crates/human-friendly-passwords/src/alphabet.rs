// src/alphabet.rs
//! The four character pools plus the capitalization policy that together define what a
//! password may contain

use crate::{
    Capitalization, PasswordDist, PasswordRequest, Result,
    error::PasswordError,
    pool::{
        CharacterPool, DEFAULT_CONSONANTS, DEFAULT_DIGITS, DEFAULT_SPECIALS, DEFAULT_VOWELS,
        PoolKind,
    },
};

/// Character pools and capitalization policy for password generation.
///
/// Consonants and vowels are mandatory, every generation fails with
/// [`PasswordError::MissingPool`] while either is empty. Digits and specials are optional; an
/// empty pool skips its segment.
///
/// # Example
/// ```
/// use human_friendly_passwords::{Alphabet, Capitalization};
///
/// let alphabet = Alphabet::new("bdfgklmnprstvz", "aeiou", "23456789", "", Capitalization::Disabled);
/// assert!(alphabet.specials().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alphabet {
    /// Drawn at even word positions.
    consonants: CharacterPool,
    /// Drawn at odd word positions.
    vowels: CharacterPool,
    /// Drawn for the digit segment.
    digits: CharacterPool,
    /// Drawn for the special character segment.
    specials: CharacterPool,
    /// Applied to every consonant and vowel.
    capitalization: Capitalization,
}

impl Alphabet {
    /// Build an alphabet from four explicit pools and a capitalization policy.
    pub fn new(
        consonants: impl Into<CharacterPool>,
        vowels: impl Into<CharacterPool>,
        digits: impl Into<CharacterPool>,
        specials: impl Into<CharacterPool>,
        capitalization: Capitalization,
    ) -> Self {
        Self {
            consonants: consonants.into(),
            vowels: vowels.into(),
            digits: digits.into(),
            specials: specials.into(),
            capitalization,
        }
    }

    /// Replace the capitalization policy.
    #[must_use]
    pub fn with_capitalization(mut self, capitalization: Capitalization) -> Self {
        self.capitalization = capitalization;
        self
    }

    /// The consonant pool.
    pub const fn consonants(&self) -> &CharacterPool {
        &self.consonants
    }

    /// The vowel pool.
    pub const fn vowels(&self) -> &CharacterPool {
        &self.vowels
    }

    /// The digit pool.
    pub const fn digits(&self) -> &CharacterPool {
        &self.digits
    }

    /// The special character pool.
    pub const fn specials(&self) -> &CharacterPool {
        &self.specials
    }

    /// The capitalization policy.
    pub const fn capitalization(&self) -> Capitalization {
        self.capitalization
    }

    /// Look up a pool by kind.
    pub const fn pool(&self, kind: PoolKind) -> &CharacterPool {
        match kind {
            PoolKind::Consonants => &self.consonants,
            PoolKind::Vowels => &self.vowels,
            PoolKind::Digits => &self.digits,
            PoolKind::Specials => &self.specials,
        }
    }

    /// Check the mandatory pools, consonants first.
    pub fn validate(&self) -> Result<()> {
        [PoolKind::Consonants, PoolKind::Vowels]
            .into_iter()
            .find(|kind| self.pool(*kind).is_empty())
            .map_or(Ok(()), |kind| Err(PasswordError::MissingPool(kind)))
    }

    /// Validate `request` against this alphabet and return a distribution producing passwords
    /// for it.
    ///
    /// # Errors
    ///
    /// Checked in order: [`PasswordError::InvalidLength`] for a zero length,
    /// [`PasswordError::MissingPool`] if the consonant or vowel pool is empty, then
    /// [`PasswordError::InvalidLength`] if the digits and specials do not fit.
    pub fn distribution(&self, request: PasswordRequest) -> Result<PasswordDist<'_>> {
        request.ensure_non_empty()?;
        self.validate()?;
        let layout = request.layout()?;
        Ok(PasswordDist::new(self, layout))
    }
}

impl Default for Alphabet {
    /// Lower-case consonants and vowels, `0-9`, `!@$#%&*-_.`, no capitalization.
    fn default() -> Self {
        Self::new(
            DEFAULT_CONSONANTS,
            DEFAULT_VOWELS,
            DEFAULT_DIGITS,
            DEFAULT_SPECIALS,
            Capitalization::Disabled,
        )
    }
}
