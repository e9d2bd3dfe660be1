// src/capitalization.rs
//! Random upper-casing of letters drawn from the consonant and vowel pools

use std::num::NonZeroU32;

use rand::Rng;

/// Whether, and how often, letters are upper-cased.
///
/// With [`Capitalization::Odds`] each letter is upper-cased independently with probability
/// `1 / odds`: a uniform draw from `0..odds` upper-cases the letter only when it lands on
/// `odds - 1`. An odds of one upper-cases every letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Capitalization {
    /// Letters are emitted exactly as they appear in their pool.
    #[default]
    Disabled,
    /// Each letter is upper-cased with probability `1 / odds`.
    Odds(NonZeroU32),
}

impl Capitalization {
    /// Build a policy from a flag and odds pair.
    pub const fn new(enabled: bool, odds: NonZeroU32) -> Self {
        if enabled {
            Self::Odds(odds)
        } else {
            Self::Disabled
        }
    }

    /// Whether letters may be upper-cased at all.
    pub const fn is_enabled(&self) -> bool {
        matches!(self, Self::Odds(_))
    }

    /// Possibly upper-case `c`, consuming one draw from `rng` when enabled.
    ///
    /// Characters whose upper-case form is not a single `char` (e.g. `ß`) are left unchanged so
    /// that every emitted letter occupies exactly one position.
    pub fn apply<R: Rng + ?Sized>(self, c: char, rng: &mut R) -> char {
        let Self::Odds(odds) = self else {
            return c;
        };

        let last = odds.get().saturating_sub(1);
        if rng.random_range(0..odds.get()) != last {
            return c;
        }

        let mut upper = c.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(u), None) => u,
            _ => c,
        }
    }
}
