// src/pool.rs
//! Character pools and uniform draws from them

use std::fmt;

use rand::Rng;

/// Lower-case consonants used by the default alphabet.
pub const DEFAULT_CONSONANTS: &str = "bcdfghjklmnpqrstvwxyz";

/// Vowels used by the default alphabet.
pub const DEFAULT_VOWELS: &str = "aeiou";

/// Digits used by the default alphabet.
pub const DEFAULT_DIGITS: &str = "0123456789";

/// Special characters used by the default alphabet.
pub const DEFAULT_SPECIALS: &str = "!@$#%&*-_.";

/// The class of characters a pool supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolKind {
    /// Letters placed at even word positions.
    Consonants,
    /// Letters placed at odd word positions.
    Vowels,
    /// The digit segment.
    Digits,
    /// The special character segment.
    Specials,
}

#[cfg_attr(test, mutants::skip)]
impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Consonants => "consonants",
            Self::Vowels => "vowels",
            Self::Digits => "digits",
            Self::Specials => "special characters",
        };
        f.write_str(name)
    }
}

/// An ordered set of candidate characters for one [`PoolKind`].
///
/// Order and duplicates are preserved, so a character listed twice is drawn twice as often.
///
/// # Example
/// ```
/// use human_friendly_passwords::CharacterPool;
///
/// let pool = CharacterPool::from("aeiou");
/// assert_eq!(pool.len(), 5);
/// assert!(pool.contains('e'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CharacterPool(Vec<char>);

impl CharacterPool {
    /// A pool with no characters.
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Number of characters in the pool.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the pool has no characters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `c` is one of the pool's characters.
    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    /// The pool's characters in order.
    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    /// Draw one character uniformly at random.
    ///
    /// The pool must not be empty; callers check optional pools before drawing and the
    /// mandatory pools are validated once per generation.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        debug_assert!(!self.is_empty(), "cannot draw from an empty pool");

        let idx = rng.random_range(0..self.0.len());
        #[allow(clippy::indexing_slicing, reason = "index is generated within bounds")]
        self.0[idx]
    }
}

impl From<&str> for CharacterPool {
    fn from(chars: &str) -> Self {
        Self(chars.chars().collect())
    }
}

impl From<String> for CharacterPool {
    fn from(chars: String) -> Self {
        Self::from(chars.as_str())
    }
}

impl From<&[char]> for CharacterPool {
    fn from(chars: &[char]) -> Self {
        Self(chars.to_vec())
    }
}

impl From<Vec<char>> for CharacterPool {
    fn from(chars: Vec<char>) -> Self {
        Self(chars)
    }
}

impl FromIterator<char> for CharacterPool {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg_attr(test, mutants::skip)]
impl fmt::Display for CharacterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn draws_only_pool_members() {
        let pool = CharacterPool::from(DEFAULT_SPECIALS);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000_u64 {
            assert!(pool.contains(pool.draw(&mut rng)));
        }
    }

    #[test]
    fn draws_cover_the_whole_pool() {
        let pool = CharacterPool::from(DEFAULT_VOWELS);
        let mut rng = StdRng::seed_from_u64(11);
        let drawn = (0..10_000_u64)
            .map(|_| pool.draw(&mut rng))
            .collect::<std::collections::HashSet<_>>();
        assert_eq!(drawn.len(), pool.len(), "every vowel should eventually be drawn");
    }

    #[test]
    fn single_character_pool_always_draws_it() {
        let pool = CharacterPool::from("x");
        let mut rng = rand::rng();
        assert!((0..100).all(|_| pool.draw(&mut rng) == 'x'));
    }

    #[test]
    fn keeps_unicode_scalars() {
        let pool = CharacterPool::from("äöü");
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.as_slice(), &['ä', 'ö', 'ü']);
        assert_eq!(pool.to_string(), "äöü");
    }

    #[test]
    fn empty_pool() {
        assert!(CharacterPool::empty().is_empty());
        assert!(CharacterPool::from("").is_empty());
        assert_eq!(CharacterPool::default(), CharacterPool::empty());
    }
}
