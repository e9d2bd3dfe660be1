// src/distribution.rs
//! Random generation of pronounceable passwords

use rand::{Rng, distr::Distribution};

use crate::{Alphabet, Password, SegmentLayout, pool::CharacterPool};

/// Distribution over passwords of one validated layout.
///
/// Created by [`Alphabet::distribution`], which has already checked the length and the
/// mandatory pools, so sampling cannot fail. Each sample is assembled in a buffer local to the
/// call.
///
/// Words alternate pools by position: consonants at even indices, vowels at odd ones, counted
/// from the start of each word. Segments are emitted as first word, digits, second word,
/// specials. The digit and special counts are always taken out of the word budget, so an empty
/// optional pool yields a password shorter than requested.
///
/// # Example
/// ```
/// use human_friendly_passwords::{Alphabet, PasswordRequest};
/// use rand::distr::Distribution;
///
/// let alphabet = Alphabet::default();
/// let dist = alphabet.distribution(PasswordRequest::new(10, 2, 2))?;
/// let password = dist.sample(&mut rand::rng());
/// assert_eq!(password.chars().count(), 10);
/// # Ok::<(), human_friendly_passwords::PasswordError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PasswordDist<'a> {
    /// Pools and capitalization to draw from.
    alphabet: &'a Alphabet,
    /// Segment lengths for every sample.
    layout: SegmentLayout,
}

impl<'a> PasswordDist<'a> {
    /// Pair an already validated alphabet with a layout.
    pub(crate) const fn new(alphabet: &'a Alphabet, layout: SegmentLayout) -> Self {
        Self { alphabet, layout }
    }

    /// The segment lengths each sample follows.
    pub const fn layout(&self) -> SegmentLayout {
        self.layout
    }

    /// Append `len` alternating consonants and vowels, each passed through the capitalization
    /// policy.
    fn write_word<R: Rng + ?Sized>(&self, out: &mut String, len: usize, rng: &mut R) {
        let capitalization = self.alphabet.capitalization();
        for i in 0..len {
            let pool = if i % 2 == 0 {
                self.alphabet.consonants()
            } else {
                self.alphabet.vowels()
            };
            let letter = pool.draw(rng);
            out.push(capitalization.apply(letter, rng));
        }
    }

    /// Append `count` characters from `pool` unchanged, or nothing if the pool is empty.
    fn write_segment<R: Rng + ?Sized>(
        out: &mut String,
        pool: &CharacterPool,
        count: usize,
        rng: &mut R,
    ) {
        if pool.is_empty() {
            return;
        }
        out.extend((0..count).map(|_| pool.draw(rng)));
    }
}

impl Distribution<Password> for PasswordDist<'_> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Password {
        let SegmentLayout {
            first_word,
            digits,
            second_word,
            specials,
        } = self.layout;

        let mut password = String::with_capacity(self.layout.total());

        self.write_word(&mut password, first_word, rng);
        Self::write_segment(&mut password, self.alphabet.digits(), digits, rng);
        self.write_word(&mut password, second_word, rng);
        Self::write_segment(&mut password, self.alphabet.specials(), specials, rng);

        Password(password)
    }
}
