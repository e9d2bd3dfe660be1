// src/request.rs
//! Requested password shape and how its length budget is split into segments

use crate::error::LengthError;

/// Total length plus the digit and special character counts carved out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PasswordRequest {
    /// Total number of characters requested.
    pub length: usize,
    /// How many of those characters are digits.
    pub digits: usize,
    /// How many of those characters are special characters.
    pub specials: usize,
}

impl PasswordRequest {
    /// Create a request for `length` characters, `digits` and `specials` of which come from the
    /// digit and special pools.
    pub const fn new(length: usize, digits: usize, specials: usize) -> Self {
        Self {
            length,
            digits,
            specials,
        }
    }

    /// Reject a zero total length.
    pub const fn ensure_non_empty(&self) -> Result<(), LengthError> {
        if self.length == 0 {
            return Err(LengthError::Empty);
        }
        Ok(())
    }

    /// Split the request into segment lengths.
    ///
    /// The word budget is whatever remains after digits and specials. The first word takes the
    /// larger half when the budget is odd.
    ///
    /// # Errors
    ///
    /// [`LengthError::Empty`] for a zero length, [`LengthError::SegmentsExceedLength`] when the
    /// digits and specials alone need more than `length` characters.
    pub fn layout(&self) -> Result<SegmentLayout, LengthError> {
        self.ensure_non_empty()?;

        let word_budget = self
            .digits
            .checked_add(self.specials)
            .and_then(|carved| self.length.checked_sub(carved))
            .ok_or(LengthError::SegmentsExceedLength {
                length: self.length,
                digits: self.digits,
                specials: self.specials,
            })?;

        Ok(SegmentLayout {
            first_word: word_budget.div_ceil(2),
            digits: self.digits,
            second_word: word_budget / 2,
            specials: self.specials,
        })
    }
}

/// Segment lengths in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentLayout {
    /// Leading consonant/vowel word.
    pub first_word: usize,
    /// Digit segment, skipped when the digit pool is empty.
    pub digits: usize,
    /// Trailing consonant/vowel word.
    pub second_word: usize,
    /// Special character segment, skipped when the special pool is empty.
    pub specials: usize,
}

impl SegmentLayout {
    /// Sum of all segment lengths, i.e. the requested length.
    #[allow(
        clippy::arithmetic_side_effects,
        reason = "Segments are split from a usize length and cannot overflow."
    )]
    pub const fn total(&self) -> usize {
        self.first_word + self.digits + self.second_word + self.specials
    }
}
