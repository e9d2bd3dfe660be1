// src/error.rs
//! Error types for password generation and configuration

use thiserror::Error;

use crate::pool::PoolKind;

/// Reasons a requested password length cannot be satisfied.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
#[allow(missing_docs, reason = "Variants are described by their messages")]
pub enum LengthError {
    #[error("passwords must be at least one character long")]
    Empty,
    #[error("{digits} digits and {specials} special characters do not fit in {length} characters")]
    SegmentsExceedLength {
        /// Total requested length.
        length: usize,
        /// Requested digit count.
        digits: usize,
        /// Requested special character count.
        specials: usize,
    },
}

/// Failure to generate a password.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
#[allow(missing_docs, reason = "Variants are described by their messages")]
pub enum PasswordError {
    #[error("Invalid password length: {0}")]
    InvalidLength(#[from] LengthError),
    #[error("You must provide some {0}")]
    MissingPool(PoolKind),
}

/// Failure to load a [`crate::GeneratorConfig`].
#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[allow(missing_docs, reason = "Variants are described by their messages")]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1:?} ({2})")]
    InvalidEnvVar(&'static str, String, String),
}
