// src/config.rs
//! Generator configuration, typically pulled from structured environment variables.

use std::{collections::HashMap, num::NonZeroU32, str::FromStr};

use crate::{
    Alphabet, Capitalization, Generator,
    error::ConfigError,
    pool::{DEFAULT_CONSONANTS, DEFAULT_DIGITS, DEFAULT_SPECIALS, DEFAULT_VOWELS},
};

/// Environment variable holding the consonant pool.
pub const CONSONANTS_VAR: &str = "PASSWORD__CONSONANTS";
/// Environment variable holding the vowel pool.
pub const VOWELS_VAR: &str = "PASSWORD__VOWELS";
/// Environment variable holding the digit pool.
pub const DIGITS_VAR: &str = "PASSWORD__DIGITS";
/// Environment variable holding the special character pool.
pub const SPECIALS_VAR: &str = "PASSWORD__SPECIALS";
/// Environment variable enabling capitalization, `true` or `false`.
pub const CAPITALIZE_VAR: &str = "PASSWORD__CAPITALIZE";
/// Environment variable holding the capitalization odds, a positive integer.
pub const CAPITALIZE_ODDS_VAR: &str = "PASSWORD__CAPITALIZE_ODDS";

/// Odds used when capitalization is enabled without an explicit value.
const DEFAULT_CAPITALIZE_ODDS: NonZeroU32 = NonZeroU32::MIN.saturating_add(1);

/// Plain-data description of a [`Generator`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    /// Letters for even word positions.
    pub consonants: String,
    /// Letters for odd word positions.
    pub vowels: String,
    /// Characters for the digit segment, empty to skip it.
    pub digits: String,
    /// Characters for the special segment, empty to skip it.
    pub specials: String,
    /// Whether letters are randomly upper-cased.
    pub capitalize: bool,
    /// One in how many letters is upper-cased when `capitalize` is set.
    pub capitalize_odds: NonZeroU32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            consonants: DEFAULT_CONSONANTS.to_string(),
            vowels: DEFAULT_VOWELS.to_string(),
            digits: DEFAULT_DIGITS.to_string(),
            specials: DEFAULT_SPECIALS.to_string(),
            capitalize: false,
            capitalize_odds: DEFAULT_CAPITALIZE_ODDS,
        }
    }
}

impl GeneratorConfig {
    /// Constructs a `GeneratorConfig` by loading the following variables from a map of
    /// environment variables:
    ///
    /// - `PASSWORD__CONSONANTS`
    /// - `PASSWORD__VOWELS`
    /// - `PASSWORD__DIGITS`
    /// - `PASSWORD__SPECIALS`
    /// - `PASSWORD__CAPITALIZE`
    /// - `PASSWORD__CAPITALIZE_ODDS`
    ///
    /// Unset variables keep their default, as do blank capitalization values. A pool variable
    /// set to an empty string yields an empty pool.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidEnvVar`] if the capitalization flag or odds do not parse.
    ///
    /// # Examples
    /// ```rust
    /// use std::collections::HashMap;
    /// use human_friendly_passwords::GeneratorConfig;
    ///
    /// let mut env = HashMap::new();
    /// env.insert("PASSWORD__SPECIALS".to_string(), String::new());
    /// env.insert("PASSWORD__CAPITALIZE".to_string(), "true".to_string());
    /// env.insert("PASSWORD__CAPITALIZE_ODDS".to_string(), "3".to_string());
    ///
    /// let config = GeneratorConfig::from_env(&env).expect("Failed to load configuration");
    /// assert!(config.specials.is_empty());
    /// assert!(config.capitalize);
    /// assert_eq!(config.capitalize_odds.get(), 3);
    /// ```
    pub fn from_env(env: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            consonants: env
                .get(CONSONANTS_VAR)
                .cloned()
                .unwrap_or(defaults.consonants),
            vowels: env.get(VOWELS_VAR).cloned().unwrap_or(defaults.vowels),
            digits: env.get(DIGITS_VAR).cloned().unwrap_or(defaults.digits),
            specials: env.get(SPECIALS_VAR).cloned().unwrap_or(defaults.specials),
            capitalize: parse_var(env, CAPITALIZE_VAR)?.unwrap_or(defaults.capitalize),
            capitalize_odds: parse_var(env, CAPITALIZE_ODDS_VAR)?
                .unwrap_or(defaults.capitalize_odds),
        })
    }

    /// Build the [`Alphabet`] this configuration describes.
    pub fn alphabet(&self) -> Alphabet {
        Alphabet::new(
            self.consonants.as_str(),
            self.vowels.as_str(),
            self.digits.as_str(),
            self.specials.as_str(),
            Capitalization::new(self.capitalize, self.capitalize_odds),
        )
    }

    /// Build a [`Generator`] seeded from the operating system.
    pub fn generator(&self) -> Generator {
        Generator::new(self.alphabet())
    }
}

/// Parse `name` from `env` if it is set to a value that is not blank.
fn parse_var<T>(env: &HashMap<String, String>, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env.get(name)
        .map(|raw| (raw, raw.trim()))
        .filter(|(_, value)| !value.is_empty())
        .map(|(raw, value)| {
            value
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidEnvVar(name, raw.clone(), e.to_string()))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use rstest::rstest;

    use super::*;
    use crate::{PasswordError, pool::PoolKind};

    fn env(vars: &[(&str, &str)]) -> HashMap<String, String> {
        vars.iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_env_gives_defaults() {
        let config = GeneratorConfig::from_env(&HashMap::new()).expect("defaults to load");
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.alphabet(), Alphabet::default());
        assert_eq!(config.capitalize_odds.get(), 2);
    }

    #[test]
    fn reads_every_variable() {
        let config = GeneratorConfig::from_env(&env(&[
            (CONSONANTS_VAR, "bdg"),
            (VOWELS_VAR, "ae"),
            (DIGITS_VAR, "01"),
            (SPECIALS_VAR, "#"),
            (CAPITALIZE_VAR, "true"),
            (CAPITALIZE_ODDS_VAR, "4"),
        ]))
        .expect("config to load");

        let alphabet = config.alphabet();
        assert_eq!(alphabet.consonants().to_string(), "bdg");
        assert_eq!(alphabet.vowels().to_string(), "ae");
        assert_eq!(alphabet.digits().to_string(), "01");
        assert_eq!(alphabet.specials().to_string(), "#");
        assert_eq!(
            alphabet.capitalization(),
            Capitalization::Odds(NonZeroU32::new(4).expect("non-zero"))
        );
    }

    #[test]
    fn empty_pool_variables_disable_segments() {
        let config = GeneratorConfig::from_env(&env(&[(DIGITS_VAR, ""), (SPECIALS_VAR, "")]))
            .expect("config to load");
        let password = config.generator().generate(8, 2, 2).expect("valid request");
        assert_eq!(password.chars().count(), 4);
    }

    #[test]
    fn empty_vowels_surface_at_generation() {
        let config = GeneratorConfig::from_env(&env(&[(VOWELS_VAR, "")])).expect("config to load");
        let err = config
            .generator()
            .generate(8, 0, 0)
            .expect_err("missing vowels should fail");
        assert_eq!(err, PasswordError::MissingPool(PoolKind::Vowels));
    }

    #[rstest]
    #[case::not_a_bool(CAPITALIZE_VAR, "yes")]
    #[case::zero_odds(CAPITALIZE_ODDS_VAR, "0")]
    #[case::negative_odds(CAPITALIZE_ODDS_VAR, "-3")]
    fn rejects_unparsable_values(#[case] name: &'static str, #[case] value: &str) {
        let err = GeneratorConfig::from_env(&env(&[(name, value)]))
            .expect_err("invalid value should fail");
        assert!(matches!(err, ConfigError::InvalidEnvVar(n, ref v, _) if n == name && v == value));
    }

    #[rstest]
    #[case::empty("")]
    #[case::space(" ")]
    #[case::whitespace("\t \n")]
    fn blank_values_keep_defaults(#[case] value: &str) {
        let config = GeneratorConfig::from_env(&env(&[
            (CAPITALIZE_VAR, value),
            (CAPITALIZE_ODDS_VAR, value),
        ]))
        .expect("blank values should fall back to defaults");
        assert!(!config.capitalize);
        assert_eq!(config.capitalize_odds.get(), 2);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let config = GeneratorConfig::from_env(&env(&[(CAPITALIZE_ODDS_VAR, " 5 ")]))
            .expect("padded value to parse");
        assert_eq!(config.capitalize_odds.get(), 5);
    }

    #[test]
    fn error_message_names_the_variable() {
        let err = GeneratorConfig::from_env(&env(&[(CAPITALIZE_VAR, "yes")]))
            .expect_err("invalid value should fail");
        assert_snapshot!(err, @r#"Invalid value for PASSWORD__CAPITALIZE: "yes" (provided string was not `true` or `false`)"#);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let config = GeneratorConfig {
            capitalize: true,
            ..GeneratorConfig::default()
        };
        let serialized = serde_json::to_string(&config).expect("Failed to serialize config");
        let deserialized: GeneratorConfig =
            serde_json::from_str(&serialized).expect("Failed to deserialize config");
        assert_eq!(config, deserialized);

        let partial: GeneratorConfig =
            serde_json::from_str(r#"{"specials": ""}"#).expect("Failed to deserialize config");
        assert!(partial.specials.is_empty());
        assert_eq!(partial.vowels, DEFAULT_VOWELS);
    }
}
