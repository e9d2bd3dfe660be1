// src/password.rs
//! Generated password type

use std::fmt;

/// A generated password.
///
/// # Example
/// ```
/// use human_friendly_passwords::Generator;
///
/// let password = Generator::default().generate(12, 2, 1)?;
/// assert_eq!(password.as_str().chars().count(), 12);
/// # Ok::<(), human_friendly_passwords::PasswordError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Password(pub(crate) String);

impl Password {
    /// Get string slice representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the password, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::ops::Deref for Password {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.0
    }
}

impl From<Password> for Box<str> {
    fn from(password: Password) -> Self {
        password.0.into_boxed_str()
    }
}

#[cfg_attr(test, mutants::skip)]
impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(feature = "serde")]
/// Passwords serialize as plain strings, and any string deserializes into one.
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Password;

    impl Serialize for Password {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.as_str())
        }
    }

    impl<'de> Deserialize<'de> for Password {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            String::deserialize(deserializer).map(Password)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_preserve_content() {
        let password = Password("bacIt42!".to_string());
        assert_eq!(password.as_str(), "bacIt42!");
        assert_eq!(&*password, "bacIt42!");
        assert_eq!(password.to_string(), "bacIt42!");
        assert_eq!(Box::<str>::from(password.clone()).as_ref(), "bacIt42!");
        assert_eq!(String::from(password), "bacIt42!");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let password = Password("kefo9@".to_string());
        let serialized = serde_json::to_string(&password).expect("Failed to serialize Password");
        assert_eq!(serialized, r#""kefo9@""#);
        let deserialized: Password =
            serde_json::from_str(&serialized).expect("Failed to deserialize Password");
        assert_eq!(password, deserialized);
    }
}
