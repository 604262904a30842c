use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static NON_PHONE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^+\d]").expect("valid pattern"));
static STRICT_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[\d\s()-]*$").expect("valid pattern"));

/// Digits a fully specified number carries, country code included.
pub const SIGNIFICANT_DIGITS: usize = 11;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneFormatError {
    #[error(
        "phone number must start with '+' and may only contain digits, \
         spaces, parentheses and hyphens, got {0:?}"
    )]
    InvalidCharacters(String),
    #[error("phone number must contain exactly {SIGNIFICANT_DIGITS} digits, got {0}")]
    WrongDigitCount(usize),
}

/// A phone number reduced to `+` and digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Strips every character that is not a digit or `+`.
    pub fn normalize(raw: &str) -> String {
        NON_PHONE_CHARS.replace_all(raw, "").into_owned()
    }

    /// Lenient constructor used on lookup paths and account assembly.
    pub fn from_raw(raw: &str) -> Self {
        Self(Self::normalize(raw))
    }

    /// Strict constructor used by phone registration: a leading `+`, only
    /// formatting characters besides the digits, and exactly
    /// [`SIGNIFICANT_DIGITS`] of them.
    pub fn parse_strict(raw: &str) -> Result<Self, PhoneFormatError> {
        let trimmed = raw.trim();
        if !STRICT_SHAPE.is_match(trimmed) {
            return Err(PhoneFormatError::InvalidCharacters(raw.to_string()));
        }
        let phone = Self::from_raw(trimmed);
        let digits = phone.digit_count();
        if digits != SIGNIFICANT_DIGITS {
            return Err(PhoneFormatError::WrongDigitCount(digits));
        }
        Ok(phone)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn digit_count(&self) -> usize {
        self.0.chars().filter(char::is_ascii_digit).count()
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
