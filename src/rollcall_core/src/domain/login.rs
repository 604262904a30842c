use std::fmt;

use crate::domain::{email::Email, phone::Phone};

/// The unique, always-lowercase key an account is registered under: the
/// lowercased email or the normalized phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Login(String);

impl Login {
    /// Trims and lowercases a free-form identifier for lookup.
    pub fn normalize(identifier: &str) -> Self {
        Self(identifier.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&Email> for Login {
    fn from(email: &Email) -> Self {
        Self(email.as_str().to_lowercase())
    }
}

impl From<&Phone> for Login {
    fn from(phone: &Phone) -> Self {
        Self(phone.as_str().to_lowercase())
    }
}

impl fmt::Display for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
