use secrecy::{ExposeSecret, Secret};

/// A plaintext secret on its way into the credential digest: a chosen
/// password or a one-time access code. Wrapped so it never shows up in
/// logs or debug output.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(Secret::new(raw.into()))
    }

    pub fn is_blank(&self) -> bool {
        self.0.expose_secret().trim().is_empty()
    }

    pub(crate) fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<&str> for Password {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Password {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}
