use md5::{Digest, Md5};
use rand::Rng;

use crate::domain::password::Password;

/// Bytes of random material a freshly generated salt carries.
pub const SALT_LEN: usize = 16;

/// Per-account random material mixed into the credential digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Salt(Vec<u8>);

impl Salt {
    pub fn generate(rng: &mut impl Rng) -> Self {
        let mut bytes = [0u8; SALT_LEN];
        rng.fill_bytes(&mut bytes);
        Self(bytes.to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<&str> for Salt {
    /// Imported salts arrive as text and are used verbatim.
    fn from(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }
}

/// Lowercase 32-hex-char rendering of `md5(salt ++ secret)`.
///
/// MD5 keeps the digest fixed-width and cheap to compute; it is not meant
/// to resist offline attacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn digest(salt: &Salt, secret: &Password) -> Self {
        let mut hasher = Md5::new();
        hasher.update(salt.as_bytes());
        hasher.update(secret.expose().as_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    /// Trusts an externally computed digest verbatim (import path).
    pub fn from_hex(digest: &str) -> Self {
        Self(digest.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
