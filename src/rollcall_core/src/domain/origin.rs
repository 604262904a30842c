use std::fmt;

/// How an account entered the registry. Shown as the summary's `meta` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountOrigin {
    /// Self-registered with an email and password.
    Password,
    /// Self-registered with a phone number, authenticates via access codes.
    Sms,
    /// Bulk-imported with a precomputed salt and digest.
    CsvEmail,
    /// Bulk-imported with a phone number.
    CsvPhone,
}

impl AccountOrigin {
    pub fn is_import(self) -> bool {
        matches!(self, Self::CsvEmail | Self::CsvPhone)
    }
}

impl fmt::Display for AccountOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Password => "auth=password",
            Self::Sms => "auth=sms",
            Self::CsvEmail | Self::CsvPhone => "src=csv",
        };
        f.write_str(tag)
    }
}
