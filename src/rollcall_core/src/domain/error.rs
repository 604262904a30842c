use thiserror::Error;

/// Failures raised while assembling or mutating an account.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("first name must not be blank")]
    BlankFirstName,
    #[error("full name must contain a first name and optionally a last name, got {0:?}")]
    MalformedFullName(String),
    #[error("exactly one of email or phone must be provided")]
    ContactMismatch,
    #[error("email address {0:?} is not valid")]
    InvalidEmail(String),
    #[error("malformed import record {0:?}")]
    MalformedRecord(String),
    #[error("the entered password does not match the current one")]
    CredentialMismatch,
}
