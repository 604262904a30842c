pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    access_code::AccessCode,
    account::Account,
    credential::{PasswordHash, Salt},
    email::Email,
    error::AccountError,
    full_name::FullName,
    import_record::{ImportRecord, ImportedCredential},
    login::Login,
    origin::AccountOrigin,
    password::Password,
    phone::{Phone, PhoneFormatError},
};

pub use ports::{
    repositories::{AccountStore, AccountStoreError},
    services::CodeDeliveryChannel,
};
