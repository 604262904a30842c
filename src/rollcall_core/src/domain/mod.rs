pub mod access_code;
pub mod account;
pub mod credential;
pub mod email;
pub mod error;
pub mod full_name;
pub mod import_record;
pub mod login;
pub mod origin;
pub mod password;
pub mod phone;
