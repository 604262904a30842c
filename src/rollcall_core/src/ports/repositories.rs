use thiserror::Error;

use crate::domain::{account::Account, login::Login};

// AccountStore port trait and errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountStoreError {
    #[error("an account with login {0} is already registered")]
    DuplicateLogin(Login),
}

/// Keyed storage for registered accounts. Synchronous: the registry is
/// single-threaded, and a concurrent host must wrap it in its own mutual
/// exclusion as a unit.
pub trait AccountStore {
    /// Stores a new account, rejecting login collisions.
    fn insert(&mut self, account: Account) -> Result<(), AccountStoreError>;
    fn get(&self, login: &Login) -> Option<&Account>;
    fn get_mut(&mut self, login: &Login) -> Option<&mut Account>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn clear(&mut self);
}
