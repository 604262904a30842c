use std::collections::HashMap;

use rollcall_core::{Account, AccountStore, AccountStoreError, Login};

/// In-memory [`AccountStore`] keyed by normalized login.
#[derive(Debug, Default)]
pub struct HashMapAccountStore {
    accounts: HashMap<Login, Account>,
}

impl HashMapAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountStore for HashMapAccountStore {
    fn insert(&mut self, account: Account) -> Result<(), AccountStoreError> {
        if self.accounts.contains_key(account.login()) {
            return Err(AccountStoreError::DuplicateLogin(account.login().clone()));
        }
        self.accounts.insert(account.login().clone(), account);
        Ok(())
    }

    fn get(&self, login: &Login) -> Option<&Account> {
        self.accounts.get(login)
    }

    fn get_mut(&mut self, login: &Login) -> Option<&mut Account> {
        self.accounts.get_mut(login)
    }

    fn len(&self) -> usize {
        self.accounts.len()
    }

    fn clear(&mut self) {
        self.accounts.clear();
    }
}
