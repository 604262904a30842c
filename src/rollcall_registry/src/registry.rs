use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use rollcall_adapters::{HashMapAccountStore, TracingCodeDelivery};
use rollcall_core::{
    Account, AccountError, AccountStore, AccountStoreError, CodeDeliveryChannel, ImportRecord,
    Login, Password, Phone, PhoneFormatError,
};

/// Error types for registry operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error(transparent)]
    Account(#[from] AccountError),
    #[error(transparent)]
    PhoneFormat(#[from] PhoneFormatError),
    #[error(transparent)]
    Store(#[from] AccountStoreError),
}

/// The application entry point: an in-memory account registry that owns
/// input normalization, uniqueness enforcement, and dispatch between the
/// password and access-code credential paths.
///
/// Single-threaded; a concurrent host must wrap the whole registry in its
/// own mutual exclusion as a unit.
pub struct AccountRegistry<S, R, C>
where
    S: AccountStore,
    R: Rng,
    C: CodeDeliveryChannel,
{
    store: S,
    rng: R,
    delivery: C,
}

/// Registry wired with the default in-memory adapters.
pub type InMemoryRegistry = AccountRegistry<HashMapAccountStore, StdRng, TracingCodeDelivery>;

impl InMemoryRegistry {
    pub fn in_memory() -> Self {
        Self::new(
            HashMapAccountStore::new(),
            StdRng::from_os_rng(),
            TracingCodeDelivery::new(),
        )
    }
}

impl<S, R, C> AccountRegistry<S, R, C>
where
    S: AccountStore,
    R: Rng,
    C: CodeDeliveryChannel,
{
    pub fn new(store: S, rng: R, delivery: C) -> Self {
        Self {
            store,
            rng,
            delivery,
        }
    }

    /// Registers a new account by email and password.
    ///
    /// # Returns
    /// The stored account, or a `RegistryError` when the input is malformed
    /// or the derived login is already taken.
    #[tracing::instrument(name = "AccountRegistry::register", skip(self, password))]
    pub fn register(
        &mut self,
        full_name: &str,
        email: &str,
        password: &str,
    ) -> Result<Account, RegistryError> {
        let password = Password::new(password);
        let account = Account::make(
            full_name,
            Some(email),
            Some(&password),
            None,
            &mut self.rng,
            &self.delivery,
        )?;
        self.insert(account)
    }

    /// Registers a new account by phone number; the first access code is
    /// issued and delivered as part of construction.
    ///
    /// # Returns
    /// The stored account, or a `RegistryError` when the phone fails the
    /// structural check or the derived login is already taken.
    #[tracing::instrument(name = "AccountRegistry::register_by_phone", skip(self))]
    pub fn register_by_phone(
        &mut self,
        full_name: &str,
        raw_phone: &str,
    ) -> Result<Account, RegistryError> {
        Phone::parse_strict(raw_phone)?;
        let account = Account::make(
            full_name,
            None,
            None,
            Some(raw_phone),
            &mut self.rng,
            &self.delivery,
        )?;
        self.insert(account)
    }

    /// Authenticates an identifier/secret pair. Identifiers starting with
    /// `+` are treated as phone numbers, everything else as an email login;
    /// the secret is whichever credential the account currently holds (a
    /// password or the last issued access code).
    ///
    /// # Returns
    /// The account summary on success, `None` when the login is unknown or
    /// the secret is wrong (a negative result, not an error).
    #[tracing::instrument(name = "AccountRegistry::login", skip(self, secret))]
    pub fn login(&self, identifier: &str, secret: &str) -> Option<String> {
        let account = self.store.get(&Self::lookup_key(identifier))?;
        account
            .check_password(&Password::new(secret))
            .then(|| account.summary().to_string())
    }

    /// Reissues an access code for the account registered under the given
    /// phone identifier. Unknown identifiers are ignored.
    #[tracing::instrument(name = "AccountRegistry::request_access_code", skip(self))]
    pub fn request_access_code(&mut self, identifier: &str) {
        let login = Login::from(&Phone::from_raw(identifier));
        if let Some(account) = self.store.get_mut(&login) {
            account.request_access_code(&mut self.rng, &self.delivery);
        }
    }

    /// Replays `;`-delimited records into the registry.
    ///
    /// The first bad record (parse failure or duplicate login) aborts the
    /// batch; accounts inserted earlier in the same call stay committed.
    ///
    /// # Returns
    /// The imported accounts in input order.
    #[tracing::instrument(name = "AccountRegistry::import_accounts", skip_all)]
    pub fn import_accounts<I, L>(&mut self, records: I) -> Result<Vec<Account>, RegistryError>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let mut imported = Vec::new();
        for line in records {
            let record = ImportRecord::parse(line.as_ref())?;
            let account = Account::from_import(&record, &mut self.rng, &self.delivery)?;
            imported.push(self.insert(account)?);
        }
        Ok(imported)
    }

    /// Empties the registry. Intended for test setup and teardown, not the
    /// normal operational API.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn insert(&mut self, account: Account) -> Result<Account, RegistryError> {
        if let Err(err) = self.store.insert(account.clone()) {
            tracing::warn!(%err, "registration rejected");
            return Err(err.into());
        }
        Ok(account)
    }

    fn lookup_key(identifier: &str) -> Login {
        let identifier = identifier.trim();
        if identifier.starts_with('+') {
            Login::from(&Phone::from_raw(identifier))
        } else {
            Login::normalize(identifier)
        }
    }
}
