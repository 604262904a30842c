use rand::Rng;

use crate::domain::{
    access_code::AccessCode,
    credential::{PasswordHash, Salt},
    email::Email,
    error::AccountError,
    full_name::FullName,
    import_record::ImportRecord,
    login::Login,
    origin::AccountOrigin,
    password::Password,
    phone::Phone,
};
use crate::ports::services::CodeDeliveryChannel;

/// One registered identity, keyed by its normalized login and holding the
/// salted credential digest plus the frozen human-readable summary.
#[derive(Debug, Clone)]
pub struct Account {
    name: FullName,
    login: Login,
    email: Option<Email>,
    phone: Option<Phone>,
    origin: AccountOrigin,
    salt: Salt,
    password_hash: PasswordHash,
    access_code: Option<AccessCode>,
    summary: String,
}

impl Account {
    /// Email + password registration.
    pub fn with_password(
        first_name: &str,
        last_name: Option<&str>,
        email: &str,
        password: &Password,
        rng: &mut impl Rng,
    ) -> Result<Self, AccountError> {
        let email = Email::parse(email)?;
        let salt = Salt::generate(rng);
        let password_hash = PasswordHash::digest(&salt, password);
        Self::assemble(
            first_name,
            last_name,
            Some(email),
            None,
            AccountOrigin::Password,
            salt,
            password_hash,
        )
    }

    /// Phone registration; issues and delivers an access code immediately.
    pub fn with_phone(
        first_name: &str,
        last_name: Option<&str>,
        raw_phone: &str,
        rng: &mut impl Rng,
        delivery: &impl CodeDeliveryChannel,
    ) -> Result<Self, AccountError> {
        Self::phone_account(
            first_name,
            last_name,
            raw_phone,
            AccountOrigin::Sms,
            rng,
            delivery,
        )
    }

    /// Registration-form entry point: splits the full name and picks the
    /// credential path from whichever contact detail is present.
    pub fn make(
        full_name: &str,
        email: Option<&str>,
        password: Option<&Password>,
        phone: Option<&str>,
        rng: &mut impl Rng,
        delivery: &impl CodeDeliveryChannel,
    ) -> Result<Self, AccountError> {
        let name = FullName::parse(full_name)?;
        let email = email.filter(|value| !value.trim().is_empty());
        let password = password.filter(|value| !value.is_blank());
        let phone = phone.filter(|value| !value.trim().is_empty());

        match (phone, email, password) {
            (Some(phone), _, _) => {
                Self::with_phone(name.first(), name.last(), phone, rng, delivery)
            }
            (None, Some(email), Some(password)) => {
                Self::with_password(name.first(), name.last(), email, password, rng)
            }
            _ => Err(AccountError::ContactMismatch),
        }
    }

    /// Replays one import record. Phone records behave like fresh phone
    /// registrations (a new access code is issued and delivered); email
    /// records trust the recorded salt and digest verbatim.
    pub fn from_import(
        record: &ImportRecord,
        rng: &mut impl Rng,
        delivery: &impl CodeDeliveryChannel,
    ) -> Result<Self, AccountError> {
        let name = FullName::parse(&record.full_name)?;
        match (&record.phone, &record.email, &record.credential) {
            (Some(phone), _, _) => Self::phone_account(
                name.first(),
                name.last(),
                phone,
                AccountOrigin::CsvPhone,
                rng,
                delivery,
            ),
            (None, Some(email), Some(credential)) => {
                let email = Email::parse(email)?;
                Self::assemble(
                    name.first(),
                    name.last(),
                    Some(email),
                    None,
                    AccountOrigin::CsvEmail,
                    Salt::from(credential.salt.as_str()),
                    PasswordHash::from_hex(&credential.hash),
                )
            }
            _ => Err(AccountError::MalformedRecord(record.full_name.clone())),
        }
    }

    fn phone_account(
        first_name: &str,
        last_name: Option<&str>,
        raw_phone: &str,
        origin: AccountOrigin,
        rng: &mut impl Rng,
        delivery: &impl CodeDeliveryChannel,
    ) -> Result<Self, AccountError> {
        let phone = Phone::from_raw(raw_phone);
        let salt = Salt::generate(rng);
        // Placeholder digest, rotated out by the first access code below.
        let password_hash = PasswordHash::digest(&salt, &Password::new(""));
        let mut account = Self::assemble(
            first_name,
            last_name,
            None,
            Some(phone),
            origin,
            salt,
            password_hash,
        )?;
        account.request_access_code(rng, delivery);
        Ok(account)
    }

    /// Shared invariant-checking assembler every construction path funnels
    /// through.
    fn assemble(
        first_name: &str,
        last_name: Option<&str>,
        email: Option<Email>,
        phone: Option<Phone>,
        origin: AccountOrigin,
        salt: Salt,
        password_hash: PasswordHash,
    ) -> Result<Self, AccountError> {
        let name = FullName::new(first_name, last_name.map(str::to_string))?;
        let login = match (&email, &phone) {
            (Some(email), None) => Login::from(email),
            (None, Some(phone)) => Login::from(phone),
            _ => return Err(AccountError::ContactMismatch),
        };
        let summary = render_summary(&name, &login, email.as_ref(), phone.as_ref(), origin);

        Ok(Self {
            name,
            login,
            email,
            phone,
            origin,
            salt,
            password_hash,
            access_code: None,
            summary,
        })
    }

    /// Issues a fresh access code: rotates the stored digest, remembers the
    /// code and, when the account has a phone, hands it to the delivery
    /// channel.
    pub fn request_access_code(
        &mut self,
        rng: &mut impl Rng,
        delivery: &impl CodeDeliveryChannel,
    ) {
        let code = AccessCode::generate(rng);
        self.password_hash = PasswordHash::digest(&self.salt, &Password::new(code.as_str()));
        if let Some(phone) = &self.phone {
            delivery.deliver(phone, &code);
        }
        self.access_code = Some(code);
    }

    pub fn check_password(&self, candidate: &Password) -> bool {
        PasswordHash::digest(&self.salt, candidate) == self.password_hash
    }

    pub fn change_password(&mut self, old: &Password, new: &Password) -> Result<(), AccountError> {
        if !self.check_password(old) {
            return Err(AccountError::CredentialMismatch);
        }
        self.password_hash = PasswordHash::digest(&self.salt, new);
        Ok(())
    }

    pub fn login(&self) -> &Login {
        &self.login
    }

    pub fn name(&self) -> &FullName {
        &self.name
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn phone(&self) -> Option<&Phone> {
        self.phone.as_ref()
    }

    pub fn origin(&self) -> AccountOrigin {
        self.origin
    }

    /// The last issued access code. Exposed for verification; normal
    /// authentication goes through [`Account::check_password`].
    pub fn access_code(&self) -> Option<&AccessCode> {
        self.access_code.as_ref()
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }
}

fn render_summary(
    name: &FullName,
    login: &Login,
    email: Option<&Email>,
    phone: Option<&Phone>,
    origin: AccountOrigin,
) -> String {
    format!(
        "first name: {first}\n\
         last name: {last}\n\
         login: {login}\n\
         full name: {full}\n\
         initials: {initials}\n\
         email: {email}\n\
         phone: {phone}\n\
         meta: {origin}",
        first = name.first(),
        last = name.last().unwrap_or("-"),
        full = name.display_name(),
        initials = name.initials(),
        email = email.map_or("-", Email::as_str),
        phone = phone.map_or("-", Phone::as_str),
    )
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::domain::import_record::ImportedCredential;

    struct NullDelivery;

    impl CodeDeliveryChannel for NullDelivery {
        fn deliver(&self, _phone: &Phone, _code: &AccessCode) {}
    }

    #[derive(Default)]
    struct CapturingDelivery {
        sent: RefCell<Vec<(Phone, AccessCode)>>,
    }

    impl CodeDeliveryChannel for CapturingDelivery {
        fn deliver(&self, phone: &Phone, code: &AccessCode) {
            self.sent.borrow_mut().push((phone.clone(), code.clone()));
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn password_account_accepts_its_password() {
        let account = Account::with_password(
            "John",
            Some("Doe"),
            "John@Mail.ru",
            &Password::new("123456"),
            &mut rng(),
        )
        .unwrap();

        assert!(account.check_password(&Password::new("123456")));
        assert!(!account.check_password(&Password::new("wrongpass")));
        assert_eq!(account.login().as_str(), "john@mail.ru");
        assert_eq!(account.origin(), AccountOrigin::Password);
        assert_eq!(account.access_code(), None);
    }

    #[test]
    fn change_password_rotates_the_digest() {
        let mut account = Account::with_password(
            "John",
            Some("Doe"),
            "John@Mail.ru",
            &Password::new("123456"),
            &mut rng(),
        )
        .unwrap();

        account
            .change_password(&Password::new("123456"), &Password::new("s3cret"))
            .unwrap();
        assert!(account.check_password(&Password::new("s3cret")));
        assert!(!account.check_password(&Password::new("123456")));
    }

    #[test]
    fn change_password_with_wrong_current_fails_and_keeps_state() {
        let mut account = Account::with_password(
            "John",
            Some("Doe"),
            "John@Mail.ru",
            &Password::new("123456"),
            &mut rng(),
        )
        .unwrap();

        let err = account
            .change_password(&Password::new("nope"), &Password::new("s3cret"))
            .unwrap_err();
        assert_eq!(err, AccountError::CredentialMismatch);
        assert!(account.check_password(&Password::new("123456")));
    }

    #[test]
    fn blank_first_name_is_rejected() {
        let err = Account::with_password(
            "  ",
            Some("Doe"),
            "John@Mail.ru",
            &Password::new("123456"),
            &mut rng(),
        )
        .unwrap_err();
        assert_eq!(err, AccountError::BlankFirstName);
    }

    #[test]
    fn phone_account_gets_an_access_code_on_construction() {
        let delivery = CapturingDelivery::default();
        let account = Account::with_phone(
            "Jane",
            Some("Roe"),
            "+7 (999) 123-45-67",
            &mut rng(),
            &delivery,
        )
        .unwrap();

        let code = account.access_code().cloned().unwrap();
        assert!(account.check_password(&Password::new(code.as_str())));
        assert_eq!(account.login().as_str(), "+79991234567");
        assert_eq!(account.origin(), AccountOrigin::Sms);

        let sent = delivery.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0.as_str(), "+79991234567");
        assert_eq!(sent[0].1, code);
    }

    #[test]
    fn reissued_code_invalidates_the_previous_one() {
        let delivery = CapturingDelivery::default();
        let mut generator = rng();
        let mut account = Account::with_phone(
            "Jane",
            Some("Roe"),
            "+7 (999) 123-45-67",
            &mut generator,
            &delivery,
        )
        .unwrap();
        let first = account.access_code().cloned().unwrap();

        account.request_access_code(&mut generator, &delivery);
        let second = account.access_code().cloned().unwrap();

        assert_ne!(first, second);
        assert!(!account.check_password(&Password::new(first.as_str())));
        assert!(account.check_password(&Password::new(second.as_str())));
        assert_eq!(delivery.sent.borrow().len(), 2);
    }

    #[test]
    fn make_dispatches_on_the_contact_detail() {
        let by_phone = Account::make(
            "Jane Roe",
            None,
            None,
            Some("+7 (999) 123-45-67"),
            &mut rng(),
            &NullDelivery,
        )
        .unwrap();
        assert_eq!(by_phone.origin(), AccountOrigin::Sms);

        let by_email = Account::make(
            "John Doe",
            Some("John@Mail.ru"),
            Some(&Password::new("123456")),
            None,
            &mut rng(),
            &NullDelivery,
        )
        .unwrap();
        assert_eq!(by_email.origin(), AccountOrigin::Password);
    }

    #[test]
    fn make_rejects_three_name_tokens() {
        let err = Account::make(
            "John Smith Doe",
            Some("John@Mail.ru"),
            Some(&Password::new("123456")),
            None,
            &mut rng(),
            &NullDelivery,
        )
        .unwrap_err();
        assert!(matches!(err, AccountError::MalformedFullName(_)));
    }

    #[test]
    fn make_without_contact_details_is_rejected() {
        let err = Account::make("John Doe", None, None, None, &mut rng(), &NullDelivery)
            .unwrap_err();
        assert_eq!(err, AccountError::ContactMismatch);

        let err = Account::make(
            "John Doe",
            Some("  "),
            Some(&Password::new("123456")),
            None,
            &mut rng(),
            &NullDelivery,
        )
        .unwrap_err();
        assert_eq!(err, AccountError::ContactMismatch);
    }

    #[test]
    fn summary_is_rendered_once_with_all_public_fields() {
        let account = Account::with_password(
            "John",
            Some("Doe"),
            "John@Mail.ru",
            &Password::new("123456"),
            &mut rng(),
        )
        .unwrap();

        let summary = account.summary();
        assert!(summary.contains("login: john@mail.ru"));
        assert!(summary.contains("full name: John Doe"));
        assert!(summary.contains("initials: J D"));
        assert!(summary.contains("email: John@Mail.ru"));
        assert!(summary.contains("phone: -"));
        assert!(summary.contains("meta: auth=password"));
    }

    #[test]
    fn imported_email_account_trusts_the_recorded_digest() {
        let salt = Salt::from("pepper");
        let hash = PasswordHash::digest(&salt, &Password::new("123456"));
        let record = ImportRecord {
            full_name: "John Doe".to_string(),
            email: Some("JohnDoe@unknown.com".to_string()),
            credential: Some(ImportedCredential {
                salt: "pepper".to_string(),
                hash: hash.as_str().to_string(),
            }),
            phone: None,
        };

        let account = Account::from_import(&record, &mut rng(), &NullDelivery).unwrap();
        assert_eq!(account.origin(), AccountOrigin::CsvEmail);
        assert_eq!(account.access_code(), None);
        assert!(account.check_password(&Password::new("123456")));
        assert!(!account.check_password(&Password::new("654321")));
    }

    #[test]
    fn imported_phone_account_gets_a_fresh_code() {
        let delivery = CapturingDelivery::default();
        let record = ImportRecord {
            full_name: "Jane Roe".to_string(),
            email: None,
            credential: None,
            phone: Some("+7 (999) 123-45-67".to_string()),
        };

        let account = Account::from_import(&record, &mut rng(), &delivery).unwrap();
        assert_eq!(account.origin(), AccountOrigin::CsvPhone);
        assert_eq!(delivery.sent.borrow().len(), 1);
        let code = account.access_code().cloned().unwrap();
        assert!(account.check_password(&Password::new(code.as_str())));
    }

    #[test]
    fn import_without_credentials_is_rejected() {
        let record = ImportRecord {
            full_name: "John Doe".to_string(),
            email: Some("JohnDoe@unknown.com".to_string()),
            credential: None,
            phone: None,
        };
        assert!(matches!(
            Account::from_import(&record, &mut rng(), &NullDelivery),
            Err(AccountError::MalformedRecord(_))
        ));
    }

    mod properties {
        use quickcheck::TestResult;
        use quickcheck_macros::quickcheck;

        use super::*;

        #[quickcheck]
        fn fresh_accounts_accept_exactly_their_password(password: String) -> TestResult {
            let account = match Account::with_password(
                "John",
                Some("Doe"),
                "John@Mail.ru",
                &Password::new(password.clone()),
                &mut rng(),
            ) {
                Ok(account) => account,
                Err(_) => return TestResult::discard(),
            };

            let accepts = account.check_password(&Password::new(password.clone()));
            let rejects = !account.check_password(&Password::new(format!("{password}x")));
            TestResult::from_bool(accepts && rejects)
        }
    }
}
