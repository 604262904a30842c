use crate::domain::error::AccountError;

/// One `;`-delimited line of a bulk import file:
/// `fullName;email;salt:hash;phone`. Fields are trimmed, blanks read as
/// absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRecord {
    pub full_name: String,
    pub email: Option<String>,
    pub credential: Option<ImportedCredential>,
    pub phone: Option<String>,
}

/// The precomputed `salt:hash` pair recorded for an email import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedCredential {
    pub salt: String,
    pub hash: String,
}

impl ImportRecord {
    pub fn parse(line: &str) -> Result<Self, AccountError> {
        let mut fields = line.split(';').map(str::trim);

        let full_name = fields
            .next()
            .filter(|field| !field.is_empty())
            .ok_or_else(|| AccountError::MalformedRecord(line.to_string()))?
            .to_string();
        let email = fields
            .next()
            .filter(|field| !field.is_empty())
            .map(str::to_string);
        let credential = match fields.next().filter(|field| !field.is_empty()) {
            Some(field) => Some(ImportedCredential::parse(field, line)?),
            None => None,
        };
        let phone = fields
            .next()
            .filter(|field| !field.is_empty())
            .map(str::to_string);

        Ok(Self {
            full_name,
            email,
            credential,
            phone,
        })
    }
}

impl ImportedCredential {
    fn parse(field: &str, line: &str) -> Result<Self, AccountError> {
        let (salt, hash) = field
            .split_once(':')
            .ok_or_else(|| AccountError::MalformedRecord(line.to_string()))?;
        Ok(Self {
            salt: salt.to_string(),
            hash: hash.to_string(),
        })
    }
}
