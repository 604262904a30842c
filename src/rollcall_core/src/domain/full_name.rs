use crate::domain::error::AccountError;

/// A person's name split into the parts the registration form accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName {
    first: String,
    last: Option<String>,
}

impl FullName {
    pub fn new(first: impl Into<String>, last: Option<String>) -> Result<Self, AccountError> {
        let first = first.into();
        if first.trim().is_empty() {
            return Err(AccountError::BlankFirstName);
        }
        Ok(Self { first, last })
    }

    /// Splits a free-form full name on whitespace. One token is a lone first
    /// name, two are first + last; anything else is rejected.
    pub fn parse(full_name: &str) -> Result<Self, AccountError> {
        let tokens: Vec<&str> = full_name.split_whitespace().collect();
        match tokens.as_slice() {
            [first] => Self::new(*first, None),
            [first, last] => Self::new(*first, Some((*last).to_string())),
            _ => Err(AccountError::MalformedFullName(full_name.to_string())),
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }

    /// Space-joined name with the leading letter uppercased, as the summary
    /// shows it.
    pub fn display_name(&self) -> String {
        let joined = match &self.last {
            Some(last) => format!("{} {}", self.first, last),
            None => self.first.clone(),
        };
        let mut chars = joined.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => joined,
        }
    }

    /// Uppercased first letters of each name part, space-separated.
    pub fn initials(&self) -> String {
        [Some(self.first.as_str()), self.last.as_deref()]
            .into_iter()
            .flatten()
            .filter_map(|part| part.chars().next())
            .map(|initial| initial.to_uppercase().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_first_and_last_name() {
        let name = FullName::parse("John Doe").unwrap();
        assert_eq!(name.first(), "John");
        assert_eq!(name.last(), Some("Doe"));
    }

    #[test]
    fn parses_single_name() {
        let name = FullName::parse("Madonna").unwrap();
        assert_eq!(name.first(), "Madonna");
        assert_eq!(name.last(), None);
    }

    #[test]
    fn collapses_extra_whitespace() {
        let name = FullName::parse("  John   Doe  ").unwrap();
        assert_eq!(name.first(), "John");
        assert_eq!(name.last(), Some("Doe"));
    }

    #[test]
    fn rejects_three_tokens() {
        let err = FullName::parse("John Smith Doe").unwrap_err();
        assert!(matches!(err, AccountError::MalformedFullName(_)));
    }

    #[test]
    fn rejects_blank_name() {
        assert!(matches!(
            FullName::parse("   "),
            Err(AccountError::MalformedFullName(_))
        ));
        assert_eq!(
            FullName::new("  ", None).unwrap_err(),
            AccountError::BlankFirstName
        );
    }

    #[test]
    fn renders_display_name_and_initials() {
        let name = FullName::parse("john doe").unwrap();
        assert_eq!(name.display_name(), "John doe");
        assert_eq!(name.initials(), "J D");

        let single = FullName::parse("ada").unwrap();
        assert_eq!(single.display_name(), "Ada");
        assert_eq!(single.initials(), "A");
    }
}
