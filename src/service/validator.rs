use derive_more::{Display, Error};
use regex::Regex;

lazy_static::lazy_static! {
    // Catches obvious typos only, not full RFC 5322.
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ValidationError {
    #[display(fmt = "이메일 주소가 필요합니다")]
    Missing,
    #[display(fmt = "올바른 이메일 형식이 아닙니다")]
    Malformed,
}

pub fn validate_email(raw: Option<&str>) -> Result<String, ValidationError> {
    let email = match raw {
        Some(email) if !email.is_empty() => email,
        _ => return Err(ValidationError::Missing),
    };

    if !EMAIL_REGEX.is_match(email) {
        return Err(ValidationError::Malformed);
    }

    Ok(email.to_string())
}

#[cfg(test)]
mod test {
    use super::{validate_email, ValidationError};

    #[test]
    fn test_accepts_plain_addresses() {
        for email in ["a@b.com", "user.name@domain.co.kr", "u+tag@sub.domain.io"] {
            assert_eq!(validate_email(Some(email)).unwrap(), email);
        }
    }

    #[test]
    fn test_missing_when_absent_or_empty() {
        assert_eq!(validate_email(None), Err(ValidationError::Missing));
        assert_eq!(validate_email(Some("")), Err(ValidationError::Missing));
    }

    #[test]
    fn test_rejects_address_without_at() {
        assert_eq!(
            validate_email(Some("not-an-email")),
            Err(ValidationError::Malformed)
        );
    }

    #[test]
    fn test_rejects_domain_without_dot() {
        assert_eq!(
            validate_email(Some("user@localhost")),
            Err(ValidationError::Malformed)
        );
    }

    #[test]
    fn test_rejects_whitespace() {
        assert_eq!(
            validate_email(Some("user name@b.com")),
            Err(ValidationError::Malformed)
        );
        assert_eq!(
            validate_email(Some("user@b.com ")),
            Err(ValidationError::Malformed)
        );
    }

    #[test]
    fn test_rejects_double_at() {
        assert_eq!(
            validate_email(Some("a@b@c.com")),
            Err(ValidationError::Malformed)
        );
    }
}
