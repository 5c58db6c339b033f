/*
 * Responsibility
 * - Field-level validation of a Principal record at data-entry boundaries
 * - Returns the first violated rule only (no aggregation), no side effects
 *
 * Rule order
 * - name → email → phone (if present) → region → password → (new records only) password length
 */
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::Principal;
use super::region::{Region, is_valid_region};
use crate::services::phone;

pub const PASSWORD_MIN_CHARS: usize = 8;
pub const PASSWORD_MAX_CHARS: usize = 100;

const EMAIL_MIN_LEN: usize = 3;
const EMAIL_MAX_LEN: usize = 254;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name may not be empty")]
    NameEmpty,
    #[error("email may not be empty")]
    EmailEmpty,
    #[error("invalid email")]
    EmailInvalid,
    #[error("invalid phone number")]
    PhoneInvalid,
    #[error("invalid region, please pick one of: {}", region_list())]
    RegionInvalid,
    #[error("password may not be empty")]
    PasswordEmpty,
    #[error("password must be at least {} characters", PASSWORD_MIN_CHARS)]
    PasswordTooShort,
    #[error("password exceeds {} characters", PASSWORD_MAX_CHARS)]
    PasswordTooLong,
}

fn region_list() -> String {
    Region::ALL
        .iter()
        .map(|r| r.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

pub(super) fn validate(principal: &Principal, is_new: bool) -> Result<(), ValidationError> {
    if principal.name.is_empty() {
        return Err(ValidationError::NameEmpty);
    }
    if principal.email.is_empty() {
        return Err(ValidationError::EmailEmpty);
    }
    if !is_valid_email(&principal.email) {
        return Err(ValidationError::EmailInvalid);
    }
    if !principal.phone.is_empty() && phone::calling_region(&principal.phone).is_none() {
        return Err(ValidationError::PhoneInvalid);
    }
    if !is_valid_region(&principal.region) {
        return Err(ValidationError::RegionInvalid);
    }
    if principal.password.is_empty() {
        return Err(ValidationError::PasswordEmpty);
    }
    if is_new {
        validate_new_password(&principal.password)?;
    }
    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    (EMAIL_MIN_LEN..=EMAIL_MAX_LEN).contains(&email.len()) && EMAIL_RE.is_match(email)
}

fn validate_new_password(password: &str) -> Result<(), ValidationError> {
    let chars = password.chars().count();
    if chars < PASSWORD_MIN_CHARS {
        return Err(ValidationError::PasswordTooShort);
    }
    if chars > PASSWORD_MAX_CHARS {
        return Err(ValidationError::PasswordTooLong);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Principal {
        Principal {
            name: "A".into(),
            email: "a@b.com".into(),
            region: "Europe".into(),
            password: "longenough1".into(),
            ..Principal::default()
        }
    }

    #[test]
    fn accepts_complete_record() {
        assert_eq!(valid().validate(true), Ok(()));
        assert_eq!(valid().validate(false), Ok(()));
    }

    #[test]
    fn empty_name_is_reported_first() {
        let p = Principal {
            name: String::new(),
            email: String::new(),
            region: "Mars".into(),
            ..valid()
        };
        assert_eq!(p.validate(true), Err(ValidationError::NameEmpty));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let p = Principal {
            email: "bad-email".into(),
            ..valid()
        };
        assert_eq!(p.validate(true), Err(ValidationError::EmailInvalid));
        assert_eq!(
            Principal {
                email: String::new(),
                ..valid()
            }
            .validate(true),
            Err(ValidationError::EmailEmpty)
        );
    }

    #[test]
    fn email_grammar() {
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(is_valid_email("a@b"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@-b.com"));
        assert!(!is_valid_email("a@b..com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@b.com\n"));

        let long_local = format!("{}@b.com", "a".repeat(250));
        assert!(!is_valid_email(&long_local));
    }

    #[test]
    fn unknown_region_lists_all_regions() {
        let p = Principal {
            region: "Mars".into(),
            ..valid()
        };
        let err = p.validate(true).unwrap_err();
        assert_eq!(err, ValidationError::RegionInvalid);
        assert_eq!(
            err.to_string(),
            "invalid region, please pick one of: Asia,Africa,North America,South America,Antarctica,Europe,Australia"
        );
    }

    #[test]
    fn phone_is_checked_only_when_present() {
        let p = Principal {
            phone: "not a phone".into(),
            ..valid()
        };
        assert_eq!(p.validate(false), Err(ValidationError::PhoneInvalid));

        let p = Principal {
            phone: "+31612345678".into(),
            ..valid()
        };
        assert_eq!(p.validate(false), Ok(()));
    }

    #[test]
    fn password_length_applies_to_new_records_only() {
        let short = Principal {
            password: "short".into(),
            ..valid()
        };
        assert_eq!(short.validate(true), Err(ValidationError::PasswordTooShort));
        assert_eq!(short.validate(false), Ok(()));

        let long = Principal {
            password: "x".repeat(PASSWORD_MAX_CHARS + 1),
            ..valid()
        };
        assert_eq!(long.validate(true), Err(ValidationError::PasswordTooLong));
        assert_eq!(long.validate(false), Ok(()));

        let boundary = Principal {
            password: "x".repeat(PASSWORD_MAX_CHARS),
            ..valid()
        };
        assert_eq!(boundary.validate(true), Ok(()));
    }

    #[test]
    fn empty_password_is_always_rejected() {
        let p = Principal {
            password: String::new(),
            ..valid()
        };
        assert_eq!(p.validate(false), Err(ValidationError::PasswordEmpty));
        assert_eq!(p.validate(true), Err(ValidationError::PasswordEmpty));
    }

    #[test]
    fn validation_is_repeatable() {
        let p = Principal {
            region: "Atlantis".into(),
            ..valid()
        };
        assert_eq!(p.validate(false), p.validate(false));
    }
}
