use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::i18n::Locale;

pub const MIN_PASSWORD_LEN: usize = 8;

// deliberately loose: one @, something on both sides, a dot in the domain
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
});

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum FieldError {
    #[error("field is required")]
    Required,
    #[error("invalid email address")]
    InvalidEmail,
    #[error("password is too short")]
    PasswordTooShort,
}

impl FieldError {
    pub fn localized(&self, locale: Locale) -> &'static str {
        match self {
            FieldError::Required => locale.pick("This field is required.", "Dieses Feld ist erforderlich."),
            FieldError::InvalidEmail => locale.pick(
                "Please enter a valid email address.",
                "Bitte geben Sie eine gültige E-Mail-Adresse ein.",
            ),
            FieldError::PasswordTooShort => locale.pick(
                "The password must be at least 8 characters long.",
                "Das Passwort muss mindestens 8 Zeichen lang sein.",
            ),
        }
    }
}

pub fn is_email_valid(email: &str) -> bool {
    EMAIL_REGEX.is_match(email.trim())
}

pub fn is_password_valid(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

fn check_email(email: &str) -> Option<FieldError> {
    if email.trim().is_empty() {
        Some(FieldError::Required)
    } else if !is_email_valid(email) {
        Some(FieldError::InvalidEmail)
    } else {
        None
    }
}

fn check_required(value: &str) -> Option<FieldError> {
    value.trim().is_empty().then_some(FieldError::Required)
}

// login

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LoginValues {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LoginErrors {
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

fn check_password(password: &str) -> Option<FieldError> {
    if password.is_empty() {
        Some(FieldError::Required)
    } else if !is_password_valid(password) {
        Some(FieldError::PasswordTooShort)
    } else {
        None
    }
}

pub fn validate_login(values: &LoginValues) -> LoginErrors {
    LoginErrors {
        email: check_email(&values.email),
        password: check_password(&values.password),
    }
}

// contact

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ContactValues {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ContactErrors {
    pub full_name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl ContactErrors {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

// the phone number is optional on the contact form
pub fn validate_contact(values: &ContactValues) -> ContactErrors {
    ContactErrors {
        full_name: check_required(&values.full_name),
        email: check_email(&values.email),
        message: check_required(&values.message),
    }
}

// account details

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Salutation {
    #[default]
    Mr,
    Mrs,
}

impl Salutation {
    pub const ALL: [Salutation; 2] = [Salutation::Mr, Salutation::Mrs];

    pub fn localized(&self, locale: Locale) -> &'static str {
        match self {
            Salutation::Mr => locale.pick("Mr", "Herr"),
            Salutation::Mrs => locale.pick("Mrs", "Frau"),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AccountValues {
    pub salutation: Salutation,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    // YYYY-MM-DD, optional
    pub date_of_birth: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AccountErrors {
    pub first_name: Option<FieldError>,
    pub last_name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub phone_number: Option<FieldError>,
    pub password: Option<FieldError>,
}

impl AccountErrors {
    pub fn is_empty(&self) -> bool {
        *self == AccountErrors::default()
    }
}

// the password is required to confirm any change and follows the login rule
pub fn validate_account(values: &AccountValues) -> AccountErrors {
    AccountErrors {
        first_name: check_required(&values.first_name),
        last_name: check_required(&values.last_name),
        email: check_email(&values.email),
        phone_number: check_required(&values.phone_number),
        password: check_password(&values.password),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_email_valid("ada@example.com"));
        assert!(is_email_valid(" ada@mail.example.de "));
        assert!(!is_email_valid("ada@example"));
        assert!(!is_email_valid("ada example@x.com"));
        assert!(!is_email_valid("@example.com"));
    }

    #[test]
    fn login_reports_each_field_separately() {
        let errors = validate_login(&LoginValues::default());
        assert_eq!(errors.email, Some(FieldError::Required));
        assert_eq!(errors.password, Some(FieldError::Required));

        let errors = validate_login(&LoginValues {
            email: String::from("not-an-email"),
            password: String::from("short"),
        });
        assert_eq!(errors.email, Some(FieldError::InvalidEmail));
        assert_eq!(errors.password, Some(FieldError::PasswordTooShort));
    }

    #[test]
    fn valid_login_has_no_errors() {
        let errors = validate_login(&LoginValues {
            email: String::from("ada@example.com"),
            password: String::from("correct horse"),
        });

        assert!(errors.is_empty());
    }

    #[test]
    fn contact_requires_name_email_and_message_but_not_phone() {
        let mut values = ContactValues {
            full_name: String::from("Ada Lovelace"),
            email: String::from("ada@example.com"),
            phone_number: String::new(),
            message: String::from("   "),
        };
        assert_eq!(validate_contact(&values).message, Some(FieldError::Required));

        values.message = String::from("Do you rent convertibles?");
        assert!(validate_contact(&values).is_empty());
    }

    #[test]
    fn account_details_need_names_contact_and_password() {
        let errors = validate_account(&AccountValues::default());
        assert_eq!(errors.first_name, Some(FieldError::Required));
        assert_eq!(errors.last_name, Some(FieldError::Required));
        assert_eq!(errors.email, Some(FieldError::Required));
        assert_eq!(errors.phone_number, Some(FieldError::Required));
        assert_eq!(errors.password, Some(FieldError::Required));

        let mut values = AccountValues {
            salutation: Salutation::Mrs,
            first_name: String::from("Ada"),
            last_name: String::from("Lovelace"),
            email: String::from("ada@example.com"),
            phone_number: String::from("1512 3456789"),
            date_of_birth: String::new(),
            password: String::from("short"),
        };
        assert_eq!(validate_account(&values).password, Some(FieldError::PasswordTooShort));

        values.password = String::from("correct horse");
        assert!(validate_account(&values).is_empty());
    }
}
