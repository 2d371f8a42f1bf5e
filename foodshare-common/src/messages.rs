//! User-facing message keys and catalog
//!
//! Every validation failure and auth-flow outcome is identified by a
//! [`MessageKey`]. Validators return their own error enums; the `From`
//! impls here map those to keys, and [`MessageCatalog`] maps keys to
//! display strings. Swapping the strings (localization, copy changes)
//! therefore never touches validator logic.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::validators::{
    ConfirmPasswordError, EmailError, NameError, PasswordError, UsernameError,
};

/// Symbolic key for a user-facing message
///
/// Keys are serialized as their snake_case string form, matching
/// [`MessageKey::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKey {
    /// Email field left blank
    EmailRequired,
    /// Email does not look like an address
    EmailInvalid,
    /// No account exists for the email
    EmailNotFound,
    /// Password field left blank
    PasswordRequired,
    /// Password shorter than the minimum
    PasswordMinLength,
    /// Password missing an uppercase letter
    PasswordUppercase,
    /// Password missing a lowercase letter
    PasswordLowercase,
    /// Password missing a digit
    PasswordNumber,
    /// Password missing a special character
    PasswordSpecial,
    /// Confirmation does not match the password
    PasswordMismatch,
    /// Credentials did not authenticate
    PasswordIncorrect,
    /// Username field left blank
    UsernameRequired,
    /// Username shorter than the minimum
    UsernameMinLength,
    /// Username longer than the maximum
    UsernameMaxLength,
    /// Username has characters outside letters, digits, underscore
    UsernameInvalid,
    /// Username contains whitespace
    UsernameNoSpaces,
    /// Username already in use
    UsernameTaken,
    /// Name field left blank
    NameRequired,
    /// Name shorter than the minimum
    NameMinLength,
    /// Name longer than the maximum
    NameMaxLength,
    /// Confirmation field left blank
    ConfirmPasswordRequired,
    /// Login flow failed
    LoginFailed,
    /// Signup flow failed
    SignupFailed,
    /// Too many attempts inside the rate-limit window
    RateLimitExceeded,
    /// Unexpected internal failure
    ServerError,
    /// Login flow succeeded
    LoginSuccess,
    /// Signup flow succeeded
    SignupSuccess,
    /// Password reset link was sent
    PasswordResetSent,
    /// Password reset completed
    PasswordResetSuccess,
}

/// Every message key, in catalog order
///
/// Useful for iterating the catalog; tests use it to verify coverage.
pub const ALL_MESSAGE_KEYS: &[MessageKey] = &[
    MessageKey::EmailRequired,
    MessageKey::EmailInvalid,
    MessageKey::EmailNotFound,
    MessageKey::PasswordRequired,
    MessageKey::PasswordMinLength,
    MessageKey::PasswordUppercase,
    MessageKey::PasswordLowercase,
    MessageKey::PasswordNumber,
    MessageKey::PasswordSpecial,
    MessageKey::PasswordMismatch,
    MessageKey::PasswordIncorrect,
    MessageKey::UsernameRequired,
    MessageKey::UsernameMinLength,
    MessageKey::UsernameMaxLength,
    MessageKey::UsernameInvalid,
    MessageKey::UsernameNoSpaces,
    MessageKey::UsernameTaken,
    MessageKey::NameRequired,
    MessageKey::NameMinLength,
    MessageKey::NameMaxLength,
    MessageKey::ConfirmPasswordRequired,
    MessageKey::LoginFailed,
    MessageKey::SignupFailed,
    MessageKey::RateLimitExceeded,
    MessageKey::ServerError,
    MessageKey::LoginSuccess,
    MessageKey::SignupSuccess,
    MessageKey::PasswordResetSent,
    MessageKey::PasswordResetSuccess,
];

impl MessageKey {
    /// Convert to the snake_case string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmailRequired => "email_required",
            Self::EmailInvalid => "email_invalid",
            Self::EmailNotFound => "email_not_found",
            Self::PasswordRequired => "password_required",
            Self::PasswordMinLength => "password_min_length",
            Self::PasswordUppercase => "password_uppercase",
            Self::PasswordLowercase => "password_lowercase",
            Self::PasswordNumber => "password_number",
            Self::PasswordSpecial => "password_special",
            Self::PasswordMismatch => "password_mismatch",
            Self::PasswordIncorrect => "password_incorrect",
            Self::UsernameRequired => "username_required",
            Self::UsernameMinLength => "username_min_length",
            Self::UsernameMaxLength => "username_max_length",
            Self::UsernameInvalid => "username_invalid",
            Self::UsernameNoSpaces => "username_no_spaces",
            Self::UsernameTaken => "username_taken",
            Self::NameRequired => "name_required",
            Self::NameMinLength => "name_min_length",
            Self::NameMaxLength => "name_max_length",
            Self::ConfirmPasswordRequired => "confirm_password_required",
            Self::LoginFailed => "login_failed",
            Self::SignupFailed => "signup_failed",
            Self::RateLimitExceeded => "rate_limit_exceeded",
            Self::ServerError => "server_error",
            Self::LoginSuccess => "login_success",
            Self::SignupSuccess => "signup_success",
            Self::PasswordResetSent => "password_reset_sent",
            Self::PasswordResetSuccess => "password_reset_success",
        }
    }

    /// Parse from the snake_case string representation
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "email_required" => Some(Self::EmailRequired),
            "email_invalid" => Some(Self::EmailInvalid),
            "email_not_found" => Some(Self::EmailNotFound),
            "password_required" => Some(Self::PasswordRequired),
            "password_min_length" => Some(Self::PasswordMinLength),
            "password_uppercase" => Some(Self::PasswordUppercase),
            "password_lowercase" => Some(Self::PasswordLowercase),
            "password_number" => Some(Self::PasswordNumber),
            "password_special" => Some(Self::PasswordSpecial),
            "password_mismatch" => Some(Self::PasswordMismatch),
            "password_incorrect" => Some(Self::PasswordIncorrect),
            "username_required" => Some(Self::UsernameRequired),
            "username_min_length" => Some(Self::UsernameMinLength),
            "username_max_length" => Some(Self::UsernameMaxLength),
            "username_invalid" => Some(Self::UsernameInvalid),
            "username_no_spaces" => Some(Self::UsernameNoSpaces),
            "username_taken" => Some(Self::UsernameTaken),
            "name_required" => Some(Self::NameRequired),
            "name_min_length" => Some(Self::NameMinLength),
            "name_max_length" => Some(Self::NameMaxLength),
            "confirm_password_required" => Some(Self::ConfirmPasswordRequired),
            "login_failed" => Some(Self::LoginFailed),
            "signup_failed" => Some(Self::SignupFailed),
            "rate_limit_exceeded" => Some(Self::RateLimitExceeded),
            "server_error" => Some(Self::ServerError),
            "login_success" => Some(Self::LoginSuccess),
            "signup_success" => Some(Self::SignupSuccess),
            "password_reset_sent" => Some(Self::PasswordResetSent),
            "password_reset_success" => Some(Self::PasswordResetSuccess),
            _ => None,
        }
    }

    /// The built-in English message for this key
    #[must_use]
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::EmailRequired => "Email address is required",
            Self::EmailInvalid => "Enter a valid email address",
            Self::EmailNotFound => "No account found with this email",
            Self::PasswordRequired => "Password is required",
            Self::PasswordMinLength => "Password must be at least 8 characters",
            Self::PasswordUppercase => {
                "Password must include at least one uppercase letter"
            }
            Self::PasswordLowercase => {
                "Password must include at least one lowercase letter"
            }
            Self::PasswordNumber => "Password must include at least one number",
            Self::PasswordSpecial => {
                "Password must include at least one special character (!@#$%^&*)"
            }
            Self::PasswordMismatch => "Passwords do not match",
            Self::PasswordIncorrect => "Incorrect password",
            Self::UsernameRequired => "Username is required",
            Self::UsernameMinLength => "Username must be at least 3 characters",
            Self::UsernameMaxLength => "Username must not exceed 20 characters",
            Self::UsernameInvalid => {
                "Username can contain only letters, numbers, and underscores"
            }
            Self::UsernameNoSpaces => "Username cannot contain spaces",
            Self::UsernameTaken => "This username is already taken",
            Self::NameRequired => "Name is required",
            Self::NameMinLength => "Name must be at least 2 characters",
            Self::NameMaxLength => "Name must not exceed 50 characters",
            Self::ConfirmPasswordRequired => "Please confirm your password",
            Self::LoginFailed => {
                "Unable to login. Please check your credentials and try again"
            }
            Self::SignupFailed => "Unable to create account. Please try again",
            Self::RateLimitExceeded => {
                "Too many attempts. Please try again in a few minutes"
            }
            Self::ServerError => "Something went wrong. Please try again later",
            Self::LoginSuccess => "Login successful",
            Self::SignupSuccess => "Account created successfully",
            Self::PasswordResetSent => "Password reset link sent to your email",
            Self::PasswordResetSuccess => "Password reset successfully",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<MessageKey> for String {
    fn from(key: MessageKey) -> Self {
        key.as_str().to_string()
    }
}

impl From<EmailError> for MessageKey {
    fn from(error: EmailError) -> Self {
        match error {
            EmailError::Empty => Self::EmailRequired,
            EmailError::Invalid => Self::EmailInvalid,
        }
    }
}

impl From<PasswordError> for MessageKey {
    fn from(error: PasswordError) -> Self {
        match error {
            PasswordError::Empty => Self::PasswordRequired,
            PasswordError::TooShort => Self::PasswordMinLength,
            PasswordError::NoUppercase => Self::PasswordUppercase,
            PasswordError::NoLowercase => Self::PasswordLowercase,
            PasswordError::NoDigit => Self::PasswordNumber,
            PasswordError::NoSpecial => Self::PasswordSpecial,
        }
    }
}

impl From<UsernameError> for MessageKey {
    fn from(error: UsernameError) -> Self {
        match error {
            UsernameError::Empty => Self::UsernameRequired,
            UsernameError::ContainsWhitespace => Self::UsernameNoSpaces,
            UsernameError::TooShort => Self::UsernameMinLength,
            UsernameError::TooLong => Self::UsernameMaxLength,
            UsernameError::InvalidCharacters => Self::UsernameInvalid,
        }
    }
}

impl From<NameError> for MessageKey {
    fn from(error: NameError) -> Self {
        match error {
            NameError::Empty => Self::NameRequired,
            NameError::TooShort => Self::NameMinLength,
            NameError::TooLong => Self::NameMaxLength,
        }
    }
}

impl From<ConfirmPasswordError> for MessageKey {
    fn from(error: ConfirmPasswordError) -> Self {
        match error {
            ConfirmPasswordError::Empty => Self::ConfirmPasswordRequired,
            ConfirmPasswordError::Mismatch => Self::PasswordMismatch,
        }
    }
}

/// Message catalog with the built-in English strings
///
/// Individual entries can be replaced without touching validator logic,
/// which deals only in error enums and keys. A default catalog serves the
/// built-in strings unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog {
    overrides: HashMap<MessageKey, String>,
}

impl MessageCatalog {
    /// Create a catalog serving the built-in English messages
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the message served for a key
    pub fn set_message(&mut self, key: MessageKey, text: &str) {
        self.overrides.insert(key, text.to_string());
    }

    /// Look up the user-facing message for a key
    #[must_use]
    pub fn message(&self, key: MessageKey) -> &str {
        match self.overrides.get(&key) {
            Some(text) => text,
            None => key.default_message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(MessageKey::EmailRequired.as_str(), "email_required");
        assert_eq!(MessageKey::PasswordMismatch.as_str(), "password_mismatch");
        assert_eq!(
            MessageKey::ConfirmPasswordRequired.as_str(),
            "confirm_password_required"
        );
        assert_eq!(
            MessageKey::RateLimitExceeded.as_str(),
            "rate_limit_exceeded"
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            MessageKey::parse("email_required"),
            Some(MessageKey::EmailRequired)
        );
        assert_eq!(
            MessageKey::parse("username_no_spaces"),
            Some(MessageKey::UsernameNoSpaces)
        );
        assert_eq!(MessageKey::parse("unknown"), None);
        assert_eq!(MessageKey::parse(""), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", MessageKey::EmailInvalid), "email_invalid");
        assert_eq!(format!("{}", MessageKey::LoginSuccess), "login_success");
    }

    #[test]
    fn test_into_string() {
        let s: String = MessageKey::ServerError.into();
        assert_eq!(s, "server_error");
    }

    #[test]
    fn test_roundtrip() {
        for key in ALL_MESSAGE_KEYS {
            assert_eq!(MessageKey::parse(key.as_str()), Some(*key));
        }
    }

    #[test]
    fn test_key_count() {
        // Verify we have the expected number of message keys (29)
        assert_eq!(ALL_MESSAGE_KEYS.len(), 29);
    }

    #[test]
    fn test_no_duplicate_strings() {
        let mut seen = std::collections::HashSet::new();
        for key in ALL_MESSAGE_KEYS {
            assert!(seen.insert(key.as_str()), "Duplicate key: {key}");
        }
    }

    #[test]
    fn test_serde_matches_as_str() {
        // Serialized form is the same string as_str produces
        for key in ALL_MESSAGE_KEYS {
            let json = serde_json::to_string(key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
            let back: MessageKey = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *key);
        }
    }

    // ========================================================================
    // Field-error mappings
    // ========================================================================

    #[test]
    fn test_from_email_error() {
        assert_eq!(
            MessageKey::from(EmailError::Empty),
            MessageKey::EmailRequired
        );
        assert_eq!(
            MessageKey::from(EmailError::Invalid),
            MessageKey::EmailInvalid
        );
    }

    #[test]
    fn test_from_password_error() {
        assert_eq!(
            MessageKey::from(PasswordError::Empty),
            MessageKey::PasswordRequired
        );
        assert_eq!(
            MessageKey::from(PasswordError::TooShort),
            MessageKey::PasswordMinLength
        );
        assert_eq!(
            MessageKey::from(PasswordError::NoUppercase),
            MessageKey::PasswordUppercase
        );
        assert_eq!(
            MessageKey::from(PasswordError::NoLowercase),
            MessageKey::PasswordLowercase
        );
        assert_eq!(
            MessageKey::from(PasswordError::NoDigit),
            MessageKey::PasswordNumber
        );
        assert_eq!(
            MessageKey::from(PasswordError::NoSpecial),
            MessageKey::PasswordSpecial
        );
    }

    #[test]
    fn test_from_username_error() {
        assert_eq!(
            MessageKey::from(UsernameError::Empty),
            MessageKey::UsernameRequired
        );
        assert_eq!(
            MessageKey::from(UsernameError::ContainsWhitespace),
            MessageKey::UsernameNoSpaces
        );
        assert_eq!(
            MessageKey::from(UsernameError::TooShort),
            MessageKey::UsernameMinLength
        );
        assert_eq!(
            MessageKey::from(UsernameError::TooLong),
            MessageKey::UsernameMaxLength
        );
        assert_eq!(
            MessageKey::from(UsernameError::InvalidCharacters),
            MessageKey::UsernameInvalid
        );
    }

    #[test]
    fn test_from_name_error() {
        assert_eq!(MessageKey::from(NameError::Empty), MessageKey::NameRequired);
        assert_eq!(
            MessageKey::from(NameError::TooShort),
            MessageKey::NameMinLength
        );
        assert_eq!(
            MessageKey::from(NameError::TooLong),
            MessageKey::NameMaxLength
        );
    }

    #[test]
    fn test_from_confirm_password_error() {
        assert_eq!(
            MessageKey::from(ConfirmPasswordError::Empty),
            MessageKey::ConfirmPasswordRequired
        );
        assert_eq!(
            MessageKey::from(ConfirmPasswordError::Mismatch),
            MessageKey::PasswordMismatch
        );
    }

    // ========================================================================
    // Catalog
    // ========================================================================

    #[test]
    fn test_default_messages_cover_every_key() {
        let catalog = MessageCatalog::new();
        for key in ALL_MESSAGE_KEYS {
            assert!(
                !catalog.message(*key).is_empty(),
                "Empty message for key: {key}"
            );
        }
    }

    #[test]
    fn test_default_message_text() {
        let catalog = MessageCatalog::new();
        assert_eq!(
            catalog.message(MessageKey::EmailRequired),
            "Email address is required"
        );
        assert_eq!(
            catalog.message(MessageKey::PasswordSpecial),
            "Password must include at least one special character (!@#$%^&*)"
        );
        assert_eq!(
            catalog.message(MessageKey::UsernameInvalid),
            "Username can contain only letters, numbers, and underscores"
        );
        assert_eq!(
            catalog.message(MessageKey::RateLimitExceeded),
            "Too many attempts. Please try again in a few minutes"
        );
    }

    #[test]
    fn test_override() {
        let mut catalog = MessageCatalog::new();
        catalog.set_message(MessageKey::EmailRequired, "La dirección es obligatoria");
        assert_eq!(
            catalog.message(MessageKey::EmailRequired),
            "La dirección es obligatoria"
        );
        // Other keys still serve the built-in text
        assert_eq!(
            catalog.message(MessageKey::EmailInvalid),
            "Enter a valid email address"
        );
    }
}
