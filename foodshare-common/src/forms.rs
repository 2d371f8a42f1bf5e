//! Form validation
//!
//! Whole-form verdicts for the two auth form shapes. Each form is a plain
//! struct over the submitted field values with a `validate` method; the
//! verdict maps every failed field to the message key describing the
//! failure. Fields are checked independently, so a submission with several
//! problems reports all of them at once.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::messages::MessageKey;
use crate::validators::{
    validate_confirm_password, validate_email, validate_name, validate_password,
    validate_username,
};

/// Form fields that can carry a validation error
///
/// Ordered top to bottom as the fields appear on the forms, which fixes
/// the iteration order of a verdict's error map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    /// Display name (signup only)
    Name,
    /// Email address
    Email,
    /// Optional username (signup only)
    Username,
    /// Password
    Password,
    /// Password confirmation (signup only)
    ConfirmPassword,
}

impl FormField {
    /// Convert to the snake_case string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Username => "username",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm_password",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregated verdict for a form submission
///
/// The form passed iff `errors` is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormVerdict {
    /// Failed fields mapped to the key describing each failure
    pub errors: BTreeMap<FormField, MessageKey>,
}

impl FormVerdict {
    /// Whether every field passed validation
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Login form fields as submitted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Validate the login submission
    ///
    /// The email must have a valid shape. The password only has to be
    /// present: login must accept whatever password the account was
    /// created with, so no strength rules are applied here.
    #[must_use]
    pub fn validate(&self) -> FormVerdict {
        let mut verdict = FormVerdict::default();
        if let Err(error) = validate_email(&self.email) {
            verdict.errors.insert(FormField::Email, error.into());
        }
        if self.password.is_empty() {
            verdict
                .errors
                .insert(FormField::Password, MessageKey::PasswordRequired);
        }
        verdict
    }
}

/// Signup form fields as submitted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Optional; `None` and blank both mean no username was chosen
    pub username: Option<String>,
}

impl SignupForm {
    /// Validate the signup submission
    ///
    /// Every field is checked independently. Only the first violated
    /// password rule is surfaced, matching the one-error-per-field shape
    /// of the verdict. The confirmation is compared against the password
    /// exactly as submitted.
    #[must_use]
    pub fn validate(&self) -> FormVerdict {
        let mut verdict = FormVerdict::default();
        if let Err(error) = validate_name(&self.name) {
            verdict.errors.insert(FormField::Name, error.into());
        }
        if let Err(error) = validate_email(&self.email) {
            verdict.errors.insert(FormField::Email, error.into());
        }
        if let Some(username) = &self.username {
            if !username.is_empty() {
                if let Err(error) = validate_username(username) {
                    verdict.errors.insert(FormField::Username, error.into());
                }
            }
        }
        let report = validate_password(&self.password);
        if let Some(error) = report.errors.into_iter().next() {
            verdict.errors.insert(FormField::Password, error.into());
        }
        if let Err(error) =
            validate_confirm_password(&self.password, &self.confirm_password)
        {
            verdict
                .errors
                .insert(FormField::ConfirmPassword, error.into());
        }
        verdict
    }
}
