//! Input validation functions
//!
//! Reusable validators for the credential and profile fields collected at
//! login and signup. Each validator is a pure function over a raw string;
//! sanitization is separate (see [`crate::sanitize`]) and is never applied
//! here, so callers always validate what the user actually typed.

mod confirm;
mod email;
mod name;
mod password;
mod username;

pub use confirm::{ConfirmPasswordError, validate_confirm_password};
pub use email::{EmailError, validate_email};
pub use name::{MAX_NAME_LENGTH, MIN_NAME_LENGTH, NameError, validate_name};
pub use password::{
    MIN_PASSWORD_LENGTH, PasswordError, PasswordReport, PasswordStrength,
    STRONG_PASSWORD_LENGTH, validate_password,
};
pub use username::{
    MAX_USERNAME_LENGTH, MIN_USERNAME_LENGTH, UsernameError, validate_username,
};
