//! Input sanitization
//!
//! Normalization helpers applied to user input before storage or display.
//! Validation is separate and sees the raw input; callers typically
//! sanitize after validation succeeds. All three helpers are idempotent.

/// Normalize an email address: trim surrounding whitespace and lowercase
#[must_use]
pub fn sanitize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Normalize a username: trim surrounding whitespace and lowercase
#[must_use]
pub fn sanitize_username(username: &str) -> String {
    username.trim().to_lowercase()
}

/// Normalize a display name: trim and collapse interior whitespace runs
/// to a single space
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}
