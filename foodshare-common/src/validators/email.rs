//! Email validation
//!
//! Validates email address shape. Normalization (lowercasing) is a separate
//! step; see [`crate::sanitize::sanitize_email`].

/// Validation error for email addresses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// Email is empty or only whitespace
    Empty,
    /// Email does not look like `local@domain.tld`
    Invalid,
}

/// Validate an email address
///
/// Checks that the trimmed value has the shape `local@domain`, where:
/// - `local` is non-empty and contains no whitespace or extra `@`
/// - `domain` contains no whitespace or extra `@`
/// - `domain` has a `.` that is neither its first nor last character
///
/// This is a shape check only; it does not verify the address exists.
/// The check is case-insensitive (no letter classes are involved), so
/// validating before or after lowercasing gives the same verdict.
///
/// # Errors
///
/// Returns an `EmailError` variant describing the validation failure.
pub fn validate_email(email: &str) -> Result<(), EmailError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(EmailError::Empty);
    }
    let Some((local, domain)) = trimmed.split_once('@') else {
        return Err(EmailError::Invalid);
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(EmailError::Invalid);
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(EmailError::Invalid);
    }
    // The dot must have at least one character on each side.
    let has_interior_dot = domain
        .char_indices()
        .any(|(i, ch)| ch == '.' && i > 0 && i + 1 < domain.len());
    if !has_interior_dot {
        return Err(EmailError::Invalid);
    }
    Ok(())
}
