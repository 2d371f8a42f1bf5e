//! Display name validation
//!
//! Validates the person or organization name given at signup.

/// Minimum length for display names in characters
pub const MIN_NAME_LENGTH: usize = 2;

/// Maximum length for display names in characters
pub const MAX_NAME_LENGTH: usize = 50;

/// Validation error for display names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// Name is empty or only whitespace
    Empty,
    /// Name is shorter than the minimum length
    TooShort,
    /// Name exceeds maximum length
    TooLong,
}

/// Validate a display name
///
/// Checks the trimmed value:
/// - Not empty
/// - At least 2 characters
/// - At most 50 characters
///
/// Any characters are allowed, so names in any language work. Interior
/// whitespace is fine; [`crate::sanitize::sanitize_name`] collapses runs
/// of it for storage.
///
/// # Errors
///
/// Returns a `NameError` variant describing the validation failure.
pub fn validate_name(name: &str) -> Result<(), NameError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(NameError::Empty);
    }
    let length = trimmed.chars().count();
    if length < MIN_NAME_LENGTH {
        return Err(NameError::TooShort);
    }
    if length > MAX_NAME_LENGTH {
        return Err(NameError::TooLong);
    }
    Ok(())
}
