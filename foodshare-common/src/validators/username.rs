//! Username validation
//!
//! Validates username strings for the signup flow. Usernames are optional
//! at signup; callers skip this validator when no username was provided.

/// Minimum length for usernames in characters
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Maximum length for usernames in characters
pub const MAX_USERNAME_LENGTH: usize = 20;

/// Validation error for usernames
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsernameError {
    /// Username is empty or only whitespace
    Empty,
    /// Username contains whitespace
    ContainsWhitespace,
    /// Username is shorter than the minimum length
    TooShort,
    /// Username exceeds maximum length
    TooLong,
    /// Username contains invalid characters
    InvalidCharacters,
}

/// Validate a username
///
/// Checks run in order against the trimmed value and stop at the first
/// failure:
/// - Not empty
/// - No interior whitespace
/// - At least 3 characters
/// - At most 20 characters
/// - Only ASCII letters, digits, and underscores
///
/// The whitespace check comes before the length checks so `"a b"` reports
/// the whitespace problem rather than a length one.
///
/// # Errors
///
/// Returns a `UsernameError` variant describing the validation failure.
pub fn validate_username(username: &str) -> Result<(), UsernameError> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err(UsernameError::Empty);
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(UsernameError::ContainsWhitespace);
    }
    let length = trimmed.chars().count();
    if length < MIN_USERNAME_LENGTH {
        return Err(UsernameError::TooShort);
    }
    if length > MAX_USERNAME_LENGTH {
        return Err(UsernameError::TooLong);
    }
    if trimmed
        .chars()
        .any(|ch| !ch.is_ascii_alphanumeric() && ch != '_')
    {
        return Err(UsernameError::InvalidCharacters);
    }
    Ok(())
}
