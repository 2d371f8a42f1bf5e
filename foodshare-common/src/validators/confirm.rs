//! Confirm-password validation
//!
//! Checks the confirmation field against the chosen password.

/// Validation error for password confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmPasswordError {
    /// Confirmation field is empty
    Empty,
    /// Confirmation does not match the password
    Mismatch,
}

/// Validate a password confirmation
///
/// The comparison is exact; neither value is trimmed, since passwords may
/// legitimately contain leading or trailing whitespace.
///
/// # Errors
///
/// Returns a `ConfirmPasswordError` variant describing the validation
/// failure.
pub fn validate_confirm_password(
    password: &str,
    confirm: &str,
) -> Result<(), ConfirmPasswordError> {
    if confirm.is_empty() {
        return Err(ConfirmPasswordError::Empty);
    }
    if password != confirm {
        return Err(ConfirmPasswordError::Mismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching() {
        assert!(validate_confirm_password("Secret1!", "Secret1!").is_ok());
        // The comparison is exact, not validated for strength
        assert!(validate_confirm_password("x", "x").is_ok());
        assert!(validate_confirm_password(" pad ", " pad ").is_ok());
    }

    #[test]
    fn test_empty_confirmation() {
        assert_eq!(
            validate_confirm_password("Secret1!", ""),
            Err(ConfirmPasswordError::Empty)
        );
        // Empty wins even when the password is also empty
        assert_eq!(
            validate_confirm_password("", ""),
            Err(ConfirmPasswordError::Empty)
        );
    }

    #[test]
    fn test_mismatch() {
        assert_eq!(
            validate_confirm_password("Secret1!", "Secret2!"),
            Err(ConfirmPasswordError::Mismatch)
        );
        // Whitespace differences are mismatches
        assert_eq!(
            validate_confirm_password("Secret1!", "Secret1! "),
            Err(ConfirmPasswordError::Mismatch)
        );
        // Case differences are mismatches
        assert_eq!(
            validate_confirm_password("Secret1!", "secret1!"),
            Err(ConfirmPasswordError::Mismatch)
        );
    }
}
