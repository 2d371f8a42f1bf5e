//! Password validation
//!
//! Validates password strength for the signup flow. The login flow only
//! checks that a password was entered; see `LoginForm` in
//! [`crate::forms`].

/// Minimum length for passwords in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Length at which an otherwise-valid password rates as strong
pub const STRONG_PASSWORD_LENGTH: usize = 12;

/// Characters accepted as the special-character class
const SPECIAL_CHARS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '-', '=', '[',
    ']', '{', '}', ';', '\'', ':', '"', '\\', '|', ',', '.', '<', '>', '/', '?',
];

/// Validation error for passwords
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    /// Password is empty
    Empty,
    /// Password is shorter than the minimum length
    TooShort,
    /// Password has no ASCII uppercase letter
    NoUppercase,
    /// Password has no ASCII lowercase letter
    NoLowercase,
    /// Password has no ASCII digit
    NoDigit,
    /// Password has no special character
    NoSpecial,
}

/// Strength rating for a password that passed or failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    /// One or more rules violated
    Weak,
    /// All rules met, shorter than the strong threshold
    Medium,
    /// All rules met at or above the strong threshold
    Strong,
}

impl PasswordStrength {
    /// Convert to the lowercase string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }
}

/// Outcome of a password check: every violated rule plus a strength rating
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordReport {
    /// Violated rules in check order; empty when the password is valid
    pub errors: Vec<PasswordError>,
    /// Strength rating derived from the rule outcomes and length
    pub strength: PasswordStrength,
}

impl PasswordReport {
    /// Whether the password passed every rule
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate a password for account creation
///
/// An empty password reports only `Empty`. Otherwise every rule is checked
/// and every violation is reported, in order:
/// - At least 8 characters
/// - At least one ASCII uppercase letter
/// - At least one ASCII lowercase letter
/// - At least one ASCII digit
/// - At least one special character
///
/// Strength is `Weak` when any rule is violated, `Strong` when all rules
/// pass and the password is at least 12 characters, `Medium` otherwise.
#[must_use]
pub fn validate_password(password: &str) -> PasswordReport {
    if password.is_empty() {
        return PasswordReport {
            errors: vec![PasswordError::Empty],
            strength: PasswordStrength::Weak,
        };
    }

    let mut errors = Vec::new();
    let length = password.chars().count();
    if length < MIN_PASSWORD_LENGTH {
        errors.push(PasswordError::TooShort);
    }
    if !password.chars().any(|ch| ch.is_ascii_uppercase()) {
        errors.push(PasswordError::NoUppercase);
    }
    if !password.chars().any(|ch| ch.is_ascii_lowercase()) {
        errors.push(PasswordError::NoLowercase);
    }
    if !password.chars().any(|ch| ch.is_ascii_digit()) {
        errors.push(PasswordError::NoDigit);
    }
    if !password.chars().any(|ch| SPECIAL_CHARS.contains(&ch)) {
        errors.push(PasswordError::NoSpecial);
    }

    let strength = if !errors.is_empty() {
        PasswordStrength::Weak
    } else if length >= STRONG_PASSWORD_LENGTH {
        PasswordStrength::Strong
    } else {
        PasswordStrength::Medium
    };

    PasswordReport { errors, strength }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_medium_password() {
        // Meets every rule at 9 characters: medium, not strong
        let report = validate_password("Abcdefg1!");
        assert!(report.is_valid());
        assert_eq!(report.strength, PasswordStrength::Medium);
    }

    #[test]
    fn test_valid_strong_password() {
        let report = validate_password("Abcdefgh123!@#");
        assert!(report.is_valid());
        assert_eq!(report.strength, PasswordStrength::Strong);
    }

    #[test]
    fn test_strong_threshold_boundary() {
        // Exactly 12 characters, all rules met
        let report = validate_password("Abcdefghi12!");
        assert!(report.is_valid());
        assert_eq!(report.strength, PasswordStrength::Strong);
        // Exactly 11 characters, all rules met
        let report = validate_password("Abcdefgh12!");
        assert!(report.is_valid());
        assert_eq!(report.strength, PasswordStrength::Medium);
    }

    #[test]
    fn test_empty() {
        // Empty reports only Empty, no other rule errors
        let report = validate_password("");
        assert_eq!(report.errors, vec![PasswordError::Empty]);
        assert_eq!(report.strength, PasswordStrength::Weak);
    }

    #[test]
    fn test_too_short() {
        let report = validate_password("Abc1!");
        assert_eq!(report.errors, vec![PasswordError::TooShort]);
        assert_eq!(report.strength, PasswordStrength::Weak);
    }

    #[test]
    fn test_missing_character_classes() {
        let report = validate_password("abcdefg1!");
        assert_eq!(report.errors, vec![PasswordError::NoUppercase]);

        let report = validate_password("ABCDEFG1!");
        assert_eq!(report.errors, vec![PasswordError::NoLowercase]);

        let report = validate_password("Abcdefgh!");
        assert_eq!(report.errors, vec![PasswordError::NoDigit]);

        let report = validate_password("Abcdefg1");
        assert_eq!(report.errors, vec![PasswordError::NoSpecial]);
    }

    #[test]
    fn test_all_errors_reported() {
        // Violates every rule at once: short, single-class, no digit/special
        let report = validate_password("aaa");
        assert_eq!(
            report.errors,
            vec![
                PasswordError::TooShort,
                PasswordError::NoUppercase,
                PasswordError::NoDigit,
                PasswordError::NoSpecial,
            ]
        );
        assert_eq!(report.strength, PasswordStrength::Weak);
    }

    #[test]
    fn test_special_characters_accepted() {
        // Each special character satisfies the special-character rule
        for ch in SPECIAL_CHARS {
            let password = format!("Abcdefg1{ch}");
            let report = validate_password(&password);
            assert!(report.is_valid(), "rejected special character {ch:?}");
        }
    }

    #[test]
    fn test_unusual_special_not_accepted() {
        // Space and tilde are not in the special set
        let report = validate_password("Abcdefg1 ");
        assert_eq!(report.errors, vec![PasswordError::NoSpecial]);
        let report = validate_password("Abcdefg1~");
        assert_eq!(report.errors, vec![PasswordError::NoSpecial]);
    }

    #[test]
    fn test_length_in_characters() {
        // 8 characters meet the length rule even when some are multibyte
        let report = validate_password("Aa1!áááá");
        assert!(report.is_valid());
    }

    #[test]
    fn test_strength_string_form() {
        assert_eq!(PasswordStrength::Weak.as_str(), "weak");
        assert_eq!(PasswordStrength::Medium.as_str(), "medium");
        assert_eq!(PasswordStrength::Strong.as_str(), "strong");
    }
}
