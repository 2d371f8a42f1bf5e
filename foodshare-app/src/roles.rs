//! Platform roles users sign up under

use serde::{Deserialize, Serialize};
use strum::AsRefStr;

/// Roles a FoodShare user can hold
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Shares surplus food with the community
    Donor,
    /// Claims food on behalf of those in need
    Receiver,
    /// Transports and distributes food
    Volunteer,
    /// Monitors and manages the platform
    Admin,
}

/// Every role, in signup display order
pub const ALL_ROLES: &[Role] = &[
    Role::Donor,
    Role::Receiver,
    Role::Volunteer,
    Role::Admin,
];

impl Role {
    /// Convert the role to its snake_case string form.
    ///
    /// Uses strum's AsRefStr to convert PascalCase enum variants to
    /// snake_case strings (Donor → donor, Receiver → receiver).
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    /// Parse a role string into a Role enum variant.
    ///
    /// Accepts snake_case strings like "donor" or "volunteer".
    ///
    /// Returns Some(Role) if the string is valid, None otherwise.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "donor" => Some(Role::Donor),
            "receiver" => Some(Role::Receiver),
            "volunteer" => Some(Role::Volunteer),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    /// Human-readable name shown on the role picker
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Donor => "Donor",
            Self::Receiver => "NGO/Receiver",
            Self::Volunteer => "Volunteer",
            Self::Admin => "Admin",
        }
    }

    /// One-line description shown on the role picker
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Donor => "Share surplus food with your community",
            Self::Receiver => "Claim food for those in need",
            Self::Volunteer => "Help transport and distribute food",
            Self::Admin => "Monitor and manage the platform",
        }
    }

    /// Points a fresh account starts with
    #[must_use]
    pub fn initial_points(&self) -> u32 {
        match self {
            Self::Donor => 120,
            Self::Receiver => 245,
            Self::Volunteer => 180,
            Self::Admin => 999,
        }
    }
}

impl Default for Role {
    /// The role preselected on the landing page
    fn default() -> Self {
        Self::Donor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_snake_case_conversion() {
        assert_eq!(Role::Donor.as_str(), "donor");
        assert_eq!(Role::Receiver.as_str(), "receiver");
        assert_eq!(Role::Volunteer.as_str(), "volunteer");
        assert_eq!(Role::Admin.as_str(), "admin");
    }

    #[test]
    fn test_role_parse_valid() {
        assert_eq!(Role::parse("donor"), Some(Role::Donor));
        assert_eq!(Role::parse("receiver"), Some(Role::Receiver));
        assert_eq!(Role::parse("volunteer"), Some(Role::Volunteer));
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
    }

    #[test]
    fn test_role_parse_invalid() {
        assert_eq!(Role::parse("invalid"), None);
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("Donor"), None); // Wrong case
        assert_eq!(Role::parse("donors"), None); // Typo
    }

    #[test]
    fn test_roundtrip() {
        for role in ALL_ROLES {
            assert_eq!(Role::parse(role.as_str()), Some(*role));
        }
    }

    #[test]
    fn test_all_roles_count() {
        assert_eq!(ALL_ROLES.len(), 4);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Role::Donor.display_name(), "Donor");
        assert_eq!(Role::Receiver.display_name(), "NGO/Receiver");
        assert_eq!(Role::Volunteer.display_name(), "Volunteer");
        assert_eq!(Role::Admin.display_name(), "Admin");
    }

    #[test]
    fn test_descriptions_nonempty() {
        for role in ALL_ROLES {
            assert!(!role.description().is_empty());
        }
    }

    #[test]
    fn test_initial_points() {
        assert_eq!(Role::Donor.initial_points(), 120);
        assert_eq!(Role::Receiver.initial_points(), 245);
        assert_eq!(Role::Volunteer.initial_points(), 180);
        assert_eq!(Role::Admin.initial_points(), 999);
    }

    #[test]
    fn test_default_role() {
        assert_eq!(Role::default(), Role::Donor);
    }

    #[test]
    fn test_serde_matches_as_str() {
        for role in ALL_ROLES {
            let json = serde_json::to_string(role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
        }
    }
}
