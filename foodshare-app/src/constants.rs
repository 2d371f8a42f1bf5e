//! Application-wide constants
//!
//! User-facing strings for the demo binary. Validation and flow messages
//! come from the shared catalog instead; these cover only the CLI's own
//! chrome.

/// Banner printed at startup, version appended
pub const MSG_BANNER: &str = "FoodShare v";

/// Landing page header
pub const MSG_LANDING_HEADER: &str = "Welcome to FoodShare";

/// Role picker header
pub const MSG_ROLE_PICKER: &str = "Choose how you want to help:";

/// Dashboard summary prefix
pub const MSG_DASHBOARD: &str = "Dashboard: ";

/// Prefix for the seconds remaining in a rate-limit window
pub const MSG_RETRY_SECONDS: &str = "Seconds until retry: ";

/// Demo step: malformed login submission
pub const MSG_DEMO_INVALID: &str = "Submitting a malformed login:";

/// Demo step: exhausting the attempt budget
pub const MSG_DEMO_LIMITER: &str = "Submitting rapid logins until the limiter refuses:";

/// Demo step: clearing the window after a lockout
pub const MSG_DEMO_RESET: &str = "Clearing the attempt window and retrying:";

/// Demo step: leaving the dashboard
pub const MSG_DEMO_LOGOUT: &str = "Logging out returns to the landing page";

/// Demo step: signup flow
pub const MSG_DEMO_SIGNUP: &str = "Signing up a new donor:";

/// Error prefix for an unrecognized action argument
pub const ERR_UNKNOWN_ACTION: &str = "Unknown action (expected login, signup, or demo): ";

/// Error prefix for an unrecognized role argument
pub const ERR_UNKNOWN_ROLE: &str =
    "Unknown role (expected donor, receiver, volunteer, or admin): ";

/// Error prefix when the session record cannot be rendered as JSON
pub const ERR_RENDER_SESSION: &str = "Failed to render session: ";
