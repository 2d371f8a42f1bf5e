//! Mock authentication flows
//!
//! Validates submissions, throttles login attempts through an injected
//! rate limiter, and fabricates the user and session records the demo
//! operates on. There is no account store: any well-formed login
//! authenticates, and signup invents the account on the spot.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use uuid::Uuid;

use foodshare_common::sanitize::{sanitize_email, sanitize_name, sanitize_username};
use foodshare_common::{FormVerdict, LoginForm, RateLimiter, SignupForm};

use crate::roles::Role;

/// A signed-in platform user, fabricated at login or signup
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub role: Role,
    pub points: u32,
}

/// An authenticated session for one user
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub user: User,
    /// Opaque random token; there is no server to redeem it against
    pub token: String,
    /// Unix timestamp (seconds) when the session was issued
    pub issued_at: i64,
}

impl Session {
    /// Issue a session for a freshly authenticated user
    #[must_use]
    pub fn issue(user: User) -> Self {
        Self {
            user,
            token: generate_session_token(),
            issued_at: current_timestamp(),
        }
    }
}

/// Why an auth flow was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The submission failed validation; no attempt was consumed
    Invalid(FormVerdict),
    /// Too many recent attempts for this email
    RateLimited {
        /// Seconds until the window ends, rounded up
        retry_after_secs: u64,
    },
}

/// Runs the mock login and signup flows
///
/// Owns the rate limiter that throttles login attempts. Construct one per
/// authenticating component and inject the limiter configuration; there
/// is no shared global instance.
#[derive(Debug)]
pub struct Authenticator {
    limiter: RateLimiter,
}

impl Authenticator {
    /// Create an authenticator around the given rate limiter
    #[must_use]
    pub fn new(limiter: RateLimiter) -> Self {
        Self { limiter }
    }

    /// Log a user in with mock credentials
    ///
    /// The submission is validated first; a submission that fails
    /// validation is reported without consuming a rate-limit attempt.
    /// Well-formed submissions consume one attempt each, keyed by the
    /// sanitized email, and any validated credential pair authenticates.
    /// The fabricated user takes the sanitized email as its display name
    /// and the starting points of `role`.
    ///
    /// Successful logins do not clear the attempt window; use
    /// [`Authenticator::reset_attempts`] for that.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Invalid` with the field verdict, or
    /// `AuthError::RateLimited` with the seconds left in the window.
    pub fn login(&self, form: &LoginForm, role: Role) -> Result<Session, AuthError> {
        let verdict = form.validate();
        if !verdict.is_valid() {
            return Err(AuthError::Invalid(verdict));
        }

        let email = sanitize_email(&form.email);
        if !self.limiter.can_attempt(&email) {
            return Err(AuthError::RateLimited {
                retry_after_secs: self.limiter.remaining_secs(&email),
            });
        }

        // Mock credential check: every validated pair passes
        let user = User {
            id: Uuid::new_v4(),
            name: email.clone(),
            email,
            username: None,
            role,
            points: role.initial_points(),
        };
        Ok(Session::issue(user))
    }

    /// Create an account and log the new user in
    ///
    /// Signup is not rate-limited; the limiter guards only the login
    /// flow. Field values are sanitized before they land on the user
    /// record, and a blank username is treated as none at all.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Invalid` with the field verdict.
    pub fn signup(&self, form: &SignupForm, role: Role) -> Result<Session, AuthError> {
        let verdict = form.validate();
        if !verdict.is_valid() {
            return Err(AuthError::Invalid(verdict));
        }

        let username = form
            .username
            .as_deref()
            .filter(|username| !username.is_empty())
            .map(sanitize_username);
        let user = User {
            id: Uuid::new_v4(),
            name: sanitize_name(&form.name),
            email: sanitize_email(&form.email),
            username,
            role,
            points: role.initial_points(),
        };
        Ok(Session::issue(user))
    }

    /// Clear the attempt window for an email, unblocking further logins
    pub fn reset_attempts(&self, email: &str) {
        self.limiter.reset(&sanitize_email(email));
    }
}

/// Generate a random session token (16 hex characters)
fn generate_session_token() -> String {
    use rand::RngExt;
    let bytes: [u8; 8] = rand::rng().random();
    hex::encode(bytes)
}

/// Get current Unix timestamp in seconds
fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time should be after UNIX_EPOCH")
        .as_secs() as i64
}
