//! FoodShare Common Library
//!
//! Shared validation, sanitization, rate limiting, and the user-facing
//! message catalog for the FoodShare auth flows. Everything here is pure
//! or locally stateful; there is no I/O.

pub mod forms;
pub mod messages;
pub mod rate_limit;
pub mod sanitize;
pub mod validators;

pub use forms::{FormField, FormVerdict, LoginForm, SignupForm};
pub use messages::{ALL_MESSAGE_KEYS, MessageCatalog, MessageKey};
pub use rate_limit::{DEFAULT_ATTEMPT_WINDOW, DEFAULT_MAX_ATTEMPTS, RateLimiter};
