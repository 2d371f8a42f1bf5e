//! Command-line argument parsing

use clap::Parser;

/// Actions the demo binary can run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Validate a login submission and issue a mock session
    Login,
    /// Validate a signup submission and issue a mock session
    Signup,
    /// Scripted tour of the auth flows
    Demo,
}

impl Action {
    /// Parse an action string.
    ///
    /// Returns Some(Action) if the string is valid, None otherwise.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "login" => Some(Action::Login),
            "signup" => Some(Action::Signup),
            "demo" => Some(Action::Demo),
            _ => None,
        }
    }
}

/// FoodShare Demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Action to run: login, signup, or demo
    pub action: String,

    /// Email address
    #[arg(short, long, default_value = "")]
    pub email: String,

    /// Password
    #[arg(short, long, default_value = "")]
    pub password: String,

    /// Password confirmation (signup only)
    #[arg(long, default_value = "")]
    pub confirm_password: String,

    /// Display name (signup only)
    #[arg(short, long, default_value = "")]
    pub name: String,

    /// Username (signup only, optional)
    #[arg(short, long)]
    pub username: Option<String>,

    /// Role to participate as
    #[arg(short, long, default_value = "donor")]
    pub role: String,

    /// Enable debug logging (shows each flow step)
    #[arg(long, default_value = "false")]
    pub debug: bool,
}
