//! FoodShare Demo
//!
//! A small command-line walkthrough of the FoodShare signup and login
//! flows: form validation, login throttling, and the page transitions a
//! client would drive.

mod args;
mod auth;
mod constants;
mod roles;
mod view;

use std::process;

use clap::Parser;
use foodshare_common::{
    DEFAULT_MAX_ATTEMPTS, LoginForm, MessageCatalog, MessageKey, RateLimiter, SignupForm,
};

use args::{Action, Args};
use auth::{AuthError, Authenticator, Session};
use constants::*;
use roles::{ALL_ROLES, Role};
use view::{AppView, Page};

fn main() {
    let args = Args::parse();

    println!("{}{}", MSG_BANNER, env!("CARGO_PKG_VERSION"));

    let Some(action) = Action::parse(&args.action) else {
        eprintln!("{}{}", ERR_UNKNOWN_ACTION, args.action);
        process::exit(1);
    };
    let Some(role) = Role::parse(&args.role) else {
        eprintln!("{}{}", ERR_UNKNOWN_ROLE, args.role);
        process::exit(1);
    };

    let catalog = MessageCatalog::new();
    let ok = match action {
        Action::Login => run_login(&args, role, &catalog),
        Action::Signup => run_signup(&args, role, &catalog),
        Action::Demo => run_demo(&catalog, args.debug),
    };

    if !ok {
        process::exit(1);
    }
}

/// Submit the login flags and report the outcome
fn run_login(args: &Args, role: Role, catalog: &MessageCatalog) -> bool {
    let auth = Authenticator::new(RateLimiter::default());
    let mut view = AppView::new();
    view.navigate(Page::Auth, Some(role));

    let form = LoginForm {
        email: args.email.clone(),
        password: args.password.clone(),
    };

    if args.debug {
        eprintln!("Validating login for: {} ({})", form.email, role.as_str());
    }

    match auth.login(&form, view.selected_role()) {
        Ok(session) => {
            println!("{}", catalog.message(MessageKey::LoginSuccess));
            print_session(&session);
            view.complete_auth(session.user);
            print_dashboard(&view);
            true
        }
        Err(error) => {
            report_auth_failure(&error, MessageKey::LoginFailed, catalog);
            false
        }
    }
}

/// Submit the signup flags and report the outcome
fn run_signup(args: &Args, role: Role, catalog: &MessageCatalog) -> bool {
    let auth = Authenticator::new(RateLimiter::default());
    let mut view = AppView::new();
    view.navigate(Page::Auth, Some(role));

    let form = SignupForm {
        name: args.name.clone(),
        email: args.email.clone(),
        password: args.password.clone(),
        confirm_password: args.confirm_password.clone(),
        username: args.username.clone(),
    };

    if args.debug {
        eprintln!("Validating signup for: {} ({})", form.email, role.as_str());
    }

    match auth.signup(&form, view.selected_role()) {
        Ok(session) => {
            println!("{}", catalog.message(MessageKey::SignupSuccess));
            print_session(&session);
            view.complete_auth(session.user);
            print_dashboard(&view);
            true
        }
        Err(error) => {
            report_auth_failure(&error, MessageKey::SignupFailed, catalog);
            false
        }
    }
}

/// Scripted tour: the landing page, a malformed login, a lockout, an
/// attempt reset, and finally a signup
fn run_demo(catalog: &MessageCatalog, debug: bool) -> bool {
    let auth = Authenticator::new(RateLimiter::default());
    let mut view = AppView::new();

    println!("{}", MSG_LANDING_HEADER);
    println!("{}", MSG_ROLE_PICKER);
    for role in ALL_ROLES {
        println!(
            "  {:<13} {} (starts with {} points)",
            role.display_name(),
            role.description(),
            role.initial_points()
        );
    }

    view.navigate(Page::Auth, Some(Role::Volunteer));

    println!();
    println!("{}", MSG_DEMO_INVALID);
    let malformed = LoginForm {
        email: "volunteer(at)example.com".to_string(),
        password: String::new(),
    };
    match auth.login(&malformed, view.selected_role()) {
        Err(error) => report_auth_failure(&error, MessageKey::LoginFailed, catalog),
        Ok(_) => {
            eprintln!("malformed login unexpectedly succeeded");
            return false;
        }
    }

    println!();
    println!("{}", MSG_DEMO_LIMITER);
    let form = LoginForm {
        email: "volunteer@example.com".to_string(),
        password: "FreshBread42$".to_string(),
    };
    for attempt in 1..=DEFAULT_MAX_ATTEMPTS {
        match auth.login(&form, view.selected_role()) {
            Ok(session) => {
                println!(
                    "  attempt {}: {}",
                    attempt,
                    catalog.message(MessageKey::LoginSuccess)
                );
                if debug {
                    eprintln!("  token {} issued at {}", session.token, session.issued_at);
                }
            }
            Err(error) => {
                report_auth_failure(&error, MessageKey::LoginFailed, catalog);
                return false;
            }
        }
    }
    match auth.login(&form, view.selected_role()) {
        Err(error) => report_auth_failure(&error, MessageKey::LoginFailed, catalog),
        Ok(_) => {
            eprintln!(
                "limiter failed to refuse attempt {}",
                DEFAULT_MAX_ATTEMPTS + 1
            );
            return false;
        }
    }

    println!();
    println!("{}", MSG_DEMO_RESET);
    auth.reset_attempts(&form.email);
    match auth.login(&form, view.selected_role()) {
        Ok(session) => {
            println!("{}", catalog.message(MessageKey::LoginSuccess));
            view.complete_auth(session.user);
            print_dashboard(&view);
        }
        Err(error) => {
            report_auth_failure(&error, MessageKey::LoginFailed, catalog);
            return false;
        }
    }

    println!();
    println!("{}", MSG_DEMO_LOGOUT);
    view.logout();
    if debug {
        eprintln!(
            "  page now {:?}, role still {:?}",
            view.page(),
            view.selected_role()
        );
    }

    println!();
    println!("{}", MSG_DEMO_SIGNUP);
    view.navigate(Page::Auth, Some(Role::Donor));
    let signup = SignupForm {
        name: "Casey Community".to_string(),
        email: "casey@foodshare.org".to_string(),
        password: "FreshBread42$".to_string(),
        confirm_password: "FreshBread42$".to_string(),
        username: Some("casey_c".to_string()),
    };
    match auth.signup(&signup, view.selected_role()) {
        Ok(session) => {
            println!("{}", catalog.message(MessageKey::SignupSuccess));
            print_session(&session);
            view.complete_auth(session.user);
            print_dashboard(&view);
            true
        }
        Err(error) => {
            report_auth_failure(&error, MessageKey::SignupFailed, catalog);
            false
        }
    }
}

/// Print the issued session as pretty JSON
fn print_session(session: &Session) {
    match serde_json::to_string_pretty(session) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("{ERR_RENDER_SESSION}{e}"),
    }
}

/// Print the dashboard line for the signed-in user
fn print_dashboard(view: &AppView) {
    if let Some(user) = view.user() {
        println!(
            "{}{} ({}), {} points",
            MSG_DASHBOARD,
            user.name,
            user.role.display_name(),
            user.points
        );
    }
}

/// Report an auth failure on stderr, one line per failed field
fn report_auth_failure(error: &AuthError, flow_key: MessageKey, catalog: &MessageCatalog) {
    match error {
        AuthError::Invalid(verdict) => {
            for (field, key) in &verdict.errors {
                eprintln!("  {}: {}", field, catalog.message(*key));
            }
        }
        AuthError::RateLimited { retry_after_secs } => {
            eprintln!("{}", catalog.message(MessageKey::RateLimitExceeded));
            eprintln!("{MSG_RETRY_SECONDS}{retry_after_secs}");
        }
    }
    eprintln!("{}", catalog.message(flow_key));
}
