//! Page navigation state
//!
//! Mirrors the three-page flow of the FoodShare UI: landing page with the
//! role picker, auth page, and the dashboard. The dashboard holds the
//! signed-in user and is only reachable by completing an auth flow.

use crate::auth::User;
use crate::roles::Role;

/// Pages of the single-window app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Landing page with the role picker
    Landing,
    /// Login/signup forms
    Auth,
    /// Signed-in dashboard
    Dashboard,
}

/// Top-level navigation state
#[derive(Debug)]
pub struct AppView {
    page: Page,
    selected_role: Role,
    user: Option<User>,
}

impl AppView {
    /// Start on the landing page with the default role preselected
    #[must_use]
    pub fn new() -> Self {
        Self {
            page: Page::Landing,
            selected_role: Role::default(),
            user: None,
        }
    }

    /// The page currently shown
    #[must_use]
    pub fn page(&self) -> Page {
        self.page
    }

    /// The role carried into the auth page
    #[must_use]
    pub fn selected_role(&self) -> Role {
        self.selected_role
    }

    /// The signed-in user, if any
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Handle a navigation request
    ///
    /// Only the landing and auth pages can be navigated to directly; the
    /// dashboard is reached through [`AppView::complete_auth`], so
    /// requests for it are ignored. Navigating to the auth page can carry
    /// a role selection from the landing page.
    pub fn navigate(&mut self, page: Page, role: Option<Role>) {
        match page {
            Page::Auth => {
                if let Some(role) = role {
                    self.selected_role = role;
                }
                self.page = Page::Auth;
            }
            Page::Landing => self.page = Page::Landing,
            Page::Dashboard => {}
        }
    }

    /// Store the authenticated user and show the dashboard
    pub fn complete_auth(&mut self, user: User) {
        self.user = Some(user);
        self.page = Page::Dashboard;
    }

    /// Drop the session and return to the landing page
    ///
    /// The role selection survives logout, so signing back in offers the
    /// same role again.
    pub fn logout(&mut self) {
        self.user = None;
        self.page = Page::Landing;
    }
}

impl Default for AppView {
    fn default() -> Self {
        Self::new()
    }
}
