use crate::auth::models::{SessionState, SessionUser};
use crate::auth::session::SessionStore;
use crate::navigation::{login_path, Navigator};

/// What a protected page renders for a given session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardView {
    /// Session still resolving: show a spinner, decide nothing yet.
    Placeholder,
    /// Signed in: render the protected content.
    Content(SessionUser),
    /// Signed out: the guard has redirected (or is about to); render nothing.
    Hidden,
}

impl GuardView {
    pub fn for_state(state: &SessionState) -> Self {
        match state {
            SessionState::Loading => GuardView::Placeholder,
            SessionState::Authenticated(user) => GuardView::Content(user.clone()),
            SessionState::Anonymous => GuardView::Hidden,
        }
    }
}

/// Redirect latch of one protected page.
///
/// Never redirects while the session is loading; redirects to the login
/// page the first time an anonymous session is observed and never again.
#[derive(Debug, Clone)]
pub struct LoginGuard {
    return_to: String,
    redirected: bool,
}

impl LoginGuard {
    pub fn new(return_to: impl Into<String>) -> Self {
        Self {
            return_to: return_to.into(),
            redirected: false,
        }
    }

    pub fn has_redirected(&self) -> bool {
        self.redirected
    }

    /// Feed the latest session state. Returns `true` if this call navigated.
    pub fn observe(&mut self, state: &SessionState, navigator: &dyn Navigator) -> bool {
        if self.redirected || !matches!(state, SessionState::Anonymous) {
            return false;
        }
        self.redirected = true;
        tracing::info!("Not signed in, leaving {} for the login page", self.return_to);
        navigator.navigate(&login_path(Some(&self.return_to)));
        true
    }

    /// [`LoginGuard::observe`] on the store's current state. An anonymous
    /// state left by an explicit sign-out latches without navigating, since
    /// the sign-out already went to the login page.
    pub fn observe_store(&mut self, store: &SessionStore, navigator: &dyn Navigator) -> bool {
        if store.signed_out() {
            self.redirected = true;
            return false;
        }
        self.observe(&store.state(), navigator)
    }
}
