use leptos_router::NavigateOptions;

use crate::error::AppError;

/// Route of the sign-in page.
pub const LOGIN_PATH: &str = "/login";

/// Client-side navigation, abstracted so redirect decisions can be tested
/// without a router.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// [`Navigator`] backed by the function returned from `leptos_router::hooks::use_navigate`.
pub struct RouterNavigator<F>(pub F);

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, path: &str) {
        (self.0)(path, NavigateOptions::default());
    }
}

/// Login route, optionally carrying the page to come back to.
pub fn login_path(return_to: Option<&str>) -> String {
    match return_to.filter(|p| is_local_path(p)) {
        Some(path) if path != "/" => format!("{}?redirect={}", LOGIN_PATH, urlencoding::encode(path)),
        _ => LOGIN_PATH.to_string(),
    }
}

/// Where to go after a successful sign-in. Only same-site paths are followed.
pub fn redirect_target(raw: Option<&str>) -> String {
    raw.filter(|p| is_local_path(p))
        .map(String::from)
        .unwrap_or_else(|| "/".to_string())
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains('\\')
}

/// Result of a remote call once the uniform 401 policy has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Ready(T),
    /// Inline error text.
    Failed(String),
    /// The visitor was sent to the login page; render nothing.
    Redirected,
}

/// Apply the error policy: 401 navigates to the login page, everything else
/// becomes a display string.
pub fn settle<T>(result: Result<T, AppError>, navigator: &dyn Navigator) -> Outcome<T> {
    match result {
        Ok(value) => Outcome::Ready(value),
        Err(e) if e.is_unauthorized() => {
            tracing::info!("Session rejected by the API, redirecting to login");
            navigator.navigate(LOGIN_PATH);
            Outcome::Redirected
        }
        Err(e) => {
            tracing::warn!("Request failed: {e}");
            Outcome::Failed(e.to_string())
        }
    }
}
