use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::auth::guard::{GuardView, LoginGuard};
use crate::auth::use_auth;
use crate::components::feedback::Spinner;
use crate::navigation::RouterNavigator;

/// Renders `children` only for a signed-in user.
///
/// While the session resolves a spinner is shown; an anonymous visitor is
/// sent to the login page once, with `return_to` as the way back.
#[component]
pub fn Protected(#[prop(into)] return_to: String, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let state = auth.state;
    let navigator = RouterNavigator(use_navigate());

    let mut guard = LoginGuard::new(return_to);
    Effect::new(move |_| {
        state.track();
        guard.observe_store(auth.store(), &navigator);
    });

    let view_state = Memo::new(move |_| state.with(GuardView::for_state));

    move || match view_state.get() {
        GuardView::Placeholder => view! { <Spinner label="Loading..." /> }.into_any(),
        GuardView::Content(_) => children().into_any(),
        GuardView::Hidden => ().into_any(),
    }
}
