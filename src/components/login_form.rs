use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::auth::models::Credentials;
use crate::auth::use_auth;
use crate::navigation::redirect_target;

/// Sign-in / sign-up form. On success it returns to the `redirect` query
/// parameter when that names a local path.
#[component]
pub fn LoginForm() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state;
    let query = use_query_map();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let registering = RwSignal::new(false);
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let destination = move || redirect_target(query.get_untracked().get("redirect").as_deref());

    // Visiting the page with a live session goes straight on.
    {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            if state.with(|s| s.user().is_some()) && !pending.get_untracked() {
                navigate(&destination(), Default::default());
            }
        });
    }

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let credentials = Credentials::new(username.get_untracked().trim(), password.get_untracked());
        if credentials.username.is_empty() || credentials.password.is_empty() {
            error.set(Some("Username and password are required".to_string()));
            return;
        }
        let sign_up = registering.get_untracked();
        let auth = auth.clone();
        let navigate = navigate.clone();
        pending.set(true);
        error.set(None);
        spawn_local(async move {
            let result = if sign_up {
                auth.sign_up(credentials).await
            } else {
                auth.sign_in(credentials).await
            };
            match result {
                Ok(user) => {
                    tracing::info!("Signed in as {}", user.username);
                    navigate(&destination(), Default::default());
                }
                Err(e) => {
                    let _ = error.try_set(Some(e.to_string()));
                }
            }
            let _ = pending.try_set(false);
        });
    };

    view! {
        <div class="flex justify-center p-8">
            <form class="card bg-base-200 w-full max-w-sm" on:submit=submit>
                <div class="card-body gap-4">
                    <h1 class="card-title text-2xl">
                        {move || if registering.get() { "Create account" } else { "Sign in" }}
                    </h1>
                    <input
                        type="text"
                        class="input input-bordered"
                        placeholder="Username"
                        autocomplete="username"
                        on:input=move |ev| username.set(event_target_value(&ev))
                        prop:value=move || username.get()
                    />
                    <input
                        type="password"
                        class="input input-bordered"
                        placeholder="Password"
                        on:input=move |ev| password.set(event_target_value(&ev))
                        prop:value=move || password.get()
                    />
                    {move || error.get().map(|e| view! { <div class="alert alert-error text-sm">{e}</div> })}
                    <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                        {move || match (pending.get(), registering.get()) {
                            (true, _) => "Please wait...",
                            (false, true) => "Sign up",
                            (false, false) => "Sign in",
                        }}
                    </button>
                    <button
                        type="button"
                        class="btn btn-link btn-sm"
                        on:click=move |_| registering.update(|r| *r = !*r)
                    >
                        {move || {
                            if registering.get() {
                                "Already have an account? Sign in"
                            } else {
                                "No account? Sign up"
                            }
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}
