use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};

use crate::auth::use_auth;
use crate::navigation::{RouterNavigator, LOGIN_PATH};

const LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/writer", "Writer"),
    ("/bookmarks", "Bookmarks"),
    ("/big-tech", "Big Tech"),
    ("/companies", "Companies"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let session = auth.clone();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let sign_out = move |_| {
        let auth = auth.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            if let Err(e) = auth.sign_out(&RouterNavigator(navigate)).await {
                tracing::error!("Sign out failed: {e}");
            }
        });
    };

    view! {
        <nav class="navbar bg-base-300 px-4">
            <div class="flex-1 gap-2">
                <a href="/" class="text-xl font-bold mr-4">"Signal7"</a>
                {LINKS
                    .iter()
                    .map(|(href, label)| {
                        let href = *href;
                        view! {
                            <a
                                href=href
                                class=move || {
                                    if pathname.with(|p| p == href) {
                                        "btn btn-ghost btn-sm btn-active"
                                    } else {
                                        "btn btn-ghost btn-sm"
                                    }
                                }
                            >
                                {*label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="flex-none gap-2">
                {move || {
                    if session.is_loading() {
                        return view! { <span class="loading loading-dots loading-sm"></span> }
                            .into_any();
                    }
                    match session.user() {
                        Some(user) => {
                            let sign_out = sign_out.clone();
                            view! {
                                <span class="text-sm mr-2">{user.username}</span>
                                <button class="btn btn-outline btn-sm" on:click=sign_out>"Sign out"</button>
                            }
                            .into_any()
                        }
                        None => view! { <a href=LOGIN_PATH class="btn btn-primary btn-sm">"Sign in"</a> }
                            .into_any(),
                    }
                }}
            </div>
        </nav>
    }
}
