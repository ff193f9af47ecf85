use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::auth::use_auth;
use crate::components::feedback::alert;
use crate::models::bookmark::BookmarkTarget;
use crate::navigation::LOGIN_PATH;
use crate::storage::client::{toggle_bookmark, BookmarkStore, HostedBookmarkStore};

/// Star button bound to one article's row in the bookmark table.
#[component]
pub fn BookmarkButton(target: BookmarkTarget) -> impl IntoView {
    let auth = use_auth();
    let state = auth.state;
    let config = auth.config().clone();
    let navigate = use_navigate();

    let bookmarked = RwSignal::new(false);
    let pending = RwSignal::new(false);
    let target = StoredValue::new(target);

    {
        let config = config.clone();
        Effect::new(move |_| {
            let Some(user) = state.with(|s| s.user().cloned()) else {
                bookmarked.set(false);
                return;
            };
            let url = target.with_value(|t| t.url.clone());
            let config = config.clone();
            spawn_local(async move {
                let result = match HostedBookmarkStore::from_config(&config) {
                    Ok(store) => store.is_bookmarked(user.id(), &url).await,
                    Err(e) => Err(e),
                };
                match result {
                    Ok(found) => {
                        let _ = bookmarked.try_set(found);
                    }
                    Err(e) => tracing::warn!("Could not check bookmark for {url}: {e}"),
                }
            });
        });
    }

    let on_click = move |_| {
        let Some(user) = state.with_untracked(|s| s.user().cloned()) else {
            navigate(LOGIN_PATH, Default::default());
            return;
        };
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        let currently = bookmarked.get_untracked();
        let target = target.get_value();
        let config = config.clone();
        spawn_local(async move {
            let result = match HostedBookmarkStore::from_config(&config) {
                Ok(store) => toggle_bookmark(&store, &user, &target, currently).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(now) => {
                    let _ = bookmarked.try_set(now);
                }
                Err(e) => {
                    tracing::warn!("Bookmark toggle failed for {}: {e}", target.url);
                    alert(&format!("Failed to update bookmark: {e}"));
                }
            }
            let _ = pending.try_set(false);
        });
    };

    view! {
        <button
            class="btn btn-ghost btn-sm btn-circle"
            disabled=move || pending.get()
            title=move || if bookmarked.get() { "Remove bookmark" } else { "Bookmark" }
            on:click=on_click
        >
            {move || if bookmarked.get() { "★" } else { "☆" }}
        </button>
    }
}
