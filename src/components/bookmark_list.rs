use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::actions;
use crate::auth::use_auth;
use crate::components::feedback::{alert, ErrorNotice, Spinner};
use crate::models::bookmark::Bookmark;
use crate::navigation::{Outcome, RouterNavigator};
use crate::storage::client::{toggle_bookmark, HostedBookmarkStore};

/// The signed-in user's bookmarks, newest first.
#[component]
pub fn BookmarkList() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state;
    let config = auth.config().clone();
    let navigate = use_navigate();

    let bookmarks = RwSignal::new(Vec::<Bookmark>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let fetch = {
        let config = config.clone();
        move || {
            let Some(user) = state.with_untracked(|s| s.user().cloned()) else {
                return;
            };
            loading.set(true);
            error.set(None);
            let config = config.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                let outcome = match HostedBookmarkStore::from_config(&config) {
                    Ok(store) => actions::load_bookmarks(&store, &RouterNavigator(navigate), &user).await,
                    Err(e) => Outcome::Failed(e.to_string()),
                };
                match outcome {
                    Outcome::Ready(rows) => {
                        let _ = bookmarks.try_set(rows);
                    }
                    Outcome::Failed(message) => {
                        let _ = error.try_set(Some(message));
                    }
                    Outcome::Redirected => {}
                }
                let _ = loading.try_set(false);
            });
        }
    };

    {
        let fetch = fetch.clone();
        Effect::new(move |_| {
            if state.with(|s| s.user().is_some()) {
                fetch();
            }
        });
    }
    let retry = Callback::new(move |_: ()| fetch());

    let remove = Callback::new(move |bookmark: Bookmark| {
        let Some(user) = state.with_untracked(|s| s.user().cloned()) else {
            return;
        };
        let config = config.clone();
        spawn_local(async move {
            let result = match HostedBookmarkStore::from_config(&config) {
                Ok(store) => toggle_bookmark(&store, &user, &bookmark.target(), true).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(_) => {
                    let _ = bookmarks.try_update(|rows| rows.retain(|b| b.id != bookmark.id));
                }
                Err(e) => alert(&format!("Failed to update bookmark: {e}")),
            }
        });
    });

    view! {
        <div class="max-w-3xl mx-auto p-4 space-y-6">
            <h1 class="text-3xl font-bold">"Bookmarks"</h1>
            {move || {
                if loading.get() {
                    return view! { <Spinner label="Loading bookmarks..." /> }.into_any();
                }
                if let Some(message) = error.get() {
                    return view! { <ErrorNotice message=message on_retry=retry /> }.into_any();
                }
                let rows = bookmarks.get();
                if rows.is_empty() {
                    return view! { <p class="text-gray-400">"No bookmarks yet."</p> }.into_any();
                }
                view! {
                    <ul class="space-y-3">
                        {rows
                            .into_iter()
                            .map(|bookmark| view! { <BookmarkRow bookmark=bookmark on_remove=remove /> })
                            .collect_view()}
                    </ul>
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
fn BookmarkRow(bookmark: Bookmark, on_remove: Callback<Bookmark>) -> impl IntoView {
    let saved = bookmark.created_at.format("%b %-d, %Y").to_string();
    let url = bookmark.article_url.clone();
    let title = bookmark.article_title.clone();
    let meta = format!("{} • {}", bookmark.article_source, bookmark.article_category);
    let bookmark = StoredValue::new(bookmark);

    view! {
        <li class="card bg-base-200">
            <div class="card-body flex-row items-center justify-between gap-4">
                <div>
                    <a href=url target="_blank" rel="noopener noreferrer" class="link link-hover font-semibold">
                        {title}
                    </a>
                    <p class="text-sm text-gray-400">{meta} " • saved " {saved}</p>
                </div>
                <button class="btn btn-ghost btn-sm" on:click=move |_| on_remove.run(bookmark.get_value())>
                    "Remove"
                </button>
            </div>
        </li>
    }
}
