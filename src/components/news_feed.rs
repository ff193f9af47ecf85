use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::actions;
use crate::api::client::ApiClient;
use crate::auth::use_auth;
use crate::components::article_card::ArticleCard;
use crate::components::ask_ai::AskAiModal;
use crate::components::category_filters::CategoryFilters;
use crate::components::feedback::{ErrorNotice, Spinner};
use crate::components::search_bar::SearchBar;
use crate::models::article::{filter_articles, Article, ArticleFilter, ALL_CATEGORIES};
use crate::navigation::{Outcome, RouterNavigator};

/// The home feed: fetched once a user is present, filtered locally.
#[component]
pub fn NewsFeed() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state;
    let config = auth.config().clone();
    let navigate = use_navigate();

    let articles = RwSignal::new(Vec::<Article>::new());
    let loading = RwSignal::new(true);
    let refreshing = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let search_term = RwSignal::new(String::new());
    let category = RwSignal::new(ALL_CATEGORIES.to_string());
    let selected = RwSignal::new(None::<Article>);

    let filtered = Memo::new(move |_| {
        let filter = ArticleFilter::new(search_term.get(), category.get());
        articles.with(|all| filter_articles(all, &filter))
    });

    let fetch = move || {
        if articles.with_untracked(Vec::is_empty) {
            loading.set(true);
        } else {
            refreshing.set(true);
        }
        error.set(None);
        let config = config.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = match ApiClient::new(&config) {
                Ok(api) => actions::load_news(&api, &RouterNavigator(navigate)).await,
                Err(e) => Outcome::Failed(e.to_string()),
            };
            match outcome {
                Outcome::Ready(list) => {
                    let _ = articles.try_set(list);
                }
                Outcome::Failed(message) => {
                    let _ = error.try_set(Some(message));
                }
                Outcome::Redirected => {}
            }
            let _ = loading.try_set(false);
            let _ = refreshing.try_set(false);
        });
    };

    {
        let fetch = fetch.clone();
        Effect::new(move |fetched: Option<bool>| {
            let has_user = state.with(|s| s.user().is_some());
            let already = fetched.unwrap_or(false);
            if has_user && !already {
                fetch();
            }
            already || has_user
        });
    }

    let retry = {
        let fetch = fetch.clone();
        Callback::new(move |_: ()| fetch())
    };

    let ask = Callback::new(move |article: Article| selected.set(Some(article)));
    let close = Callback::new(move |_: ()| selected.set(None));

    view! {
        <div class="max-w-5xl mx-auto p-4 space-y-6">
            <div class="flex items-center justify-between gap-4">
                <h1 class="text-3xl font-bold">"Latest Tech News"</h1>
                <button
                    class="btn btn-outline btn-sm"
                    disabled=move || loading.get() || refreshing.get()
                    on:click=move |_| fetch()
                >
                    {move || if refreshing.get() { "Refreshing..." } else { "Refresh" }}
                </button>
            </div>
            <SearchBar search_term=search_term />
            <CategoryFilters selected=category />
            {move || {
                if loading.get() {
                    return view! { <Spinner label="Loading articles..." /> }.into_any();
                }
                if let Some(message) = error.get() {
                    return view! { <ErrorNotice message=message on_retry=retry /> }.into_any();
                }
                let list = filtered.get();
                if list.is_empty() {
                    return view! {
                        <p class="text-center text-gray-400 p-8">"No articles match your filters."</p>
                    }
                    .into_any();
                }
                view! {
                    <div class="grid gap-4 md:grid-cols-2">
                        {list
                            .into_iter()
                            .map(|article| view! { <ArticleCard article=article on_ask=ask /> })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
            {move || selected.get().map(|article| view! {
                <AskAiModal article=article on_close=close />
            })}
        </div>
    }
}
