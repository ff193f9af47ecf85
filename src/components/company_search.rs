use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::actions;
use crate::api::client::ApiClient;
use crate::auth::use_auth;
use crate::components::feedback::Spinner;
use crate::models::company::CompanyProfile;
use crate::navigation::{Outcome, RouterNavigator};

#[component]
pub fn CompanySearch() -> impl IntoView {
    let config = use_auth().config().clone();
    let navigate = use_navigate();

    let query = RwSignal::new(String::new());
    let results = RwSignal::new(Vec::<CompanyProfile>::new());
    let searched = RwSignal::new(false);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let search = move || {
        let text = query.get_untracked();
        if text.trim().is_empty() || loading.get_untracked() {
            return;
        }
        let config = config.clone();
        let navigate = navigate.clone();
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            let outcome = match ApiClient::new(&config) {
                Ok(api) => actions::search_companies(&api, &RouterNavigator(navigate), &text).await,
                Err(e) => Some(Outcome::Failed(e.to_string())),
            };
            match outcome {
                Some(Outcome::Ready(rows)) => {
                    let _ = results.try_set(rows);
                    let _ = searched.try_set(true);
                }
                Some(Outcome::Failed(message)) => {
                    let _ = error.try_set(Some(message));
                }
                Some(Outcome::Redirected) | None => {}
            }
            let _ = loading.try_set(false);
        });
    };

    let on_key = {
        let search = search.clone();
        move |ev: leptos::ev::KeyboardEvent| {
            if ev.key() == "Enter" {
                search();
            }
        }
    };

    view! {
        <div class="max-w-3xl mx-auto p-4 space-y-6">
            <h1 class="text-3xl font-bold">"Company Search"</h1>
            <div class="flex gap-2">
                <input
                    type="text"
                    class="input input-bordered flex-1"
                    placeholder="Search companies..."
                    on:input=move |ev| query.set(event_target_value(&ev))
                    on:keydown=on_key
                    prop:value=move || query.get()
                />
                <button
                    class="btn btn-primary"
                    disabled=move || loading.get()
                    on:click=move |_| search()
                >
                    "Search"
                </button>
            </div>
            {move || {
                if loading.get() {
                    return view! { <Spinner label="Searching..." /> }.into_any();
                }
                if let Some(message) = error.get() {
                    return view! { <div class="alert alert-error">{message}</div> }.into_any();
                }
                let rows = results.get();
                if searched.get() && rows.is_empty() {
                    return view! { <p class="text-gray-400">"No companies found."</p> }.into_any();
                }
                view! {
                    <div class="space-y-3">
                        {rows
                            .into_iter()
                            .map(|company| view! { <CompanyRow company=company /> })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
fn CompanyRow(company: CompanyProfile) -> impl IntoView {
    let meta = company.meta_line();
    view! {
        <div class="card bg-base-200">
            <div class="card-body gap-1">
                <h2 class="card-title">{company.name}</h2>
                <p class="text-sm text-gray-400">{meta}</p>
                <p>{company.description}</p>
            </div>
        </div>
    }
}
