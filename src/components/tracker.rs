use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::actions;
use crate::api::client::ApiClient;
use crate::auth::use_auth;
use crate::components::feedback::{ErrorNotice, Spinner};
use crate::models::tracker::{toggle_company, Company, CompanyUpdate, TrackerCategory, TrackerMatrix};
use crate::navigation::{Outcome, RouterNavigator};
use crate::rendering::dates::format_published;

/// Company × category matrix of recent big tech updates.
#[component]
pub fn BigTechTracker() -> impl IntoView {
    let config = use_auth().config().clone();
    let navigate = use_navigate();

    let matrix = RwSignal::new(TrackerMatrix::default());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let selected = RwSignal::new(None::<Company>);

    let fetch = move || {
        loading.set(true);
        error.set(None);
        let config = config.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = match ApiClient::new(&config) {
                Ok(api) => actions::load_matrix(&api, &RouterNavigator(navigate)).await,
                Err(e) => Outcome::Failed(e.to_string()),
            };
            match outcome {
                Outcome::Ready(data) => {
                    let _ = matrix.try_set(data);
                }
                Outcome::Failed(message) => {
                    let _ = error.try_set(Some(message));
                }
                Outcome::Redirected => {}
            }
            let _ = loading.try_set(false);
        });
    };

    {
        let fetch = fetch.clone();
        Effect::new(move |_| fetch());
    }
    let retry = Callback::new(move |_: ()| fetch());

    view! {
        <div class="max-w-6xl mx-auto p-4 space-y-6">
            <h1 class="text-3xl font-bold">"Big Tech Tracker"</h1>
            <div class="flex flex-wrap gap-2">
                {Company::ALL
                    .iter()
                    .map(|company| {
                        let company = *company;
                        view! {
                            <button
                                class=move || {
                                    if selected.get() == Some(company) {
                                        "btn btn-sm btn-primary"
                                    } else {
                                        "btn btn-sm btn-outline"
                                    }
                                }
                                on:click=move |_| selected.update(|s| *s = toggle_company(*s, company))
                            >
                                {company.as_str()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || {
                if loading.get() {
                    return view! { <Spinner label="Loading tracker..." /> }.into_any();
                }
                if let Some(message) = error.get() {
                    return view! { <ErrorNotice message=message on_retry=retry /> }.into_any();
                }
                let current = selected.get();
                matrix
                    .with(|m| {
                        TrackerCategory::ALL
                            .iter()
                            .map(|category| {
                                let cards = m.section(*category, current);
                                view! { <TrackerSection category=*category cards=cards /> }
                            })
                            .collect_view()
                    })
                    .into_any()
            }}
        </div>
    }
}

#[component]
fn TrackerSection(category: TrackerCategory, cards: Vec<(Company, CompanyUpdate)>) -> impl IntoView {
    let empty = cards.is_empty();
    view! {
        <section class="space-y-3">
            <h2 class="text-xl font-semibold">{category.label()}</h2>
            {empty.then(|| view! { <p class="text-gray-500">"No updates."</p> })}
            <div class="grid gap-4 md:grid-cols-3">
                {cards
                    .into_iter()
                    .map(|(company, update)| view! { <UpdateCard company=company update=update /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn UpdateCard(company: Company, update: CompanyUpdate) -> impl IntoView {
    let date = format_published(&update.date);
    view! {
        <div class="card bg-base-200 shadow">
            <div class="card-body gap-2">
                <span class="badge badge-primary">{company.as_str()}</span>
                <h3 class="font-semibold">{update.title}</h3>
                <p class="text-sm text-gray-300">{update.content}</p>
                <div class="flex justify-between text-xs text-gray-400">
                    <span>{date}</span>
                    <a href=update.source_url target="_blank" rel="noopener noreferrer" class="link">
                        "Source"
                    </a>
                </div>
            </div>
        </div>
    }
}
