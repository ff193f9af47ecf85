use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::actions;
use crate::api::client::ApiClient;
use crate::auth::use_auth;
use crate::navigation::{Outcome, RouterNavigator};
use crate::rendering::markdown::render_markdown;

/// Topic in, generated Markdown article out.
#[component]
pub fn ArticleWriter() -> impl IntoView {
    let config = use_auth().config().clone();
    let navigate = use_navigate();

    let topic = RwSignal::new(String::new());
    let article = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let generating = RwSignal::new(false);
    let probe_message = RwSignal::new(None::<String>);
    let probing = RwSignal::new(false);

    let generate = {
        let config = config.clone();
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if generating.get_untracked() {
                return;
            }
            let text = topic.get_untracked();
            let config = config.clone();
            let navigate = navigate.clone();
            generating.set(true);
            error.set(None);
            spawn_local(async move {
                let outcome = match ApiClient::new(&config) {
                    Ok(api) => actions::generate_article(&api, &RouterNavigator(navigate), &text).await,
                    Err(e) => Some(Outcome::Failed(e.to_string())),
                };
                match outcome {
                    Some(Outcome::Ready(body)) => {
                        let _ = article.try_set(Some(body));
                    }
                    Some(Outcome::Failed(message)) => {
                        let _ = error.try_set(Some(message));
                    }
                    Some(Outcome::Redirected) | None => {}
                }
                let _ = generating.try_set(false);
            });
        }
    };

    let test_connection = move |_| {
        let config = config.clone();
        let navigate = navigate.clone();
        probing.set(true);
        spawn_local(async move {
            let outcome = match ApiClient::new(&config) {
                Ok(api) => actions::probe(&api, &RouterNavigator(navigate)).await,
                Err(e) => Outcome::Failed(e.to_string()),
            };
            let line = match outcome {
                Outcome::Ready(message) => Some(format!("API says: {message}")),
                Outcome::Failed(message) => Some(format!("Connection failed: {message}")),
                Outcome::Redirected => None,
            };
            let _ = probe_message.try_set(line);
            let _ = probing.try_set(false);
        });
    };

    view! {
        <div class="max-w-3xl mx-auto p-4 space-y-6">
            <h1 class="text-3xl font-bold">"AI Article Writer"</h1>
            <form class="flex gap-2" on:submit=generate>
                <input
                    type="text"
                    class="input input-bordered flex-1"
                    placeholder="Enter a topic..."
                    on:input=move |ev| topic.set(event_target_value(&ev))
                    prop:value=move || topic.get()
                />
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || generating.get() || topic.with(|t| t.trim().is_empty())
                >
                    {move || if generating.get() { "Generating..." } else { "Generate" }}
                </button>
            </form>
            <div class="flex items-center gap-3">
                <button class="btn btn-outline btn-sm" disabled=move || probing.get() on:click=test_connection>
                    "Test API Connection"
                </button>
                {move || probe_message.get().map(|m| view! { <span class="text-sm">{m}</span> })}
            </div>
            {move || error.get().map(|e| view! { <div class="alert alert-error">{e}</div> })}
            {move || article.get().map(|body| view! {
                <div class="prose prose-invert max-w-none" inner_html=render_markdown(&body)></div>
            })}
        </div>
    }
}
