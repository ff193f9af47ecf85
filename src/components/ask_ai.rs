use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::actions;
use crate::api::client::ApiClient;
use crate::auth::use_auth;
use crate::models::article::Article;
use crate::navigation::{Outcome, RouterNavigator};
use crate::rendering::markdown::render_plain_paragraphs;

/// Modal for asking a question about one article.
#[component]
pub fn AskAiModal(article: Article, on_close: Callback<()>) -> impl IntoView {
    let config = use_auth().config().clone();
    let navigate = use_navigate();
    let title = article.title.clone();
    let article = StoredValue::new(article);

    let question = RwSignal::new(String::new());
    let answer = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let asking = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = question.get_untracked();
        if text.trim().is_empty() || asking.get_untracked() {
            return;
        }
        asking.set(true);
        answer.set(None);
        error.set(None);
        let article = article.get_value();
        let config = config.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = match ApiClient::new(&config) {
                Ok(api) => {
                    actions::ask_question(&api, &RouterNavigator(navigate), &text, &article).await
                }
                Err(e) => Some(Outcome::Failed(e.to_string())),
            };
            match outcome {
                Some(Outcome::Ready(text)) => {
                    let _ = answer.try_set(Some(text));
                }
                Some(Outcome::Failed(message)) => {
                    let _ = error.try_set(Some(message));
                }
                Some(Outcome::Redirected) | None => {}
            }
            let _ = asking.try_set(false);
        });
    };

    view! {
        <div class="modal modal-open">
            <div class="modal-box max-w-2xl">
                <h3 class="font-bold text-lg">"Ask AI about: " {title}</h3>
                <form class="flex gap-2 mt-4" on:submit=submit>
                    <input
                        type="text"
                        class="input input-bordered flex-1"
                        placeholder="What would you like to know?"
                        on:input=move |ev| question.set(event_target_value(&ev))
                        prop:value=move || question.get()
                    />
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || asking.get() || question.with(|q| q.trim().is_empty())
                    >
                        {move || if asking.get() { "Asking..." } else { "Ask" }}
                    </button>
                </form>
                {move || error.get().map(|e| view! {
                    <div class="alert alert-error mt-4">{e}</div>
                })}
                {move || answer.get().map(|text| view! {
                    <div class="mt-4 space-y-2">
                        {render_plain_paragraphs(&text)
                            .into_iter()
                            .map(|p| view! { <p class="whitespace-pre-line">{p}</p> })
                            .collect_view()}
                    </div>
                })}
                <div class="modal-action">
                    <button class="btn" on:click=move |_| on_close.run(())>"Close"</button>
                </div>
            </div>
        </div>
    }
}
