use leptos::prelude::*;

/// Centered spinner with a caption.
#[component]
pub fn Spinner(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <div class="text-center p-8">
            <span class="loading loading-spinner loading-lg text-primary"></span>
            <p class="text-gray-400 mt-4">{label}</p>
        </div>
    }
}

/// Inline error with an optional manual retry.
#[component]
pub fn ErrorNotice(
    #[prop(into)] message: String,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="alert alert-error flex flex-col items-center gap-4 p-8 text-center">
            <p>"Error: " {message}</p>
            {on_retry.map(|retry| view! {
                <button class="btn btn-error btn-sm" on:click=move |_| retry.run(())>
                    "Try Again"
                </button>
            })}
        </div>
    }
}

/// Blocking browser alert. Used for bookmark write failures only.
pub fn alert(message: &str) {
    if let Err(e) = window().alert_with_message(message) {
        tracing::warn!("Could not show alert: {:?}", e);
    }
}
