use leptos::prelude::*;

/// Free-text filter for the feed, with a clear button while non-empty.
#[component]
pub fn SearchBar(search_term: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="search-container relative w-full max-w-3xl mx-auto">
            <input
                type="text"
                placeholder="Search articles..."
                class="input input-bordered w-full"
                on:input=move |ev| search_term.set(event_target_value(&ev))
                prop:value=move || search_term.get()
            />
            <Show when=move || search_term.with(|term| !term.is_empty())>
                <button
                    class="btn btn-ghost btn-circle btn-sm absolute right-3 top-1/2 -translate-y-1/2"
                    title="Clear search"
                    on:click=move |_| search_term.set(String::new())
                >
                    "×"
                </button>
            </Show>
        </div>
    }
}
