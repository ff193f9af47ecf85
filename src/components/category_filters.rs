use leptos::prelude::*;

use crate::models::article::FEED_CATEGORIES;

#[component]
pub fn CategoryFilters(selected: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {FEED_CATEGORIES
                .iter()
                .map(|category| {
                    let category = *category;
                    view! {
                        <button
                            class=move || {
                                if selected.with(|s| s == category) {
                                    "btn btn-sm btn-primary rounded-full"
                                } else {
                                    "btn btn-sm btn-ghost rounded-full"
                                }
                            }
                            on:click=move |_| selected.set(category.to_string())
                        >
                            {category}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
