use leptos::prelude::*;

use crate::components::bookmark_button::BookmarkButton;
use crate::models::article::Article;
use crate::models::bookmark::BookmarkTarget;
use crate::rendering::dates::format_published;

#[component]
pub fn ArticleCard(article: Article, on_ask: Callback<Article>) -> impl IntoView {
    let target = BookmarkTarget::from(&article);
    let published = article.published.as_deref().map(format_published);
    let summary = article.summary.clone().filter(|s| !s.trim().is_empty());
    let takeaway = article.key_takeaway.clone().filter(|s| !s.trim().is_empty());
    let url = article.url().to_string();
    let title = article.title.clone();
    let source = article.source.clone();
    let category = article.category.clone();
    let article = StoredValue::new(article);

    view! {
        <article class="card bg-base-200 shadow-md">
            <div class="card-body gap-3">
                <div class="flex items-start justify-between gap-2">
                    <h2 class="card-title text-lg">
                        <a href=url target="_blank" rel="noopener noreferrer" class="link link-hover">
                            {title}
                        </a>
                    </h2>
                    <BookmarkButton target=target />
                </div>
                <div class="flex flex-wrap items-center gap-2 text-sm text-gray-400">
                    <span>{source}</span>
                    {published.map(|p| view! { <span>"• " {p}</span> })}
                    <span class="badge badge-outline">{category}</span>
                </div>
                {summary.map(|s| view! { <p class="text-gray-300">{s}</p> })}
                {takeaway.map(|t| view! {
                    <p class="border-l-4 border-primary pl-3 italic">
                        <span class="font-semibold not-italic">"Key takeaway: "</span>
                        {t}
                    </p>
                })}
                <div class="card-actions justify-end">
                    <button
                        class="btn btn-primary btn-sm"
                        on:click=move |_| on_ask.run(article.get_value())
                    >
                        "Ask AI"
                    </button>
                </div>
            </div>
        </article>
    }
}
