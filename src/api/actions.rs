//! Remote calls as the screens issue them, with the 401 policy applied.
//!
//! Components spawn these and copy the [`Outcome`] into their signals.

use crate::api::client::{AskRequest, NewsApi};
use crate::auth::models::SessionUser;
use crate::models::article::Article;
use crate::models::bookmark::Bookmark;
use crate::models::company::CompanyProfile;
use crate::models::tracker::TrackerMatrix;
use crate::navigation::{settle, Navigator, Outcome};
use crate::storage::client::BookmarkStore;

pub async fn load_news(api: &dyn NewsApi, navigator: &dyn Navigator) -> Outcome<Vec<Article>> {
    let result = api.fetch_news().await;
    if let Ok(articles) = &result {
        tracing::info!("Fetched {} articles", articles.len());
    }
    settle(result, navigator)
}

/// Ask about `article`. `None` when the question is blank (nothing is sent).
pub async fn ask_question(
    api: &dyn NewsApi,
    navigator: &dyn Navigator,
    question: &str,
    article: &Article,
) -> Option<Outcome<String>> {
    if question.trim().is_empty() {
        return None;
    }
    let request = AskRequest::for_article(question, article);
    Some(settle(api.ask(&request).await, navigator))
}

/// Generate an article about `topic`. `None` when the topic is blank.
pub async fn generate_article(
    api: &dyn NewsApi,
    navigator: &dyn Navigator,
    topic: &str,
) -> Option<Outcome<String>> {
    let topic = topic.trim();
    if topic.is_empty() {
        return None;
    }
    Some(settle(api.generate_article(topic).await, navigator))
}

pub async fn probe(api: &dyn NewsApi, navigator: &dyn Navigator) -> Outcome<String> {
    settle(api.probe().await, navigator)
}

pub async fn load_matrix(api: &dyn NewsApi, navigator: &dyn Navigator) -> Outcome<TrackerMatrix> {
    settle(api.big_tech_matrix().await, navigator)
}

/// Search companies. `None` when the query is blank.
pub async fn search_companies(
    api: &dyn NewsApi,
    navigator: &dyn Navigator,
    query: &str,
) -> Option<Outcome<Vec<CompanyProfile>>> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    Some(settle(api.search_companies(query).await, navigator))
}

pub async fn load_bookmarks(
    store: &dyn BookmarkStore,
    navigator: &dyn Navigator,
    user: &SessionUser,
) -> Outcome<Vec<Bookmark>> {
    settle(store.list(user.id()).await, navigator)
}
