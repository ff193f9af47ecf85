use serde::{Deserialize, Serialize};

/// Category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// The category buttons shown above the feed, in display order.
pub const FEED_CATEGORIES: &[&str] = &[
    ALL_CATEGORIES,
    "AI & Machine Learning",
    "Business & Finance",
    "Cybersecurity",
    "Hardware",
    "Software Development",
    "Startups",
];

/// A news item as returned by `GET /api/news`.
///
/// The article URL is its identity: it keys list rows and bookmarks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    /// Link to the original article. Some sources call it `url`.
    #[serde(alias = "url")]
    pub link: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub summary: Option<String>,
    /// Publication time as sent by the backend (RFC 3339 or RFC 2822).
    #[serde(default)]
    pub published: Option<String>,
    #[serde(default)]
    pub full_content: Option<String>,
    /// One-line AI takeaway attached by the backend.
    #[serde(default)]
    pub key_takeaway: Option<String>,
}

impl Article {
    pub fn url(&self) -> &str {
        &self.link
    }

    /// Text sent as article context to the Q&A endpoint: the full body when
    /// available, otherwise the summary.
    pub fn context_text(&self) -> &str {
        self.full_content
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .or(self.summary.as_deref())
            .unwrap_or("")
    }
}

/// Search term and category currently applied to the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFilter {
    pub search_term: String,
    pub category: String,
}

impl Default for ArticleFilter {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl ArticleFilter {
    pub fn new(search_term: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            category: category.into(),
        }
    }

    /// Case-insensitive substring match on title or summary, and an exact
    /// category match unless "All" is selected.
    pub fn matches(&self, article: &Article) -> bool {
        self.matches_category(article) && self.matches_term(article)
    }

    fn matches_category(&self, article: &Article) -> bool {
        self.category.is_empty() || self.category == ALL_CATEGORIES || article.category == self.category
    }

    fn matches_term(&self, article: &Article) -> bool {
        let term = self.search_term.to_lowercase();
        if term.is_empty() {
            return true;
        }
        article.title.to_lowercase().contains(&term)
            || article
                .summary
                .as_deref()
                .is_some_and(|s| s.to_lowercase().contains(&term))
    }
}

/// Apply `filter` to the full collection, preserving order.
pub fn filter_articles(articles: &[Article], filter: &ArticleFilter) -> Vec<Article> {
    articles
        .iter()
        .filter(|a| filter.matches(a))
        .cloned()
        .collect()
}
