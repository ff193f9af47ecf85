use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::article::Article;

/// A saved reference from a user to an article, as stored in the hosted
/// `bookmarks` table. Article fields are denormalized copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub user_id: String,
    pub article_url: String,
    pub article_title: String,
    #[serde(default)]
    pub article_source: String,
    #[serde(default)]
    pub article_category: String,
    pub created_at: DateTime<Utc>,
}

impl Bookmark {
    /// Build a fresh row for `user_id` with a random id.
    pub fn new(user_id: &str, article: &BookmarkTarget) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            article_url: article.url.clone(),
            article_title: article.title.clone(),
            article_source: article.source.clone(),
            article_category: article.category.clone(),
            created_at: Utc::now(),
        }
    }

    pub fn target(&self) -> BookmarkTarget {
        BookmarkTarget {
            url: self.article_url.clone(),
            title: self.article_title.clone(),
            source: self.article_source.clone(),
            category: self.article_category.clone(),
        }
    }
}

/// The article fields a bookmark button needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkTarget {
    pub url: String,
    pub title: String,
    pub source: String,
    pub category: String,
}

impl From<&Article> for BookmarkTarget {
    fn from(article: &Article) -> Self {
        Self {
            url: article.link.clone(),
            title: article.title.clone(),
            source: article.source.clone(),
            category: article.category.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bookmark_copies_article_fields() {
        let target = BookmarkTarget {
            url: "https://news.example/a".into(),
            title: "A".into(),
            source: "Wire".into(),
            category: "Hardware".into(),
        };
        let first = Bookmark::new("alice", &target);
        let second = Bookmark::new("alice", &target);

        assert_eq!(first.user_id, "alice");
        assert_eq!(first.article_url, "https://news.example/a");
        assert_eq!(first.target(), target);
        assert_ne!(first.id, second.id);
        assert!(Uuid::parse_str(&first.id).is_ok());
    }

    #[test]
    fn test_deserialize_table_row() {
        let json = r#"{
            "id": "0b6d2d7e-8a43-4c55-9d0f-3a1f0c5b2e11",
            "user_id": "alice",
            "article_url": "https://news.example/a",
            "article_title": "A",
            "article_source": "Wire",
            "article_category": "Hardware",
            "created_at": "2024-10-01T10:00:00.123456+00:00"
        }"#;
        let row: Bookmark = serde_json::from_str(json).unwrap();
        assert_eq!(row.article_category, "Hardware");
        assert_eq!(row.created_at.timestamp(), 1727776800);
    }
}
