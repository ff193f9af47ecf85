use async_trait::async_trait;
use url::Url;

use crate::api::errors::check_status;
use crate::auth::models::SessionUser;
use crate::config::ClientConfig;
use crate::error::AppError;
use crate::models::bookmark::{Bookmark, BookmarkTarget};

/// Reads and writes against the hosted `bookmarks` table.
///
/// Abstracted as a trait so tests can use an in-memory table.
#[async_trait(?Send)]
pub trait BookmarkStore {
    /// Whether `user_id` has bookmarked `article_url`.
    async fn is_bookmarked(&self, user_id: &str, article_url: &str) -> Result<bool, AppError>;

    /// All bookmarks of `user_id`, newest first.
    async fn list(&self, user_id: &str) -> Result<Vec<Bookmark>, AppError>;

    /// Insert a new row.
    async fn insert(&self, bookmark: &Bookmark) -> Result<(), AppError>;

    /// Delete every row of `user_id` for `article_url`.
    async fn delete(&self, user_id: &str, article_url: &str) -> Result<(), AppError>;
}

/// Flip the bookmark state of `target` for `user`.
///
/// The remote write happens first; the returned state is only the flipped
/// one when that write succeeded. Concurrent toggles are not deduplicated.
pub async fn toggle_bookmark(
    store: &dyn BookmarkStore,
    user: &SessionUser,
    target: &BookmarkTarget,
    currently_bookmarked: bool,
) -> Result<bool, AppError> {
    if currently_bookmarked {
        store.delete(user.id(), &target.url).await?;
        tracing::info!("Removed bookmark for {}", target.url);
    } else {
        let row = Bookmark::new(user.id(), target);
        store.insert(&row).await?;
        tracing::info!("Added bookmark {} for {}", row.id, target.url);
    }
    Ok(!currently_bookmarked)
}

/// PostgREST-style implementation over the hosted database's REST API.
#[derive(Debug, Clone)]
pub struct HostedBookmarkStore {
    table_url: Url,
    api_key: String,
    http: reqwest::Client,
}

impl HostedBookmarkStore {
    /// Create a store from the hosted URL and key in `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self, AppError> {
        let (url, key) = config.hosted_credentials()?;
        Self::new(url, key)
    }

    /// Create with explicit values (useful for testing / DI).
    pub fn new(hosted_url: &str, api_key: &str) -> Result<Self, AppError> {
        let base = Url::parse(hosted_url)
            .map_err(|e| AppError::Config(format!("Invalid hosted URL '{}': {}", hosted_url, e)))?;
        let table_url = base
            .join("/rest/v1/bookmarks")
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(Self {
            table_url,
            api_key: api_key.to_string(),
            http: reqwest::Client::new(),
        })
    }

    /// Table URL with a PostgREST query string.
    pub fn query_url(&self, params: &[(&str, String)]) -> Url {
        let query = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        let mut url = self.table_url.clone();
        url.set_query(if query.is_empty() { None } else { Some(&query) });
        url
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, AppError> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        // A rejected table key is a store problem, not a signed-out visitor.
        check_status(response).await.map_err(|e| match e {
            AppError::Unauthorized => AppError::Storage("Hosted database rejected the API key".into()),
            AppError::Status { message, .. } => AppError::Storage(message),
            other => other,
        })
    }
}

fn eq(value: &str) -> String {
    format!("eq.{}", value)
}

#[async_trait(?Send)]
impl BookmarkStore for HostedBookmarkStore {
    async fn is_bookmarked(&self, user_id: &str, article_url: &str) -> Result<bool, AppError> {
        let url = self.query_url(&[
            ("select", "id".to_string()),
            ("user_id", eq(user_id)),
            ("article_url", eq(article_url)),
        ]);
        let rows: Vec<serde_json::Value> = self
            .send(self.http.get(url))
            .await?
            .json()
            .await
            .map_err(|e| AppError::Parse(e.to_string()))?;
        Ok(!rows.is_empty())
    }

    async fn list(&self, user_id: &str) -> Result<Vec<Bookmark>, AppError> {
        let url = self.query_url(&[
            ("select", "*".to_string()),
            ("user_id", eq(user_id)),
            ("order", "created_at.desc".to_string()),
        ]);
        self.send(self.http.get(url))
            .await?
            .json()
            .await
            .map_err(|e| AppError::Parse(e.to_string()))
    }

    async fn insert(&self, bookmark: &Bookmark) -> Result<(), AppError> {
        let request = self
            .http
            .post(self.table_url.clone())
            .header("Prefer", "return=minimal")
            .json(bookmark);
        self.send(request).await.map(|_| ())
    }

    async fn delete(&self, user_id: &str, article_url: &str) -> Result<(), AppError> {
        let url = self.query_url(&[("user_id", eq(user_id)), ("article_url", eq(article_url))]);
        self.send(self.http.delete(url)).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_url() {
        let store = HostedBookmarkStore::new("https://abc.db.example", "anon").unwrap();
        assert_eq!(
            store.query_url(&[]).as_str(),
            "https://abc.db.example/rest/v1/bookmarks"
        );
    }

    #[test]
    fn test_query_url_encodes_filters() {
        let store = HostedBookmarkStore::new("https://abc.db.example", "anon").unwrap();
        let url = store.query_url(&[
            ("user_id", eq("alice")),
            ("article_url", eq("https://news.example/a?b=1&c=2")),
        ]);
        assert_eq!(
            url.query(),
            Some("user_id=eq.alice&article_url=eq.https%3A%2F%2Fnews.example%2Fa%3Fb%3D1%26c%3D2")
        );
    }

    #[test]
    fn test_from_config_requires_credentials() {
        let config = ClientConfig::new("http://localhost:8000");
        match HostedBookmarkStore::from_config(&config) {
            Err(AppError::Config(_)) => {}
            other => panic!("Expected Config error, got: {:?}", other),
        }

        let config = config.with_hosted("https://abc.db.example", "anon");
        assert!(HostedBookmarkStore::from_config(&config).is_ok());
    }
}
