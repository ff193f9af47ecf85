#![allow(dead_code)]

#[cfg(feature = "ssr")]
pub mod upstream;

use std::cell::RefCell;

use async_trait::async_trait;

use signal7::api::client::{AskRequest, NewsApi, SessionApi};
use signal7::auth::models::{Credentials, SessionUser};
use signal7::error::AppError;
use signal7::models::article::Article;
use signal7::models::bookmark::Bookmark;
use signal7::models::company::CompanyProfile;
use signal7::models::tracker::TrackerMatrix;
use signal7::navigation::Navigator;
use signal7::storage::client::BookmarkStore;

/// Build an article with the fields the tests care about.
pub fn article(title: &str, summary: &str, category: &str) -> Article {
    Article {
        title: title.to_string(),
        link: format!("https://news.example/{}", title.to_lowercase().replace(' ', "-")),
        source: "Example Wire".to_string(),
        category: category.to_string(),
        summary: Some(summary.to_string()),
        published: Some("2024-03-05T10:00:00Z".to_string()),
        full_content: None,
        key_takeaway: None,
    }
}

/// Navigator that remembers every path it was asked to open.
#[derive(Default)]
pub struct RecordingNavigator {
    pub visited: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn paths(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_string());
    }
}

/// Session backend with a settable "current user" and scripted failures.
#[derive(Default)]
pub struct FakeSessionApi {
    pub signed_in: RefCell<Option<SessionUser>>,
    /// Accepted `(username, password)` pairs.
    pub accounts: RefCell<Vec<(String, String)>>,
    pub fail_current_user: RefCell<Option<AppError>>,
    pub fail_logout: RefCell<Option<AppError>>,
    pub calls: RefCell<Vec<&'static str>>,
}

impl FakeSessionApi {
    pub fn with_account(username: &str, password: &str) -> Self {
        let api = Self::default();
        api.accounts
            .borrow_mut()
            .push((username.to_string(), password.to_string()));
        api
    }

    pub fn signed_in_as(username: &str) -> Self {
        let api = Self::default();
        *api.signed_in.borrow_mut() = Some(SessionUser::new(username));
        api
    }
}

#[async_trait(?Send)]
impl SessionApi for FakeSessionApi {
    async fn current_user(&self) -> Result<Option<SessionUser>, AppError> {
        self.calls.borrow_mut().push("current_user");
        if let Some(e) = self.fail_current_user.borrow().clone() {
            return Err(e);
        }
        Ok(self.signed_in.borrow().clone())
    }

    async fn login(&self, credentials: &Credentials) -> Result<(), AppError> {
        self.calls.borrow_mut().push("login");
        let known = self
            .accounts
            .borrow()
            .iter()
            .any(|(u, p)| *u == credentials.username && *p == credentials.password);
        if !known {
            return Err(AppError::Status {
                status: 400,
                message: "Invalid username or password".to_string(),
            });
        }
        *self.signed_in.borrow_mut() = Some(SessionUser::new(credentials.username.clone()));
        Ok(())
    }

    async fn register(&self, credentials: &Credentials) -> Result<(), AppError> {
        self.calls.borrow_mut().push("register");
        let taken = self
            .accounts
            .borrow()
            .iter()
            .any(|(u, _)| *u == credentials.username);
        if taken {
            return Err(AppError::Status {
                status: 400,
                message: "Username already exists".to_string(),
            });
        }
        self.accounts
            .borrow_mut()
            .push((credentials.username.clone(), credentials.password.clone()));
        *self.signed_in.borrow_mut() = Some(SessionUser::new(credentials.username.clone()));
        Ok(())
    }

    async fn logout(&self) -> Result<(), AppError> {
        self.calls.borrow_mut().push("logout");
        if let Some(e) = self.fail_logout.borrow().clone() {
            return Err(e);
        }
        *self.signed_in.borrow_mut() = None;
        Ok(())
    }
}

/// Content backend returning canned results and recording requests.
pub struct FakeNewsApi {
    pub news: RefCell<Result<Vec<Article>, AppError>>,
    pub answer: RefCell<Result<String, AppError>>,
    pub article: RefCell<Result<String, AppError>>,
    pub probe: RefCell<Result<String, AppError>>,
    pub matrix: RefCell<Result<TrackerMatrix, AppError>>,
    pub companies: RefCell<Result<Vec<CompanyProfile>, AppError>>,
    pub asked: RefCell<Vec<AskRequest>>,
    pub topics: RefCell<Vec<String>>,
    pub queries: RefCell<Vec<String>>,
}

impl Default for FakeNewsApi {
    fn default() -> Self {
        Self {
            news: RefCell::new(Ok(Vec::new())),
            answer: RefCell::new(Ok(String::new())),
            article: RefCell::new(Ok(String::new())),
            probe: RefCell::new(Ok("API is working".to_string())),
            matrix: RefCell::new(Ok(TrackerMatrix::default())),
            companies: RefCell::new(Ok(Vec::new())),
            asked: RefCell::new(Vec::new()),
            topics: RefCell::new(Vec::new()),
            queries: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl NewsApi for FakeNewsApi {
    async fn fetch_news(&self) -> Result<Vec<Article>, AppError> {
        self.news.borrow().clone()
    }

    async fn ask(&self, request: &AskRequest) -> Result<String, AppError> {
        self.asked.borrow_mut().push(request.clone());
        self.answer.borrow().clone()
    }

    async fn generate_article(&self, topic: &str) -> Result<String, AppError> {
        self.topics.borrow_mut().push(topic.to_string());
        self.article.borrow().clone()
    }

    async fn probe(&self) -> Result<String, AppError> {
        self.probe.borrow().clone()
    }

    async fn big_tech_matrix(&self) -> Result<TrackerMatrix, AppError> {
        self.matrix.borrow().clone()
    }

    async fn search_companies(&self, query: &str) -> Result<Vec<CompanyProfile>, AppError> {
        self.queries.borrow_mut().push(query.to_string());
        self.companies.borrow().clone()
    }
}

/// Bookmark table kept in memory. `fail_writes` makes inserts and deletes fail.
#[derive(Default)]
pub struct InMemoryBookmarkStore {
    pub rows: RefCell<Vec<Bookmark>>,
    pub fail_writes: RefCell<bool>,
}

impl InMemoryBookmarkStore {
    fn check_writable(&self) -> Result<(), AppError> {
        if *self.fail_writes.borrow() {
            Err(AppError::Storage("write rejected".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl BookmarkStore for InMemoryBookmarkStore {
    async fn is_bookmarked(&self, user_id: &str, article_url: &str) -> Result<bool, AppError> {
        Ok(self
            .rows
            .borrow()
            .iter()
            .any(|b| b.user_id == user_id && b.article_url == article_url))
    }

    async fn list(&self, user_id: &str) -> Result<Vec<Bookmark>, AppError> {
        let mut rows: Vec<Bookmark> = self
            .rows
            .borrow()
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn insert(&self, bookmark: &Bookmark) -> Result<(), AppError> {
        self.check_writable()?;
        self.rows.borrow_mut().push(bookmark.clone());
        Ok(())
    }

    async fn delete(&self, user_id: &str, article_url: &str) -> Result<(), AppError> {
        self.check_writable()?;
        self.rows
            .borrow_mut()
            .retain(|b| !(b.user_id == user_id && b.article_url == article_url));
        Ok(())
    }
}
