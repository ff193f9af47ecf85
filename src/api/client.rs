use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::errors::check_status;
use crate::auth::models::{Credentials, SessionUser};
use crate::config::ClientConfig;
use crate::error::AppError;
use crate::models::article::Article;
use crate::models::company::CompanyProfile;
use crate::models::tracker::TrackerMatrix;

/// Body of `POST /api/ask`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
    pub title: String,
    /// Full article body when known, otherwise the summary.
    pub full_content: String,
}

impl AskRequest {
    pub fn for_article(question: impl Into<String>, article: &Article) -> Self {
        Self {
            question: question.into(),
            title: article.title.clone(),
            full_content: article.context_text().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AskResponse {
    answer: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    topic: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    article: String,
}

#[derive(Debug, Deserialize)]
struct ProbeResponse {
    message: String,
}

/// Session endpoints of the cookie-session backend.
///
/// Futures are `!Send`: everything runs on the browser's event loop.
#[async_trait(?Send)]
pub trait SessionApi {
    /// `GET /api/user`. `Ok(None)` when nobody is signed in.
    async fn current_user(&self) -> Result<Option<SessionUser>, AppError>;

    /// `POST /api/login`. Sets the session cookie on success.
    async fn login(&self, credentials: &Credentials) -> Result<(), AppError>;

    /// `POST /api/register`. Creates the account and signs it in.
    async fn register(&self, credentials: &Credentials) -> Result<(), AppError>;

    /// `POST /api/logout`.
    async fn logout(&self) -> Result<(), AppError>;
}

/// Content endpoints of the news/AI backend.
#[async_trait(?Send)]
pub trait NewsApi {
    /// `GET /api/news`.
    async fn fetch_news(&self) -> Result<Vec<Article>, AppError>;

    /// `POST /api/ask`. Returns the answer text.
    async fn ask(&self, request: &AskRequest) -> Result<String, AppError>;

    /// `POST /api/generate-article`. Returns the generated article text.
    async fn generate_article(&self, topic: &str) -> Result<String, AppError>;

    /// `GET /api/test`. Returns the probe message.
    async fn probe(&self) -> Result<String, AppError>;

    /// `GET /api/big-tech-matrix`.
    async fn big_tech_matrix(&self) -> Result<TrackerMatrix, AppError>;

    /// `GET /api/companies/search?q=`.
    async fn search_companies(&self, query: &str) -> Result<Vec<CompanyProfile>, AppError>;
}

/// HTTP client for the remote API. No retries, batching or caching.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: Url,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, AppError> {
        Self::with_base_url(&config.api_base_url)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, AppError> {
        let mut base = Url::parse(base_url)
            .map_err(|e| AppError::Config(format!("Invalid API URL '{}': {}", base_url, e)))?;
        // Relative joins must keep any path prefix of the base.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            base,
            http: reqwest::Client::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Absolute URL for an `api/...` path.
    pub fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| AppError::Config(format!("Invalid endpoint '{}': {}", path, e)))
    }

    fn get(&self, path: &str) -> Result<RequestBuilder, AppError> {
        Ok(self.http.get(self.endpoint(path)?))
    }

    fn post(&self, path: &str) -> Result<RequestBuilder, AppError> {
        Ok(self.http.post(self.endpoint(path)?))
    }

    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response, AppError> {
        let response = request.send().await?;
        check_status(response).await
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, AppError> {
        self.send(request)
            .await?
            .json::<T>()
            .await
            .map_err(|e| AppError::Parse(e.to_string()))
    }
}

/// Send the session cookie along with the request.
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    #[cfg(target_arch = "wasm32")]
    {
        request.fetch_credentials_include()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        request
    }
}

#[async_trait(?Send)]
impl SessionApi for ApiClient {
    async fn current_user(&self) -> Result<Option<SessionUser>, AppError> {
        match self.send_json::<SessionUser>(with_credentials(self.get("api/user")?)).await {
            Ok(user) => Ok(Some(user)),
            Err(AppError::Unauthorized) => Ok(None),
            Err(AppError::Status { status: 403, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn login(&self, credentials: &Credentials) -> Result<(), AppError> {
        self.send(with_credentials(self.post("api/login")?).json(credentials))
            .await
            .map(|_| ())
    }

    async fn register(&self, credentials: &Credentials) -> Result<(), AppError> {
        self.send(with_credentials(self.post("api/register")?).json(credentials))
            .await
            .map(|_| ())
    }

    async fn logout(&self) -> Result<(), AppError> {
        self.send(with_credentials(self.post("api/logout")?))
            .await
            .map(|_| ())
    }
}

#[async_trait(?Send)]
impl NewsApi for ApiClient {
    async fn fetch_news(&self) -> Result<Vec<Article>, AppError> {
        self.send_json(with_credentials(self.get("api/news")?)).await
    }

    async fn ask(&self, request: &AskRequest) -> Result<String, AppError> {
        let response: AskResponse = self
            .send_json(with_credentials(self.post("api/ask")?).json(request))
            .await?;
        Ok(response.answer)
    }

    async fn generate_article(&self, topic: &str) -> Result<String, AppError> {
        let response: GenerateResponse = self
            .send_json(self.post("api/generate-article")?.json(&GenerateRequest { topic }))
            .await?;
        Ok(response.article)
    }

    async fn probe(&self) -> Result<String, AppError> {
        let response: ProbeResponse = self.send_json(self.get("api/test")?).await?;
        Ok(response.message)
    }

    async fn big_tech_matrix(&self) -> Result<TrackerMatrix, AppError> {
        self.send_json(self.get("api/big-tech-matrix")?).await
    }

    async fn search_companies(&self, query: &str) -> Result<Vec<CompanyProfile>, AppError> {
        let path = format!("api/companies/search?q={}", urlencoding::encode(query));
        self.send_json(with_credentials(self.get(&path)?)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_onto_base() {
        let client = ApiClient::with_base_url("http://localhost:8000").unwrap();
        assert_eq!(
            client.endpoint("/api/news").unwrap().as_str(),
            "http://localhost:8000/api/news"
        );
        assert_eq!(
            client.endpoint("api/test").unwrap().as_str(),
            "http://localhost:8000/api/test"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_prefix() {
        let client = ApiClient::with_base_url("https://example.com/backend").unwrap();
        assert_eq!(client.base_url().as_str(), "https://example.com/backend/");
        assert_eq!(
            client.endpoint("api/user").unwrap().as_str(),
            "https://example.com/backend/api/user"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        match ApiClient::with_base_url("not a url") {
            Err(AppError::Config(msg)) => assert!(msg.contains("Invalid API URL")),
            other => panic!("Expected Config error, got: {:?}", other),
        }
    }

    #[test]
    fn test_search_query_is_encoded() {
        let client = ApiClient::with_base_url("http://localhost:8000").unwrap();
        let path = format!("api/companies/search?q={}", urlencoding::encode("AT&T labs"));
        let url = client.endpoint(&path).unwrap();
        assert_eq!(url.query(), Some("q=AT%26T%20labs"));
    }

    #[test]
    fn test_ask_request_uses_article_context() {
        let article = Article {
            title: "AI Boom".into(),
            link: "https://news.example/ai".into(),
            source: "Wire".into(),
            category: "Hardware".into(),
            summary: Some("chips".into()),
            published: None,
            full_content: None,
            key_takeaway: None,
        };
        let req = AskRequest::for_article("Why?", &article);
        assert_eq!(req.full_content, "chips");

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["question"], "Why?");
        assert_eq!(json["title"], "AI Boom");
        assert_eq!(json["full_content"], "chips");
    }
}
