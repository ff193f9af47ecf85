//! Server-side plumbing in front of the remote API: `/api/*` forwarding and
//! the Content-Security-Policy header.

use axum::body::{to_bytes, Body};
use axum::extract::{FromRef, Request, State};
use axum::http::header::{self, HeaderMap, HeaderName, HeaderValue};
use axum::response::Response;
use axum::routing::any;
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;
use url::Url;

use crate::config::ServerConfig;
use crate::error::AppError;

/// Largest request body forwarded upstream.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Connection-level headers that must not be forwarded either way.
fn is_hop_by_hop(name: &HeaderName) -> bool {
    [
        header::CONNECTION,
        header::HOST,
        header::CONTENT_LENGTH,
        header::TRANSFER_ENCODING,
        header::UPGRADE,
        header::TE,
        header::TRAILER,
        header::PROXY_AUTHORIZATION,
    ]
    .contains(name)
}

#[derive(Clone)]
pub struct ProxyState {
    upstream: String,
    http: reqwest::Client,
}

impl ProxyState {
    pub fn new(upstream: impl Into<String>) -> Self {
        Self {
            upstream: upstream.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(config.api_upstream.clone())
    }

    pub fn upstream(&self) -> &str {
        &self.upstream
    }
}

/// Where a request for `path` (already starting with `/api/`) is sent.
pub fn upstream_url(upstream: &str, path: &str, query: Option<&str>) -> Result<Url, AppError> {
    let mut raw = format!("{}{}", upstream.trim_end_matches('/'), path);
    if let Some(q) = query.filter(|q| !q.is_empty()) {
        raw.push('?');
        raw.push_str(q);
    }
    Url::parse(&raw).map_err(|e| AppError::Config(format!("Invalid upstream URL {raw}: {e}")))
}

/// Router with the forwarding route mounted at `/api/{*path}`.
pub fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    ProxyState: FromRef<S>,
{
    Router::new().route("/api/{*path}", any(forward))
}

/// Layer adding the configured Content-Security-Policy to every response.
pub fn csp_layer(policy: &str) -> Result<SetResponseHeaderLayer<HeaderValue>, AppError> {
    let value = HeaderValue::from_str(policy)
        .map_err(|e| AppError::Config(format!("Invalid Content-Security-Policy: {e}")))?;
    Ok(SetResponseHeaderLayer::overriding(
        header::CONTENT_SECURITY_POLICY,
        value,
    ))
}

fn copy_headers(from: &HeaderMap) -> HeaderMap {
    from.iter()
        .filter(|(name, _)| !is_hop_by_hop(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

async fn forward(State(proxy): State<ProxyState>, request: Request) -> Result<Response, AppError> {
    let (parts, body) = request.into_parts();
    let target = upstream_url(proxy.upstream(), parts.uri.path(), parts.uri.query())?;
    let body = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| AppError::BadRequest(format!("Unreadable request body: {e}")))?;

    tracing::debug!("Proxying {} {}", parts.method, target);

    let upstream = proxy
        .http
        .request(parts.method, target)
        .headers(copy_headers(&parts.headers))
        .body(body)
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    let status = upstream.status();
    let headers = copy_headers(upstream.headers());
    let bytes = upstream
        .bytes()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
