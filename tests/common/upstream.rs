use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, RawQuery, State};
use axum::http::{header, HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};

/// Session cookie the fake backend accepts.
pub const SESSION_COOKIE: &str = "session=abc123";

fn unauthorized() -> axum::response::Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "Not authenticated" })),
    )
        .into_response()
}

fn signed_in(headers: &HeaderMap) -> bool {
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|c| c.contains(SESSION_COOKIE))
}

/// Router imitating the news/AI backend.
pub fn backend() -> Router {
    Router::new()
        .route(
            "/api/news",
            get(|| async {
                Json(json!([
                    {
                        "title": "AI Boom",
                        "link": "https://news.example/ai-boom",
                        "source": "Example Wire",
                        "category": "Hardware",
                        "summary": "chips",
                        "published": "2024-03-05T10:00:00Z"
                    }
                ]))
            }),
        )
        .route(
            "/api/user",
            get(|headers: HeaderMap| async move {
                if signed_in(&headers) {
                    Json(json!({ "username": "alice" })).into_response()
                } else {
                    unauthorized()
                }
            }),
        )
        .route(
            "/api/login",
            post(|Json(body): Json<Value>| async move {
                if body["username"] == "alice" && body["password"] == "hunter2" {
                    (
                        [(header::SET_COOKIE, format!("{SESSION_COOKIE}; Path=/; HttpOnly"))],
                        Json(json!({ "message": "Logged in" })),
                    )
                        .into_response()
                } else {
                    (
                        StatusCode::BAD_REQUEST,
                        Json(json!({ "error": "Invalid username or password" })),
                    )
                        .into_response()
                }
            }),
        )
        .route(
            "/api/ask",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                if !signed_in(&headers) {
                    return unauthorized();
                }
                let question = body["question"].as_str().unwrap_or_default();
                Json(json!({ "answer": format!("You asked: {question}") })).into_response()
            }),
        )
        .route(
            "/api/generate-article",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Model overloaded" })),
                )
            }),
        )
        .route(
            "/api/test",
            get(|| async { Json(json!({ "message": "API is working" })) }),
        )
        .route(
            "/api/big-tech-matrix",
            get(|| async {
                Json(json!({
                    "NVIDIA": {
                        "PRODUCT": {
                            "id": "u1",
                            "company": "NVIDIA",
                            "category": "PRODUCT",
                            "title": "New GPU",
                            "content": "Faster.",
                            "date": "2024-03-05",
                            "source_url": "https://nvidia.example"
                        }
                    },
                    "IBM": { "PRODUCT": { "title": "Ignored" } }
                }))
            }),
        )
        .route(
            "/api/companies/search",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let q = params.get("q").cloned().unwrap_or_default();
                Json(json!([{ "id": "c1", "name": q, "industry": "Testing" }]))
            }),
        )
}

/// API key the fake hosted database accepts.
pub const TABLE_KEY: &str = "anon";

/// Contents of the fake hosted `bookmarks` table plus every request it saw,
/// recorded as `"<METHOD> <raw query>"`.
#[derive(Clone, Default)]
pub struct BookmarkTable {
    rows: Arc<Mutex<Vec<Value>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl BookmarkTable {
    pub fn rows(&self) -> Vec<Value> {
        self.rows.lock().unwrap().clone()
    }

    pub fn seed(&self, row: Value) {
        self.rows.lock().unwrap().push(row);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, method: &Method, query: &Option<String>) {
        let line = match query {
            Some(q) => format!("{} {}", method, q),
            None => method.to_string(),
        };
        self.requests.lock().unwrap().push(line);
    }
}

fn table_key_accepted(headers: &HeaderMap) -> bool {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());
    header("apikey") == Some(TABLE_KEY)
        && header("authorization") == Some(format!("Bearer {}", TABLE_KEY).as_str())
}

fn invalid_key() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "Invalid API key" })),
    )
        .into_response()
}

fn query_pairs(query: &Option<String>) -> Vec<(String, String)> {
    query
        .as_deref()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// PostgREST `eq.` filters; other parameters are ignored.
fn row_matches(row: &Value, params: &[(String, String)]) -> bool {
    params.iter().all(|(column, value)| match value.strip_prefix("eq.") {
        Some(expected) => row[column.as_str()] == expected,
        None => true,
    })
}

fn created_at(row: &Value) -> Option<DateTime<Utc>> {
    row["created_at"].as_str()?.parse().ok()
}

async fn select_rows(
    State(table): State<BookmarkTable>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    table.record(&Method::GET, &query);
    if !table_key_accepted(&headers) {
        return invalid_key();
    }
    let params = query_pairs(&query);
    let mut rows: Vec<Value> = table
        .rows()
        .into_iter()
        .filter(|row| row_matches(row, &params))
        .collect();
    if params.iter().any(|(k, v)| k == "order" && v == "created_at.desc") {
        rows.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    }
    if params.iter().any(|(k, v)| k == "select" && v == "id") {
        rows = rows.into_iter().map(|row| json!({ "id": row["id"] })).collect();
    }
    Json(rows).into_response()
}

async fn insert_row(
    State(table): State<BookmarkTable>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
    Json(row): Json<Value>,
) -> Response {
    table.record(&Method::POST, &query);
    if !table_key_accepted(&headers) {
        return invalid_key();
    }
    let mut rows = table.rows.lock().unwrap();
    if rows.iter().any(|existing| existing["id"] == row["id"]) {
        return (
            StatusCode::CONFLICT,
            Json(json!({
                "code": "23505",
                "message": "duplicate key value violates unique constraint",
                "details": null
            })),
        )
            .into_response();
    }
    rows.push(row);
    StatusCode::CREATED.into_response()
}

async fn delete_rows(
    State(table): State<BookmarkTable>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    table.record(&Method::DELETE, &query);
    if !table_key_accepted(&headers) {
        return invalid_key();
    }
    let params = query_pairs(&query);
    table
        .rows
        .lock()
        .unwrap()
        .retain(|row| !row_matches(row, &params));
    StatusCode::NO_CONTENT.into_response()
}

/// Router imitating the hosted database's REST endpoint for `bookmarks`.
pub fn hosted_table(table: BookmarkTable) -> Router {
    Router::new()
        .route(
            "/rest/v1/bookmarks",
            get(select_rows).post(insert_row).delete(delete_rows),
        )
        .with_state(table)
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake backend");
    let addr = listener.local_addr().expect("Failed to read local address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Fake backend crashed");
    });
    format!("http://{}", addr)
}

/// Serve [`backend`] on a random local port and return its base URL.
pub async fn spawn_backend() -> String {
    serve(backend()).await
}

/// Serve an empty [`hosted_table`] and return its base URL with a handle to
/// the table.
pub async fn spawn_bookmark_table() -> (String, BookmarkTable) {
    let table = BookmarkTable::default();
    let url = serve(hosted_table(table.clone())).await;
    (url, table)
}
