#![allow(dead_code)]

use axum::{
    Router,
    body::{Bytes, to_bytes},
    extract::{Request, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use shared::{abstract_trait::DynKeyValueStore, cache::MemoryStore};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use storefront::{
    config::Config,
    domain::response::user::{Role, UserRecord},
    state::AppState,
};

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Recorded {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body is JSON")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

type Routes = HashMap<(String, String), (u16, String)>;

#[derive(Clone, Default)]
struct Shared {
    routes: Arc<Mutex<Routes>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

/// Canned-response HTTP server standing in for the storefront REST API.
pub struct FakeBackend {
    addr: std::net::SocketAddr,
    shared: Shared,
}

impl FakeBackend {
    pub async fn start() -> Self {
        let shared = Shared::default();
        let app = Router::new().fallback(handle).with_state(shared.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fake backend");
        });

        Self { addr, shared }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Registers a raw response for `method` on `/api{path}`.
    pub fn respond(&self, method: &str, path: &str, status: u16, body: impl Into<String>) {
        self.shared.routes.lock().unwrap().insert(
            (method.to_string(), format!("/api{path}")),
            (status, body.into()),
        );
    }

    pub fn respond_json(&self, method: &str, path: &str, status: u16, body: Value) {
        self.respond(method, path, status, body.to_string());
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.shared.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests().pop().expect("at least one request")
    }

    pub fn count(&self, method: &str, path: &str) -> usize {
        let path = format!("/api{path}");
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }
}

async fn handle(State(shared): State<Shared>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let body = to_bytes(body, usize::MAX).await.unwrap_or_default();

    let header_value = |name: header::HeaderName| {
        parts
            .headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    let recorded = Recorded {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        query: parts.uri.query().map(str::to_string),
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
        headers: parts.headers.clone(),
        body,
    };

    let key = (recorded.method.clone(), recorded.path.clone());
    shared.requests.lock().unwrap().push(recorded);

    let canned = shared.routes.lock().unwrap().get(&key).cloned();
    match canned {
        Some((status, body)) => (
            StatusCode::from_u16(status).unwrap(),
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "application/json")],
            r#"{"message":"Not found"}"#,
        )
            .into_response(),
    }
}

pub fn app_state(backend: &FakeBackend) -> AppState {
    let store: DynKeyValueStore = Arc::new(MemoryStore::new());
    AppState::with_store(&Config::in_memory(backend.base_url()), store).expect("app state")
}

pub fn farmer() -> UserRecord {
    UserRecord::new(1)
        .with_user_name("bob")
        .with_email("bob@farm.test")
        .with_role(Role::Farmer)
}

pub fn customer() -> UserRecord {
    UserRecord::new(2)
        .with_user_name("alice")
        .with_email("alice@shop.test")
        .with_role(Role::Customer)
}

pub async fn logged_in(state: &AppState, user: &UserRecord) {
    state
        .session
        .store("tok-123", user)
        .await
        .expect("store session");
}
