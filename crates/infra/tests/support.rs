use std::sync::Arc;

use carcatalogue_core::CredentialStore;
use carcatalogue_domain::Config;
use carcatalogue_infra::{InMemoryCredentialStore, SessionContext};
use serde_json::{json, Value};
use wiremock::{MockServer, Request};

/// Session context pointed at a mock server, with in-memory credentials.
pub struct TestSession {
    pub server: MockServer,
    pub context: SessionContext,
    pub credentials: Arc<InMemoryCredentialStore>,
}

impl TestSession {
    pub async fn anonymous() -> Self {
        Self::with_store(InMemoryCredentialStore::new(), 5).await
    }

    pub async fn signed_in(token: &str) -> Self {
        Self::with_store(InMemoryCredentialStore::with_token(token), 5).await
    }

    /// Signed in, with a total request timeout of `timeout_secs`.
    pub async fn signed_in_with_timeout(token: &str, timeout_secs: u64) -> Self {
        Self::with_store(InMemoryCredentialStore::with_token(token), timeout_secs).await
    }

    async fn with_store(store: InMemoryCredentialStore, timeout_secs: u64) -> Self {
        init_tracing();
        let server = MockServer::start().await;
        let mut config = Config::default();
        config.api.base_url = server.uri();
        config.api.request_timeout_secs = timeout_secs;

        let credentials = Arc::new(store);
        let context = SessionContext::builder(config)
            .credentials(credentials.clone())
            .build()
            .expect("session context should build");
        Self { server, context, credentials }
    }

    pub async fn token(&self) -> Option<String> {
        self.credentials.get().await.token().map(str::to_string)
    }

    /// Requests the server received for `path`, in arrival order.
    pub async fn requests_to(&self, path: &str) -> Vec<Request> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|request| request.url.path() == path)
            .collect()
    }
}

pub fn authorization(request: &Request) -> Option<String> {
    request.headers.get("authorization").and_then(|v| v.to_str().ok()).map(str::to_string)
}

pub fn cookie_header(request: &Request) -> Option<String> {
    request.headers.get("cookie").and_then(|v| v.to_str().ok()).map(str::to_string)
}

pub fn car_item(id: i64) -> Value {
    json!({
        "id": id,
        "brand": "BMW",
        "carClass": "Business",
        "model": "X5",
        "yearOfIssue": 2021,
        "rent": 4500.0,
        "status": "AVAILABLE",
        "favorite": true
    })
}

pub fn paged(content: Vec<Value>, number: u64, total_elements: u64, total_pages: u64) -> Value {
    json!({
        "content": content,
        "page": {
            "size": 20,
            "number": number,
            "totalElements": total_elements,
            "totalPages": total_pages
        }
    })
}

pub fn profile_body() -> Value {
    json!({
        "id": 5,
        "firstName": "Ivan",
        "lastName": "Ivanov",
        "login": "driver01",
        "email": "ivan@example.com",
        "emailVerified": true
    })
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().with_env_filter("debug").try_init();
}
