use std::sync::Arc;

use carcatalogue_core::CredentialStore;
use carcatalogue_domain::Config;
use carcatalogue_infra::{InMemoryCredentialStore, SessionContext};
use carcatalogue_lib::AppContext;
use serde_json::{json, Value};
use wiremock::{MockServer, Request};

/// App context wired onto a mock server, with in-memory credentials.
pub struct TestApp {
    pub server: MockServer,
    pub context: AppContext,
    pub credentials: Arc<InMemoryCredentialStore>,
}

impl TestApp {
    pub async fn anonymous() -> Self {
        Self::with_store(InMemoryCredentialStore::new()).await
    }

    pub async fn signed_in(token: &str) -> Self {
        Self::with_store(InMemoryCredentialStore::with_token(token)).await
    }

    async fn with_store(store: InMemoryCredentialStore) -> Self {
        init_tracing();
        let server = MockServer::start().await;
        let mut config = Config::default();
        config.api.base_url = server.uri();
        config.api.request_timeout_secs = 5;
        config.paging.page_size = 2;

        let credentials = Arc::new(store);
        let session = SessionContext::builder(config)
            .credentials(credentials.clone())
            .build()
            .expect("session context should build");
        Self { server, context: AppContext::from_session(session), credentials }
    }

    pub async fn token(&self) -> Option<String> {
        self.credentials.get().await.token().map(str::to_string)
    }

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

pub fn car_item(id: i64, brand: &str, model: &str, favorite: bool) -> Value {
    json!({
        "id": id,
        "brand": brand,
        "carClass": "Business",
        "model": model,
        "yearOfIssue": 2021,
        "rent": 4500.0,
        "status": "AVAILABLE",
        "favorite": favorite
    })
}

pub fn paged(content: Vec<Value>, number: u64, total_elements: u64, total_pages: u64) -> Value {
    json!({
        "content": content,
        "page": {
            "size": 2,
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
