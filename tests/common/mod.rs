#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use std::sync::{Arc, Mutex};

use short_url::api::routes::app_router;
use short_url::domain::entities::ShortLink;
use short_url::domain::repositories::{LinkRepository, StoreError};
use short_url::infrastructure::persistence::MemoryLinkRepository;
use short_url::state::AppState;

pub const TOKEN: &str = "secret";
pub const AUTH: &str = "Bearer secret";

/// Scriptable store: records calls and fails on demand.
#[derive(Default)]
pub struct StubRepository {
    pub created: Mutex<Vec<ShortLink>>,
    pub looked_up: Mutex<Vec<String>>,
    pub create_error: Option<String>,
    pub find_error: Option<String>,
    pub find_result: Option<ShortLink>,
}

impl StubRepository {
    pub fn failing_writes() -> Self {
        Self {
            create_error: Some("boom".to_string()),
            ..Self::default()
        }
    }

    pub fn failing_reads() -> Self {
        Self {
            find_error: Some("boom".to_string()),
            ..Self::default()
        }
    }

    pub fn with_link(code: &str, long_url: &str) -> Self {
        Self {
            find_result: Some(ShortLink::new(code, long_url)),
            ..Self::default()
        }
    }

    pub fn created_links(&self) -> Vec<ShortLink> {
        self.created.lock().unwrap().clone()
    }

    pub fn lookups(&self) -> Vec<String> {
        self.looked_up.lock().unwrap().clone()
    }
}

#[async_trait]
impl LinkRepository for StubRepository {
    async fn create(&self, link: &ShortLink) -> Result<(), StoreError> {
        self.created.lock().unwrap().push(link.clone());
        match &self.create_error {
            Some(msg) => Err(StoreError::Backend(msg.clone())),
            None => Ok(()),
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, StoreError> {
        self.looked_up.lock().unwrap().push(code.to_string());
        match &self.find_error {
            Some(msg) => Err(StoreError::Backend(msg.clone())),
            None => Ok(self.find_result.clone().filter(|link| link.code == code)),
        }
    }

    async fn health_check(&self) -> bool {
        self.find_error.is_none()
    }
}

pub fn create_test_server(repository: Arc<dyn LinkRepository>) -> TestServer {
    let state = AppState::new(repository, TOKEN);
    TestServer::new(app_router(state)).unwrap()
}

pub fn memory_server() -> (TestServer, Arc<MemoryLinkRepository>) {
    let repository = Arc::new(MemoryLinkRepository::new());
    (create_test_server(repository.clone()), repository)
}

pub fn stub_server(stub: StubRepository) -> (TestServer, Arc<StubRepository>) {
    let repository = Arc::new(stub);
    (create_test_server(repository.clone()), repository)
}

/// Extracts the code from `https://<host>/<code>`.
pub fn code_of(short_url: &str) -> &str {
    short_url.rsplit('/').next().unwrap()
}
