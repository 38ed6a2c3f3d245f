#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use url_shortener::domain::repositories::UrlRepository;
use url_shortener::error::AppError;
use url_shortener::state::AppState;

/// In-memory spy repository for handler tests.
///
/// Mirrors the backend contract (unique alias, append-only) and records how
/// often each operation was invoked, so tests can assert that validation
/// failures never reach storage.
pub struct InMemoryRepository {
    records: Mutex<HashMap<String, (i64, String)>>,
    next_id: AtomicI64,
    save_calls: AtomicUsize,
    get_calls: AtomicUsize,
    fail: AtomicBool,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
            save_calls: AtomicUsize::new(0),
            get_calls: AtomicUsize::new(0),
            fail: AtomicBool::new(false),
        }
    }

    /// Makes every subsequent operation fail like a broken backend.
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn stored_url(&self, alias: &str) -> Option<String> {
        self.records
            .lock()
            .unwrap()
            .get(alias)
            .map(|(_, url)| url.clone())
    }
}

#[async_trait]
impl UrlRepository for InMemoryRepository {
    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, AppError> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::internal("Database error", json!({})));
        }

        let mut records = self.records.lock().unwrap();
        if records.contains_key(alias) {
            return Err(AppError::conflict(
                "Alias already exists",
                json!({ "alias": alias }),
            ));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        records.insert(alias.to_string(), (id, url.to_string()));
        Ok(id)
    }

    async fn get_url(&self, alias: &str) -> Result<String, AppError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::internal("Database error", json!({})));
        }

        self.records
            .lock()
            .unwrap()
            .get(alias)
            .map(|(_, url)| url.clone())
            .ok_or_else(|| AppError::not_found("Alias not found", json!({ "alias": alias })))
    }
}

pub fn create_test_state(repository: Arc<InMemoryRepository>) -> AppState {
    let metrics = metrics_exporter_prometheus::PrometheusBuilder::new()
        .build_recorder()
        .handle();
    AppState::new(repository, metrics)
}
