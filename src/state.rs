//! Shared application state injected into all handlers.

use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

use crate::domain::repositories::UrlRepository;

/// Handler dependencies, selected once at startup and shared by all
/// concurrent requests.
#[derive(Clone)]
pub struct AppState {
    /// The concrete storage backend behind the repository trait.
    pub repository: Arc<dyn UrlRepository>,
    /// Handle for rendering the Prometheus registry.
    pub metrics: PrometheusHandle,
}

impl AppState {
    pub fn new(repository: Arc<dyn UrlRepository>, metrics: PrometheusHandle) -> Self {
        Self {
            repository,
            metrics,
        }
    }
}

#[cfg(test)]
impl AppState {
    /// State over an arbitrary repository with a throwaway metrics registry.
    pub fn for_tests(repository: Arc<dyn UrlRepository>) -> Self {
        let metrics = metrics_exporter_prometheus::PrometheusBuilder::new()
            .build_recorder()
            .handle();
        Self::new(repository, metrics)
    }
}
