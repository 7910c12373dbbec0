use metrics_exporter_prometheus::PrometheusHandle;

use playdeck_config::{AppConfig, CorsConfig};
use playdeck_core::password::{CredentialHasher, PasswordError};

use crate::modules::games::NotificationHub;
use crate::modules::tags::TagStore;

#[derive(Clone)]
pub struct AppState {
    pub hasher: CredentialHasher,
    pub tags: TagStore,
    pub notifications: NotificationHub,
    pub cors_config: CorsConfig,
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Builds the shared state from loaded configuration.
    ///
    /// Metrics are left disabled; the server attaches a handle after
    /// installing the recorder.
    pub fn from_config(config: &AppConfig) -> Result<Self, PasswordError> {
        Ok(Self {
            hasher: CredentialHasher::new(config.hasher.pepper.clone(), config.hasher.cost)?,
            tags: TagStore::new(),
            notifications: NotificationHub::new(config.server.notification_capacity),
            cors_config: config.cors.clone(),
            metrics: None,
        })
    }

    pub fn with_metrics(mut self, handle: Option<PrometheusHandle>) -> Self {
        self.metrics = handle;
        self
    }
}
