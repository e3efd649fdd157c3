use crate::{
    config::Config,
    services::{FormattingService, GeminiClient, MetricsService, TextModel},
    storage::{FeedbackStore, UsageStore},
};
use std::sync::Arc;

pub mod content;
pub mod docs;
pub mod feedback;
pub mod format;
pub mod health;
pub mod metrics;
pub mod platforms;
pub mod posts;
pub mod usage;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub usage: UsageStore,
    pub feedback: FeedbackStore,
    pub formatter: FormattingService,
    pub metrics: Arc<MetricsService>,
}

impl AppState {
    /// Wires the stores and services around an arbitrary text model.
    pub fn new(config: Config, model: Arc<dyn TextModel>) -> anyhow::Result<Self> {
        let metrics = Arc::new(MetricsService::new()?);

        Ok(Self {
            usage: UsageStore::new(config.usage_file()),
            feedback: FeedbackStore::new(config.feedback_file()),
            formatter: FormattingService::new(model, metrics.clone()),
            metrics,
            config,
        })
    }

    /// Production wiring with the Gemini client.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let client = GeminiClient::new(&config.gemini)?;
        if client.is_configured() {
            tracing::info!("Gemini API key loaded, model {}", config.gemini.model);
        } else {
            tracing::error!("No Gemini API key found, model-backed endpoints will fail");
        }

        if config.quota.enabled {
            tracing::info!(
                "Daily limit enabled: {} requests, usage file {}",
                config.quota.daily_limit,
                config.usage_file().display()
            );
        }

        Self::new(config, Arc::new(client))
    }
}
