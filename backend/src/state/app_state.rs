//! Shared application state
//!
//! Both flows are immutable once built, so handlers share them through `Arc`
//! without locking.

use crate::config::Config;
use crate::flows::{CorrectionSink, LoggingCorrectionSink, RetrainFlow, TranslateFlow};
use crate::orchestrator::api_client::GeminiClient;
use crate::orchestrator::error::{FlowError, TemplateError};
use crate::orchestrator::model::ModelClient;
use std::sync::Arc;

/// State shared by the HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Translate flow controller
    pub translate: Arc<TranslateFlow>,
    /// Retrain flow controller
    pub retrain: Arc<RetrainFlow>,
}

impl AppState {
    /// Build both flows around one model client
    ///
    /// # Arguments
    /// * `client` - Model client shared by both flows
    /// * `sink` - Destination for corrections accepted by the retrain tool
    /// * `max_text_length` - Length limit for free-text request fields
    pub fn new(
        client: Arc<dyn ModelClient>,
        sink: Arc<dyn CorrectionSink>,
        max_text_length: usize,
    ) -> Result<Self, TemplateError> {
        Ok(Self {
            translate: Arc::new(TranslateFlow::new(client.clone(), max_text_length)?),
            retrain: Arc::new(RetrainFlow::new(client, sink, max_text_length)?),
        })
    }

    /// Build state backed by the Gemini client, with simulated retraining
    ///
    /// # Errors
    /// * `FlowError::Configuration` - API key missing or a template is invalid
    pub fn from_config(config: &Config) -> Result<Self, FlowError> {
        let gemini = GeminiClient::new(&config.model)?;
        tracing::info!(model = %gemini.model(), "Gemini client ready");
        let client: Arc<dyn ModelClient> = Arc::new(gemini);
        let sink: Arc<dyn CorrectionSink> = Arc::new(LoggingCorrectionSink);
        Ok(Self::new(client, sink, config.model.max_text_length)?)
    }
}
