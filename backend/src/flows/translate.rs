//! Translate flow
//!
//! Validates the request, asks the model for an English translation and
//! returns it. The model is not offered any tool, so its text is the answer.

use crate::flows::call_model;
use crate::flows::constants::{TRANSLATE_PROMPT, TRANSLATE_PROMPT_NAME};
use crate::flows::types::{translation_request_schema, TranslationRequest, TranslationResult};
use crate::orchestrator::error::{FlowError, TemplateError};
use crate::orchestrator::model::ModelClient;
use crate::orchestrator::prompt::PromptTemplate;
use crate::orchestrator::reconciler::{reconcile, Resolution};
use crate::orchestrator::schema::{Schema, ValidationError, ROOT_FIELD};
use serde_json::Value;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Flow controller for translations
pub struct TranslateFlow {
    client: Arc<dyn ModelClient>,
    template: PromptTemplate,
    input_schema: Schema,
}

impl TranslateFlow {
    /// Build the flow around a model client
    ///
    /// # Arguments
    /// * `client` - Model client handle, owned by whoever wires the application
    /// * `max_text_length` - Maximum length of the text to translate
    pub fn new(client: Arc<dyn ModelClient>, max_text_length: usize) -> Result<Self, TemplateError> {
        let input_schema = translation_request_schema(max_text_length);
        let template =
            PromptTemplate::new(TRANSLATE_PROMPT_NAME, TRANSLATE_PROMPT, &input_schema, vec![])?;

        Ok(Self {
            client,
            template,
            input_schema,
        })
    }

    /// Validate an untyped request (e.g. a JSON body) into a typed one
    pub fn parse_request(&self, candidate: &Value) -> Result<TranslationRequest, FlowError> {
        Ok(self.input_schema.validate_into(candidate)?)
    }

    /// Translate the request
    ///
    /// # Errors
    /// * `FlowError::Validation` - request failed its schema; the model was not called
    /// * `FlowError::ModelCommunication` - model unreachable or reply malformed
    /// * `FlowError::NoActionableOutput` - model produced no text
    pub async fn run(&self, request: &TranslationRequest) -> Result<TranslationResult, FlowError> {
        self.run_with_cancellation(request, CancellationToken::new())
            .await
    }

    /// Translate the request, stopping early with `FlowError::Cancelled` if
    /// `cancel` fires before the model replies
    pub async fn run_with_cancellation(
        &self,
        request: &TranslationRequest,
        cancel: CancellationToken,
    ) -> Result<TranslationResult, FlowError> {
        tracing::info!(
            source_language = %request.source_language(),
            text_len = request.text().chars().count(),
            "Translate flow started"
        );

        let result = self.execute(request, &cancel).await;
        match &result {
            Ok(translation) => tracing::info!(
                translated_len = translation.translated_text.chars().count(),
                "Translate flow completed"
            ),
            Err(e) => tracing::error!(error = %e, "Translate flow failed"),
        }
        result
    }

    async fn execute(
        &self,
        request: &TranslationRequest,
        cancel: &CancellationToken,
    ) -> Result<TranslationResult, FlowError> {
        let candidate = serde_json::to_value(request)
            .map_err(|e| ValidationError::new(ROOT_FIELD, e.to_string()))?;
        let input = self.input_schema.validate(&candidate)?;

        let reply = call_model(&self.template, self.client.as_ref(), &input, cancel).await?;
        let resolution = reconcile(reply, &self.template.declarations())?;
        tracing::debug!(resolution = resolution.kind(), "Translate reply reconciled");

        translation_from(resolution)
    }
}

/// Map a reconciled reply to the translation result
///
/// The translate prompt declares no tools, so a live model cannot reach the
/// tool-output arm; a function call is rejected as an unknown tool first.
fn translation_from(resolution: Resolution) -> Result<TranslationResult, FlowError> {
    match resolution {
        Resolution::TextFallback(text) => Ok(TranslationResult {
            translated_text: text,
        }),
        Resolution::ToolOutput { tool, output } => {
            let text = output
                .get("translatedText")
                .and_then(Value::as_str)
                .filter(|t| !t.trim().is_empty())
                .ok_or(FlowError::NoActionableOutput)?;
            tracing::warn!(tool = %tool, "Translation arrived through a tool call");
            Ok(TranslationResult {
                translated_text: text.to_string(),
            })
        }
    }
}
