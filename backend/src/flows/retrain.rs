//! Retrain flow
//!
//! Asks the model to submit a correction pair through the retrain tool. The
//! tool must actually run for the outcome to succeed: a text-only reply means
//! the model declined, and is reported as a failure carrying its text.
//!
//! The public contract is a tagged [`RetrainOutcome`]; no error escapes.

use crate::flows::call_model;
use crate::flows::constants::{
    RETRAIN_CANCELLED_MESSAGE, RETRAIN_DECLINED_PREFIX, RETRAIN_FAILED_PREFIX,
    RETRAIN_NO_RESPONSE_MESSAGE, RETRAIN_PROMPT, RETRAIN_PROMPT_NAME,
};
use crate::flows::correction_tool::{CorrectionSink, CorrectionTool};
use crate::flows::types::{correction_pair_schema, CorrectionPair, RetrainOutcome};
use crate::orchestrator::error::{FlowError, TemplateError};
use crate::orchestrator::model::ModelClient;
use crate::orchestrator::prompt::PromptTemplate;
use crate::orchestrator::reconciler::{reconcile, Resolution};
use crate::orchestrator::schema::{Schema, ValidationError, ROOT_FIELD};
use crate::orchestrator::tool::ToolAdapter;
use serde_json::Value;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Flow controller for correction submissions
pub struct RetrainFlow {
    client: Arc<dyn ModelClient>,
    template: PromptTemplate,
    input_schema: Schema,
}

impl RetrainFlow {
    /// Build the flow with the simulated retrain tool
    ///
    /// # Arguments
    /// * `client` - Model client handle
    /// * `sink` - Where the retrain tool sends accepted corrections
    /// * `max_text_length` - Length limit applied to both texts
    pub fn new(
        client: Arc<dyn ModelClient>,
        sink: Arc<dyn CorrectionSink>,
        max_text_length: usize,
    ) -> Result<Self, TemplateError> {
        let tool = Arc::new(CorrectionTool::new(sink, max_text_length));
        Self::with_tool(client, tool, max_text_length)
    }

    /// Build the flow with a custom retrain tool
    ///
    /// The tool must accept a correction pair and return `{success, message}`.
    pub fn with_tool(
        client: Arc<dyn ModelClient>,
        tool: Arc<dyn ToolAdapter>,
        max_text_length: usize,
    ) -> Result<Self, TemplateError> {
        let input_schema = correction_pair_schema(max_text_length);
        let template =
            PromptTemplate::new(RETRAIN_PROMPT_NAME, RETRAIN_PROMPT, &input_schema, vec![tool])?;

        Ok(Self {
            client,
            template,
            input_schema,
        })
    }

    /// Validate an untyped request (e.g. a JSON body) into a typed one
    pub fn parse_request(&self, candidate: &Value) -> Result<CorrectionPair, FlowError> {
        Ok(self.input_schema.validate_into(candidate)?)
    }

    /// Validate and run an untyped request
    pub async fn run_json(&self, candidate: &Value) -> RetrainOutcome {
        match self.parse_request(candidate) {
            Ok(pair) => self.run(&pair).await,
            Err(e) => {
                tracing::warn!(error = %e, "Retrain request rejected");
                failure_outcome(&e)
            }
        }
    }

    /// Submit the correction
    pub async fn run(&self, pair: &CorrectionPair) -> RetrainOutcome {
        self.run_with_cancellation(pair, CancellationToken::new())
            .await
    }

    /// Submit the correction, giving up if `cancel` fires before the model replies
    pub async fn run_with_cancellation(
        &self,
        pair: &CorrectionPair,
        cancel: CancellationToken,
    ) -> RetrainOutcome {
        tracing::info!(
            original_len = pair.original_text().chars().count(),
            translated_len = pair.translated_text().chars().count(),
            "Retrain flow started"
        );

        match self.execute(pair, &cancel).await {
            Ok(outcome) => {
                tracing::info!(
                    success = outcome.success,
                    message = %outcome.message,
                    "Retrain flow completed"
                );
                outcome
            }
            Err(e) => {
                tracing::error!(error = %e, "Error retraining translation model");
                failure_outcome(&e)
            }
        }
    }

    async fn execute(
        &self,
        pair: &CorrectionPair,
        cancel: &CancellationToken,
    ) -> Result<RetrainOutcome, FlowError> {
        let candidate = serde_json::to_value(pair)
            .map_err(|e| ValidationError::new(ROOT_FIELD, e.to_string()))?;
        let input = self.input_schema.validate(&candidate)?;

        let reply = call_model(&self.template, self.client.as_ref(), &input, cancel).await?;
        let resolution = reconcile(reply, &self.template.declarations())?;
        tracing::debug!(resolution = resolution.kind(), "Retrain reply reconciled");

        match resolution {
            Resolution::ToolOutput { tool, output } => {
                serde_json::from_value(Value::Object(output)).map_err(|e| {
                    FlowError::ToolOutputValidation(format!(
                        "tool '{}' output is not a retrain outcome: {}",
                        tool, e
                    ))
                })
            }
            Resolution::TextFallback(text) => {
                tracing::warn!(response = %text, "Model did not call the retrain tool");
                Ok(RetrainOutcome::failed(format!(
                    "{}{}",
                    RETRAIN_DECLINED_PREFIX, text
                )))
            }
        }
    }
}

fn failure_outcome(err: &FlowError) -> RetrainOutcome {
    match err {
        FlowError::Cancelled => RetrainOutcome::failed(RETRAIN_CANCELLED_MESSAGE),
        FlowError::NoActionableOutput => RetrainOutcome::failed(format!(
            "{}{}",
            RETRAIN_FAILED_PREFIX, RETRAIN_NO_RESPONSE_MESSAGE
        )),
        other => RetrainOutcome::failed(format!("{}{}", RETRAIN_FAILED_PREFIX, other)),
    }
}
