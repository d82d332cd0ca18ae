//! Flow controllers
//!
//! The two public entry points, each built from a prompt template, an
//! optional tool, and the shared reconciler:
//!
//! - [`TranslateFlow`]: text + source language -> English translation.
//!   Errors are returned to the caller.
//! - [`RetrainFlow`]: correction pair -> acknowledgement. Never fails; every
//!   failure collapses into `success: false` with a diagnostic message.
//!
//! Each invocation makes exactly one model call. There is no retry.

pub mod constants;
pub mod correction_tool;
pub mod retrain;
pub mod translate;
pub mod types;

pub use correction_tool::{
    CorrectionRecord, CorrectionSink, CorrectionTool, InMemoryCorrectionSink,
    LoggingCorrectionSink,
};
pub use retrain::RetrainFlow;
pub use translate::TranslateFlow;
pub use types::{
    CorrectionPair, RetrainOutcome, SourceLanguage, TranslationRequest, TranslationResult,
};

use crate::orchestrator::error::FlowError;
use crate::orchestrator::model::{ModelClient, ModelReply};
use crate::orchestrator::prompt::PromptTemplate;
use serde_json::{Map, Value};
use tokio_util::sync::CancellationToken;

/// Run one model turn, giving up as soon as `cancel` fires
async fn call_model(
    template: &PromptTemplate,
    client: &dyn ModelClient,
    input: &Map<String, Value>,
    cancel: &CancellationToken,
) -> Result<ModelReply, FlowError> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(FlowError::Cancelled),
        reply = template.call(client, input) => reply,
    }
}
