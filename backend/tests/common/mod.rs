//! Shared helpers for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use translation_backend::flows::constants::RETRAIN_TOOL_NAME;
use translation_backend::flows::types::{correction_pair_schema, retrain_outcome_schema};
use translation_backend::orchestrator::{
    FlowError, ModelClient, ModelRequest, ModelResponse, ToolAdapter, ToolDeclaration,
};

/// Deterministic model stub: same response for every request, counts calls
pub struct StubModel {
    response: Result<ModelResponse, String>,
    calls: AtomicUsize,
}

impl StubModel {
    pub fn replying(response: ModelResponse) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(response),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ModelClient for StubModel {
    async fn generate(&self, _request: &ModelRequest) -> Result<ModelResponse, FlowError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response
            .clone()
            .map_err(FlowError::ModelCommunication)
    }
}

/// Retrain tool returning a fixed outcome
pub struct FixedRetrainTool {
    declaration: ToolDeclaration,
    output: Value,
}

impl FixedRetrainTool {
    pub fn new(success: bool, message: &str) -> Arc<Self> {
        Self::with_output(json!({"success": success, "message": message}))
    }

    pub fn with_output(output: Value) -> Arc<Self> {
        Arc::new(Self {
            declaration: ToolDeclaration {
                name: RETRAIN_TOOL_NAME.to_string(),
                description: "Test retrain tool".to_string(),
                input_schema: correction_pair_schema(1_000),
                output_schema: retrain_outcome_schema(),
            },
            output,
        })
    }
}

#[async_trait]
impl ToolAdapter for FixedRetrainTool {
    fn declaration(&self) -> &ToolDeclaration {
        &self.declaration
    }

    async fn invoke(&self, _input: Map<String, Value>) -> Value {
        self.output.clone()
    }
}

/// Model response calling the retrain tool with the given pair
pub fn retrain_tool_call(original: &str, translated: &str) -> ModelResponse {
    ModelResponse::function_call(
        RETRAIN_TOOL_NAME,
        json!({"originalText": original, "translatedText": translated}),
    )
}
