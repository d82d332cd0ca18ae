//! Retrain tool
//!
//! The tool the retrain prompt declares. Retraining itself is simulated: an
//! accepted correction is handed to a [`CorrectionSink`] and the tool reports
//! success. Retries are never performed, so sinks must tolerate receiving the
//! same correction twice when a caller resubmits it.

use crate::flows::constants::{
    RETRAIN_SIMULATED_MESSAGE, RETRAIN_TOOL_DESCRIPTION, RETRAIN_TOOL_NAME,
};
use crate::flows::types::{correction_pair_schema, retrain_outcome_schema, CorrectionPair};
use crate::orchestrator::tool::{ToolAdapter, ToolDeclaration};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tokio::sync::RwLock;

/// A correction accepted by the retrain tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionRecord {
    /// Text in the source language
    pub original_text: String,
    /// Corrected English translation
    pub translated_text: String,
    /// When the tool received the correction
    pub received_at: DateTime<Utc>,
}

impl CorrectionRecord {
    /// Stamp a correction pair with the current time
    pub fn from_pair(pair: &CorrectionPair) -> Self {
        Self {
            original_text: pair.original_text().to_string(),
            translated_text: pair.translated_text().to_string(),
            received_at: Utc::now(),
        }
    }
}

/// Destination for accepted corrections
#[async_trait]
pub trait CorrectionSink: Send + Sync {
    /// Record one correction
    async fn record(&self, correction: CorrectionRecord) -> anyhow::Result<()>;
}

/// Sink that only logs corrections; nothing is persisted
#[derive(Debug, Default)]
pub struct LoggingCorrectionSink;

#[async_trait]
impl CorrectionSink for LoggingCorrectionSink {
    async fn record(&self, correction: CorrectionRecord) -> anyhow::Result<()> {
        tracing::info!(
            original_len = correction.original_text.chars().count(),
            translated_len = correction.translated_text.chars().count(),
            received_at = %correction.received_at,
            "Retraining model with correction (simulated)"
        );
        Ok(())
    }
}

/// Sink keeping corrections in memory
#[derive(Debug, Default)]
pub struct InMemoryCorrectionSink {
    records: RwLock<Vec<CorrectionRecord>>,
}

impl InMemoryCorrectionSink {
    /// Empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Corrections recorded so far, oldest first
    pub async fn records(&self) -> Vec<CorrectionRecord> {
        self.records.read().await.clone()
    }
}

#[async_trait]
impl CorrectionSink for InMemoryCorrectionSink {
    async fn record(&self, correction: CorrectionRecord) -> anyhow::Result<()> {
        self.records.write().await.push(correction);
        Ok(())
    }
}

/// Tool adapter that accepts a correction pair and simulates retraining
pub struct CorrectionTool {
    declaration: ToolDeclaration,
    sink: Arc<dyn CorrectionSink>,
}

impl CorrectionTool {
    /// Create the tool
    ///
    /// # Arguments
    /// * `sink` - Where accepted corrections go
    /// * `max_text_length` - Length limit applied to both texts
    pub fn new(sink: Arc<dyn CorrectionSink>, max_text_length: usize) -> Self {
        Self {
            declaration: ToolDeclaration {
                name: RETRAIN_TOOL_NAME.to_string(),
                description: RETRAIN_TOOL_DESCRIPTION.to_string(),
                input_schema: correction_pair_schema(max_text_length),
                output_schema: retrain_outcome_schema(),
            },
            sink,
        }
    }
}

#[async_trait]
impl ToolAdapter for CorrectionTool {
    fn declaration(&self) -> &ToolDeclaration {
        &self.declaration
    }

    async fn invoke(&self, input: Map<String, Value>) -> Value {
        let pair: CorrectionPair = match serde_json::from_value(Value::Object(input)) {
            Ok(pair) => pair,
            Err(e) => {
                return json!({
                    "success": false,
                    "message": format!("Invalid correction pair: {}", e),
                })
            }
        };

        match self.sink.record(CorrectionRecord::from_pair(&pair)).await {
            Ok(()) => json!({
                "success": true,
                "message": RETRAIN_SIMULATED_MESSAGE,
            }),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to record correction");
                json!({
                    "success": false,
                    "message": format!("Failed to record correction: {}", e),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSink;

    #[async_trait]
    impl CorrectionSink for FailingSink {
        async fn record(&self, _correction: CorrectionRecord) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("store offline"))
        }
    }

    fn pair_input() -> Map<String, Value> {
        json!({"originalText": "नमस्ते", "translatedText": "Hello"})
            .as_object()
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_declaration_matches_retrain_contract() {
        let tool = CorrectionTool::new(Arc::new(LoggingCorrectionSink), 100);
        let declaration = tool.declaration();
        assert_eq!(declaration.name, RETRAIN_TOOL_NAME);
        assert!(declaration.input_schema.get("originalText").is_some());
        assert!(declaration.input_schema.get("translatedText").is_some());
        assert!(declaration.output_schema.get("success").is_some());
        assert!(declaration.output_schema.get("message").is_some());
    }

    #[tokio::test]
    async fn test_invoke_records_and_reports_simulated_success() {
        let sink = Arc::new(InMemoryCorrectionSink::new());
        let tool = CorrectionTool::new(sink.clone(), 100);

        let output = tool.invoke(pair_input()).await;

        assert_eq!(
            output,
            json!({"success": true, "message": RETRAIN_SIMULATED_MESSAGE})
        );
        let records = sink.records().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].original_text, "नमस्ते");
        assert_eq!(records[0].translated_text, "Hello");
    }

    #[tokio::test]
    async fn test_invoke_is_deterministic_for_repeated_corrections() {
        let sink = Arc::new(InMemoryCorrectionSink::new());
        let tool = CorrectionTool::new(sink.clone(), 100);

        let first = tool.invoke(pair_input()).await;
        let second = tool.invoke(pair_input()).await;

        assert_eq!(first, second);
        assert_eq!(sink.records().await.len(), 2);
    }

    #[tokio::test]
    async fn test_sink_failure_is_encoded_in_output() {
        let tool = CorrectionTool::new(Arc::new(FailingSink), 100);

        let output = tool.invoke(pair_input()).await;

        assert_eq!(output["success"], json!(false));
        assert!(output["message"].as_str().unwrap().contains("store offline"));
    }

    #[tokio::test]
    async fn test_malformed_input_is_encoded_in_output() {
        let tool = CorrectionTool::new(Arc::new(LoggingCorrectionSink), 100);

        let output = tool.invoke(Map::new()).await;

        assert_eq!(output["success"], json!(false));
        assert!(output["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid correction pair"));
    }
}
