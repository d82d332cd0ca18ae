//! Model client seam
//!
//! The orchestrator talks to the language model only through [`ModelClient`],
//! passed explicitly to each flow. The Gemini HTTP client implements it for
//! production; tests plug in scripted stubs.

use crate::orchestrator::error::FlowError;
use crate::orchestrator::prompt::ModelRequest;
use crate::orchestrator::tool::ToolInvocation;
use async_trait::async_trait;
use serde_json::Value;

/// A function call requested by the model
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    /// Name of the requested tool
    pub name: String,
    /// Arguments as sent by the model (unvalidated)
    pub args: Value,
}

/// Raw model response, before any tool is run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelResponse {
    /// Function call, if the model asked for one
    pub function_call: Option<FunctionCall>,
    /// Concatenated free text (may be empty)
    pub text: String,
}

impl ModelResponse {
    /// Text-only response
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            function_call: None,
            text: text.into(),
        }
    }

    /// Response requesting a tool call
    pub fn function_call(name: impl Into<String>, args: Value) -> Self {
        Self {
            function_call: Some(FunctionCall {
                name: name.into(),
                args,
            }),
            text: String::new(),
        }
    }
}

/// The three shapes a model turn can end in
#[derive(Debug, Clone, PartialEq)]
pub enum ModelReply {
    /// A registered tool ran and produced output
    ToolCalled(ToolInvocation),
    /// No tool ran; the model answered with non-empty text
    TextOnly(String),
    /// Neither a tool result nor text
    Empty,
}

/// Client for a single request/response exchange with the model
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Send a rendered request and return the raw response
    async fn generate(&self, request: &ModelRequest) -> Result<ModelResponse, FlowError>;
}
