//! Stubs shared by unit tests

use crate::orchestrator::error::FlowError;
use crate::orchestrator::model::{ModelClient, ModelResponse};
use crate::orchestrator::prompt::ModelRequest;
use crate::orchestrator::schema::{FieldSpec, Schema};
use crate::orchestrator::tool::{ToolAdapter, ToolDeclaration};
use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Model client that answers every request with the same scripted response
pub struct ScriptedModelClient {
    response: Result<ModelResponse, String>,
    calls: AtomicUsize,
    last_request: Mutex<Option<ModelRequest>>,
}

impl ScriptedModelClient {
    pub fn new(response: Result<ModelResponse, String>) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<ModelRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelClient for ScriptedModelClient {
    async fn generate(&self, request: &ModelRequest) -> Result<ModelResponse, FlowError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        self.response
            .clone()
            .map_err(FlowError::ModelCommunication)
    }
}

/// Model client that never replies
pub struct PendingModelClient;

#[async_trait]
impl ModelClient for PendingModelClient {
    async fn generate(&self, _request: &ModelRequest) -> Result<ModelResponse, FlowError> {
        std::future::pending().await
    }
}

/// Tool echoing its `value` argument
pub struct EchoTool {
    declaration: ToolDeclaration,
    silent: bool,
    invocations: AtomicUsize,
}

impl EchoTool {
    pub fn new(name: &str) -> Self {
        Self {
            declaration: ToolDeclaration {
                name: name.to_string(),
                description: "Echoes its input".to_string(),
                input_schema: Schema::new().field(FieldSpec::string("value", "Value to echo")),
                output_schema: Schema::new().field(FieldSpec::string("echoed", "Echoed value")),
            },
            silent: false,
            invocations: AtomicUsize::new(0),
        }
    }

    /// Variant that returns no output
    pub fn silent(name: &str) -> Self {
        Self {
            silent: true,
            ..Self::new(name)
        }
    }

    pub fn invocations(&self) -> usize {
        self.invocations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ToolAdapter for EchoTool {
    fn declaration(&self) -> &ToolDeclaration {
        &self.declaration
    }

    async fn invoke(&self, input: Map<String, Value>) -> Value {
        self.invocations.fetch_add(1, Ordering::SeqCst);
        if self.silent {
            return Value::Null;
        }
        json!({ "echoed": input.get("value").cloned().unwrap_or(Value::Null) })
    }
}
