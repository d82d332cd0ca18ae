//! Tool adapters
//!
//! A tool is a named, schema-typed operation the model may elect to invoke
//! during a single turn. Adapters receive arguments that already passed the
//! input schema and must not fail for expected conditions: outcomes such as
//! "could not record" are encoded in the output object instead.

use crate::orchestrator::schema::Schema;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Name, description and schemas advertised to the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDeclaration {
    /// Unique tool name
    pub name: String,
    /// What the tool does, in words the model reads
    pub description: String,
    /// Schema the arguments must satisfy
    pub input_schema: Schema,
    /// Schema the output must satisfy
    pub output_schema: Schema,
}

/// A side-effecting operation the model may call
#[async_trait]
pub trait ToolAdapter: Send + Sync {
    /// Declaration shown to the model
    fn declaration(&self) -> &ToolDeclaration;

    /// Run the tool with validated arguments
    async fn invoke(&self, input: Map<String, Value>) -> Value;
}

/// One executed tool call, owned by the reconciler for a single turn
#[derive(Debug, Clone, PartialEq)]
pub struct ToolInvocation {
    /// Tool that ran
    pub name: String,
    /// Arguments, validated against the input schema
    pub input: Map<String, Value>,
    /// Raw output; validated by the reconciler
    pub output: Value,
}
