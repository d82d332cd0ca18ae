//! Orchestrator module
//!
//! Generic building blocks for driving one model turn: schemas, tools,
//! prompt templates, the model client seam, and reply reconciliation.
//! Concrete flows in [`crate::flows`] are assembled from these pieces.

pub mod api_client;
pub mod config;
pub mod error;
pub mod gemini_types;
pub mod model;
pub mod prompt;
pub mod reconciler;
pub mod schema;
pub mod tool;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{FlowError, TemplateError};
pub use model::{FunctionCall, ModelClient, ModelReply, ModelResponse};
pub use prompt::{ModelRequest, PromptTemplate};
pub use reconciler::{reconcile, Resolution};
pub use schema::{FieldSpec, FieldType, Schema, ValidationError};
pub use tool::{ToolAdapter, ToolDeclaration, ToolInvocation};
