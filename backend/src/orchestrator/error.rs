//! Orchestration error types
//!
//! Errors that can occur while validating a request, talking to the model,
//! or reconciling its reply.

use crate::orchestrator::schema::ValidationError;
use thiserror::Error;

/// Errors produced by the orchestration layer
#[derive(Error, Debug)]
pub enum FlowError {
    /// Request input failed its schema; raised before any model call
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Model unreachable, returned an error status, or sent a malformed envelope
    #[error("Model communication error: {0}")]
    ModelCommunication(String),

    /// A tool produced output that does not match its declared schema
    #[error("Tool output validation error: {0}")]
    ToolOutputValidation(String),

    /// Reply carried neither a tool call nor text
    #[error("Model produced no actionable output")]
    NoActionableOutput,

    /// The caller cancelled the invocation before the model replied
    #[error("Invocation cancelled before the model replied")]
    Cancelled,

    /// Prompt template or model client is misconfigured
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Errors detected while building a prompt template
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Placeholder does not name a required input field
    #[error("Template '{template}' has unbound placeholder '{placeholder}'")]
    UnboundPlaceholder {
        /// Template name
        template: String,
        /// Placeholder name
        placeholder: String,
    },

    /// `{{` without a matching close
    #[error("Template '{0}' has an unterminated placeholder")]
    Unterminated(String),

    /// `{{}}` or `{{{}}}`
    #[error("Template '{0}' has an empty placeholder")]
    EmptyPlaceholder(String),

    /// Two registered tools share a name
    #[error("Template '{template}' registers tool '{tool}' more than once")]
    DuplicateTool {
        /// Template name
        template: String,
        /// Tool name
        tool: String,
    },

    /// Rendering was attempted with a value missing for a placeholder
    #[error("Template '{template}' has no value for placeholder '{placeholder}'")]
    MissingValue {
        /// Template name
        template: String,
        /// Placeholder name
        placeholder: String,
    },
}

impl From<TemplateError> for FlowError {
    fn from(err: TemplateError) -> Self {
        FlowError::Configuration(err.to_string())
    }
}
