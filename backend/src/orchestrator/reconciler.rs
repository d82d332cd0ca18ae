//! Response reconciliation
//!
//! Turns a [`ModelReply`] into one resolved state:
//!
//! ```text
//! AwaitingReply ──> ToolCalled ──(output schema ok)──> Resolved(ToolOutput)
//!              │              └─(schema mismatch)───> ToolOutputValidation error
//!              ├──> TextOnly ───────────────────────> Resolved(TextFallback)
//!              └──> Empty ──────────────────────────> NoActionableOutput error
//! ```
//!
//! The same routine serves flows where the model must act (a text fallback is
//! a failure there) and flows where it may just answer (the text is the
//! result). That decision belongs to each flow's mapping of [`Resolution`].

use crate::orchestrator::error::FlowError;
use crate::orchestrator::model::ModelReply;
use crate::orchestrator::tool::ToolDeclaration;
use serde_json::{Map, Value};

/// Resolved state of one model turn
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// A tool ran and its output passed the declared output schema
    ToolOutput {
        /// Tool that produced the output
        tool: String,
        /// Validated output object
        output: Map<String, Value>,
    },
    /// No tool ran; the model answered with text
    TextFallback(String),
}

impl Resolution {
    /// Short label for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Resolution::ToolOutput { .. } => "tool-output",
            Resolution::TextFallback(_) => "text-fallback",
        }
    }
}

/// Reconcile a reply against the tools that were declared for the turn
///
/// # Errors
/// * `FlowError::ToolOutputValidation` - the tool is not among `tools` or its
///   output fails the output schema
/// * `FlowError::NoActionableOutput` - the reply was empty
pub fn reconcile(reply: ModelReply, tools: &[ToolDeclaration]) -> Result<Resolution, FlowError> {
    match reply {
        ModelReply::ToolCalled(invocation) => {
            let declaration = tools
                .iter()
                .find(|t| t.name == invocation.name)
                .ok_or_else(|| {
                    FlowError::ToolOutputValidation(format!(
                        "tool '{}' was not declared for this prompt",
                        invocation.name
                    ))
                })?;

            let output = declaration
                .output_schema
                .validate(&invocation.output)
                .map_err(|e| {
                    FlowError::ToolOutputValidation(format!(
                        "tool '{}' returned output that does not match its schema: {}",
                        invocation.name, e
                    ))
                })?;

            Ok(Resolution::ToolOutput {
                tool: invocation.name,
                output,
            })
        }
        ModelReply::TextOnly(text) => Ok(Resolution::TextFallback(text)),
        ModelReply::Empty => Err(FlowError::NoActionableOutput),
    }
}
