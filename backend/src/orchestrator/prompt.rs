//! Prompt templates
//!
//! A template binds validated input fields into an instruction string and
//! declares the tools the model may call. Placeholders use the handlebars
//! forms `{{{field}}}` and `{{field}}`; both insert the value verbatim since
//! the target is a model prompt, not markup.
//!
//! Placeholders are checked against the input schema when the template is
//! built, so an unbound placeholder surfaces as a configuration error at
//! startup instead of on a live request.

use crate::orchestrator::error::{FlowError, TemplateError};
use crate::orchestrator::model::{ModelClient, ModelReply, ModelResponse};
use crate::orchestrator::schema::Schema;
use crate::orchestrator::tool::{ToolAdapter, ToolDeclaration, ToolInvocation};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Fully rendered request sent to the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRequest {
    /// Name of the template that produced this request
    pub name: String,
    /// Interpolated prompt text
    pub prompt: String,
    /// Tools the model may call
    pub tools: Vec<ToolDeclaration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A named, parameterized prompt with its registered tools
pub struct PromptTemplate {
    name: String,
    segments: Vec<Segment>,
    tools: Vec<Arc<dyn ToolAdapter>>,
}

impl std::fmt::Debug for PromptTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptTemplate")
            .field("name", &self.name)
            .field("segments", &self.segments.len())
            .field(
                "tools",
                &self
                    .tools
                    .iter()
                    .map(|t| t.declaration().name.as_str())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl PromptTemplate {
    /// Build a template
    ///
    /// # Arguments
    /// * `name` - Template name (used in logs and requests)
    /// * `source` - Template text with `{{{field}}}` placeholders
    /// * `input_schema` - Schema of the values the template is rendered with
    /// * `tools` - Tools to declare to the model
    ///
    /// # Errors
    /// * `TemplateError::UnboundPlaceholder` - a placeholder is not a required
    ///   field of `input_schema`
    /// * `TemplateError::DuplicateTool` - two tools share a name
    pub fn new(
        name: &str,
        source: &str,
        input_schema: &Schema,
        tools: Vec<Arc<dyn ToolAdapter>>,
    ) -> Result<Self, TemplateError> {
        let segments = parse_segments(name, source)?;

        for segment in &segments {
            if let Segment::Placeholder(field) = segment {
                let bound = input_schema.get(field).is_some_and(|spec| spec.required);
                if !bound {
                    return Err(TemplateError::UnboundPlaceholder {
                        template: name.to_string(),
                        placeholder: field.clone(),
                    });
                }
            }
        }

        for (i, tool) in tools.iter().enumerate() {
            let tool_name = &tool.declaration().name;
            if tools[..i].iter().any(|t| &t.declaration().name == tool_name) {
                return Err(TemplateError::DuplicateTool {
                    template: name.to_string(),
                    tool: tool_name.clone(),
                });
            }
        }

        Ok(Self {
            name: name.to_string(),
            segments,
            tools,
        })
    }

    /// Declarations of the registered tools
    pub fn declarations(&self) -> Vec<ToolDeclaration> {
        self.tools.iter().map(|t| t.declaration().clone()).collect()
    }

    fn tool(&self, name: &str) -> Option<&Arc<dyn ToolAdapter>> {
        self.tools.iter().find(|t| t.declaration().name == name)
    }

    /// Render the request for the given input
    ///
    /// Pure: the same input always renders the same request.
    pub fn render(&self, input: &Map<String, Value>) -> Result<ModelRequest, TemplateError> {
        let mut prompt = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => prompt.push_str(text),
                Segment::Placeholder(field) => match input.get(field) {
                    Some(Value::String(value)) => prompt.push_str(value),
                    Some(value) if !value.is_null() => prompt.push_str(&value.to_string()),
                    _ => {
                        return Err(TemplateError::MissingValue {
                            template: self.name.clone(),
                            placeholder: field.clone(),
                        })
                    }
                },
            }
        }

        Ok(ModelRequest {
            name: self.name.clone(),
            prompt,
            tools: self.declarations(),
        })
    }

    /// Render, send to the model, and run the tool it asks for (if any)
    ///
    /// # Errors
    /// * `FlowError::Configuration` - rendering failed
    /// * `FlowError::ModelCommunication` - client failure, or the model asked
    ///   for an unknown tool or sent arguments that fail the tool's schema
    pub async fn call(
        &self,
        client: &dyn ModelClient,
        input: &Map<String, Value>,
    ) -> Result<ModelReply, FlowError> {
        let request = self.render(input)?;

        tracing::debug!(
            template = %self.name,
            prompt_len = request.prompt.len(),
            tools = request.tools.len(),
            "Sending prompt to model"
        );

        let response = client.generate(&request).await?;
        self.run_tool_turn(response).await
    }

    async fn run_tool_turn(&self, response: ModelResponse) -> Result<ModelReply, FlowError> {
        if let Some(call) = response.function_call {
            let tool = self.tool(&call.name).ok_or_else(|| {
                FlowError::ModelCommunication(format!(
                    "model requested unknown tool '{}'",
                    call.name
                ))
            })?;

            let input = tool
                .declaration()
                .input_schema
                .validate(&call.args)
                .map_err(|e| {
                    FlowError::ModelCommunication(format!(
                        "tool call '{}' carried invalid arguments: {}",
                        call.name, e
                    ))
                })?;

            tracing::debug!(template = %self.name, tool = %call.name, "Invoking tool");
            let output = tool.invoke(input.clone()).await;

            if !output.is_null() {
                return Ok(ModelReply::ToolCalled(ToolInvocation {
                    name: call.name,
                    input,
                    output,
                }));
            }
            tracing::warn!(
                template = %self.name,
                tool = %call.name,
                "Tool returned no output, falling back to reply text"
            );
        }

        let text = response.text.trim();
        if text.is_empty() {
            Ok(ModelReply::Empty)
        } else {
            Ok(ModelReply::TextOnly(text.to_string()))
        }
    }
}

fn parse_segments(template: &str, source: &str) -> Result<Vec<Segment>, TemplateError> {
    let mut segments = Vec::new();
    let mut rest = source;

    while let Some(start) = rest.find("{{") {
        let (literal, tail) = rest.split_at(start);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal.to_string()));
        }

        let (open, close) = if tail.starts_with("{{{") {
            ("{{{", "}}}")
        } else {
            ("{{", "}}")
        };
        let body = &tail[open.len()..];
        let end = body
            .find(close)
            .ok_or_else(|| TemplateError::Unterminated(template.to_string()))?;

        let field = body[..end].trim();
        if field.is_empty() {
            return Err(TemplateError::EmptyPlaceholder(template.to_string()));
        }
        segments.push(Segment::Placeholder(field.to_string()));
        rest = &body[end + close.len()..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Literal(rest.to_string()));
    }
    Ok(segments)
}
