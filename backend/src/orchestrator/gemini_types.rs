//! Gemini API request/response types
//!
//! Structs that mirror the `generateContent` JSON format, including function
//! declarations and function-call parts.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level Gemini API response
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GeminiApiResponse {
    /// List of candidate responses from the model
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Optional feedback about the prompt (e.g., if it was blocked)
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

/// A single candidate response from the model
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The content of this candidate (absent when generation stopped early)
    #[serde(default)]
    pub content: Option<Content>,
    /// Why the model stopped generating (if applicable)
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Content structure containing parts of the response
#[derive(Deserialize, Debug)]
pub struct Content {
    /// Text and function-call parts
    #[serde(default)]
    pub parts: Vec<Part>,
    /// Role of the content (e.g., "model")
    #[serde(default)]
    #[allow(dead_code)] // Part of API response format
    pub role: Option<String>,
}

/// A single part of content
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Text content of this part
    #[serde(default)]
    pub text: Option<String>,
    /// Function call requested by the model
    #[serde(default)]
    pub function_call: Option<FunctionCallPart>,
}

/// Function call requested by the model
#[derive(Deserialize, Debug)]
pub struct FunctionCallPart {
    /// Declared function name
    pub name: String,
    /// Arguments object
    #[serde(default)]
    pub args: Value,
}

/// Feedback about the prompt (e.g., if it was blocked)
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Reason the prompt was blocked (if applicable)
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// Request structure for Gemini API
#[derive(Serialize, Debug)]
pub struct GeminiApiRequest {
    /// List of content items to send
    pub contents: Vec<RequestContent>,
    /// Tools the model may call
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<GeminiTool>,
}

/// Content structure for requests
#[derive(Serialize, Debug)]
pub struct RequestContent {
    /// Author role ("user")
    pub role: String,
    /// List of content parts
    pub parts: Vec<RequestPart>,
}

/// A single text part for requests
#[derive(Serialize, Debug)]
pub struct RequestPart {
    /// The text content
    pub text: String,
}

/// Tool block of a request
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GeminiTool {
    /// Functions the model may call
    pub function_declarations: Vec<FunctionDeclaration>,
}

/// A function the model may call
#[derive(Serialize, Debug)]
pub struct FunctionDeclaration {
    /// Function name
    pub name: String,
    /// Function description
    pub description: String,
    /// Object schema of the arguments
    pub parameters: Value,
}
