//! Gemini API client
//!
//! Direct HTTP client for the Gemini `generateContent` endpoint. Tool
//! declarations are sent as function declarations; a function-call part in the
//! reply becomes [`ModelResponse::function_call`].

use crate::orchestrator::config::ModelConfig;
use crate::orchestrator::error::FlowError;
use crate::orchestrator::gemini_types::{
    FunctionDeclaration, GeminiApiRequest, GeminiApiResponse, GeminiTool, RequestContent,
    RequestPart,
};
use crate::orchestrator::model::{FunctionCall, ModelClient, ModelResponse};
use crate::orchestrator::prompt::ModelRequest;
use async_trait::async_trait;
use std::time::Duration;

/// Header carrying the API key; the key never goes into the request URL
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Model client backed by the Gemini REST API
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a client from configuration
    ///
    /// Builds one shared `reqwest::Client` (connection pooling) with the
    /// configured request timeout.
    ///
    /// # Errors
    /// * `FlowError::Configuration` - API key is empty or the HTTP client
    ///   cannot be built
    pub fn new(config: &ModelConfig) -> Result<Self, FlowError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FlowError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Self::with_http_client(http, &config.api_key, &config.model, &config.api_base_url)
    }

    /// Create a client around an existing HTTP client
    ///
    /// # Errors
    /// * `FlowError::Configuration` - API key is empty
    pub fn with_http_client(
        http: reqwest::Client,
        api_key: &str,
        model: &str,
        base_url: &str,
    ) -> Result<Self, FlowError> {
        if api_key.is_empty() {
            return Err(FlowError::Configuration(
                "GEMINI_API_KEY is not set or is empty. Please set it to use the Gemini API."
                    .to_string(),
            ));
        }

        Ok(Self {
            http,
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Model name requests are sent to
    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_request(request: &ModelRequest) -> GeminiApiRequest {
        let tools = if request.tools.is_empty() {
            Vec::new()
        } else {
            vec![GeminiTool {
                function_declarations: request
                    .tools
                    .iter()
                    .map(|tool| FunctionDeclaration {
                        name: tool.name.clone(),
                        description: tool.description.clone(),
                        parameters: tool.input_schema.to_parameters(),
                    })
                    .collect(),
            }]
        };

        GeminiApiRequest {
            contents: vec![RequestContent {
                role: "user".to_string(),
                parts: vec![RequestPart {
                    text: request.prompt.clone(),
                }],
            }],
            tools,
        }
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn generate(&self, request: &ModelRequest) -> Result<ModelResponse, FlowError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let request_body = Self::build_request(request);

        tracing::debug!(
            url = %url,
            model = %self.model,
            template = %request.name,
            prompt_len = request.prompt.len(),
            tools = request.tools.len(),
            "Calling Gemini API"
        );

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                FlowError::ModelCommunication(format!(
                    "Failed to send HTTP request to Gemini API: {}",
                    e
                ))
            })?;

        // Check HTTP status
        let status = response.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());

            tracing::error!(
                status_code = status_code,
                error_body = %error_body,
                "Gemini API returned error status"
            );

            if status_code == 429 {
                return Err(FlowError::ModelCommunication(format!(
                    "Gemini API rate limit exceeded (HTTP {}): {}",
                    status_code, error_body
                )));
            }

            return Err(FlowError::ModelCommunication(format!(
                "Gemini API returned error status {}: {}",
                status_code, error_body
            )));
        }

        let response_body = response.text().await.map_err(|e| {
            FlowError::ModelCommunication(format!(
                "Failed to read response body from Gemini API: {}",
                e
            ))
        })?;

        let parsed: GeminiApiResponse = serde_json::from_str(&response_body).map_err(|e| {
            FlowError::ModelCommunication(format!(
                "Failed to parse JSON response from Gemini API: {} - Response body: {}",
                e, response_body
            ))
        })?;

        if let Some(reason) = parsed
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_ref())
        {
            return Err(FlowError::ModelCommunication(format!(
                "Gemini API blocked the prompt: {}",
                reason
            )));
        }

        let candidate = parsed.candidates.into_iter().next().ok_or_else(|| {
            FlowError::ModelCommunication("Gemini API response contains no candidates".to_string())
        })?;

        // A candidate without parts is an empty reply, not a transport failure
        let mut reply = ModelResponse::default();
        for part in candidate.content.map(|c| c.parts).unwrap_or_default() {
            if let Some(text) = part.text {
                reply.text.push_str(&text);
            }
            if let Some(call) = part.function_call {
                if reply.function_call.is_none() {
                    reply.function_call = Some(FunctionCall {
                        name: call.name,
                        args: call.args,
                    });
                } else {
                    tracing::warn!(
                        tool = %call.name,
                        "Ignoring additional function call in Gemini response"
                    );
                }
            }
        }

        tracing::debug!(
            finish_reason = ?candidate.finish_reason,
            response_len = reply.text.len(),
            function_call = ?reply.function_call.as_ref().map(|c| c.name.as_str()),
            "Received response from Gemini API"
        );

        Ok(reply)
    }
}
