//! Service-level API handlers
//!
//! Hello, health and language-listing endpoints.

use crate::flows::SourceLanguage;
use axum::Json;
use serde::Serialize;

/// Response of `GET /`
#[derive(Serialize)]
pub struct HelloResponse {
    /// Greeting
    pub message: String,
    /// Always "ok"
    pub status: String,
}

/// Response of `GET /api/health`
#[derive(Serialize)]
pub struct HealthResponse {
    /// Always "healthy"
    pub status: String,
    /// Crate version
    pub version: String,
    /// Human-readable status
    pub message: String,
}

/// One entry of `GET /api/languages`
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct LanguageResponse {
    /// Wire name accepted as `sourceLanguage`
    pub name: String,
    /// Speech recognition locale
    pub locale: String,
}

/// GET / - Hello world
pub async fn hello_world() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "Hello from the Translation Backend!".to_string(),
        status: "ok".to_string(),
    })
}

/// GET /api/health - Health check
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        message: "Backend is healthy".to_string(),
    })
}

/// GET /api/languages - Supported source languages
pub async fn list_languages() -> Json<Vec<LanguageResponse>> {
    Json(
        SourceLanguage::ALL
            .iter()
            .map(|lang| LanguageResponse {
                name: lang.as_str().to_string(),
                locale: lang.locale().to_string(),
            })
            .collect(),
    )
}
