//! Flow request and result types
//!
//! Typed shapes of both entry points plus the schemas that validate them.
//! Everything serializes with camelCase field names.

use crate::orchestrator::schema::{FieldSpec, Schema, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages the translate flow accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceLanguage {
    /// Nepali (ne-NP)
    Nepali,
    /// Sinhalese (si-LK)
    Sinhalese,
}

impl SourceLanguage {
    /// All supported languages
    pub const ALL: [SourceLanguage; 2] = [SourceLanguage::Nepali, SourceLanguage::Sinhalese];

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceLanguage::Nepali => "Nepali",
            SourceLanguage::Sinhalese => "Sinhalese",
        }
    }

    /// Speech recognition locale
    pub fn locale(&self) -> &'static str {
        match self {
            SourceLanguage::Nepali => "ne-NP",
            SourceLanguage::Sinhalese => "si-LK",
        }
    }
}

impl fmt::Display for SourceLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceLanguage {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SourceLanguage::ALL
            .into_iter()
            .find(|lang| lang.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ValidationError::new("sourceLanguage", "expected one of: Nepali, Sinhalese")
            })
    }
}

/// Text to translate into English
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    text: String,
    source_language: SourceLanguage,
}

impl TranslationRequest {
    /// Create a request; validated when a flow runs it
    pub fn new(text: impl Into<String>, source_language: SourceLanguage) -> Self {
        Self {
            text: text.into(),
            source_language,
        }
    }

    /// Text to translate
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Language of the text
    pub fn source_language(&self) -> SourceLanguage {
        self.source_language
    }
}

/// English translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    /// Translated text
    pub translated_text: String,
}

/// Human-supplied correction used to (simulate) model improvement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionPair {
    original_text: String,
    translated_text: String,
}

impl CorrectionPair {
    /// Create a pair; validated when a flow runs it
    pub fn new(original_text: impl Into<String>, translated_text: impl Into<String>) -> Self {
        Self {
            original_text: original_text.into(),
            translated_text: translated_text.into(),
        }
    }

    /// Text in the source language
    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    /// Corrected English translation
    pub fn translated_text(&self) -> &str {
        &self.translated_text
    }
}

/// Result of a retrain attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrainOutcome {
    /// True only when the retrain tool ran and reported success
    pub success: bool,
    /// Status or diagnostic message
    pub message: String,
}

impl RetrainOutcome {
    /// Successful outcome
    pub fn succeeded(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Failed outcome
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Schema of [`TranslationRequest`]
pub fn translation_request_schema(max_text_length: usize) -> Schema {
    let languages: Vec<&str> = SourceLanguage::ALL.iter().map(|l| l.as_str()).collect();
    Schema::new()
        .field(
            FieldSpec::string("text", "The text to translate.").max_length(max_text_length),
        )
        .field(FieldSpec::enumeration(
            "sourceLanguage",
            &languages,
            "The language of the text: Nepali or Sinhalese.",
        ))
}

/// Schema of [`CorrectionPair`]; also the retrain tool's input schema
pub fn correction_pair_schema(max_text_length: usize) -> Schema {
    Schema::new()
        .field(
            FieldSpec::string("originalText", "The original text in Nepali or Sinhalese.")
                .max_length(max_text_length),
        )
        .field(
            FieldSpec::string(
                "translatedText",
                "The corresponding translated text in English.",
            )
            .max_length(max_text_length),
        )
}

/// Schema of [`RetrainOutcome`]; also the retrain tool's output schema
pub fn retrain_outcome_schema() -> Schema {
    Schema::new()
        .field(FieldSpec::boolean(
            "success",
            "Indicates if the retraining data was successfully processed.",
        ))
        .field(FieldSpec::string(
            "message",
            "A message describing the result of the retraining attempt.",
        ))
}
