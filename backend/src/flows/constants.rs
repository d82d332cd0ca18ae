//! Flow constants
//!
//! Prompt texts, tool names and the retrain status messages.

/// Name of the translation prompt
pub const TRANSLATE_PROMPT_NAME: &str = "translateTextPrompt";

/// Translation prompt; no tools are declared for it
pub const TRANSLATE_PROMPT: &str =
    "Translate the following text from {{{sourceLanguage}}} to English.\n\nText: {{{text}}}";

/// Name of the retrain prompt
pub const RETRAIN_PROMPT_NAME: &str = "retrainTranslationModelPrompt";

/// Retrain prompt; declares the retrain tool
pub const RETRAIN_PROMPT: &str = "You are an AI model retraining assistant. Use the provided tool to retrain the translation model with the given text pair.\nOriginal Text: {{{originalText}}}\nTranslated Text: {{{translatedText}}}";

/// Name of the retrain tool
pub const RETRAIN_TOOL_NAME: &str = "retrainTranslationModelTool";

/// Description of the retrain tool
pub const RETRAIN_TOOL_DESCRIPTION: &str = "Retrains the translation model with provided original and translated text pairs to improve accuracy.";

/// Message returned by the simulated retrain tool
pub const RETRAIN_SIMULATED_MESSAGE: &str = "Model retraining simulated successfully.";

/// Prefix of the message when the model answered in text instead of calling the tool
pub const RETRAIN_DECLINED_PREFIX: &str = "Model did not perform retraining. It responded with: ";

/// Prefix of the message for any retrain error
pub const RETRAIN_FAILED_PREFIX: &str = "Model retraining failed: ";

/// Reason reported when the model replied with neither a tool call nor text
pub const RETRAIN_NO_RESPONSE_MESSAGE: &str =
    "Retraining tool was not called by the model and no text response was provided.";

/// Message reported when the caller cancelled a retrain invocation
pub const RETRAIN_CANCELLED_MESSAGE: &str = "Model retraining cancelled before the model replied.";
