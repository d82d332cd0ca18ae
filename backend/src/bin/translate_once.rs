//! One-shot CLI for the translate and retrain flows
//! This is a utility binary for checking the live Gemini setup

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::sync::Arc;
use translation_backend::config::Config;
use translation_backend::flows::{
    CorrectionPair, LoggingCorrectionSink, RetrainFlow, SourceLanguage, TranslateFlow,
    TranslationRequest,
};
use translation_backend::orchestrator::api_client::GeminiClient;
use translation_backend::orchestrator::ModelClient;

/// Run a single translation or correction against the configured Gemini model
#[derive(Parser)]
#[command(name = "translate_once", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Translate text into English
    Translate {
        /// Source language (Nepali or Sinhalese)
        language: SourceLanguage,
        /// Text to translate; multiple words are joined with spaces
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Submit a corrected translation
    Retrain {
        /// Text in the source language
        original: String,
        /// Corrected English translation
        translated: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = Config::from_env();
    let client: Arc<dyn ModelClient> = Arc::new(GeminiClient::new(&config.model)?);
    let max_text_length = config.model.max_text_length;

    match cli.command {
        Command::Translate { language, text } => {
            let flow = TranslateFlow::new(client, max_text_length)?;
            let request = TranslationRequest::new(text.join(" "), language);
            match flow.run(&request).await {
                Ok(result) => {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    eprintln!("Translation failed: {}", e);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Retrain {
            original,
            translated,
        } => {
            let flow = RetrainFlow::new(client, Arc::new(LoggingCorrectionSink), max_text_length)?;
            let outcome = flow.run(&CorrectionPair::new(original, translated)).await;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            Ok(if outcome.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_translate_joins_words() {
        let cli = Cli::try_parse_from(["translate_once", "translate", "nepali", "शुभ", "प्रभात"])
            .unwrap();
        match cli.command {
            Command::Translate { language, text } => {
                assert_eq!(language, SourceLanguage::Nepali);
                assert_eq!(text.join(" "), "शुभ प्रभात");
            }
            Command::Retrain { .. } => panic!("expected translate"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_language() {
        assert!(Cli::try_parse_from(["translate_once", "translate", "Tamil", "vanakkam"]).is_err());
    }

    #[test]
    fn test_parse_translate_requires_text() {
        assert!(Cli::try_parse_from(["translate_once", "translate", "Sinhalese"]).is_err());
    }

    #[test]
    fn test_parse_retrain() {
        let cli = Cli::try_parse_from(["translate_once", "retrain", "नमस्ते", "Hello"]).unwrap();
        match cli.command {
            Command::Retrain {
                original,
                translated,
            } => {
                assert_eq!(original, "नमस्ते");
                assert_eq!(translated, "Hello");
            }
            Command::Translate { .. } => panic!("expected retrain"),
        }
    }
}
