//! Word-level orthography-to-IPA transcription collaborators.

pub mod cached;
pub mod command;
pub mod lexicon;
pub mod transcriber;

pub use cached::CachedTranscriber;
pub use command::{CommandExecutor, CommandTranscriber, SystemCommandExecutor};
pub use lexicon::LexiconTranscriber;
pub use transcriber::{MockTranscriber, Transcriber};

use crate::config::{TranscriberBackend, TranscriberConfig};
use crate::error::{Result, SylcueError};
use crate::phonetics::languages::LanguageInfo;
use std::sync::Arc;

/// Builds the configured transcriber for a language.
pub fn build_transcriber(
    config: &TranscriberConfig,
    language: &LanguageInfo,
) -> Result<Arc<dyn Transcriber>> {
    match config.backend {
        TranscriberBackend::Lexicon => {
            let path = config
                .lexicon
                .as_deref()
                .ok_or_else(|| SylcueError::ConfigInvalidValue {
                    key: "transcriber.lexicon".to_string(),
                    message: "required when backend = \"lexicon\"".to_string(),
                })?;
            let lexicon = LexiconTranscriber::from_file(path)?;
            if lexicon.is_empty() {
                return Err(SylcueError::ConfigInvalidValue {
                    key: "transcriber.lexicon".to_string(),
                    message: format!("{} has no entries", path.display()),
                });
            }
            tracing::info!(
                path = %path.display(),
                entries = lexicon.len(),
                "loaded pronunciation lexicon"
            );
            Ok(Arc::new(lexicon))
        }
        TranscriberBackend::Command => {
            let args = config.args.clone().unwrap_or_else(|| {
                vec![
                    "-q".to_string(),
                    "--ipa".to_string(),
                    "-v".to_string(),
                    language.voice.to_string(),
                ]
            });
            let transcriber =
                CommandTranscriber::new(SystemCommandExecutor::new(), &config.program, args);
            if config.cache {
                Ok(Arc::new(CachedTranscriber::new(transcriber)))
            } else {
                Ok(Arc::new(transcriber))
            }
        }
    }
}
