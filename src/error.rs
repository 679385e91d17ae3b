//! Error types for sylcue.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SylcueError {
    // Configuration errors
    #[error("Configuration file not found at {path}")]
    ConfigFileNotFound { path: String },

    #[error("Failed to parse configuration: {message}")]
    ConfigParse { message: String },

    #[error("Invalid configuration value for {key}: {message}")]
    ConfigInvalidValue { key: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    // Language profile errors (fatal at startup)
    #[error("Language profile {language}: symbol '{symbol}' is both a vowel and a consonant")]
    ProfileOverlap { language: String, symbol: String },

    #[error("Language profile {language} is invalid: {message}")]
    ProfileInvalid { language: String, message: String },

    #[error("Unknown language: {code}")]
    UnknownLanguage { code: String },

    // Transcription errors
    #[error("Transcription of '{word}' failed: {message}")]
    Transcription { word: String, message: String },

    #[error("Transcriber unavailable: {message}")]
    TranscriberUnavailable { message: String },

    // Corpus pipeline errors
    #[error("Line {line} is not valid UTF-8: {message}")]
    LineDecode { line: u64, message: String },

    #[error("Worker failed: {message}")]
    WorkerFailed { message: String },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for cases not covered above
    #[error("{0}")]
    Other(String),
}

impl SylcueError {
    /// Whether this error only affects the word being transcribed.
    ///
    /// Word-level failures drop the word from the cue string; anything else
    /// fails the whole line.
    pub fn is_word_level(&self) -> bool {
        matches!(self, SylcueError::Transcription { .. })
    }
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, SylcueError>;
