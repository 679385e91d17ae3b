//! Configuration file loading with environment variable overrides.

use crate::defaults;
use crate::error::{Result, SylcueError};
use crate::phonetics::languages::get_language;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub syllabify: SyllabifyConfig,
    pub pipeline: CorpusConfig,
    pub transcriber: TranscriberConfig,
}

/// Syllabification settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SyllabifyConfig {
    pub language: String,
    pub add_boundaries: bool,
}

/// Corpus pipeline settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CorpusConfig {
    /// Worker threads; `None` uses the available parallelism.
    pub workers: Option<usize>,
    pub chunk_size: usize,
    pub progress_interval: u64,
}

/// Transcription backend settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TranscriberConfig {
    pub backend: TranscriberBackend,
    /// Program for the command backend.
    pub program: String,
    /// Arguments placed before the word; `None` uses the espeak-ng defaults
    /// for the configured language.
    pub args: Option<Vec<String>>,
    /// Lexicon file for the lexicon backend.
    pub lexicon: Option<PathBuf>,
    /// Memoize transcriptions.
    pub cache: bool,
}

/// Transcription backend enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TranscriberBackend {
    Command,
    Lexicon,
}

impl Default for SyllabifyConfig {
    fn default() -> Self {
        Self {
            language: defaults::DEFAULT_LANGUAGE.to_string(),
            add_boundaries: defaults::ADD_BOUNDARIES,
        }
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            workers: None,
            chunk_size: defaults::CHUNK_SIZE,
            progress_interval: defaults::PROGRESS_INTERVAL,
        }
    }
}

impl Default for TranscriberConfig {
    fn default() -> Self {
        Self {
            backend: TranscriberBackend::Command,
            program: defaults::TRANSCRIBER_PROGRAM.to_string(),
            args: None,
            lexicon: None,
            cache: true,
        }
    }
}

impl CorpusConfig {
    /// Configured worker count, or the available parallelism.
    pub fn resolved_workers(&self) -> usize {
        self.workers.unwrap_or_else(defaults::worker_count)
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file contains invalid TOML.
    /// Missing fields will use default values.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if file doesn't exist
    ///
    /// Only returns defaults if the file is missing.
    /// Returns errors for invalid TOML.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(e)
                if e.downcast_ref::<std::io::Error>()
                    .is_some_and(|io_err| io_err.kind() == std::io::ErrorKind::NotFound) =>
            {
                Ok(Self::default())
            }
            Err(e) => Err(e.context(format!("Failed to load config from {}", path.display()))),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - SYLCUE_LANGUAGE → syllabify.language
    /// - SYLCUE_WORKERS → pipeline.workers
    /// - SYLCUE_CHUNK_SIZE → pipeline.chunk_size
    ///
    /// Empty or unparsable values are ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(language) = std::env::var("SYLCUE_LANGUAGE")
            && !language.is_empty()
        {
            self.syllabify.language = language;
        }

        if let Ok(workers) = std::env::var("SYLCUE_WORKERS") {
            match workers.parse::<usize>() {
                Ok(n) => self.pipeline.workers = Some(n),
                Err(_) if workers.is_empty() => {}
                Err(e) => tracing::warn!(value = %workers, "ignoring SYLCUE_WORKERS: {e}"),
            }
        }

        if let Ok(chunk_size) = std::env::var("SYLCUE_CHUNK_SIZE") {
            match chunk_size.parse::<usize>() {
                Ok(n) => self.pipeline.chunk_size = n,
                Err(_) if chunk_size.is_empty() => {}
                Err(e) => tracing::warn!(value = %chunk_size, "ignoring SYLCUE_CHUNK_SIZE: {e}"),
            }
        }

        self
    }

    /// Check values that would otherwise fail deep inside a run.
    pub fn validate(&self) -> Result<()> {
        if get_language(&self.syllabify.language).is_none() {
            return Err(SylcueError::UnknownLanguage {
                code: self.syllabify.language.clone(),
            });
        }
        if self.pipeline.workers == Some(0) {
            return Err(SylcueError::ConfigInvalidValue {
                key: "pipeline.workers".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.pipeline.chunk_size == 0 {
            return Err(SylcueError::ConfigInvalidValue {
                key: "pipeline.chunk_size".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.transcriber.backend == TranscriberBackend::Lexicon
            && self.transcriber.lexicon.is_none()
        {
            return Err(SylcueError::ConfigInvalidValue {
                key: "transcriber.lexicon".to_string(),
                message: "required when backend = \"lexicon\"".to_string(),
            });
        }
        Ok(())
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/sylcue/config.toml on Linux
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sylcue").join("config.toml"))
    }
}
