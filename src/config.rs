//! YAML configuration file support.
//!
//! One file describes every stage of a preparation run: cleaning, the
//! vocabulary tokenizer, the sentence vectorizer and pipeline options.
//! Every section is optional and falls back to its defaults.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "meld text features"
//!
//! cleaner:
//!   stop_word_language: "en"
//!   extra_stop_words: ["yeah", "uh"]
//!   legacy_recode: false
//!   normalize_unicode: false
//!   min_token_len: 2
//!
//! vocabulary:
//!   tokenizer: "word"
//!
//! vectorizer:
//!   tokenizer: "word"
//!   l2_normalize: false
//!
//! embeddings:
//!   path: "glove.6B.100d.txt"
//!   expected_dim: 100
//!
//! pipeline:
//!   use_parallel: true
//!   batch_size: 32
//!   max_seq_len: 50
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use cleaner::{CleanerConfig, Tokenizer};
use embed::VectorizerConfig;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level configuration for a preparation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PrepConfig {
    /// Configuration format version
    pub version: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub cleaner: CleanerConfig,

    #[serde(default)]
    pub vocabulary: VocabularyYamlConfig,

    #[serde(default)]
    pub vectorizer: VectorizerConfig,

    /// Where the caller should load the embedding table from. The pipeline
    /// itself never reads it.
    #[serde(default)]
    pub embeddings: Option<EmbeddingsYamlConfig>,

    #[serde(default)]
    pub pipeline: PipelineYamlConfig,
}

impl PrepConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: PrepConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.cleaner
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("cleaner: {err}")))?;
        if self.vectorizer.tokenizer != self.vocabulary.tokenizer {
            return Err(ConfigLoadError::Validation(format!(
                "vectorizer.tokenizer ({}) must match vocabulary.tokenizer ({})",
                self.vectorizer.tokenizer.as_str(),
                self.vocabulary.tokenizer.as_str()
            )));
        }
        if let Some(embeddings) = &self.embeddings {
            embeddings.validate()?;
        }
        self.pipeline.validate()?;

        Ok(())
    }
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            cleaner: CleanerConfig::default(),
            vocabulary: VocabularyYamlConfig::default(),
            vectorizer: VectorizerConfig::default(),
            embeddings: None,
            pipeline: PipelineYamlConfig::default(),
        }
    }
}

/// Vocabulary section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyYamlConfig {
    #[serde(default)]
    pub tokenizer: Tokenizer,
}

/// Embedding file location and the dimension it is expected to have.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddingsYamlConfig {
    pub path: PathBuf,

    #[serde(default)]
    pub expected_dim: Option<usize>,
}

impl EmbeddingsYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigLoadError::Validation(
                "embeddings.path must not be empty".to_string(),
            ));
        }
        if self.expected_dim == Some(0) {
            return Err(ConfigLoadError::Validation(
                "embeddings.expected_dim must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Pipeline execution options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineYamlConfig {
    #[serde(default)]
    pub use_parallel: bool,

    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Truncation cap for padded batches. `None` pads to the longest row.
    #[serde(default)]
    pub max_seq_len: Option<usize>,
}

impl PipelineYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.batch_size == 0 {
            return Err(ConfigLoadError::Validation(
                "pipeline.batch_size must be >= 1".to_string(),
            ));
        }
        if self.max_seq_len == Some(0) {
            return Err(ConfigLoadError::Validation(
                "pipeline.max_seq_len must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for PipelineYamlConfig {
    fn default() -> Self {
        Self {
            use_parallel: false,
            batch_size: default_batch_size(),
            max_seq_len: None,
        }
    }
}

fn default_batch_size() -> usize {
    32
}
