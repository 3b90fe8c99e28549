//! Configuration file loading and merging with command-line overrides

use anyhow::{Context, Result};
use std::path::Path;

use super::args::OutputArgs;
use crate::transcription::{Separators, ASCII_STRESS};

/// Default language when neither the config file nor the command line names one.
pub const DEFAULT_LANGUAGE: &str = "es";

/// User configuration stored in a JSON file.
///
/// ```json
/// { "language": "es", "separators": { "syllable": "-", "stress": "'" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Language tag
    pub language: Option<String>,
    /// Output separators; missing fields keep their defaults
    pub separators: Option<Separators>,
}

impl CliConfig {
    /// Load configuration from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config: CliConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Language tag after command-line overrides.
    pub fn language<'a>(&'a self, output: &'a OutputArgs) -> &'a str {
        output
            .lang
            .as_deref()
            .or(self.language.as_deref())
            .unwrap_or(DEFAULT_LANGUAGE)
    }

    /// Separators after command-line overrides.
    pub fn separators(&self, output: &OutputArgs) -> Separators {
        let mut separators = self.separators.unwrap_or_default();
        if let Some(phrase) = output.phrase_sep {
            separators.phrase = phrase;
        }
        if let Some(word) = output.word_sep {
            separators.word = word;
        }
        if let Some(syllable) = output.syllable_sep {
            separators.syllable = syllable;
        }
        if let Some(stress) = output.stress_mark {
            separators.stress = stress;
        }
        if output.ascii {
            separators.stress = ASCII_STRESS;
        }
        separators
    }
}
