use super::error::SentimentError;
use crate::models::lexicon::{DEFAULT_NEGATIVE_TERMS, DEFAULT_POSITIVE_TERMS};
use crate::models::stopwords::ENGLISH_STOPWORDS;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Word lists used to build a sentiment pipeline.
///
/// Every field is optional when deserializing; missing lists fall back to the
/// built-in English defaults.
///
/// ```
/// use sentiment_analyzer::core::LexiconConfig;
///
/// let config = LexiconConfig::from_json_str(r#"{ "positive_terms": ["superb"] }"#)?;
/// assert_eq!(config.positive_terms, vec!["superb".to_string()]);
/// assert!(config.negative_terms.contains(&"awful".to_string()));
/// # anyhow::Ok(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    pub positive_terms: Vec<String>,
    pub negative_terms: Vec<String>,
    pub stopwords: Vec<String>,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            positive_terms: to_owned_list(DEFAULT_POSITIVE_TERMS),
            negative_terms: to_owned_list(DEFAULT_NEGATIVE_TERMS),
            stopwords: to_owned_list(ENGLISH_STOPWORDS),
        }
    }
}

impl LexiconConfig {
    pub fn from_json_str(json: &str) -> Result<Self, SentimentError> {
        serde_json::from_str(json).map_err(|e| SentimentError::Config(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SentimentError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| SentimentError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&raw)
    }
}

fn to_owned_list(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_fields_use_defaults() -> anyhow::Result<()> {
        let config = LexiconConfig::from_json_str(r#"{ "negative_terms": ["meh"] }"#)?;
        assert_eq!(config.negative_terms, vec!["meh".to_string()]);
        assert_eq!(config.positive_terms.len(), DEFAULT_POSITIVE_TERMS.len());
        assert_eq!(config.stopwords.len(), ENGLISH_STOPWORDS.len());
        Ok(())
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = LexiconConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, SentimentError::Config(_)));
    }

    #[test]
    fn loads_from_file() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, r#"{{ "stopwords": [] }}"#)?;
        let config = LexiconConfig::from_file(file.path())?;
        assert!(config.stopwords.is_empty());
        Ok(())
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = LexiconConfig::from_file("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("here.json"));
    }
}
