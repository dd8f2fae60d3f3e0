use anyhow::Result;
use serde::Deserialize;

use crate::classifier::Classifier;

/// Known waste categories, stored as JSON on disk:
/// ```json
/// { "known_wastes": ["Landfill", "Recycling", "Compost"] }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct VocabularyConfig {
    known_wastes: Vec<String>,
}

impl VocabularyConfig {
    /// Loads the config from a JSON file at `path`.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn known_wastes(&self) -> &[String] {
        &self.known_wastes
    }

    /// Builds a classifier restricted to this vocabulary.
    pub fn classifier(&self) -> Result<Classifier> {
        Ok(Classifier::with_vocabulary(self.known_wastes.iter().cloned())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let config =
            VocabularyConfig::from_json(r#"{"known_wastes": ["Landfill", "Compost"]}"#).unwrap();
        assert_eq!(config.known_wastes(), ["Landfill", "Compost"]);
        assert!(config.classifier().is_ok());
    }

    #[test]
    fn test_classifier_rejects_incomplete_vocabulary() {
        let config = VocabularyConfig::from_json(r#"{"known_wastes": ["Landfill"]}"#).unwrap();
        let err = config.classifier().unwrap_err();
        assert!(err.to_string().contains("Compost"));
    }

    #[test]
    fn test_from_json_rejects_wrong_shape() {
        assert!(VocabularyConfig::from_json(r#"["Landfill"]"#).is_err());
    }
}
