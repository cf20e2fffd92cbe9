//! Configuration for the masking rules.

use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{MaskingError, Result};

/// Entity labels masked by default.
pub const DEFAULT_ENTITY_LABELS: [&str; 4] = ["PERSON", "GPE", "LOC", "ORG"];

/// Tag markers per rule family.
///
/// A token belongs to a family when its tag contains any of the family's
/// markers. Defaults carry the UniDic categories emitted by Japanese
/// analyzers alongside plain English glosses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagVocabulary {
    pub proper_noun: Vec<String>,
    pub numeral: Vec<String>,
    pub interjection: Vec<String>,
    pub prenominal: Vec<String>,
    pub prefix: Vec<String>,
}

impl Default for TagVocabulary {
    fn default() -> Self {
        fn markers(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        Self {
            proper_noun: markers(&["名詞-固有名詞", "proper-noun"]),
            numeral: markers(&["名詞-数詞", "numeral"]),
            interjection: markers(&["感動詞", "interjection"]),
            prenominal: markers(&["連体詞", "prenominal-adjective"]),
            prefix: markers(&["接頭辞", "prefix"]),
        }
    }
}

/// Which rule families are active, and how text is prepared for analysis.
///
/// Fields missing from a serialized config take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskConfig {
    /// Replace proper nouns with `[PERSON]`.
    ///
    /// Default: true.
    pub mask_proper_nouns: bool,

    /// Replace numerals with `[0]`.
    ///
    /// Default: true.
    pub mask_numerals: bool,

    /// Delete interjections and prenominal adjectives.
    ///
    /// Default: true.
    pub mask_interjections_and_prenominals: bool,

    /// Replace tokens carrying a label from `entity_labels` with `[<label>]`.
    ///
    /// Entity decisions override tag decisions. Default: true.
    pub mask_named_entities: bool,

    /// Delete prefixes.
    ///
    /// The first refine pass always deletes prefixes; this flag covers
    /// single-pass masking and the second refine pass. Default: false.
    pub mask_prefixes: bool,

    /// Entity labels the entity rule masks.
    pub entity_labels: Vec<String>,

    /// Collapse space runs to `/` before analysis.
    ///
    /// Default: true.
    pub normalize_spaces: bool,

    /// Reject analyzer output whose tokens do not cover the input text.
    ///
    /// Default: true.
    pub validate_analysis: bool,

    /// Tag markers per rule family.
    pub vocabulary: TagVocabulary,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            mask_proper_nouns: true,
            mask_numerals: true,
            mask_interjections_and_prenominals: true,
            mask_named_entities: true,
            mask_prefixes: false,
            entity_labels: DEFAULT_ENTITY_LABELS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            normalize_spaces: true,
            validate_analysis: true,
            vocabulary: TagVocabulary::default(),
        }
    }
}

impl MaskConfig {
    /// Create a config with every rule family enabled except prefixes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config with every rule family disabled.
    pub fn none() -> Self {
        Self {
            mask_proper_nouns: false,
            mask_numerals: false,
            mask_interjections_and_prenominals: false,
            mask_named_entities: false,
            mask_prefixes: false,
            ..Self::default()
        }
    }

    pub fn with_proper_nouns(mut self, enabled: bool) -> Self {
        self.mask_proper_nouns = enabled;
        self
    }

    pub fn with_numerals(mut self, enabled: bool) -> Self {
        self.mask_numerals = enabled;
        self
    }

    pub fn with_interjections_and_prenominals(mut self, enabled: bool) -> Self {
        self.mask_interjections_and_prenominals = enabled;
        self
    }

    pub fn with_named_entities(mut self, enabled: bool) -> Self {
        self.mask_named_entities = enabled;
        self
    }

    pub fn with_prefixes(mut self, enabled: bool) -> Self {
        self.mask_prefixes = enabled;
        self
    }

    /// Replace the masked entity label set.
    pub fn with_entity_labels(mut self, labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.entity_labels = labels.into_iter().map(|l| l.into()).collect();
        self
    }

    pub fn with_space_normalization(mut self, enabled: bool) -> Self {
        self.normalize_spaces = enabled;
        self
    }

    pub fn with_validation(mut self, enabled: bool) -> Self {
        self.validate_analysis = enabled;
        self
    }

    pub fn with_vocabulary(mut self, vocabulary: TagVocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// The deletion-only view of this config, used by the first refine pass.
    ///
    /// Prefixes are deleted regardless of `mask_prefixes`, so that a prefix
    /// split off a name does not survive into re-analysis.
    pub fn deletions_only(&self) -> Self {
        Self {
            mask_proper_nouns: false,
            mask_numerals: false,
            mask_named_entities: false,
            mask_prefixes: true,
            ..self.clone()
        }
    }

    /// Whether the entity rule masks this label.
    pub fn masks_label(&self, label: &str) -> bool {
        self.entity_labels.iter().any(|l| l == label)
    }

    /// Load configuration from environment variables.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        let mut config = Self::default();

        if let Some(v) = read_flag("PII_MASK_PROPER_NOUNS")? {
            config.mask_proper_nouns = v;
        }
        if let Some(v) = read_flag("PII_MASK_NUMERALS")? {
            config.mask_numerals = v;
        }
        if let Some(v) = read_flag("PII_MASK_INTERJECTIONS")? {
            config.mask_interjections_and_prenominals = v;
        }
        if let Some(v) = read_flag("PII_MASK_NAMED_ENTITIES")? {
            config.mask_named_entities = v;
        }
        if let Some(v) = read_flag("PII_MASK_PREFIXES")? {
            config.mask_prefixes = v;
        }
        if let Some(v) = read_flag("PII_NORMALIZE_SPACES")? {
            config.normalize_spaces = v;
        }
        if let Some(v) = read_flag("PII_VALIDATE_ANALYSIS")? {
            config.validate_analysis = v;
        }
        if let Some(raw) = read_var("PII_MASK_ENTITY_LABELS")? {
            config.entity_labels = parse_labels("PII_MASK_ENTITY_LABELS", &raw)?;
        }

        Ok(config)
    }
}

fn read_var(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(raw) => Ok(Some(raw)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(raw)) => Err(MaskingError::Config {
            key: key.to_string(),
            value: raw.to_string_lossy().into_owned(),
        }),
    }
}

fn read_flag(key: &str) -> Result<Option<bool>> {
    read_var(key)?
        .map(|raw| parse_flag(key, &raw))
        .transpose()
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(MaskingError::Config {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}

fn parse_labels(key: &str, raw: &str) -> Result<Vec<String>> {
    let labels: Vec<String> = raw
        .split(',')
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .map(|l| l.to_string())
        .collect();

    if labels.is_empty() {
        return Err(MaskingError::Config {
            key: key.to_string(),
            value: raw.to_string(),
        });
    }

    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_enable_all_spec_flags() {
        let config = MaskConfig::default();
        assert!(config.mask_proper_nouns);
        assert!(config.mask_numerals);
        assert!(config.mask_interjections_and_prenominals);
        assert!(config.mask_named_entities);
        assert!(!config.mask_prefixes);
        assert_eq!(config.entity_labels, vec!["PERSON", "GPE", "LOC", "ORG"]);
    }

    #[test]
    fn test_deletions_only_keeps_deletion_rules() {
        let config = MaskConfig::new().with_prefixes(true).deletions_only();
        assert!(!config.mask_proper_nouns);
        assert!(!config.mask_numerals);
        assert!(!config.mask_named_entities);
        assert!(config.mask_interjections_and_prenominals);
        assert!(config.mask_prefixes);
    }

    #[test]
    fn test_deletions_only_always_deletes_prefixes() {
        let config = MaskConfig::default().deletions_only();
        assert!(config.mask_prefixes);
        assert!(config.mask_interjections_and_prenominals);
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let json = r#"{
            "mask_proper_nouns": false,
            "mask_numerals": true,
            "mask_interjections_and_prenominals": true,
            "mask_named_entities": true
        }"#;
        let config: MaskConfig = serde_json::from_str(json).unwrap();

        assert!(!config.mask_proper_nouns);
        assert!(!config.mask_prefixes);
        assert!(config.normalize_spaces);
        assert!(config.validate_analysis);
        assert_eq!(config.entity_labels, vec!["PERSON", "GPE", "LOC", "ORG"]);
        assert_eq!(config.vocabulary, TagVocabulary::default());
    }

    #[test]
    fn test_read_flag() {
        let key = "PII_MASKING_TEST_READ_FLAG";
        assert_eq!(read_flag(key).unwrap(), None);

        env::set_var(key, "no");
        assert_eq!(read_flag(key).unwrap(), Some(false));

        env::set_var(key, "sometimes");
        assert!(read_flag(key).is_err());
        env::remove_var(key);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_value_is_config_error() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let key = "PII_MASKING_TEST_NON_UNICODE";
        env::set_var(key, OsStr::from_bytes(&[0x66, 0xff]));

        let err = read_var(key).unwrap_err();
        assert!(matches!(err, MaskingError::Config { ref key, .. } if key == "PII_MASKING_TEST_NON_UNICODE"));
        assert!(read_flag(key).is_err());
        env::remove_var(key);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("K", "TRUE").unwrap());
        assert!(parse_flag("K", " 1 ").unwrap());
        assert!(!parse_flag("K", "off").unwrap());

        let err = parse_flag("K", "maybe").unwrap_err();
        assert!(matches!(err, MaskingError::Config { ref key, .. } if key == "K"));
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!(
            parse_labels("K", "PERSON, ORG,,").unwrap(),
            vec!["PERSON".to_string(), "ORG".to_string()]
        );
        assert!(parse_labels("K", " , ").is_err());
    }

    #[test]
    fn test_masks_label() {
        let config = MaskConfig::new().with_entity_labels(["PERSON"]);
        assert!(config.masks_label("PERSON"));
        assert!(!config.masks_label("ORG"));
    }
}
