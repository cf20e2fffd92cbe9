//! Analyzed tokens as produced by an external analyzer.

use serde::{Deserialize, Serialize};

/// One analyzed unit of text.
///
/// `tag` is a hierarchical morphological category (e.g. `名詞-固有名詞-人名-姓`)
/// where substring containment denotes category membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text
    pub text: String,

    /// Part-of-speech tag
    pub tag: String,

    /// Named-entity label (PERSON, GPE, LOC, ORG, ...) if the token is part of an entity
    #[serde(default)]
    pub entity_label: Option<String>,
}

impl Token {
    /// Create a token with no entity label.
    pub fn new(text: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
            entity_label: None,
        }
    }

    /// Set the entity label.
    pub fn with_entity(mut self, label: impl Into<String>) -> Self {
        self.entity_label = Some(label.into());
        self
    }

    /// Whether the tag contains any of the given markers.
    pub fn tag_matches(&self, markers: &[String]) -> bool {
        markers
            .iter()
            .any(|marker| !marker.is_empty() && self.tag.contains(marker.as_str()))
    }
}

/// Concatenate token texts without a separator.
pub fn join_texts(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}
