//! Testing utilities including analyzer doubles.
//!
//! These let applications exercise the masking pipeline without loading a
//! real morphological analyzer or NER model.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{AnalyzerError, AnalyzerResult};
use crate::traits::analyzer::Analyzer;
use crate::types::token::Token;

/// A scripted analyzer.
///
/// Returns predefined tokens per input text and records every call.
/// Unscripted inputs fail like a backend error would.
#[derive(Default, Clone)]
pub struct MockAnalyzer {
    /// Predefined analyses by input text
    responses: Arc<RwLock<HashMap<String, Vec<Token>>>>,

    /// When set, every call fails with this message
    failure: Option<String>,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// An analyzer whose every call fails.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Add a predefined analysis for a text.
    pub fn with_response(self, text: impl Into<String>, tokens: Vec<Token>) -> Self {
        self.responses.write().unwrap().insert(text.into(), tokens);
        self
    }

    /// Get all inputs this mock was asked to analyze.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Clear call history.
    pub fn clear_calls(&self) {
        self.calls.write().unwrap().clear();
    }
}

impl Analyzer for MockAnalyzer {
    fn analyze(&self, text: &str) -> AnalyzerResult<Vec<Token>> {
        self.calls.write().unwrap().push(text.to_string());

        if let Some(message) = &self.failure {
            return Err(AnalyzerError::backend(message.clone()));
        }

        self.responses
            .read()
            .unwrap()
            .get(text)
            .cloned()
            .ok_or_else(|| AnalyzerError::backend(format!("no scripted analysis for {:?}", text)))
    }
}

#[derive(Debug, Clone)]
struct LexiconEntry {
    tag: String,
    entity_label: Option<String>,
}

/// A dictionary analyzer using greedy longest match.
///
/// Known surfaces become tokens with their lexicon tag and label; any other
/// character becomes a single-character token tagged `unknown_tag`. Output
/// always covers the input, so it can re-analyze arbitrary masked text.
#[derive(Debug, Clone)]
pub struct LexiconAnalyzer {
    entries: HashMap<String, LexiconEntry>,
    max_chars: usize,
    unknown_tag: String,
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            max_chars: 0,
            unknown_tag: "unknown".to_string(),
        }
    }
}

impl LexiconAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word with a tag.
    pub fn word(self, surface: impl Into<String>, tag: impl Into<String>) -> Self {
        self.insert(surface.into(), tag.into(), None)
    }

    /// Add a word that is also a named entity.
    pub fn entity(
        self,
        surface: impl Into<String>,
        tag: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        self.insert(surface.into(), tag.into(), Some(label.into()))
    }

    /// Set the tag given to characters outside the lexicon.
    pub fn with_unknown_tag(mut self, tag: impl Into<String>) -> Self {
        self.unknown_tag = tag.into();
        self
    }

    fn insert(mut self, surface: String, tag: String, entity_label: Option<String>) -> Self {
        if surface.is_empty() {
            return self;
        }
        self.max_chars = self.max_chars.max(surface.chars().count());
        self.entries
            .insert(surface, LexiconEntry { tag, entity_label });
        self
    }
}

impl Analyzer for LexiconAnalyzer {
    fn analyze(&self, text: &str) -> AnalyzerResult<Vec<Token>> {
        let boundaries: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        let char_count = boundaries.len() - 1;

        let mut tokens = Vec::new();
        let mut pos = 0;

        while pos < char_count {
            let longest = self.max_chars.min(char_count - pos);
            let matched = (1..=longest).rev().find_map(|len| {
                let surface = &text[boundaries[pos]..boundaries[pos + len]];
                self.entries.get(surface).map(|entry| (len, surface, entry))
            });

            match matched {
                Some((len, surface, entry)) => {
                    tokens.push(Token {
                        text: surface.to_string(),
                        tag: entry.tag.clone(),
                        entity_label: entry.entity_label.clone(),
                    });
                    pos += len;
                }
                None => {
                    let surface = &text[boundaries[pos]..boundaries[pos + 1]];
                    tokens.push(Token::new(surface, self.unknown_tag.clone()));
                    pos += 1;
                }
            }
        }

        Ok(tokens)
    }
}
