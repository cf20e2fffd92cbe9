//! Per-token masking decisions and the index-keyed replacement map.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome of classifying one token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Decision {
    /// Keep the token text as is
    #[default]
    NoMask,
    /// Emit the replacement instead (may be empty for deletion)
    Mask(String),
}

impl Decision {
    pub fn is_mask(&self) -> bool {
        matches!(self, Decision::Mask(_))
    }

    /// The replacement text, if any.
    pub fn replacement(&self) -> Option<&str> {
        match self {
            Decision::NoMask => None,
            Decision::Mask(replacement) => Some(replacement),
        }
    }
}

/// Original text and the replacement that stood in for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    pub original: String,
    pub replacement: String,
}

impl Replacement {
    pub fn new(original: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            replacement: replacement.into(),
        }
    }

    /// Whether this replacement deletes the token.
    pub fn is_deletion(&self) -> bool {
        self.replacement.is_empty()
    }
}

/// Replacements keyed by token index.
///
/// Also records how many tokens the map was built from, so restoration can
/// reject an emitted sequence from a different masking call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReplacementMap {
    token_count: usize,
    entries: BTreeMap<usize, Replacement>,
}

impl ReplacementMap {
    /// Create an empty map for a sequence of `token_count` tokens.
    pub fn new(token_count: usize) -> Self {
        Self {
            token_count,
            entries: BTreeMap::new(),
        }
    }

    /// Record a replacement, overwriting any previous one at `index`.
    ///
    /// Indices outside the token sequence are ignored.
    pub fn insert(&mut self, index: usize, replacement: Replacement) {
        if index < self.token_count {
            self.entries.insert(index, replacement);
        }
    }

    pub fn get(&self, index: usize) -> Option<&Replacement> {
        self.entries.get(&index)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.entries.contains_key(&index)
    }

    /// Number of masked tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length of the token sequence the map was built from.
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    /// Masked indices with their replacements, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Replacement)> {
        self.entries.iter().map(|(index, r)| (*index, r))
    }
}
