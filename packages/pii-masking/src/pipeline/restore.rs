//! Restoration engine: invert a masking pass using its replacement map.

use crate::error::{MaskingError, Result};
use crate::types::replacement::ReplacementMap;

/// Reconstruct the original token texts.
///
/// Masked positions are read from the map, never from `emitted_tokens`,
/// so collapsed placeholders restore correctly. `emitted_tokens` must be the
/// sequence produced by the same `mask` call as `replacements`.
pub fn restore(emitted_tokens: &[String], replacements: &ReplacementMap) -> Result<Vec<String>> {
    if emitted_tokens.len() != replacements.token_count() {
        tracing::warn!(
            expected = replacements.token_count(),
            actual = emitted_tokens.len(),
            "restore called with mismatched emitted tokens"
        );
        return Err(MaskingError::IndexMismatch {
            expected: replacements.token_count(),
            actual: emitted_tokens.len(),
        });
    }

    Ok(emitted_tokens
        .iter()
        .enumerate()
        .map(|(index, emitted)| match replacements.get(index) {
            Some(r) => r.original.clone(),
            None => emitted.clone(),
        })
        .collect())
}

/// Reconstruct the original text.
pub fn restore_text(emitted_tokens: &[String], replacements: &ReplacementMap) -> Result<String> {
    Ok(restore(emitted_tokens, replacements)?.concat())
}
