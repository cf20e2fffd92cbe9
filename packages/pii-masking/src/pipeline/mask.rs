//! Masking engine: classify every token, build the replacement map, emit
//! the display sequence and collapse repeated placeholders.

use crate::pipeline::classify::classify;
use crate::types::config::MaskConfig;
use crate::types::outcome::MaskOutcome;
use crate::types::replacement::{Decision, Replacement, ReplacementMap};
use crate::types::token::Token;

/// Mask a token sequence.
///
/// Total over any finite sequence, including an empty one.
pub fn mask(tokens: &[Token], config: &MaskConfig) -> MaskOutcome {
    let replacements = build_replacements(tokens, config);
    let mut emitted_tokens = emit(tokens, &replacements);
    let collapsed = collapse(&mut emitted_tokens, &replacements);
    let masked_text: String = emitted_tokens.concat();

    tracing::debug!(
        tokens = tokens.len(),
        masked = replacements.len(),
        collapsed,
        "masking pass complete"
    );

    MaskOutcome {
        masked_text,
        emitted_tokens,
        replacements,
    }
}

/// Classify each token and record the decisions that change its text.
pub fn build_replacements(tokens: &[Token], config: &MaskConfig) -> ReplacementMap {
    let mut replacements = ReplacementMap::new(tokens.len());

    for (index, token) in tokens.iter().enumerate() {
        let Decision::Mask(replacement) = classify(token, config) else {
            continue;
        };

        if replacement == token.text {
            continue;
        }

        if let Some(label) = token.entity_label.as_deref() {
            if replacement.strip_prefix('[').and_then(|r| r.strip_suffix(']')) == Some(label) {
                tracing::debug!(index, label, entity = %token.text, "named entity masked");
            }
        }

        replacements.insert(index, Replacement::new(token.text.clone(), replacement));
    }

    replacements
}

/// Display sequence before collapsing: replacement where masked, original text elsewhere.
pub fn emit(tokens: &[Token], replacements: &ReplacementMap) -> Vec<String> {
    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| match replacements.get(index) {
            Some(r) => r.replacement.clone(),
            None => token.text.clone(),
        })
        .collect()
}

/// Suppress repeated placeholders in place and return how many were suppressed.
///
/// Scans left to right: a masked position is blanked when its placeholder
/// equals the already-collapsed text of the masked position before it. A run
/// of three identical placeholders therefore shows as `[P, "", P]`.
///
/// Only adjacent masked positions are compared. An unmasked token that
/// happens to read like a placeholder (e.g. `[PERSON]` left over from an
/// earlier masking run) is never blanked and never blanks its masked
/// neighbour, so both show. The replacement map is left as is; restoration
/// reads only the map.
pub fn collapse(emitted: &mut [String], replacements: &ReplacementMap) -> usize {
    let mut suppressed = 0;

    for i in 1..emitted.len() {
        if !replacements.contains(i) || !replacements.contains(i - 1) {
            continue;
        }
        if !emitted[i].is_empty() && emitted[i] == emitted[i - 1] {
            emitted[i].clear();
            suppressed += 1;
        }
    }

    suppressed
}
