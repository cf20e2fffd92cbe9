//! Rule table deciding whether a single token is masked.
//!
//! Two ordered passes write into one decision slot:
//!
//! 1. Tag pass: proper noun, numeral, interjection/prenominal, prefix
//!    (first match wins).
//! 2. Entity pass: a masked entity label overwrites whatever pass 1 decided.

use crate::types::config::MaskConfig;
use crate::types::replacement::Decision;
use crate::types::token::Token;

/// Placeholder for proper nouns.
pub const PERSON_PLACEHOLDER: &str = "[PERSON]";

/// Placeholder for numerals.
pub const NUMERAL_PLACEHOLDER: &str = "[0]";

/// Classify one token.
pub fn classify(token: &Token, config: &MaskConfig) -> Decision {
    let mut decision = tag_decision(token, config);

    if let Some(entity) = entity_decision(token, config) {
        decision = entity;
    }

    decision
}

/// Pass 1: decision from the part-of-speech tag alone.
pub fn tag_decision(token: &Token, config: &MaskConfig) -> Decision {
    let vocabulary = &config.vocabulary;

    if config.mask_proper_nouns && token.tag_matches(&vocabulary.proper_noun) {
        Decision::Mask(PERSON_PLACEHOLDER.to_string())
    } else if config.mask_numerals && token.tag_matches(&vocabulary.numeral) {
        Decision::Mask(NUMERAL_PLACEHOLDER.to_string())
    } else if config.mask_interjections_and_prenominals
        && (token.tag_matches(&vocabulary.interjection) || token.tag_matches(&vocabulary.prenominal))
    {
        Decision::Mask(String::new())
    } else if config.mask_prefixes && token.tag_matches(&vocabulary.prefix) {
        Decision::Mask(String::new())
    } else {
        Decision::NoMask
    }
}

/// Pass 2: decision from the entity label, if it is one the config masks.
pub fn entity_decision(token: &Token, config: &MaskConfig) -> Option<Decision> {
    if !config.mask_named_entities {
        return None;
    }

    token
        .entity_label
        .as_deref()
        .filter(|label| config.masks_label(label))
        .map(|label| Decision::Mask(format!("[{}]", label)))
}
