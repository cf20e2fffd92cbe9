//! Reversible PII Masking for Japanese Text
//!
//! Masks personally identifiable information in analyzed Japanese text and
//! keeps enough information to restore the original exactly.
//!
//! # Design
//!
//! - Rule-based: decisions come from part-of-speech tags and entity labels
//! - Entity labels override tag rules
//! - The display sequence collapses repeated placeholders, the replacement
//!   map does not; restoration reads only the map
//! - Analysis is an external capability behind [`Analyzer`]
//!
//! # Usage
//!
//! ```rust
//! use pii_masking::{testing::LexiconAnalyzer, TextMasker};
//!
//! let analyzer = LexiconAnalyzer::new()
//!     .entity("田中", "名詞-固有名詞-人名-姓", "PERSON")
//!     .word("さん", "接尾辞-名詞的-一般");
//! let masker = TextMasker::new(analyzer);
//!
//! let outcome = masker.mask_text("田中さん").unwrap();
//! assert_eq!(outcome.masked_text, "[PERSON]さん");
//! assert_eq!(outcome.restore_text().unwrap(), "田中さん");
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Analyzer capability
//! - [`types`] - Tokens, configuration, replacement map, outcomes
//! - [`pipeline`] - Normalizer, classifier, masking and restoration engines
//! - [`testing`] - Analyzer doubles for tests

pub mod error;
pub mod pipeline;
pub mod testing;
pub mod traits;
pub mod types;

pub use error::{AnalyzerError, AnalyzerResult, MaskingError, Result};
pub use pipeline::{
    build_replacements, classify, collapse, emit, mask, normalize, restore, restore_text,
    TextMasker, NUMERAL_PLACEHOLDER, PERSON_PLACEHOLDER,
};
pub use traits::analyzer::{validate_tokens, Analyzer};
pub use types::{
    config::{MaskConfig, TagVocabulary, DEFAULT_ENTITY_LABELS},
    outcome::{MaskOutcome, RefinedOutcome},
    replacement::{Decision, Replacement, ReplacementMap},
    token::{join_texts, Token},
};

pub use testing::{LexiconAnalyzer, MockAnalyzer};
