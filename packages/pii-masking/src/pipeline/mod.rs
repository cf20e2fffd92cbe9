//! Masking pipeline.
//!
//! - `normalize` - space normalization before analysis
//! - `classify` - per-token rule table
//! - `mask` - replacement map, emitted tokens, collapse
//! - `restore` - inverse of `mask`
//! - `masker` - text-level entry point with optional refine pass

pub mod classify;
pub mod mask;
pub mod masker;
pub mod normalize;
pub mod restore;

pub use classify::{classify, NUMERAL_PLACEHOLDER, PERSON_PLACEHOLDER};
pub use mask::{build_replacements, collapse, emit, mask};
pub use masker::TextMasker;
pub use normalize::normalize;
pub use restore::{restore, restore_text};
