//! Results of masking passes.

use serde::{Deserialize, Serialize};

use crate::error::{MaskingError, Result};
use crate::pipeline::restore::{restore, restore_text};
use crate::types::replacement::ReplacementMap;

/// Result of one masking pass.
///
/// `emitted_tokens` is the collapsed display sequence; `replacements` is the
/// uncollapsed lookup used for restoration. Keep both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskOutcome {
    pub masked_text: String,
    pub emitted_tokens: Vec<String>,
    pub replacements: ReplacementMap,
}

impl MaskOutcome {
    /// Original token texts.
    pub fn restore(&self) -> Result<Vec<String>> {
        restore(&self.emitted_tokens, &self.replacements)
    }

    /// Original text.
    pub fn restore_text(&self) -> Result<String> {
        restore_text(&self.emitted_tokens, &self.replacements)
    }

    /// Whether anything was masked.
    pub fn is_masked(&self) -> bool {
        !self.replacements.is_empty()
    }
}

/// Result of a refined masking run: one outcome per pass, first to last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefinedOutcome {
    pub passes: Vec<MaskOutcome>,
}

impl RefinedOutcome {
    /// Masked text of the final pass.
    pub fn masked_text(&self) -> &str {
        self.passes
            .last()
            .map(|pass| pass.masked_text.as_str())
            .unwrap_or_default()
    }

    /// Outcome of the final pass.
    pub fn last_pass(&self) -> Option<&MaskOutcome> {
        self.passes.last()
    }

    /// Unwind every pass, last to first, and return the text the first
    /// pass analyzed.
    ///
    /// Each pass must restore to exactly the masked text of the pass before
    /// it; anything else means the outcome was assembled from unrelated runs.
    pub fn restore(&self) -> Result<String> {
        let mut restored = String::new();

        for (pass, outcome) in self.passes.iter().enumerate().rev() {
            if pass + 1 < self.passes.len() && outcome.masked_text != restored {
                return Err(MaskingError::PassMismatch { pass: pass + 1 });
            }
            restored = outcome.restore_text()?;
        }

        Ok(restored)
    }
}
