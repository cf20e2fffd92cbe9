//! Text-level entry point: normalize, analyze, mask.

use crate::error::Result;
use crate::pipeline::mask::mask;
use crate::pipeline::normalize::normalize;
use crate::traits::analyzer::{validate_tokens, Analyzer};
use crate::types::config::MaskConfig;
use crate::types::outcome::{MaskOutcome, RefinedOutcome};
use crate::types::token::Token;

/// Masks raw text using an external analyzer.
///
/// Holds no state between calls; every call builds its own replacement map.
pub struct TextMasker<A: Analyzer> {
    analyzer: A,
    config: MaskConfig,
}

impl<A: Analyzer> TextMasker<A> {
    /// Create a masker with the default rule configuration.
    pub fn new(analyzer: A) -> Self {
        Self::with_config(analyzer, MaskConfig::default())
    }

    pub fn with_config(analyzer: A, config: MaskConfig) -> Self {
        Self { analyzer, config }
    }

    pub fn config(&self) -> &MaskConfig {
        &self.config
    }

    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    /// Text handed to the analyzer for `text`.
    pub fn prepare(&self, text: &str) -> String {
        if self.config.normalize_spaces {
            normalize(text)
        } else {
            text.to_string()
        }
    }

    /// Mask text in a single pass.
    ///
    /// Analyzer failures propagate unchanged; nothing is masked partially.
    pub fn mask_text(&self, text: &str) -> Result<MaskOutcome> {
        let prepared = self.prepare(text);
        let tokens = self.analyze(&prepared)?;
        Ok(mask(&tokens, &self.config))
    }

    /// Mask text in two passes.
    ///
    /// The first pass only deletes: interjections and prenominals when
    /// enabled, and prefixes always. Its output is re-analyzed so that
    /// entities split by the deleted words are recognized, then the full rule
    /// set runs.
    pub fn mask_text_refined(&self, text: &str) -> Result<RefinedOutcome> {
        let prepared = self.prepare(text);

        let tokens = self.analyze(&prepared)?;
        let first = mask(&tokens, &self.config.deletions_only());
        tracing::trace!(pass = 0, masked = first.replacements.len(), "refine pass complete");

        let tokens = self.analyze(&first.masked_text)?;
        let second = mask(&tokens, &self.config);
        tracing::trace!(pass = 1, masked = second.replacements.len(), "refine pass complete");

        Ok(RefinedOutcome {
            passes: vec![first, second],
        })
    }

    fn analyze(&self, text: &str) -> Result<Vec<Token>> {
        let tokens = self.analyzer.analyze(text).map_err(|e| {
            tracing::warn!(error = %e, "analyzer failed");
            e
        })?;

        if self.config.validate_analysis {
            validate_tokens(text, &tokens).map_err(|e| {
                tracing::warn!(error = %e, "analyzer returned malformed tokens");
                e
            })?;
        }

        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MaskingError;
    use crate::testing::MockAnalyzer;

    #[test]
    fn test_mask_text_normalizes_before_analysis() {
        let analyzer = MockAnalyzer::new().with_response(
            "東京/都庁",
            vec![
                Token::new("東京", "名詞-固有名詞-地名").with_entity("GPE"),
                Token::new("/", "補助記号"),
                Token::new("都庁", "名詞-普通名詞"),
            ],
        );
        let masker = TextMasker::new(analyzer);

        let outcome = masker.mask_text("東京\u{3000}都庁").unwrap();

        assert_eq!(outcome.masked_text, "[GPE]/都庁");
        assert_eq!(masker.analyzer().calls(), vec!["東京/都庁".to_string()]);
    }

    #[test]
    fn test_normalization_can_be_disabled() {
        let analyzer = MockAnalyzer::new()
            .with_response("a b", vec![Token::new("a b", "noun")]);
        let config = MaskConfig::default().with_space_normalization(false);
        let masker = TextMasker::with_config(analyzer, config);

        assert_eq!(masker.mask_text("a b").unwrap().masked_text, "a b");
    }

    #[test]
    fn test_analyzer_failure_propagates() {
        let masker = TextMasker::new(MockAnalyzer::failing("model not loaded"));

        let err = masker.mask_text("田中さん").unwrap_err();
        assert!(matches!(err, MaskingError::Analyzer(_)));
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        let analyzer = MockAnalyzer::new()
            .with_response("田中さん", vec![Token::new("田中", "proper-noun")]);
        let masker = TextMasker::new(analyzer);

        assert!(masker.mask_text("田中さん").is_err());
    }

    #[test]
    fn test_malformed_tokens_accepted_without_validation() {
        let analyzer = MockAnalyzer::new()
            .with_response("田中さん", vec![Token::new("田中", "proper-noun")]);
        let masker =
            TextMasker::with_config(analyzer, MaskConfig::default().with_validation(false));

        assert_eq!(masker.mask_text("田中さん").unwrap().masked_text, "[PERSON]");
    }
}
