//! Linguistic analyzer capability.
//!
//! Tokenization, part-of-speech tagging and named-entity recognition live
//! outside this crate. Anything that can turn text into tagged tokens can
//! back the masking pipeline by implementing [`Analyzer`].

use std::sync::Arc;

use crate::error::{AnalyzerError, AnalyzerResult};
use crate::types::token::{join_texts, Token};

/// Analyzer trait for tokenization, tagging and entity recognition.
///
/// Calls are blocking and treated as side-effect free. Token texts must
/// concatenate back to the analyzed text.
pub trait Analyzer: Send + Sync {
    /// Analyze text into an ordered token sequence.
    fn analyze(&self, text: &str) -> AnalyzerResult<Vec<Token>>;
}

impl<A: Analyzer + ?Sized> Analyzer for Arc<A> {
    fn analyze(&self, text: &str) -> AnalyzerResult<Vec<Token>> {
        (**self).analyze(text)
    }
}

impl<A: Analyzer + ?Sized> Analyzer for Box<A> {
    fn analyze(&self, text: &str) -> AnalyzerResult<Vec<Token>> {
        (**self).analyze(text)
    }
}

/// Check that analyzer output covers the input exactly.
pub fn validate_tokens(input: &str, tokens: &[Token]) -> AnalyzerResult<()> {
    let covered = join_texts(tokens);
    if covered == input {
        Ok(())
    } else {
        Err(AnalyzerError::Malformed {
            input: input.to_string(),
            covered,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_tokens() {
        let tokens = vec![Token::new("来", "動詞"), Token::new("た", "助動詞")];
        assert!(validate_tokens("来た", &tokens).is_ok());

        let err = validate_tokens("来ました", &tokens).unwrap_err();
        assert!(matches!(err, AnalyzerError::Malformed { ref covered, .. } if covered == "来た"));
    }

    #[test]
    fn test_empty_input_validates() {
        assert!(validate_tokens("", &[]).is_ok());
    }
}
