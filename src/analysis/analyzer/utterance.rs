//! Default analyzer for conversational utterances.

use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lemma::LemmaFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::token_filter::trailing_punct::TrailingPunctFilter;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::Result;

/// The canned analysis chain for user utterances.
///
/// Whitespace tokenization, English stop word removal, trailing punctuation
/// trimming, then dictionary lemmatization. Input is expected to be
/// lowercased by the caller; intent keywords are lowercased at registration
/// so both sides normalize the same way.
#[derive(Clone, Debug)]
pub struct UtteranceAnalyzer {
    inner: PipelineAnalyzer,
}

impl UtteranceAnalyzer {
    /// Create the default utterance analyzer.
    pub fn new() -> Self {
        let inner = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(StopFilter::new()))
            .add_filter(Arc::new(TrailingPunctFilter::new()))
            .add_filter(Arc::new(LemmaFilter::new()))
            .with_name("utterance".to_string());

        UtteranceAnalyzer { inner }
    }

    /// Create an utterance analyzer without a lemma stage.
    pub fn without_lemmas() -> Self {
        let inner = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(StopFilter::new()))
            .add_filter(Arc::new(TrailingPunctFilter::new()))
            .add_filter(Arc::new(LemmaFilter::identity()))
            .with_name("utterance_no_lemma".to_string());

        UtteranceAnalyzer { inner }
    }
}

impl Default for UtteranceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for UtteranceAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "utterance"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_utterance_analyzer() {
        let analyzer = UtteranceAnalyzer::new();
        let tokens: Vec<Token> = analyzer.analyze("hi there, the cats!").unwrap().collect();

        let live: Vec<&str> = tokens
            .iter()
            .filter(|t| !t.is_stopped())
            .map(|t| t.text.as_str())
            .collect();

        // "the" removed as a stop word, punctuation trimmed, "cats" lemmatized
        assert_eq!(live, vec!["hi", "there", "cat"]);
    }

    #[test]
    fn test_empty_utterance() {
        let analyzer = UtteranceAnalyzer::new();
        let tokens: Vec<Token> = analyzer.analyze("").unwrap().collect();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_punctuation_only_utterance() {
        let analyzer = UtteranceAnalyzer::new();
        let tokens: Vec<Token> = analyzer.analyze("?!").unwrap().collect();

        // "?!" ends in "!", one character trimmed leaves "?", not empty
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "?");
    }

    #[test]
    fn test_analyzer_name() {
        assert_eq!(UtteranceAnalyzer::new().name(), "utterance");
    }
}
