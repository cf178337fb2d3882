//! Chat engine: analysis, matching, selection and reply in one place.
//!
//! [`ChatEngine`] runs the full classify-and-respond path for a single
//! lowercased line of input. Degraded outcomes (nothing left after
//! filtering, no intent over zero, a matched name with no reply table)
//! all fall through to an empty reply; errors are reserved for real
//! faults in the analysis chain.

use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, UtteranceAnalyzer};
use crate::analysis::token::Token;
use crate::error::Result;
use crate::intent::matcher::{IntentMatcher, ScoredIntent};
use crate::intent::selector::select_best;
use crate::intent::IntentRegistry;
use crate::response::Responder;

/// Exact input that ends the session, checked before classification.
pub const QUIT_COMMAND: &str = "quit";

/// Fixed farewell printed when the session ends.
pub const FAREWELL: &str = "Bye! take care..";

/// Prompt label for user input.
pub const USER_LABEL: &str = "YOU: ";

/// Prefix for every reply line.
pub const BOT_LABEL: &str = "BOT: ";

/// The classify-and-respond engine.
pub struct ChatEngine {
    analyzer: Box<dyn Analyzer>,
    matcher: IntentMatcher,
    responder: Responder,
}

impl ChatEngine {
    /// Create an engine over the given registry with the default analyzer
    /// and an OS-seeded responder.
    pub fn new(registry: Arc<IntentRegistry>) -> Self {
        ChatEngine {
            analyzer: Box::new(UtteranceAnalyzer::new()),
            matcher: IntentMatcher::new(Arc::clone(&registry)),
            responder: Responder::new(registry),
        }
    }

    /// Create an engine with a fixed responder seed, for deterministic
    /// reply sequences.
    pub fn with_seed(registry: Arc<IntentRegistry>, seed: u64) -> Self {
        ChatEngine {
            analyzer: Box::new(UtteranceAnalyzer::new()),
            matcher: IntentMatcher::new(Arc::clone(&registry)),
            responder: Responder::with_seed(registry, seed),
        }
    }

    /// Swap in a custom analyzer.
    pub fn with_analyzer(mut self, analyzer: Box<dyn Analyzer>) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Score a line against every registered intent, in registry order.
    pub fn classify(&self, line: &str) -> Result<Vec<ScoredIntent>> {
        let tokens: Vec<Token> = self.analyzer.analyze(line)?.collect();
        Ok(self.matcher.match_tokens(&tokens))
    }

    /// Classify a line and return the winning intent, if any score beat zero.
    pub fn best_intent(&self, line: &str) -> Result<Option<ScoredIntent>> {
        let scored = self.classify(line)?;
        Ok(select_best(&scored).cloned())
    }

    /// Produce a reply for one line of input.
    ///
    /// Returns the empty string when no intent matched or the matched
    /// intent has no reply table.
    pub fn respond(&mut self, line: &str) -> Result<String> {
        let scored = self.classify(line)?;
        let reply = select_best(&scored)
            .and_then(|best| self.responder.reply(&best.name))
            .unwrap_or_default();

        Ok(reply)
    }
}

impl std::fmt::Debug for ChatEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatEngine")
            .field("analyzer", &self.analyzer.name())
            .field("intents", &self.matcher.registry().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> ChatEngine {
        ChatEngine::with_seed(Arc::new(IntentRegistry::builtin()), 42)
    }

    #[test]
    fn test_greeting_matches() {
        let engine = engine();
        let best = engine.best_intent("hi").unwrap().unwrap();

        assert_eq!(best.name, "greetings");
        assert!(best.score > 0.0);
    }

    #[test]
    fn test_farewell_reply_comes_from_table() {
        let registry = Arc::new(IntentRegistry::builtin());
        let mut engine = ChatEngine::with_seed(Arc::clone(&registry), 1);

        let reply = engine.respond("bye").unwrap();
        assert!(registry.replies_for("farewell").unwrap().contains(&reply));
    }

    #[test]
    fn test_unmatched_line_yields_empty_reply() {
        let mut engine = engine();
        assert_eq!(engine.respond("the weather is nice").unwrap(), "");
    }

    #[test]
    fn test_empty_line_yields_empty_reply() {
        let mut engine = engine();
        assert_eq!(engine.respond("").unwrap(), "");
    }

    #[test]
    fn test_classify_reports_all_intents() {
        let engine = engine();
        let scored = engine.classify("hello there").unwrap();

        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].name, "greetings");
        assert!(scored[0].score > 0.0);
        assert_eq!(scored[1].score, 0.0);
    }

    #[test]
    fn test_exact_keyword_set_scores_one() {
        let engine = engine();
        let best = engine.best_intent("hi hello").unwrap().unwrap();

        assert_eq!(best.name, "greetings");
        assert_eq!(best.score, 1.0);
    }

    #[test]
    fn test_seeded_engines_agree() {
        let registry = Arc::new(IntentRegistry::builtin());
        let mut a = ChatEngine::with_seed(Arc::clone(&registry), 9);
        let mut b = ChatEngine::with_seed(registry, 9);

        for _ in 0..8 {
            assert_eq!(a.respond("hi").unwrap(), b.respond("hi").unwrap());
        }
    }
}
