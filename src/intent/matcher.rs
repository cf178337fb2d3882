//! Jaccard-similarity intent matching.
//!
//! Scores the normalized utterance token set against every registered
//! intent's keyword set with plain (unweighted) Jaccard similarity:
//! `|A ∩ B| / |A ∪ B|`, giving 0.0 for no overlap and 1.0 for identical
//! sets. One [`ScoredIntent`] is produced per registered intent, in
//! registration order.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::intent::IntentRegistry;

/// Compute the Jaccard similarity between two string sets.
///
/// Defined as 0.0 when both sets are empty, so an utterance that was
/// filtered down to nothing can never divide by zero.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}

/// One intent's similarity score for a single utterance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredIntent {
    /// Intent name.
    pub name: String,
    /// Jaccard similarity in [0, 1].
    pub score: f64,
}

/// Scores utterance token sets against a shared intent registry.
#[derive(Clone, Debug)]
pub struct IntentMatcher {
    registry: Arc<IntentRegistry>,
}

impl IntentMatcher {
    /// Create a matcher over the given registry.
    pub fn new(registry: Arc<IntentRegistry>) -> Self {
        IntentMatcher { registry }
    }

    /// Get the registry this matcher scores against.
    pub fn registry(&self) -> &Arc<IntentRegistry> {
        &self.registry
    }

    /// Score an analyzed token stream against every registered intent.
    ///
    /// Stopped and empty tokens are excluded from the utterance set, so
    /// trimmed punctuation leftovers never perturb the union size.
    pub fn match_tokens(&self, tokens: &[Token]) -> Vec<ScoredIntent> {
        let utterance_set: HashSet<String> = tokens
            .iter()
            .filter(|t| !t.is_stopped() && !t.is_empty())
            .map(|t| t.text.clone())
            .collect();

        self.registry
            .intents()
            .iter()
            .map(|intent| ScoredIntent {
                name: intent.name.clone(),
                score: jaccard(&utterance_set, &intent.keywords),
            })
            .collect()
    }
}
