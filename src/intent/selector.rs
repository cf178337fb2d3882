//! Best-intent selection.

use crate::intent::matcher::ScoredIntent;

/// Pick the intent with the strictly highest score.
///
/// The running maximum starts at 0.0 and a candidate only replaces the
/// current best when its score is strictly greater. Ties therefore keep the
/// earlier-registered intent, and an all-zero slate selects nothing.
pub fn select_best(scored: &[ScoredIntent]) -> Option<&ScoredIntent> {
    let mut max_score = 0.0;
    let mut best = None;

    for candidate in scored {
        if candidate.score > max_score {
            max_score = candidate.score;
            best = Some(candidate);
        }
    }

    best
}
