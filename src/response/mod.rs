//! Random reply selection for matched intents.
//!
//! The responder is the only non-deterministic stage of the pipeline: it
//! picks uniformly at random among the matched intent's replies. The RNG is
//! injectable via [`Responder::with_seed`] so tests can assert exact output.

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::intent::IntentRegistry;

/// Picks a canned reply for a matched intent.
#[derive(Clone, Debug)]
pub struct Responder {
    registry: Arc<IntentRegistry>,
    rng: StdRng,
}

impl Responder {
    /// Create a responder seeded from the operating system.
    pub fn new(registry: Arc<IntentRegistry>) -> Self {
        Responder {
            registry,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a responder with a fixed seed, for deterministic replies.
    pub fn with_seed(registry: Arc<IntentRegistry>, seed: u64) -> Self {
        Responder {
            registry,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick a reply for the given intent name.
    ///
    /// Returns `None` when the name has no registered reply table; the
    /// caller degrades that to an empty reply rather than an error.
    pub fn reply(&mut self, intent_name: &str) -> Option<String> {
        let replies = self.registry.replies_for(intent_name)?;
        replies.choose(&mut self.rng).cloned()
    }
}
