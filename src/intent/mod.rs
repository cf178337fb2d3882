//! Intent registry: the static tables a responder classifies against.
//!
//! An [`Intent`] is a named keyword set; an [`IntentResponseSet`] is the
//! parallel reply table joined by name at response time. Both live in an
//! [`IntentRegistry`] built once at startup and immutable afterwards —
//! construct it with [`IntentRegistryBuilder`], share it behind an `Arc`.
//!
//! # Examples
//!
//! ```
//! use banter::intent::IntentRegistry;
//!
//! let registry = IntentRegistry::builder()
//!     .intent("greetings", ["hi", "hello"], ["hi, how may I help you today?"])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(registry.len(), 1);
//! assert!(registry.replies_for("greetings").is_some());
//! ```

pub mod matcher;
pub mod selector;

pub use matcher::{IntentMatcher, ScoredIntent, jaccard};
pub use selector::select_best;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{BanterError, Result};

/// A named intent with the keyword set that identifies it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    /// Unique intent name.
    pub name: String,
    /// Keywords matched against the normalized utterance token set.
    pub keywords: HashSet<String>,
}

/// Canned replies for one intent, joined to [`Intent`] by name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntentResponseSet {
    /// Intent name this reply table belongs to.
    pub name: String,
    /// Replies to pick from, in registration order.
    pub replies: Vec<String>,
}

/// Immutable intent and reply tables, built once at startup.
///
/// Registration order is significant: the matcher scores intents in this
/// order and the selector breaks ties in favor of earlier entries.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IntentRegistry {
    intents: Vec<Intent>,
    responses: Vec<IntentResponseSet>,
}

impl IntentRegistry {
    /// Start building a registry.
    pub fn builder() -> IntentRegistryBuilder {
        IntentRegistryBuilder::default()
    }

    /// The compiled-in conversational tables: greetings and farewell.
    pub fn builtin() -> Self {
        Self::builder()
            .intent(
                "greetings",
                ["hi", "hello"],
                [
                    "hi, how may I help you today?",
                    "hello, what can I do for you today?",
                    "it's nice to meet you, how may we be of service?",
                ],
            )
            .intent(
                "farewell",
                ["bye"],
                [
                    "it was a pleasure to help you. do come back. type 'quit' to exit the program.",
                    "see you later. let me know if you have any other queries. type 'quit' to exit the program.",
                    "i hope the interaction was helpful. type 'quit' to exit the program.",
                    "thank you for your time. type 'quit' to exit the program.",
                ],
            )
            .build()
            .unwrap_or_default()
    }

    /// Registered intents, in registration order.
    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    /// Look up an intent by name.
    pub fn intent(&self, name: &str) -> Option<&Intent> {
        self.intents.iter().find(|i| i.name == name)
    }

    /// Replies registered for an intent name, if any.
    pub fn replies_for(&self, name: &str) -> Option<&[String]> {
        self.responses
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.replies.as_slice())
    }

    /// Number of registered intents.
    pub fn len(&self) -> usize {
        self.intents.len()
    }

    /// Check whether the registry has no intents.
    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }
}

/// Builder for [`IntentRegistry`].
///
/// Keywords are lowercased at registration so they are case-normalized the
/// same way the session loop normalizes utterances.
#[derive(Clone, Debug, Default)]
pub struct IntentRegistryBuilder {
    intents: Vec<Intent>,
    responses: Vec<IntentResponseSet>,
}

impl IntentRegistryBuilder {
    /// Register an intent together with its reply table.
    pub fn intent<N, K, R>(mut self, name: N, keywords: K, replies: R) -> Self
    where
        N: Into<String>,
        K: IntoIterator,
        K::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        let name = name.into();
        let keywords: HashSet<String> = keywords
            .into_iter()
            .map(|k| k.into().to_lowercase())
            .collect();
        let replies: Vec<String> = replies.into_iter().map(|r| r.into()).collect();

        self.intents.push(Intent {
            name: name.clone(),
            keywords,
        });
        self.responses.push(IntentResponseSet { name, replies });
        self
    }

    /// Validate and build the registry.
    pub fn build(self) -> Result<IntentRegistry> {
        let mut seen: HashSet<&str> = HashSet::new();
        for intent in &self.intents {
            if !seen.insert(intent.name.as_str()) {
                return Err(BanterError::intent(format!(
                    "duplicate intent name: {}",
                    intent.name
                )));
            }
            if intent.keywords.is_empty() {
                return Err(BanterError::intent(format!(
                    "intent '{}' has an empty keyword set",
                    intent.name
                )));
            }
        }
        for response_set in &self.responses {
            if response_set.replies.is_empty() {
                return Err(BanterError::intent(format!(
                    "intent '{}' has an empty reply table",
                    response_set.name
                )));
            }
        }

        Ok(IntentRegistry {
            intents: self.intents,
            responses: self.responses,
        })
    }
}
