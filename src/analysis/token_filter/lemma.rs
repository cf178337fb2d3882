//! Lemmatization token filter and lemmatizer implementations.
//!
//! Reduces each token to a canonical dictionary form before matching, so an
//! utterance like "thanks!" and a keyword "thank" can meet in the middle.
//! Unknown words always pass through unchanged — lemmatization never fails.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for lemmatization algorithms.
pub trait Lemmatizer: Send + Sync {
    /// Reduce a word to its dictionary base form.
    fn lemmatize(&self, word: &str) -> String;

    /// Get the name of this lemmatizer.
    fn name(&self) -> &'static str;
}

/// Irregular English forms that suffix rules cannot reach.
const IRREGULAR_LEMMAS: &[(&str, &str)] = &[
    ("children", "child"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("men", "man"),
    ("mice", "mouse"),
    ("teeth", "tooth"),
    ("women", "woman"),
];

/// Irregular lemma lookup table.
static IRREGULAR_LEMMA_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| IRREGULAR_LEMMAS.iter().copied().collect());

/// Dictionary-backed lemmatizer with conservative plural suffix rules.
///
/// Looks up irregular forms in a compiled-in table, then falls back to
/// standard English plural reduction: `-ies` to `-y`, `-sses`/`-xes`/
/// `-ches`/`-shes` drop the `es`, and a plain `-s` is dropped unless the
/// word ends in `-ss`, `-us` or `-is`.
#[derive(Clone, Debug, Default)]
pub struct DictionaryLemmatizer;

impl DictionaryLemmatizer {
    /// Create a new dictionary lemmatizer.
    pub fn new() -> Self {
        DictionaryLemmatizer
    }
}

impl Lemmatizer for DictionaryLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        if let Some(lemma) = IRREGULAR_LEMMA_MAP.get(word) {
            return (*lemma).to_string();
        }

        if word.len() > 4 {
            if let Some(stem) = word.strip_suffix("ies") {
                return format!("{stem}y");
            }
            if word.ends_with("sses")
                || word.ends_with("xes")
                || word.ends_with("ches")
                || word.ends_with("shes")
            {
                if let Some(stem) = word.strip_suffix("es") {
                    return stem.to_string();
                }
            }
        }

        if word.len() > 3
            && word.ends_with('s')
            && !word.ends_with("ss")
            && !word.ends_with("us")
            && !word.ends_with("is")
        {
            return word[..word.len() - 1].to_string();
        }

        word.to_string()
    }

    fn name(&self) -> &'static str {
        "dictionary"
    }
}

/// Lemmatizer that returns every word unchanged.
///
/// Stand-in for pipelines without a lemma resource.
#[derive(Clone, Debug, Default)]
pub struct IdentityLemmatizer;

impl IdentityLemmatizer {
    /// Create a new identity lemmatizer.
    pub fn new() -> Self {
        IdentityLemmatizer
    }
}

impl Lemmatizer for IdentityLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        word.to_string()
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

/// Filter that applies lemmatization to tokens.
pub struct LemmaFilter {
    /// The lemmatizer to use.
    lemmatizer: Box<dyn Lemmatizer>,
}

impl std::fmt::Debug for LemmaFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LemmaFilter")
            .field("lemmatizer", &self.lemmatizer.name())
            .finish()
    }
}

impl LemmaFilter {
    /// Create a new lemma filter with the dictionary lemmatizer.
    pub fn new() -> Self {
        LemmaFilter {
            lemmatizer: Box::new(DictionaryLemmatizer::new()),
        }
    }

    /// Create a lemma filter with a custom lemmatizer.
    pub fn with_lemmatizer(lemmatizer: Box<dyn Lemmatizer>) -> Self {
        LemmaFilter { lemmatizer }
    }

    /// Create a lemma filter that leaves words unchanged.
    pub fn identity() -> Self {
        LemmaFilter {
            lemmatizer: Box::new(IdentityLemmatizer::new()),
        }
    }
}

impl Default for LemmaFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for LemmaFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    token
                } else {
                    let lemma = self.lemmatizer.lemmatize(&token.text);
                    token.with_text(lemma)
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lemma"
    }
}
