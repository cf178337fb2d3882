//! Token filter implementations for token transformation.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod lemma;
pub mod stop;
pub mod trailing_punct;

// Re-export all filters for convenient access
pub use lemma::{DictionaryLemmatizer, IdentityLemmatizer, LemmaFilter, Lemmatizer};
pub use stop::StopFilter;
pub use trailing_punct::TrailingPunctFilter;
