//! Trailing punctuation filter implementation.

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Sentence punctuation trimmed from the end of a token.
const TRAILING_PUNCT: [char; 4] = ['?', ',', '.', '!'];

/// A filter that strips a single trailing punctuation character from tokens.
///
/// Exactly one of `?`, `,`, `.`, `!` is removed from the end of each token;
/// everything else passes through unchanged. Tokens are never removed from
/// the stream. A token consisting only of punctuation (e.g. `"?"`) becomes
/// empty after trimming and is marked as stopped so it cannot reach the
/// matcher as a live empty token.
#[derive(Clone, Debug, Default)]
pub struct TrailingPunctFilter;

impl TrailingPunctFilter {
    /// Create a new trailing punctuation filter.
    pub fn new() -> Self {
        TrailingPunctFilter
    }
}

impl Filter for TrailingPunctFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    return token;
                }
                match token.text.strip_suffix(TRAILING_PUNCT) {
                    Some("") => token.with_text("").stop(),
                    Some(trimmed) => {
                        let trimmed = trimmed.to_string();
                        token.with_text(trimmed)
                    }
                    None => token,
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "trailing_punct"
    }
}
