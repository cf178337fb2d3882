//! Text analysis pipeline for user utterances.
//!
//! Analysis turns a raw line of input into the normalized token set that
//! intent matching operates on. The stages mirror a classic lexical
//! pipeline: tokenize on whitespace, drop stop words, trim trailing
//! punctuation, reduce each word to a dictionary lemma.
//!
//! The building blocks are composable: a [`tokenizer::Tokenizer`] produces a
//! [`token::TokenStream`], and any number of [`token_filter::Filter`]s
//! transform it. [`analyzer::UtteranceAnalyzer`] wires up the default chain.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
