//! # Banter
//!
//! A small rule-based conversational responder for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Flexible text analysis pipeline (tokenizer + filter chain)
//! - Jaccard-similarity intent matching over keyword sets
//! - Deterministic best-intent selection, seedable random replies
//! - Line-oriented interactive session with a `quit` sentinel

pub mod analysis;
pub mod chat;
pub mod cli;
pub mod error;
pub mod intent;
pub mod response;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
