//! Command line argument parsing for the Banter CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Banter - a small rule-based conversational responder
#[derive(Parser, Debug, Clone)]
#[command(name = "banter")]
#[command(about = "A small rule-based conversational responder")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Banter Contributors")]
#[command(long_about = None)]
pub struct BanterArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl BanterArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Start an interactive chat session
    Chat(ChatArgs),

    /// Classify a single line of text against the registered intents
    Classify(ClassifyArgs),

    /// List the registered intents
    Intents(IntentsArgs),
}

/// Arguments for the interactive chat session
#[derive(Parser, Debug, Clone)]
pub struct ChatArgs {
    /// Seed for the reply RNG (deterministic reply sequence)
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for one-shot classification
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// The utterance to classify
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Also print a reply drawn from the best intent's table
    #[arg(short, long)]
    pub reply: bool,

    /// Seed for the reply RNG
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for listing intents
#[derive(Parser, Debug, Clone)]
pub struct IntentsArgs {}

/// Output format for CLI results
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_defaults_to_normal() {
        let args = BanterArgs::parse_from(["banter", "intents"]);
        assert_eq!(args.verbosity(), 1);
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = BanterArgs::parse_from(["banter", "-q", "-vv", "intents"]);
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_classify_args() {
        let args = BanterArgs::parse_from(["banter", "classify", "hi there", "--seed", "42"]);
        match args.command {
            Command::Classify(classify) => {
                assert_eq!(classify.text, "hi there");
                assert_eq!(classify.seed, Some(42));
            }
            _ => panic!("Expected classify command"),
        }
    }
}
