//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{BanterArgs, OutputFormat};
use crate::error::Result;
use crate::intent::matcher::ScoredIntent;

/// Result structure for one-shot classification.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub input: String,
    pub scores: Vec<ScoredIntent>,
    pub best: Option<ScoredIntent>,
    pub reply: Option<String>,
}

/// Summary of one registered intent.
#[derive(Debug, Serialize, Deserialize)]
pub struct IntentSummary {
    pub name: String,
    pub keywords: Vec<String>,
    pub reply_count: usize,
}

/// Result structure for the intent listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct IntentListResult {
    pub intents: Vec<IntentSummary>,
}

/// Output a result in the format selected by the CLI arguments.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &BanterArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &BanterArgs) -> Result<()> {
    if args.verbosity() > 0 && !message.is_empty() {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("ClassificationResult") => {
            output_classification_human(&value)
        }
        _ if std::any::type_name::<T>().contains("IntentListResult") => {
            output_intent_list_human(&value)
        }
        _ => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
    }
}

fn output_classification_human(value: &serde_json::Value) -> Result<()> {
    if let Some(scores) = value.get("scores").and_then(|s| s.as_array()) {
        for score in scores {
            let name = score.get("name").and_then(|n| n.as_str()).unwrap_or("?");
            let similarity = score.get("score").and_then(|s| s.as_f64()).unwrap_or(0.0);
            println!("  {name}: {similarity:.4}");
        }
    }

    match value.get("best").and_then(|b| b.get("name")).and_then(|n| n.as_str()) {
        Some(best) => println!("best: {best}"),
        None => println!("best: (no match)"),
    }

    if let Some(reply) = value.get("reply").and_then(|r| r.as_str()) {
        println!("reply: {reply}");
    }

    Ok(())
}

fn output_intent_list_human(value: &serde_json::Value) -> Result<()> {
    if let Some(intents) = value.get("intents").and_then(|i| i.as_array()) {
        for intent in intents {
            let name = intent.get("name").and_then(|n| n.as_str()).unwrap_or("?");
            let reply_count = intent
                .get("reply_count")
                .and_then(|c| c.as_u64())
                .unwrap_or(0);
            let keywords: Vec<&str> = intent
                .get("keywords")
                .and_then(|k| k.as_array())
                .map(|k| k.iter().filter_map(|w| w.as_str()).collect())
                .unwrap_or_default();
            println!("  {name}: keywords=[{}] replies={reply_count}", keywords.join(", "));
        }
    }

    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &BanterArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_result_serializes() {
        let result = ClassificationResult {
            input: "hi".to_string(),
            scores: vec![ScoredIntent {
                name: "greetings".to_string(),
                score: 0.5,
            }],
            best: Some(ScoredIntent {
                name: "greetings".to_string(),
                score: 0.5,
            }),
            reply: None,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["input"], "hi");
        assert_eq!(json["scores"][0]["name"], "greetings");
        assert_eq!(json["best"]["score"], 0.5);
        assert!(json["reply"].is_null());
    }

    #[test]
    fn test_intent_list_serializes() {
        let result = IntentListResult {
            intents: vec![IntentSummary {
                name: "farewell".to_string(),
                keywords: vec!["bye".to_string()],
                reply_count: 4,
            }],
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["intents"][0]["reply_count"], 4);
    }
}
