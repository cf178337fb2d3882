//! Command implementations for the Banter CLI.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use crate::chat::{BOT_LABEL, ChatEngine, FAREWELL, QUIT_COMMAND, USER_LABEL};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::intent::IntentRegistry;
use crate::intent::selector::select_best;

/// Execute a CLI command.
pub fn execute_command(args: BanterArgs) -> Result<()> {
    match &args.command {
        Command::Chat(chat_args) => run_chat(chat_args.clone(), &args),
        Command::Classify(classify_args) => classify_text(classify_args.clone(), &args),
        Command::Intents(_) => list_intents(&args),
    }
}

/// Build a chat engine over the compiled-in registry.
fn build_engine(seed: Option<u64>) -> ChatEngine {
    let registry = Arc::new(IntentRegistry::builtin());
    match seed {
        Some(seed) => ChatEngine::with_seed(registry, seed),
        None => ChatEngine::new(registry),
    }
}

/// Run the interactive session loop.
///
/// Each stdin line is lowercased and fed to the pipeline; the exact input
/// `quit` short-circuits classification, prints the farewell and ends the
/// session. An unmatched utterance prints an empty reply line.
fn run_chat(args: ChatArgs, cli_args: &BanterArgs) -> Result<()> {
    let mut engine = build_engine(args.seed);

    if cli_args.verbosity() > 0 {
        println!("Intent Classification BOT");
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        println!();
        print!("{USER_LABEL}");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF ends the session like a quit
            println!("{BOT_LABEL}{FAREWELL}");
            break;
        }

        let line = line.trim_end_matches(['\r', '\n']).to_lowercase();
        if line == QUIT_COMMAND {
            println!("{BOT_LABEL}{FAREWELL}");
            break;
        }

        let reply = engine.respond(&line)?;
        println!("{BOT_LABEL}{reply}");
    }

    Ok(())
}

/// Classify a single utterance and print the scores.
fn classify_text(args: ClassifyArgs, cli_args: &BanterArgs) -> Result<()> {
    let mut engine = build_engine(args.seed);

    let line = args.text.to_lowercase();
    let scores = engine.classify(&line)?;
    let best = select_best(&scores).cloned();
    let reply = if args.reply {
        Some(engine.respond(&line)?)
    } else {
        None
    };

    output_result(
        "Classification",
        &ClassificationResult {
            input: line,
            scores,
            best,
            reply,
        },
        cli_args,
    )
}

/// List the registered intents.
fn list_intents(cli_args: &BanterArgs) -> Result<()> {
    let registry = IntentRegistry::builtin();

    let intents = registry
        .intents()
        .iter()
        .map(|intent| {
            let mut keywords: Vec<String> = intent.keywords.iter().cloned().collect();
            keywords.sort();
            IntentSummary {
                name: intent.name.clone(),
                keywords,
                reply_count: registry.replies_for(&intent.name).map_or(0, |r| r.len()),
            }
        })
        .collect();

    output_result("Registered intents", &IntentListResult { intents }, cli_args)
}
