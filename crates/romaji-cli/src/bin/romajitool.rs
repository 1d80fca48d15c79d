use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use romaji_cli::commands::{load_table, replay_ops, segment_ops, table_ops};
use romaji_cli::CliError;

#[derive(Parser)]
#[command(name = "romajitool", about = "Romaji typing engine diagnostics")]
struct Cli {
    /// Write a JSON trace log into this directory (needs the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the units a hiragana word is split into
    Segment {
        /// Hiragana word
        hiragana: String,
        /// Romaji table TOML (defaults to the built-in table)
        #[arg(long)]
        table: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the advisory romanizations of ん before a cluster
    Nasal {
        /// Following cluster (omit for word-final ん)
        next: Option<String>,
    },
    /// Feed keystrokes to a word and report each outcome
    Replay {
        /// Hiragana word
        hiragana: String,
        /// Keystrokes, one character each
        keys: String,
        /// Romaji table TOML (defaults to the built-in table)
        #[arg(long)]
        table: Option<String>,
        /// Milliseconds between simulated keystrokes
        #[arg(long, default_value = "100")]
        interval: u64,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export or validate romaji tables
    Table {
        #[command(subcommand)]
        action: TableAction,
    },
}

#[derive(Subcommand)]
enum TableAction {
    /// Print the built-in table as TOML
    Export,
    /// Check a table TOML file
    Validate {
        /// Path to the table TOML
        file: String,
    },
}

fn run(command: Command) -> Result<String, CliError> {
    match command {
        Command::Segment {
            hiragana,
            table,
            json,
        } => {
            let table = load_table(table.as_deref())?;
            let reports = segment_ops::segment_report(&table, &hiragana);
            if json {
                Ok(serde_json::to_string_pretty(&reports)?)
            } else {
                Ok(segment_ops::format_segments(&reports))
            }
        }
        Command::Nasal { next } => Ok(segment_ops::nasal_hint(next.as_deref())),
        Command::Replay {
            hiragana,
            keys,
            table,
            interval,
            json,
        } => {
            let table = load_table(table.as_deref())?;
            let report = replay_ops::replay(&table, &hiragana, &keys, interval);
            if json {
                Ok(serde_json::to_string_pretty(&report)?)
            } else {
                Ok(replay_ops::format_replay(&report))
            }
        }
        Command::Table { action } => match action {
            TableAction::Export => Ok(table_ops::table_export().to_string()),
            TableAction::Validate { file } => table_ops::table_validate(&file),
        },
    }
}

fn main() {
    let cli = Cli::parse();

    if let Some(ref dir) = cli.trace_dir {
        romaji_engine::init_tracing(dir);
    }

    match run(cli.command) {
        Ok(out) => {
            print!("{out}");
            if !out.ends_with('\n') {
                println!();
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
