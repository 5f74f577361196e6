use clap::{Parser, Subcommand};

use race_cli::commands::{config_ops, judge_ops, replay_ops, segment_ops};

#[derive(Parser)]
#[command(name = "racetool", about = "Junk typing race diagnostics")]
struct Cli {
    /// Custom settings TOML (defaults to the embedded settings)
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the first segments of a player stream
    Segments {
        /// Number of segments to print
        #[arg(short, long, default_value = "15")]
        count: u32,
        /// Seed for a reproducible stream
        #[arg(long)]
        seed: Option<u64>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Classify typed text against a target segment
    Judge {
        /// Segment text
        target: String,
        /// Typed text
        typed: String,
        /// Word indices to mark as junk (comma-separated)
        #[arg(long, value_delimiter = ',')]
        junk: Vec<usize>,
        /// Seed for the junk scrambler
        #[arg(long)]
        seed: Option<u64>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Play a scripted match and report the result
    Replay {
        /// Path to the replay script TOML
        script: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the embedded default settings
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// Settings file
        file: String,
    },
    /// Print the embedded passage pools
    PassagesExport,
    /// Validate a passages TOML file
    PassagesValidate {
        /// Passages file
        file: String,
    },
}

fn main() {
    race_cli::trace_init::init_tracing();
    let cli = Cli::parse();

    if let Some(file) = &cli.settings {
        config_ops::load_settings(file);
    }

    match cli.command {
        Command::Segments { count, seed, json } => segment_ops::segments(count, seed, json),
        Command::Judge {
            target,
            typed,
            junk,
            seed,
            json,
        } => judge_ops::judge(&target, &typed, &junk, seed, json),
        Command::Replay { script, json } => replay_ops::replay(&script, json),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::PassagesExport => config_ops::passages_export(),
        Command::PassagesValidate { file } => config_ops::passages_validate(&file),
    }
}
