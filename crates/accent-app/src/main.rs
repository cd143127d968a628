use std::path::PathBuf;

use accent_config::log::LogConfig;
use accent_dictionary::WordType;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod state;

use self::state::AppState;

/// Japanese pitch-accent dictionary
#[derive(Debug, Parser)]
#[command(name = "accent-dict", version)]
struct Cli {
    /// Dataset directory containing lexicon.json and audio/
    #[arg(long, global = true)]
    assets: Option<PathBuf>,

    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Look up entries by headword or reading
    Lookup {
        query: String,
        /// headword, compound or counter
        #[arg(long = "type")]
        word_type: Option<WordType>,
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Recordings
    #[command(subcommand)]
    Audio(AudioCommand),
    /// Render a pitch diagram as SVG
    Pitch {
        pattern: String,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the media file name for a pitch diagram
    Name { pattern: String },
}

#[derive(Debug, Subcommand)]
enum AudioCommand {
    List,
    Get {
        id: String,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let state = AppState::new(cli.config.as_deref(), cli.assets)?;

    init_tracing(&state.config.log);
    tracing::debug!("Assets root: {}", state.config.assets_root.display());

    match cli.command {
        Command::Lookup {
            query,
            word_type,
            limit,
            json,
        } => commands::handle_lookup(&state, &query, word_type, limit, json),
        Command::Audio(AudioCommand::List) => commands::handle_audio_list(&state),
        Command::Audio(AudioCommand::Get { id, output }) => {
            commands::handle_audio_get(&state, &id, output.as_deref())
        }
        Command::Pitch { pattern, output } => {
            commands::handle_pitch(&state, &pattern, output.as_deref())
        }
        Command::Name { pattern } => commands::handle_name(&pattern),
    }
}

/// RUST_LOG wins over the configured filter
fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
