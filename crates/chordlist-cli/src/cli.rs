use std::path::PathBuf;

use chordlist_core::{Modifiers, SearchScope};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "chordlist")]
#[command(about = "Remember the keyboard shortcuts you keep forgetting")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Optional path to the shortcut store file
    #[arg(long, global = true, value_name = "PATH")]
    pub store_path: Option<PathBuf>,

    /// Optional path to the CLI config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config_path: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a new shortcut
    #[command(alias = "new")]
    Add {
        /// Application the shortcut belongs to
        application: String,
        /// What the shortcut does
        feature: String,
        /// Key chord, e.g. "⌘ + ⇧ + C"
        chord: String,
    },
    /// List every recorded shortcut
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search shortcuts
    Search {
        /// Search query (empty matches everything)
        query: String,
        /// Fields to search
        #[arg(long, value_enum, default_value_t = Scope::All)]
        scope: Scope,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a shortcut
    Delete {
        /// Shortcut ID or unique ID prefix
        id: String,
    },
    /// Suggest known application names
    Suggest {
        /// Partial application name
        input: String,
    },
    /// Encode a raw key-down event into a chord
    Encode {
        /// Held modifier (cmd, shift, opt, ctrl); repeatable
        #[arg(short, long = "modifier", value_name = "NAME", value_parser = parse_modifier)]
        modifiers: Vec<Modifiers>,
        /// Hardware key code (macOS virtual key code)
        #[arg(long, value_name = "CODE")]
        key_code: u16,
        /// Characters produced by the key, ignoring modifiers
        #[arg(long, value_name = "TEXT")]
        chars: Option<String>,
    },
    /// Save the shortcut list to a new location and use it from now on
    Relocate {
        /// Destination file
        path: PathBuf,
    },
    /// Print the active store location
    Where,
    /// Export shortcuts
    Export {
        /// Export format
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        /// Optional output file or directory (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Scope {
    All,
    #[value(alias = "app")]
    Application,
    Feature,
}

impl From<Scope> for SearchScope {
    fn from(scope: Scope) -> Self {
        match scope {
            Scope::All => Self::All,
            Scope::Application => Self::Application,
            Scope::Feature => Self::Feature,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Markdown,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

fn parse_modifier(value: &str) -> Result<Modifiers, String> {
    Modifiers::parse_alias(value).ok_or_else(|| {
        format!("unknown modifier '{value}' (expected cmd, shift, opt, or ctrl)")
    })
}

impl From<CompletionShell> for clap_complete::Shell {
    fn from(shell: CompletionShell) -> Self {
        match shell {
            CompletionShell::Bash => Self::Bash,
            CompletionShell::Zsh => Self::Zsh,
            CompletionShell::Fish => Self::Fish,
        }
    }
}
