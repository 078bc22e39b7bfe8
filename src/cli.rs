use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::text_util::DEFAULT_PREVIEW_CHARS;

#[derive(Debug, Parser)]
#[command(
    name = "docsift",
    about = "Load a batch of PDF documents and rank them by keyword matches"
)]
pub struct Cli {
    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Ingest PDFs and list them, ranked by keyword matches
    Rank(RankArgs),
    /// Ingest a single PDF and print its extracted text
    Show(ShowArgs),
    /// Generate shell completions
    #[command(hide = true)]
    Completions(CompletionsArgs),
}

// -- Rank --

#[derive(Debug, Parser)]
pub struct RankArgs {
    /// PDF files or directories containing them
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Comma-separated keywords (e.g. "react, nodejs, python")
    #[arg(short, long, env = "DOCSIFT_KEYWORDS", default_value = "")]
    pub keywords: String,

    /// Show at most this many documents
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Output results as JSON
    #[arg(long, conflicts_with = "files")]
    pub json: bool,

    /// Output only document names (one per line)
    #[arg(long)]
    pub files: bool,

    /// Number of characters in each document preview
    #[arg(
        long,
        env = "DOCSIFT_PREVIEW_CHARS",
        default_value_t = DEFAULT_PREVIEW_CHARS
    )]
    pub preview_chars: usize,
}

// -- Show --

#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// The PDF file to read
    pub path: PathBuf,

    /// Output as JSON with metadata
    #[arg(long)]
    pub json: bool,
}

// -- Completions --

#[derive(Debug, Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsArgs {
    /// Generate shell completions and print to stdout.
    pub fn generate(&self) {
        let mut cmd = Cli::command();
        clap_complete::generate(
            self.shell,
            &mut cmd,
            "docsift",
            &mut std::io::stdout(),
        );
    }
}
