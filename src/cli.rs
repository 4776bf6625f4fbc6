//! CLI argument parsing for cardforge

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cardforge")]
#[command(author, version, about = "Document-to-flashcards generator", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server (the default when no command is given)
    Serve {
        /// Bind host (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Generate flashcards once and print or export them
    Generate {
        /// Source document (.txt/.pdf/.docx/.pptx)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Pasted source text
        #[arg(short, long)]
        text: Option<String>,

        /// Number of cards to request (advisory to the model)
        #[arg(short = 'n', long, default_value_t = 10)]
        count: u32,

        /// Export format (pdf|docx|csv) instead of printing
        #[arg(short, long)]
        export: Option<String>,
    },
}
