//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ust_document::LineEnding;

/// UST toolkit - Inspect, validate and convert UTAU sequence files
#[derive(Parser, Debug)]
#[command(name = "ust")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (TOML, JSON or YAML). Defaults to ./ust.toml when present
    #[arg(long, global = true, env = "UST_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Parse files and report structural errors
    Check {
        /// Files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Decode with this encoding instead of detecting it
        #[arg(long)]
        from_encoding: Option<String>,
    },

    /// Show encoding, section counts and note statistics
    Info {
        /// File to inspect
        file: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,

        /// Decode with this encoding instead of detecting it
        #[arg(long)]
        from_encoding: Option<String>,
    },

    /// Re-encode and re-render a file
    ///
    /// Examples:
    ///   ust convert in.ust out.ust --encoding utf-8 --line-ending lf
    ///   ust convert in.ust out.ust --normalize
    Convert {
        /// Source file
        input: PathBuf,

        /// Destination file
        output: PathBuf,

        /// Output encoding label (e.g. shift_jis, utf-8, utf-16le)
        #[arg(short, long)]
        encoding: Option<String>,

        /// Output line ending (lf or crlf)
        #[arg(short, long)]
        line_ending: Option<LineEnding>,

        /// Reorder sections and renumber notes
        #[arg(long)]
        normalize: bool,

        /// Decode with this encoding instead of detecting it
        #[arg(long)]
        from_encoding: Option<String>,
    },

    /// Round note lengths to a multiple of a tick step
    Quantize {
        /// File to quantize
        file: PathBuf,

        /// Step in ticks (480 is a quarter note)
        #[arg(short, long)]
        step: i64,

        /// Write here instead of overwriting the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert an NN note list into a UST project
    ImportNn {
        /// NN source file
        input: PathBuf,

        /// Destination UST file
        output: PathBuf,
    },
}
