//! UST toolkit CLI
//!
//! Command-line access to reading, validating and converting UST files.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use context::Context;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose).map_err(|e| CliError::user(e.to_string()))?;
    tracing::debug!("Verbose mode enabled");

    let Some(command) = cli.command else {
        println!("{} UST toolkit", "ust".green().bold());
        println!();
        println!("Run {} for available commands.", "ust --help".cyan());
        return Ok(());
    };

    let cwd = std::env::current_dir()?;
    let context = Context::load(cli.config.as_deref(), &cwd)?;
    execute_command(command, &context)
}

fn execute_command(cmd: Commands, context: &Context) -> Result<()> {
    match cmd {
        Commands::Check {
            files,
            from_encoding,
        } => commands::run_check(context, &files, from_encoding.as_deref()),
        Commands::Info {
            file,
            json,
            from_encoding,
        } => commands::run_info(context, &file, json, from_encoding.as_deref()),
        Commands::Convert {
            input,
            output,
            encoding,
            line_ending,
            normalize,
            from_encoding,
        } => commands::run_convert(
            context,
            &input,
            &output,
            commands::ConvertOverrides {
                encoding: encoding.as_deref(),
                line_ending,
                normalize,
                from_encoding: from_encoding.as_deref(),
            },
        ),
        Commands::Quantize { file, step, output } => {
            commands::run_quantize(context, &file, step, output.as_deref())
        }
        Commands::ImportNn { input, output } => commands::run_import_nn(context, &input, &output),
    }
}
