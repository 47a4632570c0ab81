//! Check command implementation

use std::path::PathBuf;

use colored::Colorize;
use ust_fs::open_with;

use crate::context::Context;
use crate::error::{CliError, Result};

/// Parse every file and print one status line each.
///
/// All files are checked even after a failure; the command fails if any did.
pub fn run_check(context: &Context, files: &[PathBuf], from_encoding: Option<&str>) -> Result<()> {
    let normalizer = context.normalizer();
    let encoding = context.read_encoding(from_encoding)?;

    let mut failed = 0;
    for file in files {
        match open_with(file, &normalizer, encoding) {
            Ok(opened) => println!(
                "{} {} ({}, {} sections, {} notes)",
                "OK".green().bold(),
                file.display(),
                opened.encoding.name(),
                opened.document.len(),
                opened.document.notes().count()
            ),
            Err(e) => {
                failed += 1;
                println!("{} {}", "FAIL".red().bold(), e);
            }
        }
    }

    if failed > 0 {
        return Err(CliError::user(format!(
            "{failed} of {} files failed to parse",
            files.len()
        )));
    }
    Ok(())
}
