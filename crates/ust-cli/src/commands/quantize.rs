//! Quantize command implementation

use std::path::Path;

use colored::Colorize;
use ust_fs::{open_with, save};

use crate::context::Context;
use crate::error::Result;

/// Round note lengths and write the result.
///
/// The file keeps the encoding it was read in; the line ending and
/// normalization come from the configuration.
pub fn run_quantize(context: &Context, file: &Path, step: i64, output: Option<&Path>) -> Result<()> {
    let opened = open_with(file, &context.normalizer(), context.read_encoding(None)?)?;
    let mut document = opened.document;
    let before = document.total_length()?;
    document.quantize(step)?;
    let after = document.total_length()?;

    let destination = output.unwrap_or(file);
    let options = context.save_options()?.with_encoding(opened.encoding);
    save(&document, destination, &options)?;

    println!(
        "{} {} to {} ticks ({} -> {} ticks total)",
        "Quantized".green().bold(),
        destination.display(),
        step,
        before,
        after
    );
    Ok(())
}
