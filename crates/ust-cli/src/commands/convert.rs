//! Convert command implementation

use std::path::Path;

use colored::Colorize;
use ust_document::LineEnding;
use ust_encoding::encoding_for_label;
use ust_fs::{open_with, save};

use crate::context::Context;
use crate::error::Result;

/// Command-line settings that take precedence over the config file
#[derive(Debug, Default, Clone, Copy)]
pub struct ConvertOverrides<'a> {
    pub encoding: Option<&'a str>,
    pub line_ending: Option<LineEnding>,
    pub normalize: bool,
    pub from_encoding: Option<&'a str>,
}

/// Run the convert command
pub fn run_convert(
    context: &Context,
    input: &Path,
    output: &Path,
    overrides: ConvertOverrides<'_>,
) -> Result<()> {
    let mut options = context.save_options()?;
    if let Some(label) = overrides.encoding {
        options.encoding = encoding_for_label(label)?;
    }
    if let Some(line_ending) = overrides.line_ending {
        options.line_ending = line_ending;
    }
    options.normalize |= overrides.normalize;

    let read_encoding = context.read_encoding(overrides.from_encoding)?;
    let opened = open_with(input, &context.normalizer(), read_encoding)?;
    save(&opened.document, output, &options)?;

    println!(
        "{} {} ({}) -> {} ({}, {})",
        "Converted".green().bold(),
        input.display(),
        opened.encoding.name(),
        output.display(),
        options.encoding.name(),
        options.line_ending
    );
    Ok(())
}
