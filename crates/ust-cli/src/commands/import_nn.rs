//! Import-nn command implementation

use std::path::Path;

use colored::Colorize;
use ust_document::nn::from_nn;
use ust_fs::{Error as FsError, io::read_bytes, save};

use crate::context::Context;
use crate::error::Result;

/// Convert an NN note list to a UST project
pub fn run_import_nn(context: &Context, input: &Path, output: &Path) -> Result<()> {
    let bytes = read_bytes(input)?;
    let decoded = context
        .normalizer()
        .decode(&bytes, context.read_encoding(None)?)
        .map_err(|e| FsError::encoding(input, e))?;
    let document = from_nn(&decoded.text)?;
    save(&document, output, &context.save_options()?)?;

    println!(
        "{} {} notes from {} into {}",
        "Imported".green().bold(),
        document.notes().count(),
        input.display(),
        output.display()
    );
    Ok(())
}
