//! Info command implementation

use std::path::Path;

use colored::Colorize;
use serde::Serialize;
use ust_document::Document;
use ust_fs::{OpenedDocument, open_with};

use crate::context::Context;
use crate::error::Result;

/// Summary printed by `ust info`
#[derive(Debug, Serialize)]
pub struct DocumentInfo {
    pub path: String,
    pub encoding: String,
    pub confidence: f32,
    pub sections: usize,
    pub notes: usize,
    pub rests: usize,
    pub tempo: Option<f64>,
    pub total_length: i64,
    pub pitch_range: Option<PitchRange>,
}

#[derive(Debug, Serialize)]
pub struct PitchRange {
    pub high: i64,
    pub low: i64,
}

impl DocumentInfo {
    pub fn collect(path: &Path, opened: &OpenedDocument) -> Result<Self> {
        let document: &Document = &opened.document;
        Ok(Self {
            path: path.display().to_string(),
            encoding: opened.encoding.name().to_string(),
            confidence: opened.confidence,
            sections: document.len(),
            notes: document.notes().count(),
            rests: document.notes().filter(|note| note.is_rest()).count(),
            tempo: document.tempo()?,
            total_length: document.total_length()?,
            pitch_range: document
                .pitch_range()?
                .map(|(high, low)| PitchRange { high, low }),
        })
    }
}

/// Run the info command
pub fn run_info(
    context: &Context,
    file: &Path,
    json: bool,
    from_encoding: Option<&str>,
) -> Result<()> {
    let encoding = context.read_encoding(from_encoding)?;
    let opened = open_with(file, &context.normalizer(), encoding)?;
    let info = DocumentInfo::collect(file, &opened)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{}", info.path.bold());
    println!();
    println!(
        "{}:     {} ({:.0}%)",
        "Encoding".dimmed(),
        info.encoding.cyan(),
        info.confidence * 100.0
    );
    println!("{}:     {}", "Sections".dimmed(), info.sections);
    println!("{}:        {} ({} rests)", "Notes".dimmed(), info.notes, info.rests);
    match info.tempo {
        Some(tempo) => println!("{}:        {}", "Tempo".dimmed(), tempo),
        None => println!("{}:        {}", "Tempo".dimmed(), "unset".dimmed()),
    }
    println!("{}: {} ticks", "Total length".dimmed(), info.total_length);
    match &info.pitch_range {
        Some(range) => println!("{}:  {}..={}", "Pitch range".dimmed(), range.low, range.high),
        None => println!("{}:  {}", "Pitch range".dimmed(), "none".dimmed()),
    }
    Ok(())
}
