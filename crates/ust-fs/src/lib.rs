//! Opening and saving UST files on disk
//!
//! Ties the encoding normalizer, the parser and the renderer together:
//! [`open`] is read → detect/decode → parse, [`save`] is render → encode →
//! atomic write.

pub mod config;
pub mod error;
pub mod io;
pub mod project;

pub use config::{CONFIG_FILE_NAME, ConfigStore, UstConfig};
pub use error::{Error, Result};
pub use project::{OpenedDocument, SaveOptions, open, open_with, save, to_bytes};
