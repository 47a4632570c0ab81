//! Configuration for reading and writing UST files.
//!
//! A config file looks like:
//! ```toml
//! [read]
//! threshold = 0.6
//!
//! [write]
//! encoding = "utf-8"
//! line_ending = "lf"
//! normalize = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use ust_document::LineEnding;
use ust_encoding::{DEFAULT_THRESHOLD, Encoding, Normalizer, encoding_for_label};

use crate::project::SaveOptions;
use crate::{Error, Result, io};

/// Name of the config file picked up from the working directory.
pub const CONFIG_FILE_NAME: &str = "ust.toml";

/// Format-agnostic configuration loading.
///
/// The format is chosen from the file extension.
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let bytes = io::read_bytes(path)?;
        let content = String::from_utf8(bytes).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            format: "UTF-8".into(),
            message: e.to_string(),
        })?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");

        match extension.to_lowercase().as_str() {
            "toml" => toml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                format: "TOML".into(),
                message: e.to_string(),
            }),
            "json" => serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                format: "JSON".into(),
                message: e.to_string(),
            }),
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                format: "YAML".into(),
                message: e.to_string(),
            }),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UstConfig {
    pub read: ReadConfig,
    pub write: WriteConfig,
}

/// Settings applied when opening files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadConfig {
    /// Minimum detection confidence.
    pub threshold: f32,
    /// Skip detection and always decode with this encoding label.
    pub encoding: Option<String>,
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            encoding: None,
        }
    }
}

/// Settings applied when saving files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriteConfig {
    /// Encoding label, e.g. `shift_jis` or `utf-8`.
    pub encoding: String,
    pub line_ending: LineEnding,
    pub normalize: bool,
}

impl Default for WriteConfig {
    fn default() -> Self {
        Self {
            encoding: "shift_jis".to_string(),
            line_ending: LineEnding::default(),
            normalize: false,
        }
    }
}

impl UstConfig {
    /// Load from `path`, resolving encoding labels eagerly so a typo fails here.
    pub fn load(path: &Path) -> Result<Self> {
        let config: Self = ConfigStore::new().load(path)?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        let invalid = |message: String| Error::ConfigInvalid {
            path: path.to_path_buf(),
            message,
        };
        if !(0.0..=1.0).contains(&self.read.threshold) {
            return Err(invalid(format!(
                "read.threshold must be within 0..=1, got {}",
                self.read.threshold
            )));
        }
        self.read_encoding().map_err(|e| invalid(e.to_string()))?;
        self.save_options().map_err(|e| invalid(e.to_string()))?;
        Ok(())
    }

    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new().with_threshold(self.read.threshold)
    }

    pub fn read_encoding(&self) -> ust_encoding::Result<Option<&'static Encoding>> {
        self.read
            .encoding
            .as_deref()
            .map(encoding_for_label)
            .transpose()
    }

    pub fn save_options(&self) -> ust_encoding::Result<SaveOptions> {
        Ok(SaveOptions {
            encoding: encoding_for_label(&self.write.encoding)?,
            line_ending: self.write.line_ending,
            normalize: self.write.normalize,
        })
    }
}
