//! Configuration shared by all commands

use std::path::{Path, PathBuf};

use tracing::debug;
use ust_encoding::{Encoding, Normalizer, encoding_for_label};
use ust_fs::{CONFIG_FILE_NAME, SaveOptions, UstConfig};

use crate::error::Result;

/// Resolved configuration for one invocation
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub config: UstConfig,
    /// Where the configuration came from, if not built-in defaults.
    pub source: Option<PathBuf>,
}

impl Context {
    /// Load `explicit`, or `ust.toml` from `cwd` when it exists.
    ///
    /// A missing default file means defaults; a missing explicit file is an error.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let default = cwd.join(CONFIG_FILE_NAME);
                if !default.is_file() {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };
        let config = UstConfig::load(&path)?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(Self {
            config,
            source: Some(path),
        })
    }

    pub fn normalizer(&self) -> Normalizer {
        self.config.normalizer()
    }

    /// Encoding to decode with: the command-line label, then the config.
    pub fn read_encoding(&self, label: Option<&str>) -> Result<Option<&'static Encoding>> {
        match label {
            Some(label) => Ok(Some(encoding_for_label(label)?)),
            None => Ok(self.config.read_encoding()?),
        }
    }

    pub fn save_options(&self) -> Result<SaveOptions> {
        Ok(self.config.save_options()?)
    }
}
