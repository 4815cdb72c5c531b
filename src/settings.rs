//! Layered run settings: defaults, then an optional `regulation_extractor.toml`,
//! then `REGX_*` environment variables. CLI flags are applied on top by the
//! binary.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::info;

use crate::error::{Error, Result};
use crate::output::OutputFormat;

pub const DEFAULT_INPUT: &str = "regulations.txt";
pub const DEFAULT_OUTPUT: &str = "extracted_requirements.json";
const CONFIG_FILE: &str = "regulation_extractor";
const ENV_PREFIX: &str = "REGX";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub input_filename: PathBuf,
    pub output_filename: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            input_filename: PathBuf::from(DEFAULT_INPUT),
            output_filename: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// `file` is passed to `config::File::with_name`, so the extension is
    /// optional and the file may be missing.
    pub fn load_from(file: &Path) -> Result<Self> {
        let settings: Settings = Config::builder()
            .set_default("input_filename", DEFAULT_INPUT)?
            .set_default("output_filename", DEFAULT_OUTPUT)?
            .add_source(File::with_name(&file.to_string_lossy()).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn with_overrides(mut self, input: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        if let Some(input) = input {
            self.input_filename = input;
        }
        if let Some(output) = output {
            self.output_filename = output;
        }
        self
    }

    /// Input must exist and the output must be a format we can write.
    pub fn validate(&self) -> Result<OutputFormat> {
        if !self.input_filename.exists() {
            return Err(Error::InputNotFound(self.input_filename.clone()));
        }
        let format = OutputFormat::from_path(&self.output_filename)?;
        info!("Input parameters checked");
        Ok(format)
    }
}
