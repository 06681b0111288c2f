use std::env;
use std::path::PathBuf;

use crate::utils::LicenseError;

pub const INPUT_DIR_VAR: &str = "BARQUE_INPUT_DIR";
pub const OUTPUT_DIR_VAR: &str = "BARQUE_OUTPUT_DIR";
pub const INPUT_FILE_VAR: &str = "BARQUE_INPUT_FILE";

const DEFAULT_INPUT_FILE: &str = "scan.png";

/// Process-wide paths for the pipeline, resolved from the environment.
///
/// This stays entirely outside the extraction engine: the parser itself is
/// constructed from nothing and fed a plain string.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub input_file: String,
}

impl Config {
    pub fn from_env() -> Result<Config, LicenseError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolution against an arbitrary lookup, so tests never touch the
    /// process environment.
    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Config, LicenseError> {
        let input_dir = get(INPUT_DIR_VAR)
            .ok_or_else(|| LicenseError::Config(format!("{} is not set", INPUT_DIR_VAR)))?;
        let output_dir = get(OUTPUT_DIR_VAR)
            .ok_or_else(|| LicenseError::Config(format!("{} is not set", OUTPUT_DIR_VAR)))?;
        let input_file = get(INPUT_FILE_VAR).unwrap_or_else(|| DEFAULT_INPUT_FILE.to_string());

        Ok(Config {
            input_dir: PathBuf::from(input_dir),
            output_dir: PathBuf::from(output_dir),
            input_file,
        })
    }

    /// Full path of the scanned image to process.
    pub fn input_path(&self) -> PathBuf {
        self.input_dir.join(&self.input_file)
    }
}
