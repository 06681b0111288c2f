use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{json, Value};

use crate::models::ExtractionResult;
use crate::utils::LicenseError;

const RAW_TEXT_FILE: &str = "result.txt";
const PARSED_DATA_FILE: &str = "parsed_data.json";
const MANIFEST_FILE: &str = "computed.json";

/// Persistence collaborator: writes the raw text, the parsed record and the
/// manifest pointing at both into one output directory.
///
/// The manifest is written in every pipeline outcome; on total failure it
/// carries an error message instead of structured outputs, so consumers
/// always find a `computed.json`.
pub struct ResultWriter {
    output_dir: PathBuf,
}

impl ResultWriter {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        ResultWriter {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Write `result.txt` and `parsed_data.json`, returning the success
    /// manifest that points at both.
    pub fn persist(&self, result: &ExtractionResult) -> Result<Value, LicenseError> {
        fs::create_dir_all(&self.output_dir)?;

        let text_path = self.output_dir.join(RAW_TEXT_FILE);
        fs::write(&text_path, &result.raw_text)?;

        let parsed_path = self.output_dir.join(PARSED_DATA_FILE);
        fs::write(&parsed_path, serde_json::to_string_pretty(result)?)?;

        log::info!(
            "Wrote extraction outputs to {} and {}",
            text_path.display(),
            parsed_path.display()
        );

        Ok(json!({
            "deterministic-output-path": text_path.display().to_string(),
            "parsed-data-path": parsed_path.display().to_string(),
            "extracted-data": result,
        }))
    }

    /// Manifest for a pipeline that failed before producing outputs.
    pub fn error_manifest(&self, message: &str) -> Value {
        json!({
            "deterministic-output-path": self.output_dir.display().to_string(),
            "error-message": message,
        })
    }

    /// Write `computed.json`. Called last, whatever happened before.
    pub fn write_manifest(&self, manifest: &Value) -> Result<(), LicenseError> {
        fs::create_dir_all(&self.output_dir)?;
        let manifest_path = self.output_dir.join(MANIFEST_FILE);
        fs::write(&manifest_path, serde_json::to_string(manifest)?)?;
        log::info!("Wrote manifest to {}", manifest_path.display());
        Ok(())
    }
}
