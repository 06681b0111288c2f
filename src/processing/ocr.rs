use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tesseract::Tesseract;

use crate::utils::LicenseError;

/// Text-acquisition collaborator: runs Tesseract over a scanned license.
///
/// The document is French, so the `fra` language data is hard-wired. This
/// module is deliberately thin; everything downstream works on the returned
/// text alone.
pub struct OcrProcessor;

impl OcrProcessor {
    /// Recognize text from an image file on disk.
    pub fn recognize_file<P: AsRef<Path>>(image_path: P) -> Result<String, LicenseError> {
        let image_data = std::fs::read(&image_path).map_err(|e| {
            LicenseError::Ocr(format!(
                "Failed to read image file {}: {}",
                image_path.as_ref().display(),
                e
            ))
        })?;
        Self::recognize(&image_data)
    }

    /// Recognize text from in-memory image bytes.
    pub fn recognize(image_data: &[u8]) -> Result<String, LicenseError> {
        log::debug!("Running OCR on {} bytes of image data", image_data.len());

        // Tesseract wants a file path, so stage the bytes in a temp file.
        let mut temp_file = NamedTempFile::new()
            .map_err(|e| LicenseError::Ocr(format!("Failed to create temp file: {}", e)))?;

        temp_file
            .write_all(image_data)
            .map_err(|e| LicenseError::Ocr(format!("Failed to write to temp file: {}", e)))?;

        let image_path_str = temp_file
            .path()
            .to_str()
            .ok_or_else(|| LicenseError::Ocr("Failed to convert path to string".to_string()))?;

        let text = Tesseract::new(None, Some("fra"))
            .map_err(|e| LicenseError::Ocr(format!("Tesseract init error: {}", e)))?
            .set_image(image_path_str)
            .map_err(|e| LicenseError::Ocr(format!("Tesseract set image error: {}", e)))?
            .get_text()
            .map_err(|e| LicenseError::Ocr(format!("Tesseract error: {}", e)))?;

        log::info!("OCR produced {} characters of text", text.len());
        Ok(text)
    }
}
