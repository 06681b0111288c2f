use serde::{Deserialize, Serialize};

/// Document family this engine knows how to read.
pub const DOCUMENT_TYPE: &str = "PERMIS DE CONDUIRE BATEAU";

/// Structured record extracted from one OCR text blob.
///
/// Every field except `document_type` and `raw_text` is optional: extraction
/// is best-effort and absence is the expected outcome for noisy scans.
/// `raw_text` always carries the engine input verbatim, so downstream
/// consumers can re-derive anything the heuristics missed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub document_type: String,
    pub surname: Option<String>,
    pub given_names: Option<String>,
    pub birth_date: Option<String>,
    pub birth_place: Option<String>,
    pub issuance_date: Option<String>,
    pub medical_code: Option<String>,
    pub license_number: Option<String>,
    pub title_number: Option<String>,
    pub raw_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExtractionResult {
    /// Fresh record with only the constants populated.
    pub fn new(raw_text: &str) -> Self {
        ExtractionResult {
            document_type: DOCUMENT_TYPE.to_string(),
            surname: None,
            given_names: None,
            birth_date: None,
            birth_place: None,
            issuance_date: None,
            medical_code: None,
            license_number: None,
            title_number: None,
            raw_text: raw_text.to_string(),
            error: None,
        }
    }
}
