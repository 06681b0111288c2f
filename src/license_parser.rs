use std::panic::{self, AssertUnwindSafe};

use crate::models::ExtractionResult;
use crate::processing::{normalize_lines, FieldExtractor};

/// Orchestrates the extraction stages into one record.
///
/// Parsing is a pure function of the input text: no state is kept between
/// invocations and the same text always yields the same record. Stages are
/// independent; one stage missing its field never stops the others.
pub struct LicenseParser;

impl LicenseParser {
    pub fn new() -> Self {
        LicenseParser
    }

    /// Extract all fields from raw OCR text, best-effort.
    ///
    /// This never fails: an unexpected fault in any stage is caught at this
    /// boundary, its message is stored in the record's `error` field, and
    /// whatever fields were set before the fault stay in the returned
    /// record.
    pub fn parse(&self, text: &str) -> ExtractionResult {
        let mut result = ExtractionResult::new(text);

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            Self::extract_fields(&mut result, text);
        }));

        if let Err(fault) = outcome {
            let message = if let Some(msg) = fault.downcast_ref::<&str>() {
                (*msg).to_string()
            } else if let Some(msg) = fault.downcast_ref::<String>() {
                msg.clone()
            } else {
                "unknown extraction fault".to_string()
            };
            log::error!("Extraction fault: {}", message);
            result.error = Some(message);
        }

        result
    }

    fn extract_fields(result: &mut ExtractionResult, text: &str) {
        let lines = normalize_lines(text);

        result.surname = FieldExtractor::extract_surname(&lines);
        result.given_names = FieldExtractor::extract_given_names(&lines);

        result.birth_date = FieldExtractor::extract_birth_date(text);
        // Birth place is co-located with the birth date, so it can only be
        // looked for once the date is known.
        if let Some(birth_date) = result.birth_date.clone() {
            result.birth_place = FieldExtractor::extract_birth_place(&lines, &birth_date);
        }

        if let Some((date, code)) = FieldExtractor::extract_issuance_and_medical(&lines) {
            result.issuance_date = Some(date);
            result.medical_code = Some(code);
        }

        if let Some((license, title)) = FieldExtractor::extract_license_numbers(&lines) {
            result.license_number = Some(license);
            result.title_number = Some(title);
        }

        log::debug!(
            "Extracted fields: surname={:?} given_names={:?} birth_date={:?} birth_place={:?} issuance_date={:?} medical_code={:?} license_number={:?} title_number={:?}",
            result.surname,
            result.given_names,
            result.birth_date,
            result.birth_place,
            result.issuance_date,
            result.medical_code,
            result.license_number,
            result.title_number,
        );
    }
}

impl Default for LicenseParser {
    fn default() -> Self {
        Self::new()
    }
}
