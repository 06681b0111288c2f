pub mod extractors;
pub mod normalize;
#[cfg(feature = "ocr")]
pub mod ocr;

pub use extractors::FieldExtractor;
pub use normalize::normalize_lines;
#[cfg(feature = "ocr")]
pub use ocr::OcrProcessor;
