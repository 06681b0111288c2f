pub mod data;

pub use data::{ExtractionResult, DOCUMENT_TYPE};
