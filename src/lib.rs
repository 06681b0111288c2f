pub mod config;
pub mod license_parser;
pub mod models;
pub mod output;
pub mod processing;
pub mod utils;

pub use license_parser::LicenseParser;
