pub mod error;

pub use error::LicenseError;
