//! Error types for tablescan-extract

use thiserror::Error;

/// Result type for extraction operations
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur while extracting tables
///
/// "No data" is deliberately not an error; see [`crate::TableOutcome::NoData`].
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Requested sheet is not part of the workbook
    #[error("Sheet \"{0}\" not found.")]
    SheetNotFound(String),

    /// Range reference could not be parsed into valid bounds
    #[error("Malformed range reference '{reference}': {reason}")]
    MalformedRange { reference: String, reason: String },

    /// Core error
    #[error("Core error: {0}")]
    Core(tablescan_core::Error),
}

impl ExtractError {
    pub(crate) fn malformed<S: Into<String>>(reference: &str, reason: S) -> Self {
        ExtractError::MalformedRange {
            reference: reference.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<tablescan_core::Error> for ExtractError {
    fn from(err: tablescan_core::Error) -> Self {
        match err {
            tablescan_core::Error::SheetNotFound(name) => ExtractError::SheetNotFound(name),
            other => ExtractError::Core(other),
        }
    }
}
