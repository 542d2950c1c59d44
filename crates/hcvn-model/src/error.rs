//! Error types for record construction.

use thiserror::Error;

use crate::enums::DivisionType;

/// Errors raised while building a record from a field map.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RecordError {
    /// Required fields are missing, a field has the wrong shape, or an
    /// unknown field is present.
    #[error("malformed {division} record: {source}")]
    Malformed {
        division: DivisionType,
        #[source]
        source: serde_json::Error,
    },
}

impl RecordError {
    /// The division level of the record that failed to build.
    pub fn division(&self) -> DivisionType {
        match self {
            Self::Malformed { division, .. } => *division,
        }
    }
}

/// Result type for record construction.
pub type Result<T> = std::result::Result<T, RecordError>;
