use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, ThisError, PartialEq, Eq, Clone)]
pub enum Error {
    #[error("failed to serialize: {0}")]
    FailedSerialization(String),

    #[error("failed to deserialize: {0}")]
    FailedDeserialization(String),
}

impl From<serde_json::Error> for Error {
    #[cfg_attr(coverage_nightly, coverage(off))]
    fn from(error: serde_json::Error) -> Self {
        Error::FailedSerialization(format!("{}", error))
    }
}

impl From<hex::FromHexError> for Error {
    #[cfg_attr(coverage_nightly, coverage(off))]
    fn from(error: hex::FromHexError) -> Self {
        Error::FailedDeserialization(format!("{}", error))
    }
}
