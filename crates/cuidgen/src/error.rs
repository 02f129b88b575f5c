use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by generator initialization and ID generation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("secure random source failed: {0}")]
    RandomSource(String),
    #[error("the big length preset and an explicit length must not be used together")]
    ConfigurationConflict,
    #[error("invalid id length {length}; expected 1..={max_length}")]
    InvalidLength { length: usize, max_length: usize },
    #[error("could not resolve host name: {0}")]
    Hostname(String),
    #[error("generator state lock is poisoned")]
    StatePoisoned,
}

impl From<rand::Error> for Error {
    fn from(value: rand::Error) -> Self {
        Self::RandomSource(value.to_string())
    }
}
