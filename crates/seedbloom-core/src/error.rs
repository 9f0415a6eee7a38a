//! Error types for Seed Bloom

use thiserror::Error;

/// Main error type for garden operations
#[derive(Error, Debug)]
pub enum GardenError {
    /// Submitted name was blank after trimming
    #[error("Name is empty")]
    EmptyInput,

    /// A name was already accepted for this session
    #[error("A seed has already been planted")]
    AlreadyPlanted,

    /// Garden interaction attempted while still on the entry card
    #[error("The garden has not been revealed yet")]
    GardenDormant,

    /// Petal index outside the catalog
    #[error("Petal index out of range: {0}")]
    PetalOutOfRange(usize),

    /// Configuration file could not be parsed
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using GardenError
pub type GardenResult<T> = Result<T, GardenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GardenError::PetalOutOfRange(7);
        assert_eq!(format!("{}", err), "Petal index out of range: 7");
        assert_eq!(GardenError::EmptyInput.to_string(), "Name is empty");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GardenError = io_err.into();
        assert!(matches!(err, GardenError::Io(_)));
    }
}
