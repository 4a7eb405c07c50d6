use std::fmt;

/// Landmark persistence failures
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    IoError { message: String },
    SerializationError { message: String },
    InvalidLandmark { name: String, reason: String },
    EmptyName,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::IoError { message } => {
                write!(f, "I/O error: {}", message)
            }
            StorageError::SerializationError { message } => {
                write!(f, "Serialization error: {}", message)
            }
            StorageError::InvalidLandmark { name, reason } => {
                write!(f, "Invalid landmark '{}': {}", name, reason)
            }
            StorageError::EmptyName => {
                write!(f, "Landmark name must not be empty")
            }
        }
    }
}

impl std::error::Error for StorageError {}
