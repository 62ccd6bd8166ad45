use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No result is stored under this id.
    NotFound { id: String },
    /// Ids must contain at least one non-whitespace character.
    InvalidId,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound { id } => write!(f, "analysis not found: {id}"),
            StoreError::InvalidId => f.write_str("analysis id must not be blank"),
        }
    }
}

impl std::error::Error for StoreError {}
