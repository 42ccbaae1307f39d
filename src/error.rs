use thiserror::Error;

/// Classifies store errors for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    /// Store root could not be resolved
    Config,
    /// Filesystem failure while walking or reading the store
    Io,
    /// Requested entry does not exist
    NotFound,
    /// Requested entry resolves outside the store root
    InvalidPath,
    /// Search pattern could not be built or evaluated
    Search,
}

/// Password store error types
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Entry not found: {0}")]
    NotFound(String),

    #[error("Invalid item path: {0}")]
    InvalidPath(String),

    #[error("Enumeration error: {0}")]
    EnumerationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Walk error: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("Pattern error: {0}")]
    PatternError(#[from] glob::PatternError),

    #[error("Glob error: {0}")]
    GlobError(#[from] glob::GlobError),
}

impl StoreError {
    /// Coarse classification of this error.
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::ConfigError(_) => StoreErrorKind::Config,
            StoreError::NotFound(_) => StoreErrorKind::NotFound,
            StoreError::InvalidPath(_) => StoreErrorKind::InvalidPath,
            StoreError::EnumerationError(_)
            | StoreError::IoError(_)
            | StoreError::WalkError(_) => StoreErrorKind::Io,
            StoreError::PatternError(_) | StoreError::GlobError(_) => StoreErrorKind::Search,
        }
    }

    /// Whether the error means "no such entry" rather than a disk failure.
    pub fn is_not_found(&self) -> bool {
        self.kind() == StoreErrorKind::NotFound
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
