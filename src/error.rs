//! Error types for schema organization

use thiserror::Error;

/// Errors that can occur while flattening, rebuilding or editing table schemas
#[derive(Error, Debug)]
pub enum OrganizerError {
    /// A sub-table path does not start with the enclosing table's name
    #[error("Table name mismatch at '{path}': expected '{expected}', found '{found}'")]
    TableNameMismatch {
        expected: String,
        found: String,
        path: String,
    },

    /// Two sub-tables declare the same path
    #[error("Duplicate sub-table path: {0}")]
    DuplicatePath(String),

    /// A sub-table was declared without one of its ancestor levels
    #[error("Sub-table '{path}' has no declared ancestor level '{ancestor}'")]
    MissingAncestor { path: String, ancestor: String },

    /// Malformed path string
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// A table or column name that cannot be used as a path segment
    #[error("Invalid path segment: {0}")]
    InvalidSegment(String),

    /// Lookup of a sub-table or column failed
    #[error("Not found: {0}")]
    NotFound(String),

    /// Outbound schema failed the backend's structural requirements
    #[error("Schema validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON parsing errors
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl OrganizerError {
    /// Create a new table name mismatch error
    pub fn table_name_mismatch(
        expected: impl Into<String>,
        found: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self::TableNameMismatch {
            expected: expected.into(),
            found: found.into(),
            path: path.into(),
        }
    }

    /// Create a new duplicate path error
    pub fn duplicate_path(path: impl Into<String>) -> Self {
        Self::DuplicatePath(path.into())
    }

    /// Create a new missing ancestor error
    pub fn missing_ancestor(path: impl Into<String>, ancestor: impl Into<String>) -> Self {
        Self::MissingAncestor {
            path: path.into(),
            ancestor: ancestor.into(),
        }
    }

    /// Create a new invalid path error
    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    /// Create a new invalid segment error
    pub fn invalid_segment(msg: impl Into<String>) -> Self {
        Self::InvalidSegment(msg.into())
    }

    /// Create a new not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new configuration error
    pub fn configuration_error(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Whether the error signals a broken schema rather than an I/O or config issue
    pub fn is_integrity_error(&self) -> bool {
        matches!(
            self,
            Self::TableNameMismatch { .. }
                | Self::DuplicatePath(_)
                | Self::MissingAncestor { .. }
                | Self::InvalidPath(_)
                | Self::InvalidSegment(_)
        )
    }
}

/// Result type for schema organizer operations
pub type Result<T> = std::result::Result<T, OrganizerError>;
