/// Common constants used across the schema organizer.
///
/// These defaults are used for configuration when explicit values
/// are not provided.
pub const PATH_SEPARATOR: char = '/';
pub const DEFAULT_CONTAINER_TYPE: &str = "object";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Prefix for environment variable overrides of `OrganizerConfig`.
pub const ENV_PREFIX: &str = "ORGANIZER";
