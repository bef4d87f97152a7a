use thiserror::Error;

/// Errors raised while validating a batch or its configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("Invalid age range for {user_id}: min_age {min_age} > max_age {max_age}")]
    InvalidRange {
        user_id: String,
        min_age: u8,
        max_age: u8,
    },

    #[error("Duplicate member identifier: {0}")]
    DuplicateIdentifier(String),

    #[error("Malformed coordinate for {user_id}: ({latitude}, {longitude})")]
    MalformedCoordinate {
        user_id: String,
        latitude: f64,
        longitude: f64,
    },

    #[error("Invalid profile {user_id}: {message}")]
    InvalidProfile { user_id: String, message: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
