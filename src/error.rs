//! Validation errors for track entries

use thiserror::Error;

/// Result type alias for track model operations
pub type Result<T> = std::result::Result<T, TrackError>;

/// Reasons a track entry, or a change to one, can be rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackError {
    /// Title is empty after trimming
    #[error("title must not be empty")]
    EmptyTitle,

    /// Artist is empty after trimming
    #[error("artist must not be empty")]
    EmptyArtist,

    /// Duration is zero, negative or too large
    #[error("duration must be a positive number of seconds, got {0}")]
    InvalidDuration(i64),

    /// Rating outside 1..=5
    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(i64),

    /// Tag is empty after trimming
    #[error("tag must not be empty")]
    EmptyTag,

    /// Tag already present (case-insensitive)
    #[error("tag already present: {0}")]
    DuplicateTag(String),

    /// Tag to remove is not present
    #[error("tag not found: {0}")]
    TagNotFound(String),

    /// The id generator has handed out its last id
    #[error("no track ids left")]
    IdsExhausted,
}
