//! Error types for note and scale construction
//!
//! Every failure is raised at the point of violation and handed back to the
//! caller. Nothing here is transient, so nothing is retried.

use thiserror::Error;

/// Errors produced by note lookup, scale indexing and scale configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// Name is absent from the sharp or flat naming table
    #[error("Note name not found: '{0}'")]
    NoteNotFound(String),

    /// 1-indexed scale position outside 1..=len
    #[error("Scale degree {index} out of range (scale has {len} notes)")]
    DegreeOutOfRange { index: i64, len: usize },

    /// Degree lookup on a note the scale does not contain
    #[error("Note is not in scale: {0}")]
    NotInScale(String),

    /// Pentatonic base is neither major- nor minor-derived and no levels were given
    #[error("Invalid base type for pentatonic scale: {0}")]
    InvalidPentatonicBase(String),

    /// Explicit pentatonic degree list with the wrong length
    #[error("Pentatonic scale requires exactly 5 levels, got {0}")]
    InvalidLevelCount(usize),

    /// Explicit pentatonic degree that the base scale does not have
    #[error("Pentatonic level {level} out of range (base scale has {len} notes)")]
    LevelOutOfRange { level: u8, len: usize },
}

pub type Result<T> = std::result::Result<T, TheoryError>;
