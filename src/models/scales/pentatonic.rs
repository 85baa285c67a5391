//! Pentatonic selection
//!
//! A pentatonic scale does no semitone arithmetic of its own. It picks five
//! degrees out of an already built base scale and labels each note with the
//! base degree it came from, so C major pentatonic reads 1 2 3 5 6.

use super::diatonic::Family;
use super::{Scale, ScaleKind};
use crate::models::errors::{Result, TheoryError};
use crate::models::note::Note;

/// Degrees taken from a major-derived base
pub const MAJOR_LEVELS: [u8; 5] = [1, 2, 3, 5, 6];

/// Degrees taken from a minor-derived base
pub const MINOR_LEVELS: [u8; 5] = [1, 3, 4, 5, 7];

/// Degrees to select from `base`
///
/// Explicit levels must have exactly five entries, each a valid degree of
/// the base. Without them the base has to be a diatonic scale.
pub fn resolve_levels(base: &Scale, levels: Option<Vec<u8>>) -> Result<Vec<u8>> {
    if let Some(levels) = levels {
        if levels.len() != MAJOR_LEVELS.len() {
            return Err(TheoryError::InvalidLevelCount(levels.len()));
        }
        if let Some(&level) = levels
            .iter()
            .find(|&&level| level == 0 || usize::from(level) > base.len())
        {
            return Err(TheoryError::LevelOutOfRange {
                level,
                len: base.len(),
            });
        }
        return Ok(levels);
    }

    match base.kind() {
        ScaleKind::Diatonic {
            family: Family::Minor,
            ..
        } => Ok(MINOR_LEVELS.to_vec()),
        ScaleKind::Diatonic {
            family: Family::Major,
            ..
        } => Ok(MAJOR_LEVELS.to_vec()),
        other => Err(TheoryError::InvalidPentatonicBase(other.name())),
    }
}

/// Notes of `base` at each 1-indexed level
///
/// `levels` must already lie in `1..=base.len()`, as `resolve_levels`
/// guarantees.
pub fn select(base: &Scale, levels: &[u8]) -> Vec<Note> {
    levels
        .iter()
        .map(|&level| base.notes()[usize::from(level) - 1])
        .collect()
}
