//! Diatonic scale construction
//!
//! Every seven-note scale here is a rotation of the major step pattern
//! W-W-H-W-W-W-H. Starting from the key, each step is added to the previous
//! note; the seventh step is dropped since it only returns to the octave.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::note::Note;
use crate::models::pitch_class::Spelling;

/// Whole/half-step pattern of the major (Ionian) scale
pub const MAJOR_INTERVALS: [i32; 7] = [2, 2, 1, 2, 2, 2, 1];

/// Rotation of the major step pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,
}

impl Mode {
    pub const ALL: [Mode; 7] = [
        Mode::Ionian,
        Mode::Dorian,
        Mode::Phrygian,
        Mode::Lydian,
        Mode::Mixolydian,
        Mode::Aeolian,
        Mode::Locrian,
    ];

    /// Mode starting `rotation` steps into the major pattern, wrapping every 7
    pub fn from_rotation(rotation: i32) -> Mode {
        Self::ALL[rotation.rem_euclid(7) as usize]
    }

    /// Number of steps the major pattern is shifted left
    pub fn rotation(&self) -> usize {
        *self as usize
    }

    /// Full seven-step pattern for this mode
    pub fn intervals(&self) -> [i32; 7] {
        let mut steps = MAJOR_INTERVALS;
        steps.rotate_left(self.rotation());
        steps
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Ionian => "ionian",
            Mode::Dorian => "dorian",
            Mode::Phrygian => "phrygian",
            Mode::Lydian => "lydian",
            Mode::Mixolydian => "mixolydian",
            Mode::Aeolian => "aeolian",
            Mode::Locrian => "locrian",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which named scale a diatonic scale descends from
///
/// Pentatonic selection depends on this, not on the mode: a major scale
/// rotated to Aeolian still counts as major-derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Major,
    Minor,
}

/// Seven notes starting at `key`, stepping through `mode`'s pattern
///
/// With `raised_seventh` the last note is lifted a semitone (harmonic minor).
pub fn build(key: Note, mode: Mode, raised_seventh: bool) -> Vec<Note> {
    let intervals = mode.intervals();
    let mut notes = Vec::with_capacity(intervals.len());
    notes.push(key.with_spelling(Spelling::default()));

    for step in &intervals[..intervals.len() - 1] {
        let previous = notes[notes.len() - 1];
        notes.push(previous + *step);
    }

    if raised_seventh {
        if let Some(last) = notes.last_mut() {
            *last = *last + 1;
        }
    }

    notes
}
