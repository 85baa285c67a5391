//! Scales built from a key
//!
//! A `Scale` is an ordered run of notes plus the rule that turns a position
//! into a user-facing degree label. Every variant is populated once, at
//! construction, and never changes afterwards.
//!
//! - `Diatonic`: seven notes from a rotation of the major pattern, optionally
//!   with the seventh raised (harmonic minor). Labels are positions.
//! - `Pentatonic`: five degrees of a base scale, labelled by base degree.
//! - `Blues`: minor pentatonic plus a flatted fifth, fixed labels.

use serde::Serialize;
use std::fmt;

use super::errors::{Result, TheoryError};
use super::note::Note;

pub mod blues;
pub mod diatonic;
pub mod pentatonic;

pub use blues::BLUES_DEGREES;
pub use diatonic::{Family, Mode, MAJOR_INTERVALS};
pub use pentatonic::{MAJOR_LEVELS, MINOR_LEVELS};

/// Construction parameters of a scale
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScaleKind {
    Diatonic {
        family: Family,
        mode: Mode,
        raised_seventh: bool,
    },
    Pentatonic {
        base: Box<Scale>,
        levels: Vec<u8>,
    },
    Blues {
        base: Box<Scale>,
    },
}

impl ScaleKind {
    /// Human-readable name, e.g. "major", "minor pentatonic", "major (dorian)"
    pub fn name(&self) -> String {
        match self {
            ScaleKind::Diatonic {
                family,
                mode,
                raised_seventh,
            } => match (family, mode, raised_seventh) {
                (Family::Major, Mode::Ionian, _) => "major".to_string(),
                (Family::Major, mode, _) => format!("major ({})", mode),
                (Family::Minor, _, true) => "harmonic minor".to_string(),
                (Family::Minor, _, false) => "minor".to_string(),
            },
            ScaleKind::Pentatonic { base, .. } => format!("{} pentatonic", base.kind().name()),
            ScaleKind::Blues { .. } => "blues".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scale {
    key: Note,
    kind: ScaleKind,
    notes: Vec<Note>,
}

impl Scale {
    fn populated(key: Note, kind: ScaleKind, notes: Vec<Note>) -> Self {
        let scale = Self { key, kind, notes };
        log::debug!("Built {} scale on {}: {}", scale.kind.name(), scale.key, scale);
        scale
    }

    /// Major scale on `key`, rotated to `mode`
    pub fn major(key: Note, mode: Mode) -> Self {
        let notes = diatonic::build(key, mode, false);
        Self::populated(
            key,
            ScaleKind::Diatonic {
                family: Family::Major,
                mode,
                raised_seventh: false,
            },
            notes,
        )
    }

    /// Natural minor: the major pattern rotated to Aeolian
    pub fn minor(key: Note) -> Self {
        let notes = diatonic::build(key, Mode::Aeolian, false);
        Self::populated(
            key,
            ScaleKind::Diatonic {
                family: Family::Minor,
                mode: Mode::Aeolian,
                raised_seventh: false,
            },
            notes,
        )
    }

    /// Natural minor with the seventh raised a semitone
    pub fn harmonic_minor(key: Note) -> Self {
        let notes = diatonic::build(key, Mode::Aeolian, true);
        Self::populated(
            key,
            ScaleKind::Diatonic {
                family: Family::Minor,
                mode: Mode::Aeolian,
                raised_seventh: true,
            },
            notes,
        )
    }

    /// Five degrees of `base`
    ///
    /// Without explicit `levels`, major-derived bases give 1 2 3 5 6 and
    /// minor-derived bases give 1 3 4 5 7; any other base is rejected.
    pub fn pentatonic(base: Scale, levels: Option<Vec<u8>>) -> Result<Self> {
        let levels = pentatonic::resolve_levels(&base, levels)?;
        let notes = pentatonic::select(&base, &levels);
        let key = base.key;
        Ok(Self::populated(
            key,
            ScaleKind::Pentatonic {
                base: Box::new(base),
                levels,
            },
            notes,
        ))
    }

    /// Minor pentatonic on `key`, the same as `pentatonic(minor(key), None)`
    pub fn minor_pentatonic(key: Note) -> Self {
        let base = Self::minor(key);
        let notes = pentatonic::select(&base, &MINOR_LEVELS);
        Self::populated(
            key,
            ScaleKind::Pentatonic {
                base: Box::new(base),
                levels: MINOR_LEVELS.to_vec(),
            },
            notes,
        )
    }

    /// Minor pentatonic on `key` with a flatted fifth
    pub fn blues(key: Note) -> Self {
        let base = Self::minor_pentatonic(key);
        let notes = blues::build(&base);
        Self::populated(
            key,
            ScaleKind::Blues {
                base: Box::new(base),
            },
            notes,
        )
    }

    /// Key the scale was constructed from
    pub fn key(&self) -> Note {
        self.key
    }

    /// First note of the scale, equal in pitch class to the key
    pub fn root(&self) -> Note {
        self.notes[0]
    }

    pub fn kind(&self) -> &ScaleKind {
        &self.kind
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    /// Note at 1-indexed `index`
    pub fn get(&self, index: i64) -> Result<&Note> {
        if index < 1 || index > self.notes.len() as i64 {
            return Err(TheoryError::DegreeOutOfRange {
                index,
                len: self.notes.len(),
            });
        }
        Ok(&self.notes[(index - 1) as usize])
    }

    /// Same as `get`
    pub fn level(&self, index: i64) -> Result<&Note> {
        self.get(index)
    }

    /// Whether any note of the scale shares a pitch class with `note`
    pub fn contains(&self, note: impl Into<Note>) -> bool {
        self.position(note).is_some()
    }

    /// 0-indexed position of the first note sharing a pitch class with `note`
    pub fn position(&self, note: impl Into<Note>) -> Option<usize> {
        let note = note.into();
        self.notes.iter().position(|n| *n == note)
    }

    /// Degree label of `note`
    pub fn degree_label(&self, note: impl Into<Note>) -> Result<String> {
        let note = note.into();
        self.position(note)
            .map(|position| self.label_at(position))
            .ok_or_else(|| TheoryError::NotInScale(note.to_string()))
    }

    /// Degree labels of every position, in order
    pub fn labels(&self) -> Vec<String> {
        (0..self.notes.len()).map(|p| self.label_at(p)).collect()
    }

    fn label_at(&self, position: usize) -> String {
        match &self.kind {
            ScaleKind::Diatonic { .. } => (position + 1).to_string(),
            ScaleKind::Pentatonic { levels, .. } => levels[position].to_string(),
            ScaleKind::Blues { .. } => BLUES_DEGREES[position].to_string(),
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.notes.iter().map(|n| n.name()).collect();
        write!(f, "[{}]", names.join(", "))
    }
}

impl<'a> IntoIterator for &'a Scale {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}
