//! Pitch-class naming tables
//!
//! Two parallel 12-entry tables map a semitone offset above C to a display
//! name, one spelled with sharps and one with flats. Both are built once by
//! interleaving the natural letters with their altered forms and dropping the
//! accidentals that fall on a natural half-step (E#, B#, Fb, Cb).

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::{Result, TheoryError};

/// Number of pitch classes in the chromatic circle
pub const NTONES: i32 = 12;

const NATURALS: [&str; 7] = ["C", "D", "E", "F", "G", "A", "B"];

lazy_static! {
    /// Names of all pitch classes using sharps: C, C#, D, ... B
    pub static ref SHARP_NAMES: Vec<String> = build_table(Spelling::Sharp);

    /// Names of all pitch classes using flats: C, Db, D, ... B
    pub static ref FLAT_NAMES: Vec<String> = build_table(Spelling::Flat);
}

/// Accidental used when rendering a pitch class that has no natural name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spelling {
    #[default]
    Sharp,
    Flat,
}

impl Spelling {
    /// Sharp when `use_sharps` is set, flat otherwise
    pub fn from_sharps(use_sharps: bool) -> Self {
        if use_sharps {
            Spelling::Sharp
        } else {
            Spelling::Flat
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Spelling::Sharp => "#",
            Spelling::Flat => "b",
        }
    }

    fn table(&self) -> &'static [String] {
        match self {
            Spelling::Sharp => SHARP_NAMES.as_slice(),
            Spelling::Flat => FLAT_NAMES.as_slice(),
        }
    }
}

impl fmt::Display for Spelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spelling::Sharp => write!(f, "sharp"),
            Spelling::Flat => write!(f, "flat"),
        }
    }
}

fn build_table(spelling: Spelling) -> Vec<String> {
    let mut names = Vec::with_capacity(NATURALS.len() * 2);
    for natural in NATURALS {
        let altered = format!("{}{}", natural, spelling.symbol());
        match spelling {
            // Sharp follows its natural, flat precedes it
            Spelling::Sharp => {
                names.push(natural.to_string());
                names.push(altered);
            }
            Spelling::Flat => {
                names.push(altered);
                names.push(natural.to_string());
            }
        }
    }

    let duplicates: [&str; 2] = match spelling {
        Spelling::Sharp => ["E#", "B#"],
        Spelling::Flat => ["Fb", "Cb"],
    };
    names.retain(|name| !duplicates.contains(&name.as_str()));
    names
}

/// Reduce any integer to a pitch class in 0..12
pub fn pitch_class(index: i32) -> i32 {
    index.rem_euclid(NTONES)
}

/// Name of the pitch class `index` semitones above C in the given spelling
pub fn name_from_index(index: i32, spelling: Spelling) -> &'static str {
    &spelling.table()[pitch_class(index) as usize]
}

/// Sharp-spelled name of the pitch class `index` semitones above C
pub fn sharp_name(index: i32) -> &'static str {
    name_from_index(index, Spelling::Sharp)
}

/// Flat-spelled name of the pitch class `index` semitones above C
pub fn flat_name(index: i32) -> &'static str {
    name_from_index(index, Spelling::Flat)
}

/// Offset above C of a note name
///
/// Names containing `b` are looked up in the flat table, everything else in
/// the sharp table. Lookup is case-sensitive.
pub fn index_from_name(name: &str) -> Result<i32> {
    let spelling = if name.contains('b') {
        Spelling::Flat
    } else {
        Spelling::Sharp
    };

    spelling
        .table()
        .iter()
        .position(|candidate| candidate == name)
        .map(|index| index as i32)
        .ok_or_else(|| TheoryError::NoteNotFound(name.to_string()))
}
