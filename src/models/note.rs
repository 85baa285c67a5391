//! Note representation
//!
//! A `Note` is a pitch class plus the raw semitone count it was built from.
//! Equality and hashing only look at the pitch class; subtraction of two
//! notes compares the raw counts so distances spanning an octave survive.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};
use std::str::FromStr;

use super::errors::{Result, TheoryError};
use super::pitch_class::{index_from_name, name_from_index, Spelling, NTONES};

#[derive(Debug, Clone, Copy)]
pub struct Note {
    /// Raw semitone count above C, never negative
    ///
    /// Wider than the `i32` inputs so transposing any constructible note
    /// stays exact; arithmetic saturates at `i64::MAX`.
    tone: i64,

    /// Spelling used by `Display`
    spelling: Spelling,
}

impl Note {
    /// Note `tone` semitones above C
    ///
    /// Negative counts are folded up by whole octaves until non-negative, so
    /// `Note::new(-1)` is B with a raw tone of 11.
    pub fn new(tone: i32) -> Self {
        Self::from_tone(i64::from(tone))
    }

    fn from_tone(mut tone: i64) -> Self {
        if tone < 0 {
            tone = tone.rem_euclid(i64::from(NTONES));
        }
        Self {
            tone,
            spelling: Spelling::default(),
        }
    }

    /// Note from a name in either table ("C", "F#", "Bb")
    pub fn from_name(name: &str) -> Result<Self> {
        index_from_name(name).map(Self::new)
    }

    /// Same note, rendered with an explicit spelling
    pub fn with_spelling(self, spelling: Spelling) -> Self {
        Self { spelling, ..self }
    }

    /// Raw semitone count
    pub fn tone(&self) -> i64 {
        self.tone
    }

    /// Pitch class in 0..12
    pub fn value(&self) -> i32 {
        self.tone.rem_euclid(i64::from(NTONES)) as i32
    }

    pub fn spelling(&self) -> Spelling {
        self.spelling
    }

    /// Name in this note's own spelling
    pub fn name(&self) -> &'static str {
        render(self, self.spelling)
    }
}

/// Name of `note` in the requested spelling, ignoring the note's own tag
pub fn render(note: &Note, spelling: Spelling) -> &'static str {
    name_from_index(note.value(), spelling)
}

impl Default for Note {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Emits the rendered name and pitch class alongside the raw fields
impl Serialize for Note {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Note", 4)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("value", &self.value())?;
        state.serialize_field("tone", &self.tone)?;
        state.serialize_field("spelling", &self.spelling)?;
        state.end()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl Eq for Note {}

impl Hash for Note {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}

impl PartialEq<i32> for Note {
    fn eq(&self, other: &i32) -> bool {
        *self == Note::new(*other)
    }
}

impl PartialEq<Note> for i32 {
    fn eq(&self, other: &Note) -> bool {
        other == self
    }
}

/// Names absent from both tables never compare equal
impl PartialEq<str> for Note {
    fn eq(&self, other: &str) -> bool {
        Note::from_name(other).map_or(false, |note| *self == note)
    }
}

impl PartialEq<&str> for Note {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl From<i32> for Note {
    fn from(tone: i32) -> Self {
        Note::new(tone)
    }
}

impl FromStr for Note {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        Note::from_name(s)
    }
}

impl TryFrom<&str> for Note {
    type Error = TheoryError;

    fn try_from(s: &str) -> Result<Self> {
        Note::from_name(s)
    }
}

impl Add<i32> for Note {
    type Output = Note;

    fn add(self, semitones: i32) -> Note {
        Note::from_tone(self.tone.saturating_add(i64::from(semitones)))
    }
}

impl Sub<i32> for Note {
    type Output = Note;

    fn sub(self, semitones: i32) -> Note {
        Note::from_tone(self.tone.saturating_sub(i64::from(semitones)))
    }
}

/// Raw, unreduced distance in semitones
impl Sub<Note> for Note {
    type Output = i64;

    fn sub(self, lower: Note) -> i64 {
        self.tone - lower.tone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(name: &str) -> Note {
        name.parse().unwrap()
    }

    #[test]
    fn test_new_normalizes_negative() {
        let b = Note::new(-1);
        assert_eq!(b.tone(), 11);
        assert_eq!(b.value(), 11);

        let low = Note::new(-25);
        assert_eq!(low.tone(), 11);

        let lowest = Note::new(i32::MIN);
        assert_eq!(lowest.tone(), 4);
        assert_eq!(lowest.to_string(), "E");
    }

    #[test]
    fn test_transpose_at_i32_bounds() {
        let top = Note::new(i32::MAX);
        assert_eq!(top.value(), 7);

        let above = top + 1;
        assert_eq!(above.tone(), i64::from(i32::MAX) + 1);
        assert_eq!(above.value(), 8);
        assert_eq!(above - top, 1);

        let below = Note::new(0) - i32::MAX;
        assert!(below.tone() >= 0);
        assert_eq!(below.value(), 5);

        let far = (top + i32::MAX) + i32::MAX;
        assert_eq!(far - top, 2 * i64::from(i32::MAX));
    }

    #[test]
    fn test_value_reduces_tone() {
        let n = Note::new(26);
        assert_eq!(n.tone(), 26);
        assert_eq!(n.value(), 2);
        assert_eq!(n.to_string(), "D");
    }

    #[test]
    fn test_from_name() {
        assert_eq!(note("C").value(), 0);
        assert_eq!(note("F#").value(), 6);
        assert_eq!(note("Gb").value(), 6);
        assert_eq!(
            Note::from_name("B#").unwrap_err(),
            TheoryError::NoteNotFound("B#".to_string())
        );
    }

    #[test]
    fn test_equality_ignores_spelling() {
        assert_eq!(note("Eb"), note("D#"));
        assert_eq!(Note::new(0), note("C"));
        assert_eq!(Note::new(12), Note::new(0));
        assert_eq!(note("C"), 0);
        assert_eq!(note("C"), 24);
        assert_eq!(3, note("Eb"));
        assert_ne!(note("C"), note("C#"));
    }

    #[test]
    fn test_equality_with_names() {
        assert_eq!(Note::new(3), "Eb");
        assert_eq!(Note::new(15), "D#");
        assert_ne!(Note::new(0), "B#");
        assert_ne!(Note::new(0), "D");
    }

    #[test]
    fn test_display_uses_own_spelling() {
        let d_sharp = Note::new(3);
        assert_eq!(d_sharp.to_string(), "D#");

        let e_flat = d_sharp.with_spelling(Spelling::Flat);
        assert_eq!(e_flat.to_string(), "Eb");
        assert_eq!(e_flat, d_sharp);

        // Naturals are spelled the same either way
        assert_eq!(Note::new(0).with_spelling(Spelling::Flat).to_string(), "C");
    }

    #[test]
    fn test_render_overrides_spelling() {
        let n = Note::new(10);
        assert_eq!(render(&n, Spelling::Sharp), "A#");
        assert_eq!(render(&n, Spelling::Flat), "Bb");
        assert_eq!(n.spelling(), Spelling::Sharp);
    }

    #[test]
    fn test_add_and_sub_semitones() {
        let c = note("C");
        assert_eq!((c + 7).to_string(), "G");
        assert_eq!((c + 7).tone(), 7);
        assert_eq!((c - 1).to_string(), "B");
        assert_eq!((c - 1).tone(), 11);
        assert_eq!((c + -2).tone(), 10);
    }

    #[test]
    fn test_note_difference_is_unreduced() {
        let c = note("C");
        assert_eq!(c - c, 0);
        assert_eq!((c + 12) - c, 12);
        assert_eq!((c + 14) - (c + 2), 12);
        assert_eq!(c - (c + 3), -3);
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        use std::collections::HashSet;
        let set: HashSet<Note> = [note("Eb"), note("D#"), Note::new(15)].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_serialize() {
        let n = Note::new(13).with_spelling(Spelling::Flat);
        let json = serde_json::to_string(&n).unwrap();
        assert_eq!(
            json,
            "{\"name\":\"Db\",\"value\":1,\"tone\":13,\"spelling\":\"flat\"}"
        );
    }
}
