//! Blues scale construction
//!
//! Minor pentatonic with a flatted fifth inserted between the fourth and
//! fifth members. The inserted note is always spelled flat (Gb in C, not F#).

use super::Scale;
use crate::models::note::Note;
use crate::models::pitch_class::Spelling;

/// Degree label for each position of a blues scale
pub const BLUES_DEGREES: [&str; 6] = ["1", "3", "4", "5b", "5", "7"];

/// Position (0-indexed) of the flatted fifth
const FLAT_FIFTH_POSITION: usize = 3;

/// Notes of `base`, a minor pentatonic, with the flatted fifth inserted
pub fn build(base: &Scale) -> Vec<Note> {
    let mut notes = base.notes().to_vec();
    let flat_fifth = (notes[FLAT_FIFTH_POSITION] - 1).with_spelling(Spelling::Flat);
    notes.insert(FLAT_FIFTH_POSITION, flat_fifth);
    notes
}
