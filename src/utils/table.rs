//! Helpers for tabulating a scale
//!
//! A table front-end supplies semitone indices (one per cell) and a scale,
//! and reads back a note, a marker or a degree label for each cell. Every
//! helper here is pure; cells outside the scale come back as `None`.

use serde::Serialize;

use crate::models::errors::Result;
use crate::models::note::Note;
use crate::models::pitch_class::{name_from_index, pitch_class, Spelling};
use crate::models::request::GridRequest;
use crate::models::scales::Scale;

/// Marker for the scale's root
pub const ROOT_MARKER: &str = "XX";

/// Marker for any other member of the scale
pub const MEMBER_MARKER: &str = "X";

/// `value` as a note if its pitch class is in `scale`
pub fn note_for_scale(value: i32, scale: &Scale) -> Option<Note> {
    let note = Note::new(value);
    scale.contains(note).then_some(note)
}

/// Display name of a single semitone index
pub fn name_for(index: i32, use_sharps: bool) -> &'static str {
    name_from_index(index, Spelling::from_sharps(use_sharps))
}

/// Display names of a run of semitone indices
pub fn names_for(values: &[i32], use_sharps: bool) -> Vec<&'static str> {
    values.iter().map(|&v| name_for(v, use_sharps)).collect()
}

/// "XX" on the root, "X" on other members, `None` elsewhere
pub fn marker_for(value: i32, scale: &Scale) -> Option<&'static str> {
    let value = pitch_class(value);
    if scale.root() == value {
        Some(ROOT_MARKER)
    } else if scale.contains(value) {
        Some(MEMBER_MARKER)
    } else {
        None
    }
}

/// Degree label of `note` in `scale`, `None` when it is not a member
pub fn degree_label_for(note: impl Into<Note>, scale: &Scale) -> Option<String> {
    scale.degree_label(note).ok()
}

/// One tabulated cell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridCell {
    pub index: i32,
    pub name: &'static str,
    pub marker: Option<&'static str>,
    pub degree: Option<String>,
}

/// A scale tabulated over a grid of semitone indices
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    pub scale: String,
    pub name: String,
    pub labels: Vec<String>,
    pub rows: Vec<Vec<GridCell>>,
}

/// Build the scale a request describes and tabulate its indices
pub fn scale_grid(request: &GridRequest) -> Result<Grid> {
    let scale = request.scale.build()?;
    let rows = request
        .indices
        .iter()
        .map(|row| {
            row.iter()
                .map(|&index| GridCell {
                    index,
                    name: name_for(index, request.use_sharps),
                    marker: marker_for(index, &scale),
                    degree: degree_label_for(index, &scale),
                })
                .collect()
        })
        .collect();

    Ok(Grid {
        scale: scale.to_string(),
        name: format!("{} {}", request.scale.key, scale.kind().name()),
        labels: scale.labels(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::request::{ScaleRequest, ScaleType};
    use crate::models::scales::Mode;

    fn c_major() -> Scale {
        Scale::major(Note::new(0), Mode::Ionian)
    }

    #[test]
    fn test_note_for_scale() {
        let scale = c_major();
        assert_eq!(note_for_scale(4, &scale), Some(Note::new(4)));
        assert_eq!(note_for_scale(16, &scale).map(|n| n.tone()), Some(16));
        assert_eq!(note_for_scale(1, &scale), None);
    }

    #[test]
    fn test_names_for() {
        assert_eq!(names_for(&[0, 1, 3, 13], true), vec!["C", "C#", "D#", "C#"]);
        assert_eq!(names_for(&[0, 1, 3, -2], false), vec!["C", "Db", "Eb", "Bb"]);
        assert!(names_for(&[], true).is_empty());
    }

    #[test]
    fn test_marker_for() {
        let scale = c_major();
        assert_eq!(marker_for(0, &scale), Some(ROOT_MARKER));
        assert_eq!(marker_for(24, &scale), Some(ROOT_MARKER));
        assert_eq!(marker_for(7, &scale), Some(MEMBER_MARKER));
        assert_eq!(marker_for(-1, &scale), Some(MEMBER_MARKER));
        assert_eq!(marker_for(6, &scale), None);
    }

    #[test]
    fn test_degree_label_for() {
        let scale = Scale::blues(Note::new(0));
        assert_eq!(degree_label_for(6, &scale), Some("5b".to_string()));
        assert_eq!(degree_label_for(Note::new(10), &scale), Some("7".to_string()));
        assert_eq!(degree_label_for(2, &scale), None);
    }

    #[test]
    fn test_scale_grid() {
        let mut scale = ScaleRequest::new("A", ScaleType::Pentatonic);
        scale.base = Some(ScaleType::Minor);
        let request = GridRequest {
            scale,
            indices: vec![vec![9, 10, 11], vec![12, 14]],
            use_sharps: false,
        };

        let grid = scale_grid(&request).unwrap();
        assert_eq!(grid.name, "A minor pentatonic");
        assert_eq!(grid.scale, "[A, C, D, E, G]");
        assert_eq!(grid.rows.len(), 2);

        let root = &grid.rows[0][0];
        assert_eq!(root.marker, Some(ROOT_MARKER));
        assert_eq!(root.degree.as_deref(), Some("1"));

        let outside = &grid.rows[0][1];
        assert_eq!(outside.name, "Bb");
        assert_eq!(outside.marker, None);
        assert_eq!(outside.degree, None);

        let third = &grid.rows[1][0];
        assert_eq!(third.name, "C");
        assert_eq!(third.degree.as_deref(), Some("3"));
    }

    #[test]
    fn test_scale_grid_bad_key() {
        let request = GridRequest {
            scale: ScaleRequest::new("X", ScaleType::Major),
            indices: vec![vec![0]],
            use_sharps: true,
        };
        assert!(scale_grid(&request).is_err());
    }
}
