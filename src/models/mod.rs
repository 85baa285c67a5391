//! Models module for the scales library
//!
//! This module contains the pitch-class naming tables, the `Note` value type,
//! the scale variants and the request types used to describe them.

pub mod errors;
pub mod pitch_class;
pub mod note;
pub mod scales;
pub mod request;

// Re-export commonly used types
pub use errors::TheoryError;
pub use pitch_class::{flat_name, index_from_name, name_from_index, sharp_name, Spelling, NTONES};
pub use note::{render, Note};
pub use scales::{Family, Mode, Scale, ScaleKind};
pub use request::{GridRequest, ScaleRequest, ScaleType};
