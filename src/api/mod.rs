//! Scales WASM API
//!
//! JavaScript-facing surface for table front-ends. Requests arrive as plain
//! objects, are deserialized into `ScaleRequest`/`GridRequest`, and results
//! go back out through serde.
//!
//! # Module Structure
//!
//! - `helpers`: console logging, serde conversion, error conversion
//! - `scales`: scale construction and grid tabulation

pub mod helpers;
pub mod scales;

pub use scales::{build_scale, note_names, scale_grid_js};
