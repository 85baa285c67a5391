//! Scale operations for the WASM API
//!
//! - `buildScale`: scale request in, notes and degree labels out
//! - `scaleGrid`: scale plus a grid of semitone indices, one cell per index
//! - `noteNames`: semitone indices to sharp or flat names

use wasm_bindgen::prelude::*;
use serde::Serialize;

use crate::api::helpers::{deserialize, serialize, theory_error};
use crate::models::request::{GridRequest, ScaleRequest};
use crate::utils::table::{names_for, scale_grid};
use crate::{wasm_info, wasm_log};

/// One note of a built scale, as handed to JavaScript
#[derive(Serialize)]
struct ScaleNote {
    name: &'static str,
    value: i32,
    degree: String,
}

#[derive(Serialize)]
struct ScaleView {
    name: String,
    notes: Vec<ScaleNote>,
}

/// Build a scale from a `ScaleRequest`
///
/// # Returns
/// `{ name, notes: [{ name, value, degree }] }`
#[wasm_bindgen(js_name = buildScale)]
pub fn build_scale(request: JsValue) -> Result<JsValue, JsValue> {
    let request: ScaleRequest = deserialize(request, "Invalid scale request")?;
    wasm_info!("buildScale called: {} {:?}", request.key, request.scale_type);

    let scale = request
        .build()
        .map_err(|e| theory_error("Scale construction failed", e))?;

    let notes = scale
        .iter()
        .zip(scale.labels())
        .map(|(note, degree)| ScaleNote {
            name: note.name(),
            value: note.value(),
            degree,
        })
        .collect();

    let view = ScaleView {
        name: format!("{} {}", request.key, scale.kind().name()),
        notes,
    };
    wasm_log!("  Scale built: {}", scale);

    serialize(&view, "Failed to serialize scale")
}

/// Tabulate a scale over a grid of semitone indices
///
/// # Returns
/// `{ scale, name, labels, rows: [[{ index, name, marker, degree }]] }`
#[wasm_bindgen(js_name = scaleGrid)]
pub fn scale_grid_js(request: JsValue) -> Result<JsValue, JsValue> {
    let request: GridRequest = deserialize(request, "Invalid grid request")?;
    wasm_info!(
        "scaleGrid called: {} {:?}, {} rows",
        request.scale.key,
        request.scale.scale_type,
        request.indices.len()
    );

    let grid = scale_grid(&request).map_err(|e| theory_error("Grid construction failed", e))?;
    serialize(&grid, "Failed to serialize grid")
}

/// Names of semitone indices, in sharp or flat spelling
#[wasm_bindgen(js_name = noteNames)]
pub fn note_names(indices: Vec<i32>, use_sharps: bool) -> Vec<String> {
    names_for(&indices, use_sharps)
        .into_iter()
        .map(str::to_string)
        .collect()
}
