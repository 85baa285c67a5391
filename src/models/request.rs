//! Serializable scale and grid requests
//!
//! These are the shapes a front-end sends in to describe which scale it wants
//! tabulated. Names are resolved and scales built here, so everything past
//! this point works with `Note` and `Scale` values.

use serde::{Deserialize, Serialize};

use super::errors::Result;
use super::note::Note;
use super::scales::{Mode, Scale};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    Major,
    Minor,
    HarmonicMinor,
    Pentatonic,
    Blues,
}

/// Description of a scale by key name and type
///
/// `mode` only applies to `major`. `base` and `levels` only apply to
/// `pentatonic`; the base defaults to `major`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleRequest {
    pub key: String,
    pub scale_type: ScaleType,
    #[serde(default)]
    pub mode: Option<Mode>,
    #[serde(default)]
    pub base: Option<ScaleType>,
    #[serde(default)]
    pub levels: Option<Vec<u8>>,
}

impl ScaleRequest {
    pub fn new(key: impl Into<String>, scale_type: ScaleType) -> Self {
        Self {
            key: key.into(),
            scale_type,
            mode: None,
            base: None,
            levels: None,
        }
    }

    pub fn build(&self) -> Result<Scale> {
        let key = Note::from_name(&self.key)?;
        build_scale(key, self.scale_type, self.mode, self.base, self.levels.clone())
    }
}

fn build_scale(
    key: Note,
    scale_type: ScaleType,
    mode: Option<Mode>,
    base: Option<ScaleType>,
    levels: Option<Vec<u8>>,
) -> Result<Scale> {
    match scale_type {
        ScaleType::Major => Ok(Scale::major(key, mode.unwrap_or_default())),
        ScaleType::Minor => Ok(Scale::minor(key)),
        ScaleType::HarmonicMinor => Ok(Scale::harmonic_minor(key)),
        ScaleType::Blues => Ok(Scale::blues(key)),
        ScaleType::Pentatonic => {
            let base_type = base.unwrap_or(ScaleType::Major);
            let base_scale = build_scale(key, base_type, mode, None, None)?;
            Scale::pentatonic(base_scale, levels)
        }
    }
}

fn default_use_sharps() -> bool {
    true
}

/// A scale plus a grid of semitone indices to tabulate against it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridRequest {
    pub scale: ScaleRequest,
    pub indices: Vec<Vec<i32>>,
    #[serde(default = "default_use_sharps")]
    pub use_sharps: bool,
}
