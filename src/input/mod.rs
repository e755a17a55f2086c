//! Input adapters producing validated ply sequences
//!
//! Two sources are supported: JSON documents (used by the HTTP service, the
//! WASM binding and files on disk) and step-by-step terminal prompting.
//! Malformed entries are reported as `InvalidInput`; the prompter asks again
//! instead of failing.

#[cfg(feature = "prompt")]
mod prompt;

#[cfg(feature = "prompt")]
pub use prompt::{validate_finite, validate_ply_count, validate_positive, Prompter};

use serde::Deserialize;
use serde_json::Value;

use crate::elements::{PlyRecord, PlySpec};
use crate::error::{CLTError, CLTResult};
use crate::layup::Layup;

/// Layup document: one ply material plus an angle list
#[derive(Debug, Deserialize)]
struct LayupRecord {
    ply: PlyRecord,
    angles: Vec<f64>,
    #[serde(default)]
    symmetric: bool,
}

fn plies_from_records(records: Vec<PlyRecord>) -> CLTResult<Vec<PlySpec>> {
    records.into_iter().map(PlySpec::try_from).collect()
}

/// Parse a laminate description
///
/// Accepted shapes:
/// - `[{ply}, {ply}, ...]`
/// - `{"plies": [{ply}, ...]}`
/// - `{"ply": {ply}, "angles": [0, 90], "symmetric": true}`
pub fn parse_plies(json: &str) -> CLTResult<Vec<PlySpec>> {
    let value: Value = serde_json::from_str(json)?;
    plies_from_value(value)
}

pub fn plies_from_value(mut value: Value) -> CLTResult<Vec<PlySpec>> {
    if value.is_array() {
        return plies_from_records(serde_json::from_value(value)?);
    }
    if let Some(plies) = value.get_mut("plies") {
        return plies_from_records(serde_json::from_value(plies.take())?);
    }
    if value.get("angles").is_some() {
        let record: LayupRecord = serde_json::from_value(value)?;
        let mut layup = Layup::new(PlySpec::try_from(record.ply)?).with_angles(&record.angles);
        if record.symmetric {
            layup = layup.symmetric();
        }
        return layup.build();
    }
    Err(CLTError::InvalidInput(
        "expected a ply array, a {\"plies\": [...]} object or a layup with \"angles\"".into(),
    ))
}

/// Read a laminate description from a file
pub fn read_plies(path: impl AsRef<std::path::Path>) -> CLTResult<Vec<PlySpec>> {
    let text = std::fs::read_to_string(path)?;
    parse_plies(&text)
}
