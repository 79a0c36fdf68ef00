pub mod collate;
pub mod flatten;
pub mod lineage;
pub mod types;

pub use self::collate::{compare_names, CollationKey};
pub use self::flatten::{
    flatten_and_sort, flatten_and_sort_strict, flatten_with, FlattenOptions, MissingNames,
};
pub use self::lineage::lineage;
pub use self::types::{AccessLevelNode, DepthBucketedIndex, DepthEntry, NodeData, NodeId, Tier};

use crate::error::{Error, Result};
use serde::de::Error as _;
use serde_json::Value;
use std::io::Read;

/// Parses a hierarchy snapshot: a JSON array of roots, a single root object,
/// or `null` for an empty forest.
///
/// # Errors
/// Returns [`crate::Error::Json`] if the payload is not a hierarchy. The error
/// names the offending field rather than the shape that failed to match.
pub fn parse_forest(json: &str) -> Result<Vec<AccessLevelNode>> {
    let value: Value = serde_json::from_str(json)?;
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(_) => Ok(serde_json::from_value(value)?),
        Value::Object(_) => Ok(vec![serde_json::from_value(value)?]),
        other => Err(Error::Json(serde_json::Error::custom(format!(
            "expected an array of access levels, an access level or null, found {other}"
        )))),
    }
}

/// Same as [`parse_forest`], reading the snapshot from `reader`.
///
/// # Errors
/// Returns [`crate::Error::Io`] if reading fails or [`crate::Error::Json`] on
/// malformed input.
pub fn read_forest<R: Read>(mut reader: R) -> Result<Vec<AccessLevelNode>> {
    let mut json = String::new();
    reader.read_to_string(&mut json)?;
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    parse_forest(&json)
}
