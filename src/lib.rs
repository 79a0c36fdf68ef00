//! # Access Levels (hierarchy flattening)
//!
//! Organizations scope data visibility through a tree of **access level
//! instances**: an organization owns regions, regions own sites, and so on.
//! Selection UIs present that tree as one dropdown per tier ("pick a Region",
//! then "pick a Site"), which needs the tree reshaped into depth buckets.
//!
//! ## Depth Buckets
//!
//! [`flatten_and_sort`] walks a forest of [`AccessLevelNode`]s in pre-order and
//! groups every node by its depth (roots are depth `1`). Each bucket is then
//! sorted by display name using a natural collation:
//!
//! - **Numeric-aware:** `"Site 2"` sorts before `"Site 10"`.
//! - **Base sensitivity:** case and accents are ignored (`"site" == "Site"`,
//!   `"Cafe" == "Café"`), ties keep traversal order.
//!
//! Empty or absent input always yields an empty index; the lenient variant never
//! fails. [`flatten_and_sort_strict`] rejects nodes that have no name.
//!
//! ## Queries
//!
//! [`lineage`] returns the root-first path to a node so cascading dropdowns can
//! be preselected, and [`DepthBucketedIndex::labelled`] pairs every tier with
//! its access level name.

pub mod cli;
pub mod error;
pub mod hierarchy;

pub use error::{Error, Result};
pub use hierarchy::{
    compare_names, flatten_and_sort, flatten_and_sort_strict, flatten_with, lineage,
    parse_forest, read_forest, AccessLevelNode, CollationKey, DepthBucketedIndex, DepthEntry,
    FlattenOptions, MissingNames, NodeData, NodeId, Tier,
};

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
