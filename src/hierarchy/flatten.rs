//! Depth bucketing of access level forests.

use super::{
    collate::CollationKey,
    types::{AccessLevelNode, DepthBucketedIndex, DepthEntry},
};
use crate::error::{Error, Result};
use std::{collections::BTreeMap, convert::Infallible};
use tracing::{debug, instrument};

/// What to do with a node that has no display name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingNames {
    /// Use `""`, which sorts before every other name.
    #[default]
    Empty,
    Reject,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FlattenOptions {
    pub missing_names: MissingNames,
}

impl FlattenOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_missing_names(mut self, missing_names: MissingNames) -> Self {
        self.missing_names = missing_names;
        self
    }
}

/// Groups every node of `forest` by depth (roots are depth `1`) and sorts each
/// bucket by name. Absent or empty input yields an empty index; this never fails.
#[must_use]
pub fn flatten_and_sort(forest: Option<&[AccessLevelNode]>) -> DepthBucketedIndex {
    match bucket(forest, name_or_empty) {
        Ok(index) => index,
        Err(never) => match never {},
    }
}

/// Like [`flatten_and_sort`] but rejects the first unnamed node in pre-order.
///
/// # Errors
/// Returns [`Error::MissingName`] when a node has no name.
pub fn flatten_and_sort_strict(forest: Option<&[AccessLevelNode]>) -> Result<DepthBucketedIndex> {
    bucket(forest, name_or_reject)
}

/// Flattens with the missing-name policy chosen by `options`.
///
/// # Errors
/// Returns [`Error::MissingName`] only when `options` rejects unnamed nodes.
pub fn flatten_with(
    forest: Option<&[AccessLevelNode]>,
    options: FlattenOptions,
) -> Result<DepthBucketedIndex> {
    match options.missing_names {
        MissingNames::Empty => Ok(flatten_and_sort(forest)),
        MissingNames::Reject => flatten_and_sort_strict(forest),
    }
}

fn name_or_empty(node: &AccessLevelNode, depth: usize) -> Result<String, Infallible> {
    Ok(node.name().map_or_else(
        || {
            debug!(id = %node.id, depth, "access level has no name, sorting as empty");
            String::new()
        },
        ToString::to_string,
    ))
}

fn name_or_reject(node: &AccessLevelNode, depth: usize) -> Result<String> {
    node.name()
        .map(ToString::to_string)
        .ok_or_else(|| Error::MissingName {
            id: node.id.clone(),
            depth,
        })
}

/// Pre-order walk with an explicit stack, then a stable sort per bucket.
#[instrument(level = "debug", skip_all, fields(roots = forest.map_or(0, |roots| roots.len())))]
fn bucket<E, F>(
    forest: Option<&[AccessLevelNode]>,
    mut name_of: F,
) -> Result<DepthBucketedIndex, E>
where
    F: FnMut(&AccessLevelNode, usize) -> Result<String, E>,
{
    let roots = forest.unwrap_or_default();
    let mut buckets: BTreeMap<usize, Vec<DepthEntry>> = BTreeMap::new();

    // Children are pushed in reverse so siblings pop in their original order.
    let mut stack: Vec<(&AccessLevelNode, usize)> =
        roots.iter().rev().map(|node| (node, 1)).collect();

    while let Some((node, depth)) = stack.pop() {
        let name = name_of(node, depth)?;

        buckets.entry(depth).or_default().push(DepthEntry {
            id: node.id.clone(),
            name,
        });

        stack.extend(
            node.children()
                .iter()
                .rev()
                .map(|child| (child, depth + 1)),
        );
    }

    for entries in buckets.values_mut() {
        // sort_by_cached_key is stable
        entries.sort_by_cached_key(|entry| CollationKey::new(&entry.name));
    }

    debug!(
        depths = buckets.len(),
        entries = buckets.values().map(Vec::len).sum::<usize>(),
        "flattened access level hierarchy"
    );

    Ok(DepthBucketedIndex::from_buckets(buckets))
}
