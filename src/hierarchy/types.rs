//! Node and index types for access level hierarchies.
//!
//! Nodes mirror the tree-widget JSON shape (`{"id", "data": {"name"}, "children"}`)
//! so a snapshot fetched from the backend deserializes without an adapter.

use serde::{Deserialize, Deserializer, Serialize};
use std::{collections::BTreeMap, convert::Infallible, fmt, str::FromStr};

/// Opaque identifier of an access level instance.
///
/// The backend emits integer ids; tree widgets sometimes stringify them. The
/// original form is preserved on output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    Number(i64),
    Text(String),
}

impl fmt::Display for NodeId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Number(id) => write!(formatter, "{id}"),
            NodeId::Text(id) => write!(formatter, "{id}"),
        }
    }
}

impl FromStr for NodeId {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(value
            .trim()
            .parse::<i64>()
            .map_or_else(|_| NodeId::Text(value.to_string()), NodeId::Number))
    }
}

impl From<i64> for NodeId {
    fn from(id: i64) -> Self {
        NodeId::Number(id)
    }
}

impl From<i32> for NodeId {
    fn from(id: i32) -> Self {
        NodeId::Number(i64::from(id))
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        NodeId::Text(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        NodeId::Text(id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeData {
    #[serde(default)]
    pub name: Option<String>,
}

/// A node of the access level tree. Each node owns its subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessLevelNode {
    pub id: NodeId,
    /// Absent and `null` both mean "no name".
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: NodeData,
    /// `None`, `null` and `[]` all mean "no children".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<AccessLevelNode>>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl AccessLevelNode {
    #[must_use]
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: NodeData {
                name: Some(name.into()),
            },
            children: None,
        }
    }

    /// A node without a display name.
    #[must_use]
    pub fn unnamed(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            data: NodeData::default(),
            children: None,
        }
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<AccessLevelNode>) -> Self {
        self.children = Some(children);
        self
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.data.name.as_deref()
    }

    #[must_use]
    pub fn children(&self) -> &[AccessLevelNode] {
        self.children.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthEntry {
    pub id: NodeId,
    pub name: String,
}

/// A depth bucket paired with the access level name of its tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tier {
    pub depth: usize,
    pub level: Option<String>,
    pub entries: Vec<DepthEntry>,
}

/// Depth (root = 1) to the sorted entries found at that depth.
///
/// Serializes as a JSON object keyed by the decimal depth.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepthBucketedIndex {
    buckets: BTreeMap<usize, Vec<DepthEntry>>,
}

impl DepthBucketedIndex {
    pub(crate) fn from_buckets(buckets: BTreeMap<usize, Vec<DepthEntry>>) -> Self {
        Self { buckets }
    }

    #[must_use]
    pub fn get(&self, depth: usize) -> Option<&[DepthEntry]> {
        self.buckets.get(&depth).map(Vec::as_slice)
    }

    pub fn depths(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[DepthEntry])> + '_ {
        self.buckets
            .iter()
            .map(|(depth, entries)| (*depth, entries.as_slice()))
    }

    /// Number of depth buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    #[must_use]
    pub fn total_entries(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn max_depth(&self) -> Option<usize> {
        self.buckets.keys().next_back().copied()
    }

    /// Pairs each bucket with `level_names[depth - 1]`. Depths beyond the
    /// supplied names get `None`.
    #[must_use]
    pub fn labelled<S: AsRef<str>>(&self, level_names: &[S]) -> Vec<Tier> {
        self.iter()
            .map(|(depth, entries)| Tier {
                depth,
                level: level_names
                    .get(depth - 1)
                    .map(|name| name.as_ref().to_string()),
                entries: entries.to_vec(),
            })
            .collect()
    }

    #[must_use]
    pub fn into_inner(self) -> BTreeMap<usize, Vec<DepthEntry>> {
        self.buckets
    }
}
