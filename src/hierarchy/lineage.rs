//! Ancestor lookups used to preselect cascading access level dropdowns.

use super::types::{AccessLevelNode, DepthEntry, NodeId};

/// Returns the root-first path of entries leading to the first node (in
/// pre-order) whose id equals `id`, or `None` when no such node exists.
#[must_use]
pub fn lineage(forest: Option<&[AccessLevelNode]>, id: &NodeId) -> Option<Vec<DepthEntry>> {
    let roots = forest.unwrap_or_default();

    // (node, index of its parent in `visited`)
    let mut visited: Vec<(&AccessLevelNode, Option<usize>)> = Vec::new();
    let mut stack: Vec<(&AccessLevelNode, Option<usize>)> =
        roots.iter().rev().map(|node| (node, None)).collect();

    while let Some((node, parent)) = stack.pop() {
        let position = visited.len();
        visited.push((node, parent));

        if node.id == *id {
            let mut path = Vec::new();
            let mut cursor = Some(position);
            while let Some(index) = cursor {
                let (ancestor, parent) = visited[index];
                path.push(DepthEntry {
                    id: ancestor.id.clone(),
                    name: ancestor.name().unwrap_or_default().to_string(),
                });
                cursor = parent;
            }
            path.reverse();
            return Some(path);
        }

        stack.extend(
            node.children()
                .iter()
                .rev()
                .map(|child| (child, Some(position))),
        );
    }

    None
}
