use crate::hierarchy::NodeId;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("access level {id} at depth {depth} has no name")]
    MissingName { id: NodeId, depth: usize },
    #[error("invalid hierarchy json")]
    Json(#[from] serde_json::Error),
    #[error("failed to read hierarchy")]
    Io(#[from] std::io::Error),
}
