use crate::topology::error::{TopologyError, TopologyResult};
use crate::topology::types::{ControllerNode, ControllerRole, NodeId};

/// Node indices grouped by role, each group in input order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Classified {
    pub caches: Vec<NodeId>,
    pub directories: Vec<NodeId>,
    pub dmas: Vec<NodeId>,
}

pub fn classify(nodes: &[ControllerNode]) -> TopologyResult<Classified> {
    let mut classified = Classified::default();
    for (idx, node) in nodes.iter().enumerate() {
        let role: ControllerRole = node.kind.parse().map_err(|_| TopologyError::UnknownRole {
            kind: node.kind.clone(),
            version: node.version,
        })?;
        match role {
            ControllerRole::Cache => classified.caches.push(idx),
            ControllerRole::Directory => classified.directories.push(idx),
            ControllerRole::Dma => classified.dmas.push(idx),
        }
    }
    Ok(classified)
}
