use crate::sim::config::SystemConfig;
use crate::topology::types::ControllerNode;

/// Controller list for a standalone run: every cache level for every cpu
/// (level-major), then the DMA engines, then the directories.
pub fn synthesize_controllers(system: &SystemConfig) -> Vec<ControllerNode> {
    let mut nodes = Vec::new();
    for level in 0..system.cache_levels {
        let kind = format!("L{}Cache_Controller", level);
        nodes.extend((0..system.num_cpus).map(|cpu| ControllerNode::new(kind.as_str(), cpu)));
    }
    nodes.extend((0..system.num_dma).map(|i| ControllerNode::new("DMA_Controller", i)));
    nodes.extend((0..system.num_dirs).map(|i| ControllerNode::new("Directory_Controller", i)));
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caches_are_level_major() {
        let nodes = synthesize_controllers(&SystemConfig {
            num_cpus: 2,
            num_dirs: 2,
            cache_levels: 2,
            num_dma: 1,
        });
        let kinds: Vec<(&str, usize)> = nodes
            .iter()
            .map(|node| (node.kind.as_str(), node.version))
            .collect();
        assert_eq!(
            kinds,
            vec![
                ("L0Cache_Controller", 0),
                ("L0Cache_Controller", 1),
                ("L1Cache_Controller", 0),
                ("L1Cache_Controller", 1),
                ("DMA_Controller", 0),
                ("Directory_Controller", 0),
                ("Directory_Controller", 1),
            ]
        );
        assert!(nodes.iter().all(|node| node.router_id.is_none()));
    }
}
