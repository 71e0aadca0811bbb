use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub type RouterId = usize;
pub type LinkId = usize;
pub type NodeId = usize;
pub type Latency = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ControllerRole {
    Cache,
    Directory,
    Dma,
}

impl FromStr for ControllerRole {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "L0Cache_Controller" | "L1Cache_Controller" | "L2Cache_Controller" => Ok(Self::Cache),
            "Directory_Controller" => Ok(Self::Directory),
            "DMA_Controller" => Ok(Self::Dma),
            _ => Err(format!("unknown node controller '{}'", value)),
        }
    }
}

/// A controller endpoint handed over by the network. Only `router_id` is
/// written here; everything else belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControllerNode {
    pub kind: String,
    pub version: usize,
    pub router_id: Option<RouterId>,
}

impl ControllerNode {
    pub fn new(kind: impl Into<String>, version: usize) -> Self {
        Self {
            kind: kind.into(),
            version,
            router_id: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Router {
    pub router_id: RouterId,
    pub latency: Latency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Port {
    East,
    West,
    North,
    South,
}

impl Port {
    pub fn opposite(self) -> Self {
        match self {
            Port::East => Port::West,
            Port::West => Port::East,
            Port::North => Port::South,
            Port::South => Port::North,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Port::East | Port::West)
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkClass {
    CpuMesh { chiplet: usize },
    IoMesh,
    Bridge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExternalLink {
    pub link_id: LinkId,
    pub node: NodeId,
    pub router: RouterId,
    pub latency: Latency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InternalLink {
    pub link_id: LinkId,
    pub src: RouterId,
    pub dst: RouterId,
    pub src_outport: Option<Port>,
    pub dst_inport: Option<Port>,
    pub latency: Latency,
    pub weight: u32,
    pub class: LinkClass,
}

/// Dimension-order routing encoded as link weights; the lower weight is the
/// dimension the routing tables prefer.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoutingOrder {
    Xy,
    #[default]
    Yx,
}

impl RoutingOrder {
    /// Maps the legacy `routing_YX` switch: when set, the X dimension is
    /// exhausted last.
    pub fn from_yx_flag(routing_yx: bool) -> Self {
        if routing_yx {
            RoutingOrder::Xy
        } else {
            RoutingOrder::Yx
        }
    }

    /// (x weight, y weight)
    pub fn weights(self) -> (u32, u32) {
        match self {
            RoutingOrder::Xy => (2, 1),
            RoutingOrder::Yx => (1, 2),
        }
    }
}

impl FromStr for RoutingOrder {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "xy" => Ok(Self::Xy),
            "yx" => Ok(Self::Yx),
            _ => Err(format!(
                "unsupported routing order '{}', expected one of: xy, yx",
                value
            )),
        }
    }
}
