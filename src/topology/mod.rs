pub mod bridge;
pub mod builder;
pub mod classify;
pub mod config;
pub mod error;
pub mod geometry;
pub mod mesh;
pub mod system;
pub mod types;

#[cfg(test)]
mod unit_tests;

pub use builder::{build_topology, BuildContext, Topology};
pub use classify::{classify, Classified};
pub use config::TopologyConfig;
pub use error::{GeometryMismatch, TopologyError, TopologyResult};
pub use geometry::MeshGeometry;
pub use system::synthesize_controllers;
pub use types::{
    ControllerNode, ControllerRole, ExternalLink, InternalLink, Latency, LinkClass, LinkId, NodeId,
    Port, Router, RouterId, RoutingOrder,
};
