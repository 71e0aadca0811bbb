use serde::Deserialize;

use crate::sim::config::Config;
use crate::topology::types::{Latency, RoutingOrder};

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct TopologyConfig {
    pub link_latency: Latency,
    pub router_latency: Latency,
    /// Added on top of `link_latency` for links that cross between chiplets.
    pub chiplet_latency_increase: Latency,
    pub routing: RoutingOrder,
}

impl Config for TopologyConfig {}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            link_latency: 1,
            router_latency: 1,
            chiplet_latency_increase: 0,
            routing: RoutingOrder::Yx,
        }
    }
}

impl TopologyConfig {
    pub fn chiplet_link_latency(&self) -> Latency {
        self.link_latency + self.chiplet_latency_increase
    }
}
