use serde::Serialize;

use crate::sim::log::Logger;
use crate::topology::bridge::connect_chiplets;
use crate::topology::classify::{classify, Classified};
use crate::topology::config::TopologyConfig;
use crate::topology::error::{GeometryMismatch, TopologyResult};
use crate::topology::geometry::MeshGeometry;
use crate::topology::mesh::{connect_mesh, MeshGrid, MeshWeights};
use crate::topology::types::{
    ControllerNode, ExternalLink, InternalLink, Latency, LinkClass, LinkId, NodeId, Port, Router,
    RouterId,
};
use crate::{debug, info};

/// Routers and links of a fully built chiplet network.
#[derive(Debug, Clone, Serialize)]
pub struct Topology {
    pub geometry: MeshGeometry,
    pub routers: Vec<Router>,
    pub ext_links: Vec<ExternalLink>,
    pub int_links: Vec<InternalLink>,
}

impl Topology {
    pub fn num_routers(&self) -> usize {
        self.routers.len()
    }

    pub fn num_links(&self) -> usize {
        self.ext_links.len() + self.int_links.len()
    }

    pub fn bridge_links(&self) -> impl Iterator<Item = &InternalLink> {
        self.int_links
            .iter()
            .filter(|link| link.class == LinkClass::Bridge)
    }

    /// Every link id, external links first, in emission order.
    pub fn link_ids(&self) -> impl Iterator<Item = LinkId> + '_ {
        self.ext_links
            .iter()
            .map(|link| link.link_id)
            .chain(self.int_links.iter().map(|link| link.link_id))
    }
}

/// Accumulators for a single build. Link ids are handed out from one counter
/// shared by external and internal links.
pub struct BuildContext<'a> {
    logger: &'a Logger,
    routers: Vec<Router>,
    ext_links: Vec<ExternalLink>,
    int_links: Vec<InternalLink>,
    link_count: LinkId,
}

impl<'a> BuildContext<'a> {
    pub fn new(logger: &'a Logger) -> Self {
        Self {
            logger,
            routers: Vec::new(),
            ext_links: Vec::new(),
            int_links: Vec::new(),
            link_count: 0,
        }
    }

    pub fn logger(&self) -> &Logger {
        self.logger
    }

    pub fn allocate_routers(&mut self, count: usize, latency: Latency) {
        self.routers = (0..count)
            .map(|router_id| Router { router_id, latency })
            .collect();
    }

    fn next_link_id(&mut self) -> LinkId {
        let id = self.link_count;
        self.link_count += 1;
        id
    }

    pub fn add_ext_link(&mut self, node: NodeId, router: RouterId, latency: Latency) -> LinkId {
        let link_id = self.next_link_id();
        self.ext_links.push(ExternalLink {
            link_id,
            node,
            router,
            latency,
        });
        link_id
    }

    pub fn add_int_link(
        &mut self,
        src: RouterId,
        dst: RouterId,
        ports: Option<(Port, Port)>,
        latency: Latency,
        weight: u32,
        class: LinkClass,
    ) -> LinkId {
        let link_id = self.next_link_id();
        self.int_links.push(InternalLink {
            link_id,
            src,
            dst,
            src_outport: ports.map(|(out, _)| out),
            dst_inport: ports.map(|(_, inp)| inp),
            latency,
            weight,
            class,
        });
        link_id
    }

    #[cfg(test)]
    pub fn int_links(&self) -> &[InternalLink] {
        &self.int_links
    }

    pub fn into_topology(self, geometry: MeshGeometry) -> Topology {
        Topology {
            geometry,
            routers: self.routers,
            ext_links: self.ext_links,
            int_links: self.int_links,
        }
    }
}

/// Builds the two-tier chiplet mesh for `nodes`, writing each node's router
/// id as it is attached. The directory count is taken from the node list.
pub fn build_topology(
    nodes: &mut [ControllerNode],
    num_cpus: usize,
    config: &TopologyConfig,
    logger: &Logger,
) -> TopologyResult<Topology> {
    info!(logger, "Base Link Latency: {}", config.link_latency);
    info!(logger, "Chiplet Link Latency: {}", config.chiplet_link_latency());

    let classified = classify(nodes)?;
    info!(logger, "Number of Cache Controllers: {}", classified.caches.len());
    info!(logger, "Number of DMA Controllers: {}", classified.dmas.len());
    info!(logger, "Number of Directory Controllers: {}", classified.directories.len());

    let geometry = MeshGeometry::plan(
        num_cpus,
        classified.directories.len(),
        classified.caches.len(),
    )?;
    info!(
        logger,
        "{} CPU chiplets of {} x {}, I/O chiplet {} x {}, {} routers",
        geometry.num_cpu_chiplets,
        geometry.num_rows,
        geometry.num_cols,
        geometry.io_rows,
        geometry.io_cols,
        geometry.total_routers()
    );

    let mut ctx = BuildContext::new(logger);
    ctx.allocate_routers(geometry.total_routers(), config.router_latency);
    attach_endpoints(&mut ctx, nodes, &classified, &geometry, config.link_latency)?;
    connect_routers(&mut ctx, &geometry, config)?;

    Ok(ctx.into_topology(geometry))
}

fn attach_endpoints(
    ctx: &mut BuildContext,
    nodes: &mut [ControllerNode],
    classified: &Classified,
    geometry: &MeshGeometry,
    latency: Latency,
) -> TopologyResult<()> {
    for (i, &idx) in classified.caches.iter().enumerate() {
        let (level, router_id) = (i / geometry.num_cpus, i % geometry.num_cpus);
        if level >= geometry.caches_per_cpu_router {
            return Err(GeometryMismatch::CacheLevelOverflow {
                index: i,
                level,
                levels: geometry.caches_per_cpu_router,
            }
            .into());
        }
        attach(ctx, &mut nodes[idx], idx, router_id, latency);
    }

    // dma traffic locality is not modeled, everything hangs off router 0
    for &idx in &classified.dmas {
        attach(ctx, &mut nodes[idx], idx, 0, latency);
    }

    for (i, &idx) in classified.directories.iter().enumerate() {
        let router_id = geometry.io_router_start() + i;
        attach(ctx, &mut nodes[idx], idx, router_id, latency);
    }
    Ok(())
}

fn attach(
    ctx: &mut BuildContext,
    node: &mut ControllerNode,
    idx: NodeId,
    router_id: RouterId,
    latency: Latency,
) {
    node.router_id = Some(router_id);
    let link_id = ctx.add_ext_link(idx, router_id, latency);
    debug!(
        ctx.logger(),
        "[Topology] link {}: {} {} -> router {} latency {}",
        link_id,
        node.kind,
        node.version,
        router_id,
        latency
    );
}

fn connect_routers(
    ctx: &mut BuildContext,
    geometry: &MeshGeometry,
    config: &TopologyConfig,
) -> TopologyResult<()> {
    let io_grid = MeshGrid::new(geometry.io_rows, geometry.io_cols, geometry.io_router_start());
    connect_mesh(
        ctx,
        io_grid,
        MeshWeights::uniform(1),
        config.link_latency,
        LinkClass::IoMesh,
    );

    let (x, y) = config.routing.weights();
    info!(ctx.logger(), "{:?} routing: x weight {}, y weight {}", config.routing, x, y);
    let mut covered = 0;
    for chiplet in 0..geometry.num_cpu_chiplets {
        let grid = MeshGrid::new(
            geometry.num_rows,
            geometry.num_cols,
            geometry.chiplet_anchor(chiplet),
        );
        connect_mesh(
            ctx,
            grid,
            MeshWeights { x, y },
            config.link_latency,
            LinkClass::CpuMesh { chiplet },
        );
        covered += grid.num_routers();
    }
    if covered != geometry.num_cpus {
        return Err(GeometryMismatch::MeshCoverage {
            covered,
            num_cpus: geometry.num_cpus,
        }
        .into());
    }

    let bridged = connect_chiplets(ctx, geometry, config.chiplet_link_latency())?;
    info!(ctx.logger(), "Bridged {} CPU chiplets to the I/O chiplet", bridged);
    Ok(())
}
