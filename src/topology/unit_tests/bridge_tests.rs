use crate::sim::log::Logger;
use crate::topology::bridge::connect_chiplets;
use crate::topology::builder::BuildContext;
use crate::topology::error::{GeometryMismatch, TopologyError};
use crate::topology::geometry::MeshGeometry;
use crate::topology::types::LinkClass;

fn geometry(num_cpus: usize, num_chiplets: usize, num_directories: usize) -> MeshGeometry {
    let cpus_per_chiplet = num_cpus / num_chiplets;
    MeshGeometry {
        num_cpus,
        num_directories,
        num_cpu_chiplets: num_chiplets,
        cpus_per_chiplet,
        num_rows: 1,
        num_cols: cpus_per_chiplet,
        io_rows: 1,
        io_cols: num_directories,
        caches_per_cpu_router: 1,
    }
}

#[test]
fn one_chiplet_per_io_router() {
    let logger = Logger::silent();
    let mut ctx = BuildContext::new(&logger);
    let bridged = connect_chiplets(&mut ctx, &geometry(16, 4, 4), 9).unwrap();
    assert_eq!(bridged, 4);

    let pairs: Vec<(usize, usize)> = ctx
        .int_links()
        .iter()
        .map(|link| (link.src, link.dst))
        .collect();
    assert_eq!(
        pairs,
        vec![
            (16, 0),
            (0, 16),
            (17, 4),
            (4, 17),
            (18, 8),
            (8, 18),
            (19, 12),
            (12, 19),
        ]
    );
    for link in ctx.int_links() {
        assert_eq!(link.class, LinkClass::Bridge);
        assert_eq!(link.src_outport, None);
        assert_eq!(link.dst_inport, None);
        assert_eq!(link.latency, 9);
        assert_eq!(link.weight, 1);
    }
}

#[test]
fn io_routers_share_several_chiplets() {
    let logger = Logger::silent();
    let mut ctx = BuildContext::new(&logger);
    let bridged = connect_chiplets(&mut ctx, &geometry(16, 4, 2), 1).unwrap();
    assert_eq!(bridged, 4);

    let forward: Vec<(usize, usize)> = ctx
        .int_links()
        .iter()
        .step_by(2)
        .map(|link| (link.src, link.dst))
        .collect();
    assert_eq!(forward, vec![(16, 0), (16, 4), (17, 8), (17, 12)]);
}

#[test]
fn uneven_share_is_rejected() {
    let logger = Logger::silent();
    let mut ctx = BuildContext::new(&logger);
    let err = connect_chiplets(&mut ctx, &geometry(12, 3, 2), 1).unwrap_err();
    assert_eq!(
        err,
        TopologyError::GeometryMismatch(GeometryMismatch::UnevenBridging {
            num_chiplets: 3,
            num_io_routers: 2,
        })
    );
    assert!(ctx.int_links().is_empty());
}
