use crate::sim::log::Logger;
use crate::topology::builder::BuildContext;
use crate::topology::mesh::{connect_direction, connect_mesh, MeshGrid, MeshWeights};
use crate::topology::types::{InternalLink, LinkClass, Port};

fn endpoints(links: &[InternalLink]) -> Vec<(usize, usize)> {
    links.iter().map(|link| (link.src, link.dst)).collect()
}

#[test]
fn grid_indices_are_row_major_from_offset() {
    let grid = MeshGrid::new(2, 3, 10);
    assert_eq!(grid.router(0, 0), 10);
    assert_eq!(grid.router(0, 2), 12);
    assert_eq!(grid.router(1, 0), 13);
    assert_eq!(grid.router(1, 2), 15);
    assert_eq!(grid.num_routers(), 6);
}

#[test]
fn east_links_walk_rows() {
    let logger = Logger::silent();
    let mut ctx = BuildContext::new(&logger);
    let emitted = connect_direction(
        &mut ctx,
        MeshGrid::new(2, 3, 10),
        Port::East,
        2,
        5,
        LinkClass::IoMesh,
    );
    assert_eq!(emitted, 4);
    assert_eq!(
        endpoints(ctx.int_links()),
        vec![(10, 11), (11, 12), (13, 14), (14, 15)]
    );
    for link in ctx.int_links() {
        assert_eq!(link.src_outport, Some(Port::East));
        assert_eq!(link.dst_inport, Some(Port::West));
        assert_eq!(link.weight, 2);
        assert_eq!(link.latency, 5);
    }
}

#[test]
fn west_links_run_back_along_rows() {
    let logger = Logger::silent();
    let mut ctx = BuildContext::new(&logger);
    connect_direction(&mut ctx, MeshGrid::new(2, 2, 0), Port::West, 1, 1, LinkClass::IoMesh);
    assert_eq!(endpoints(ctx.int_links()), vec![(1, 0), (3, 2)]);
    assert!(ctx
        .int_links()
        .iter()
        .all(|link| link.src_outport == Some(Port::West) && link.dst_inport == Some(Port::East)));
}

#[test]
fn vertical_links_walk_columns() {
    let logger = Logger::silent();
    let mut ctx = BuildContext::new(&logger);
    connect_direction(&mut ctx, MeshGrid::new(3, 2, 4), Port::North, 1, 1, LinkClass::IoMesh);
    assert_eq!(
        endpoints(ctx.int_links()),
        vec![(4, 6), (6, 8), (5, 7), (7, 9)]
    );

    let mut ctx = BuildContext::new(&logger);
    connect_direction(&mut ctx, MeshGrid::new(3, 2, 4), Port::South, 1, 1, LinkClass::IoMesh);
    assert_eq!(
        endpoints(ctx.int_links()),
        vec![(6, 4), (8, 6), (7, 5), (9, 7)]
    );
    assert!(ctx
        .int_links()
        .iter()
        .all(|link| link.src_outport == Some(Port::South) && link.dst_inport == Some(Port::North)));
}

#[test]
fn mesh_link_count_matches_neighbours() {
    let logger = Logger::silent();
    let mut ctx = BuildContext::new(&logger);
    // 3 x 4: 9 horizontal and 8 vertical neighbour pairs
    let emitted = connect_mesh(
        &mut ctx,
        MeshGrid::new(3, 4, 0),
        MeshWeights { x: 2, y: 1 },
        1,
        LinkClass::CpuMesh { chiplet: 0 },
    );
    assert_eq!(emitted, 34);
    assert_eq!(ctx.int_links().len(), 34);
}

#[test]
fn single_router_mesh_has_no_links() {
    let logger = Logger::silent();
    let mut ctx = BuildContext::new(&logger);
    let emitted = connect_mesh(
        &mut ctx,
        MeshGrid::new(1, 1, 7),
        MeshWeights::uniform(1),
        1,
        LinkClass::IoMesh,
    );
    assert_eq!(emitted, 0);
}

#[test]
fn every_mesh_link_has_a_mirror() {
    let logger = Logger::silent();
    let mut ctx = BuildContext::new(&logger);
    connect_mesh(
        &mut ctx,
        MeshGrid::new(3, 4, 8),
        MeshWeights { x: 2, y: 1 },
        3,
        LinkClass::CpuMesh { chiplet: 2 },
    );
    let links = ctx.int_links();
    for link in links {
        let mirror = links
            .iter()
            .find(|other| other.src == link.dst && other.dst == link.src)
            .expect("reverse link exists");
        assert_eq!(mirror.src_outport, link.dst_inport);
        assert_eq!(mirror.dst_inport, link.src_outport);
        assert_eq!(mirror.weight, link.weight);
        assert_eq!(mirror.latency, link.latency);

        let horizontal = link.src_outport.map(Port::is_horizontal).unwrap();
        assert_eq!(link.weight, if horizontal { 2 } else { 1 });
    }
}

#[test]
fn link_ids_follow_emission_order() {
    let logger = Logger::silent();
    let mut ctx = BuildContext::new(&logger);
    ctx.add_ext_link(0, 0, 1);
    connect_mesh(
        &mut ctx,
        MeshGrid::new(2, 2, 0),
        MeshWeights::uniform(1),
        1,
        LinkClass::IoMesh,
    );
    let ids: Vec<usize> = ctx.int_links().iter().map(|link| link.link_id).collect();
    assert_eq!(ids, (1..9).collect::<Vec<_>>());
}
