use crate::debug;
use crate::topology::builder::BuildContext;
use crate::topology::error::{GeometryMismatch, TopologyError, TopologyResult};
use crate::topology::geometry::MeshGeometry;
use crate::topology::types::{Latency, LinkClass};

/// Hands the CPU chiplets out to the I/O routers in equal shares and joins
/// each I/O router to the anchor router of every chiplet in its share with a
/// pair of portless links. Returns the number of chiplets bridged.
pub fn connect_chiplets(
    ctx: &mut BuildContext,
    geometry: &MeshGeometry,
    latency: Latency,
) -> TopologyResult<usize> {
    let num_io_routers = geometry.num_directories;
    if num_io_routers == 0 || geometry.num_cpu_chiplets % num_io_routers != 0 {
        return Err(GeometryMismatch::UnevenBridging {
            num_chiplets: geometry.num_cpu_chiplets,
            num_io_routers,
        }
        .into());
    }
    let chiplets_per_io_router = geometry.num_cpu_chiplets / num_io_routers;

    let io_start = geometry.io_router_start();
    let mut connected = 0;
    for io_router in io_start..io_start + num_io_routers {
        for _ in 0..chiplets_per_io_router {
            let anchor = geometry.chiplet_anchor(connected);
            ctx.add_int_link(io_router, anchor, None, latency, 1, LinkClass::Bridge);
            ctx.add_int_link(anchor, io_router, None, latency, 1, LinkClass::Bridge);
            debug!(
                ctx.logger(),
                "[I/O to CPU Chiplet] router {} <-> router {} latency {}",
                io_router,
                anchor,
                latency
            );
            connected += 1;
        }
    }

    if connected != geometry.num_cpu_chiplets {
        return Err(TopologyError::BridgingCount {
            bridged: connected,
            expected: geometry.num_cpu_chiplets,
        });
    }
    Ok(connected)
}
