use crate::debug;
use crate::topology::builder::BuildContext;
use crate::topology::types::{Latency, LinkClass, Port, RouterId};

/// A `rows x cols` block of routers numbered row-major from `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshGrid {
    pub rows: usize,
    pub cols: usize,
    pub offset: RouterId,
}

impl MeshGrid {
    pub fn new(rows: usize, cols: usize, offset: RouterId) -> Self {
        Self { rows, cols, offset }
    }

    pub fn router(&self, row: usize, col: usize) -> RouterId {
        self.offset + col + row * self.cols
    }

    pub fn num_routers(&self) -> usize {
        self.rows * self.cols
    }

    /// Neighbouring router pairs along one dimension, nearer router first.
    /// Horizontal pairs are visited row by row, vertical pairs column by
    /// column.
    fn neighbours(&self, horizontal: bool) -> Vec<(RouterId, RouterId)> {
        let mut pairs = Vec::new();
        if horizontal {
            for row in 0..self.rows {
                for col in 0..self.cols.saturating_sub(1) {
                    pairs.push((self.router(row, col), self.router(row, col + 1)));
                }
            }
        } else {
            for col in 0..self.cols {
                for row in 0..self.rows.saturating_sub(1) {
                    pairs.push((self.router(row, col), self.router(row + 1, col)));
                }
            }
        }
        pairs
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshWeights {
    pub x: u32,
    pub y: u32,
}

impl MeshWeights {
    pub fn uniform(weight: u32) -> Self {
        Self {
            x: weight,
            y: weight,
        }
    }
}

/// Emits every link of `grid` that leaves a router through `outport`.
/// East and North links run from the lower to the higher index of a pair,
/// West and South links run back.
pub fn connect_direction(
    ctx: &mut BuildContext,
    grid: MeshGrid,
    outport: Port,
    weight: u32,
    latency: Latency,
    class: LinkClass,
) -> usize {
    let pairs = grid.neighbours(outport.is_horizontal());
    let forward = matches!(outport, Port::East | Port::North);
    for &(near, far) in &pairs {
        let (src, dst) = if forward { (near, far) } else { (far, near) };
        let link_id = ctx.add_int_link(
            src,
            dst,
            Some((outport, outport.opposite())),
            latency,
            weight,
            class,
        );
        debug!(
            ctx.logger(),
            "[{:?}] link {}: router {} {} -> router {} {} latency {} weight {}",
            class,
            link_id,
            src,
            outport,
            dst,
            outport.opposite(),
            latency,
            weight
        );
    }
    pairs.len()
}

/// Connects every grid neighbour in both directions. Returns the number of
/// directed links emitted.
pub fn connect_mesh(
    ctx: &mut BuildContext,
    grid: MeshGrid,
    weights: MeshWeights,
    latency: Latency,
    class: LinkClass,
) -> usize {
    [
        (Port::East, weights.x),
        (Port::West, weights.x),
        (Port::North, weights.y),
        (Port::South, weights.y),
    ]
    .into_iter()
    .map(|(outport, weight)| connect_direction(ctx, grid, outport, weight, latency, class))
    .sum()
}
