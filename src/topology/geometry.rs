use serde::Serialize;

use crate::topology::error::GeometryMismatch;
use crate::topology::types::RouterId;

/// Mesh dimensions derived from the controller counts. Each CPU chiplet is a
/// `num_rows x num_cols` mesh and the I/O chiplet is `io_rows x io_cols`, one
/// router per directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MeshGeometry {
    pub num_cpus: usize,
    pub num_directories: usize,
    pub num_cpu_chiplets: usize,
    pub cpus_per_chiplet: usize,
    pub num_rows: usize,
    pub num_cols: usize,
    pub io_rows: usize,
    pub io_cols: usize,
    pub caches_per_cpu_router: usize,
}

impl MeshGeometry {
    pub fn plan(
        num_cpus: usize,
        num_directories: usize,
        num_cache_endpoints: usize,
    ) -> Result<Self, GeometryMismatch> {
        if num_cpus == 0 {
            return Err(GeometryMismatch::NoCpus);
        }
        if num_directories == 0 {
            return Err(GeometryMismatch::NoDirectories);
        }

        // one i/o router faces each cpu chiplet
        let num_cpu_chiplets = num_directories;
        let cpus_per_chiplet = exact_div(num_cpus, num_cpu_chiplets).ok_or(
            GeometryMismatch::CpusNotDivisible {
                num_cpus,
                num_chiplets: num_cpu_chiplets,
            },
        )?;

        let (num_rows, num_cols) = near_square(cpus_per_chiplet);
        if num_rows * num_cols * num_cpu_chiplets != num_cpus {
            return Err(GeometryMismatch::ChipletNotTileable {
                rows: num_rows,
                cols: num_cols,
                num_chiplets: num_cpu_chiplets,
                num_cpus,
            });
        }

        let (io_rows, io_cols) = near_square(num_directories);
        if io_rows * io_cols != num_directories {
            return Err(GeometryMismatch::IoMeshNotTileable {
                rows: io_rows,
                cols: io_cols,
                num_directories,
            });
        }

        let caches_per_cpu_router = exact_div(num_cache_endpoints, num_cpus).ok_or(
            GeometryMismatch::CachesNotDivisible {
                num_caches: num_cache_endpoints,
                num_cpus,
            },
        )?;

        if num_directories % 2 != 0 {
            return Err(GeometryMismatch::OddDirectoryCount { num_directories });
        }

        Ok(Self {
            num_cpus,
            num_directories,
            num_cpu_chiplets,
            cpus_per_chiplet,
            num_rows,
            num_cols,
            io_rows,
            io_cols,
            caches_per_cpu_router,
        })
    }

    pub fn total_routers(&self) -> usize {
        self.num_cpus + self.num_directories
    }

    /// First router id of the I/O chiplet.
    pub fn io_router_start(&self) -> RouterId {
        self.num_cpus
    }

    /// Router id at local index 0 of a CPU chiplet.
    pub fn chiplet_anchor(&self, chiplet: usize) -> RouterId {
        chiplet * self.cpus_per_chiplet
    }
}

fn exact_div(num: usize, den: usize) -> Option<usize> {
    if den == 0 || num % den != 0 {
        None
    } else {
        Some(num / den)
    }
}

/// `rows = floor(sqrt(n))`, `cols = n / rows`. Non-square counts lean towards
/// more columns than rows, e.g. 12 -> 3 x 4.
pub fn near_square(n: usize) -> (usize, usize) {
    let rows = floor_sqrt(n).max(1);
    (rows, n / rows)
}

fn floor_sqrt(n: usize) -> usize {
    // the float seed can land one past the true root near usize::MAX
    let mut root = (n as f64).sqrt() as usize;
    while root.checked_mul(root).map_or(true, |square| square > n) {
        root -= 1;
    }
    while (root + 1)
        .checked_mul(root + 1)
        .map_or(false, |square| square <= n)
    {
        root += 1;
    }
    root
}
