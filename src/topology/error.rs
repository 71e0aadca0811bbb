use thiserror::Error;

/// Invariants relating controller counts to a rectangular mesh layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryMismatch {
    #[error("at least one cpu is required")]
    NoCpus,

    #[error("at least one directory controller is required")]
    NoDirectories,

    #[error("{num_cpus} cpus cannot be split evenly across {num_chiplets} cpu chiplets")]
    CpusNotDivisible { num_cpus: usize, num_chiplets: usize },

    #[error("{num_chiplets} cpu chiplets of {rows} x {cols} do not cover {num_cpus} cpus")]
    ChipletNotTileable {
        rows: usize,
        cols: usize,
        num_chiplets: usize,
        num_cpus: usize,
    },

    #[error("i/o chiplet mesh {rows} x {cols} does not hold {num_directories} directories")]
    IoMeshNotTileable {
        rows: usize,
        cols: usize,
        num_directories: usize,
    },

    #[error("{num_caches} cache controllers are not a multiple of {num_cpus} cpus")]
    CachesNotDivisible { num_caches: usize, num_cpus: usize },

    #[error("directory count must be even, got {num_directories}")]
    OddDirectoryCount { num_directories: usize },

    #[error("cache controller {index} maps to level {level}, only {levels} levels per router")]
    CacheLevelOverflow {
        index: usize,
        level: usize,
        levels: usize,
    },

    #[error("cpu chiplet meshes cover {covered} routers, expected {num_cpus}")]
    MeshCoverage { covered: usize, num_cpus: usize },

    #[error("{num_chiplets} cpu chiplets cannot be shared evenly by {num_io_routers} i/o routers")]
    UnevenBridging {
        num_chiplets: usize,
        num_io_routers: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopologyError {
    #[error("unknown node controller '{kind}' (version {version})")]
    UnknownRole { kind: String, version: usize },

    #[error("geometry mismatch")]
    GeometryMismatch(#[from] GeometryMismatch),

    #[error("bridged {bridged} cpu chiplets to the i/o chiplet, expected {expected}")]
    BridgingCount { bridged: usize, expected: usize },
}

pub type TopologyResult<T> = Result<T, TopologyError>;
