use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use chiplet_topo::sim::config::{Config, SimConfig, SystemConfig};
use chiplet_topo::sim::log::Logger;
use chiplet_topo::topology::{
    build_topology, synthesize_controllers, RoutingOrder, Topology, TopologyConfig,
};
use clap::Parser;
use toml::Table;

#[derive(Parser)]
#[command(version, about = "Build a chiplet mesh interconnect topology")]
struct TopoArgs {
    #[arg(help = "Path to config.toml")]
    config_path: Option<PathBuf>,
    #[arg(long, help = "Override total number of cpus")]
    num_cpus: Option<usize>,
    #[arg(long, help = "Override number of directory controllers")]
    num_dirs: Option<usize>,
    #[arg(long, help = "Override cache levels per cpu")]
    cache_levels: Option<usize>,
    #[arg(long, help = "Override number of DMA controllers")]
    num_dma: Option<usize>,
    #[arg(long, help = "Exhaust the X dimension last (xy weights)")]
    routing_yx: Option<bool>,
    #[arg(long, help = "Enable log at level (0:none, 1:info, 2:debug)")]
    log: Option<u64>,
    #[arg(long, help = "Write the topology as JSON to this path")]
    json: Option<PathBuf>,
}

fn print_summary(topology: &Topology) {
    let geometry = &topology.geometry;
    println!("Configuration:");
    println!("  CPU chiplets:      {}", geometry.num_cpu_chiplets);
    println!("  CPU chiplet mesh:  {} x {}", geometry.num_rows, geometry.num_cols);
    println!("  I/O chiplet mesh:  {} x {}", geometry.io_rows, geometry.io_cols);
    println!("  routers:           {}", topology.num_routers());
    println!("  external links:    {}", topology.ext_links.len());
    println!("  internal links:    {}", topology.int_links.len());
    println!("  bridge links:      {}", topology.bridge_links().count());
}

pub fn main() -> anyhow::Result<()> {
    env_logger::init();

    let argv = TopoArgs::parse();
    let config_table: Table = match &argv.config_path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            toml::from_str(&text).context("cannot parse config toml")?
        }
        None => Table::new(),
    };
    let mut sim_config = SimConfig::from_section(config_table.get("sim"))?;
    let mut system_config = SystemConfig::from_section(config_table.get("system"))?;
    let mut topology_config = TopologyConfig::from_section(config_table.get("topology"))?;

    // override toml configs with argv
    sim_config.log_level = argv.log.unwrap_or(sim_config.log_level);
    sim_config.json = argv.json.or(sim_config.json);
    system_config.num_cpus = argv.num_cpus.unwrap_or(system_config.num_cpus);
    system_config.num_dirs = argv.num_dirs.unwrap_or(system_config.num_dirs);
    system_config.cache_levels = argv.cache_levels.unwrap_or(system_config.cache_levels);
    system_config.num_dma = argv.num_dma.unwrap_or(system_config.num_dma);
    if let Some(routing_yx) = argv.routing_yx {
        topology_config.routing = RoutingOrder::from_yx_flag(routing_yx);
    }

    let logger = Logger::new(sim_config.log_level);
    let mut nodes = synthesize_controllers(&system_config);
    let topology = build_topology(&mut nodes, system_config.num_cpus, &topology_config, &logger)
        .context("topology build failed")?;

    print_summary(&topology);

    if let Some(path) = &sim_config.json {
        let json = serde_json::to_string_pretty(&topology).context("cannot serialize topology")?;
        fs::write(path, json)
            .with_context(|| format!("failed to write topology to {}", path.display()))?;
    }
    Ok(())
}
