mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use bounce_engine::{SimConfig, Simulation};
use clap::Parser;

/// Run a headless bounce simulation and log what the movers do.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON simulation config; built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of host frames to run
    #[arg(short, long, default_value_t = 600)]
    frames: u32,

    /// Host frame time in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    frame_dt: f32,

    /// Override the config's random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Log every bounce
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut config = match &args.config {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("loading simulation config from {}", path.display()))?,
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let mut sim = Simulation::new(config);
    sim.init();

    let mut bounces = 0usize;
    for _ in 0..args.frames {
        sim.frame(args.frame_dt);
        bounces += sim.events().len();
    }

    for entity in sim.scene().iter() {
        log::info!(
            "entity {} {:?}: position {:?}, velocity {:?}",
            entity.id.0,
            entity.tag,
            entity.mover.position,
            entity.mover.velocity
        );
    }
    log::info!(
        "ran {} frames ({} ticks), {} bounces",
        args.frames,
        sim.tick_count(),
        bounces
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_parses() {
        let config = SimConfig::from_json(include_str!("../config/two_balls.json")).unwrap();
        assert_eq!(config.movers.len(), 2);
        assert_eq!(config.movers[0].radius_offset, 0.1);
    }

    #[test]
    fn args_accept_overrides() {
        let args = Args::parse_from(["bounce", "--frames", "5", "--seed", "9", "-v"]);
        assert_eq!(args.frames, 5);
        assert_eq!(args.seed, Some(9));
        assert!(args.verbose);
        assert!(args.config.is_none());
    }
}
