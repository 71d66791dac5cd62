//! YantraSim driver: run a command sequence and export the trace.
//!
//! Feeds the configured velocity commands through a [`Simulator`], collects
//! the pose and measurement history, and writes it out for external
//! plotting.
//!
//! # Usage
//!
//! ```bash
//! # With default config (built-in demo environment)
//! cargo run --release
//!
//! # With custom config file
//! cargo run --release -- --config yantra-sim.toml
//!
//! # Override the output directory and also write JSON
//! cargo run --release -- --output runs/demo --json
//! ```

use std::path::{Path, PathBuf};

use clap::Parser;

use yantra_sim::{Config, SimTrace, Simulator};

#[derive(Parser)]
#[command(name = "yantra-sim")]
#[command(about = "Discrete-time 2D robot motion and sensing simulator")]
struct Args {
    /// Configuration file (default: yantra-sim.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory for CSV export (overrides config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write the full trace as trace.json (overrides config)
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = Config::load(args.config.as_deref());

    if let Err(e) = run(&args, &config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let landmarks = config.landmark_map();
    let commands = config.command_list();

    log::info!(
        "Simulating {} commands over {} landmarks (dt = {}s)",
        commands.len(),
        landmarks.len(),
        config.simulation.dt
    );

    let mut sim = Simulator::new(config.initial_pose(), config.simulation.dt, landmarks)?;
    let mut trace = SimTrace::new();

    for (step, command) in commands.iter().enumerate() {
        let (pose, observations) = sim.step(Some(command))?;
        log::debug!(
            "step {:2}: cmd=({:.2}, {:.2}) -> pose=({:.3}, {:.3}, {:.3}), nearest={}",
            step,
            command.linear,
            command.angular,
            pose.x,
            pose.y,
            pose.theta,
            observations
                .first()
                .map(|o| o.id.as_str())
                .unwrap_or("none")
        );
        trace.push(pose, observations);
    }

    let out_dir = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.dir));
    trace.write_csv(&out_dir)?;

    if args.json || config.output.json {
        let path = out_dir.join("trace.json");
        std::fs::write(&path, trace.to_json()?)?;
        log::info!("Wrote {}", path.display());
    }

    summarize(&trace, &out_dir);
    Ok(())
}

fn summarize(trace: &SimTrace, out_dir: &Path) {
    if let Some((pose, observations)) = trace.latest() {
        log::info!(
            "Done: {} steps, final pose ({:.3}, {:.3}, {:.3}), {} observations at the end",
            trace.len(),
            pose.x,
            pose.y,
            pose.theta,
            observations.len()
        );
    }
    log::info!("Output in {}", out_dir.display());
}
