use toystar::{ScenarioConfig, Scenario};
use toystar::{run, export_run, bench_step_curve};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Integrate the 1-D toy-star fluid and optionally export the frames
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Scenario YAML; bare names are also looked up under `scenarios/`
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Override the node count N
    #[arg(long)]
    nodes: Option<usize>,

    /// Override the time step
    #[arg(long)]
    dt: Option<f64>,

    /// Override the total simulated time
    #[arg(long)]
    t_max: Option<f64>,

    /// Override the steps between captured frames
    #[arg(long)]
    stride: Option<usize>,

    /// Write frames here (`.csv` for CSV, anything else for YAML)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Time a single Euler step over a sweep of grid sizes and exit
    #[arg(long)]
    bench: bool,

    /// More log output (-v debug, -vv trace); RUST_LOG also works
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    match verbose {
        0 => {}
        1 => { builder.filter_level(LevelFilter::Debug); }
        _ => { builder.filter_level(LevelFilter::Trace); }
    }
    builder.init();
}

fn resolve_scenario_path(path: &Path) -> PathBuf {
    if path.exists() {
        return path.to_path_buf();
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(path)
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    let mut cfg = match &args.file {
        Some(path) => {
            let config_path = resolve_scenario_path(path);
            let file = File::open(&config_path)
                .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
            let reader = BufReader::new(file);
            serde_yaml::from_reader(reader)
                .with_context(|| format!("failed to parse scenario {}", config_path.display()))?
        }
        None => ScenarioConfig::default(),
    };

    if let Some(nodes) = args.nodes {
        cfg.grid.nodes = nodes;
    }
    if let Some(dt) = args.dt {
        cfg.parameters.dt = dt;
    }
    if let Some(t_max) = args.t_max {
        cfg.parameters.t_max = t_max;
    }
    if let Some(stride) = args.stride {
        cfg.parameters.sample_stride = stride;
    }

    Ok(cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.bench {
        bench_step_curve();
        return Ok(());
    }

    let scenario_cfg = load_scenario(&args)?;
    let scenario = Scenario::build_scenario(scenario_cfg).context("rejected scenario")?;
    let result = run(scenario)?;

    if let Some(last) = result.frames.last() {
        info!(
            "last frame: step {}, t = {:.4}, density [{:.4}, {:.4}], velocity [{:.4}, {:.4}]",
            last.step,
            last.t,
            last.density.min(),
            last.density.max(),
            last.velocity.min(),
            last.velocity.max()
        );
    }

    if let Some(path) = &args.output {
        export_run(&result, path)?;
    }

    Ok(())
}
