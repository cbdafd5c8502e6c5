use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use warehouse_planner::PlannerResult;
use warehouse_planner::catalog::{CANDIDATE_SITES, delivery_points};
use warehouse_planner::comparator::{Comparator, default_strategies};
use warehouse_planner::config::PlannerConfig;
use warehouse_planner::haversine::Haversine;
use warehouse_planner::kmeans::KMeansClustering;
use warehouse_planner::report::ComparisonReport;

/// Compare warehouse placement strategies over the Brasília delivery network.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with planner settings; flags below override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of warehouses the clustering strategy places.
    #[arg(short = 'k', long)]
    clusters: Option<usize>,

    /// Seed for the clustering step.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Run strategies one after another instead of on the thread pool.
    #[arg(long)]
    sequential: bool,

    /// Where to write the JSON report. Printed to stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &Args) -> PlannerResult<PlannerConfig> {
    let mut config = match &args.config {
        Some(path) => PlannerConfig::from_path(path)?,
        None => PlannerConfig {
            parallel: true,
            ..PlannerConfig::default()
        },
    };
    if let Some(clusters) = args.clusters {
        config.cluster_count = clusters;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if args.sequential {
        config.parallel = false;
    }
    Ok(config)
}

fn run(args: Args) -> PlannerResult<()> {
    let config = load_config(&args)?;
    let points = delivery_points();
    info!(points = points.len(), sites = CANDIDATE_SITES.len(), "catalog loaded");

    let clustering = KMeansClustering::from_config(&config);
    let distance = Haversine::default();
    let comparator = Comparator {
        points: &points,
        catalog: CANDIDATE_SITES,
        clustering: &clustering,
        distance: &distance,
        config: &config,
    };

    let comparison = comparator.compare(&default_strategies(&config))?;
    let report = ComparisonReport::from_comparison(&comparison);
    for line in report.summary_lines() {
        info!("{}", line);
    }

    let json = report.to_json_pretty()?;
    match &args.output {
        Some(path) => {
            fs::write(path, json)?;
            info!(path = %path.display(), "report written");
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "planner failed");
            ExitCode::FAILURE
        }
    }
}
