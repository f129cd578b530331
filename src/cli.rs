use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::config::{SelectorKind, SolveConfig};
use crate::error::write_export;
use crate::problem::{GlobalCompositionProblem, LocalAssignmentProblem, MultiObjectiveProblem, ReplicaAwareInitializer, Solution};
use crate::result_graph::{AssignmentGraph, CompositionGraph};
use crate::scenario::{GlobalScenario, LocalScenario};
use crate::selector::{KneenessSelector, PreferenceSelector};

#[derive(Parser)]
#[command(name = "placement-core")]
#[command(about = "Two-level multi-objective evolutionary placement core")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug-level logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Solve configuration file (TOML)
    #[arg(short, long, default_value = "solve.toml")]
    pub config: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Solve the within-cluster placement problem for one local scenario.
    SolveLocal {
        /// Path to a local scenario JSON file (resources + services).
        scenario: PathBuf,
        /// Directory to write the marshalled cluster and result graph into.
        #[arg(short, long)]
        out: PathBuf,
    },
    /// Solve the cross-cluster composition problem for one global scenario.
    SolveGlobal {
        /// Path to a global scenario JSON file (clusters + services + latency).
        scenario: PathBuf,
        /// Directory to write the result graph into.
        #[arg(short, long)]
        out: PathBuf,
    },
    /// Export a scenario's graphs without solving anything.
    Export {
        /// Path to a local or global scenario JSON file.
        scenario: PathBuf,
        /// Directory to write GraphML into.
        #[arg(short, long)]
        out: PathBuf,
    },
}

fn load_config(path: &PathBuf) -> Result<SolveConfig> {
    if path.exists() {
        SolveConfig::load(path).with_context(|| format!("loading config from {}", path.display()))
    } else {
        Ok(SolveConfig::default())
    }
}

fn select<'a>(config: &SolveConfig, front: &'a [Solution]) -> Option<&'a Solution> {
    match config.selector {
        SelectorKind::Preference => PreferenceSelector::new(config.preference).select(front),
        SelectorKind::Kneeness => KneenessSelector::new().select(front),
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli.config)?;

    match cli.command {
        Commands::SolveLocal { scenario, out } => solve_local(&scenario, &out, &config),
        Commands::SolveGlobal { scenario, out } => solve_global(&scenario, &out, &config),
        Commands::Export { scenario, out } => export(&scenario, &out),
    }
}

fn solve_local(scenario_path: &PathBuf, out: &PathBuf, config: &SolveConfig) -> Result<()> {
    std::fs::create_dir_all(out)?;
    let scenario = LocalScenario::load(scenario_path)
        .with_context(|| format!("loading local scenario from {}", scenario_path.display()))?;
    let state = scenario.into_state();
    let problem = LocalAssignmentProblem::new(&state, config.fairness_exponent);
    let initializer = ReplicaAwareInitializer::new(&problem);

    let mut rng = StdRng::seed_from_u64(config.rng_seed);
    let archive = crate::stub_search::run(&problem, Some(&initializer), config.population_size, 30, &mut rng);
    info!(front_size = archive.len(), "local search finished");

    let chosen = select(config, &archive).context("no feasible local solution found")?;
    let cluster = crate::marshal::marshal_cluster("cluster", &problem, chosen)?;
    let cluster_path = out.join("cluster.json");
    write_export("cluster", &cluster_path, &serde_json::to_string_pretty(&cluster)?)?;

    let graph = AssignmentGraph::build(&problem, chosen);
    write_export("assignment graph", &out.join("assignment.graphml"), &graph.to_graphml())?;
    write_export("assignment matrix", &out.join("assignment.csv"), &graph.to_csv_matrix())?;

    info!(path = %cluster_path.display(), "wrote marshalled cluster");
    Ok(())
}

fn solve_global(scenario_path: &PathBuf, out: &PathBuf, config: &SolveConfig) -> Result<()> {
    std::fs::create_dir_all(out)?;
    let scenario = GlobalScenario::load(scenario_path)
        .with_context(|| format!("loading global scenario from {}", scenario_path.display()))?;
    let state = scenario.into_state()?;
    let problem = GlobalCompositionProblem::new(&state);
    if !problem.is_complete() {
        info!("scenario is incomplete: at least one service has no assigned candidate anywhere");
    }

    let mut rng = StdRng::seed_from_u64(config.rng_seed);
    let archive = crate::stub_search::run(&problem, None, config.population_size, 30, &mut rng);
    info!(front_size = archive.len(), "global search finished");

    let chosen = select(config, &archive).context("no feasible global solution found")?;
    info!(cost = %chosen.objectives[0], latency = %chosen.objectives[1], "selected solution");

    let graph = CompositionGraph::build(&problem, chosen);
    write_export("composition graph", &out.join("composition.graphml"), &graph.to_graphml())?;
    Ok(())
}

fn export(scenario_path: &PathBuf, out: &PathBuf) -> Result<()> {
    std::fs::create_dir_all(out)?;
    if let Ok(local) = LocalScenario::load(scenario_path) {
        let state = local.into_state();
        write_export(
            "service graph",
            &out.join("services.graphml"),
            &state.service_graph().to_graphml(),
        )?;
        return Ok(());
    }
    let global = GlobalScenario::load(scenario_path)
        .with_context(|| format!("'{}' is neither a local nor a global scenario", scenario_path.display()))?;
    let state = global.into_state()?;
    write_export(
        "cluster graph",
        &out.join("clusters.graphml"),
        &state.cluster_graph().to_graphml(),
    )?;
    Ok(())
}
