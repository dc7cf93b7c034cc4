use clap::{Parser, Subcommand};
use console::Term;
use graphwalk::{
    config::SolverConfig,
    graph::{
        samples::{self, SampleFamily},
        Graph, GraphFile, NodeId,
    },
    maze::{Maze, Position},
    search::{
        search_graph_observed, search_maze_observed, validate_path, CancellationToken,
        GraphProblem, MazeHeuristicName, MazeProblem, NoObserver, PacedObserver, ParentPolicy,
        SearchEngineName, SearchObserver, SearchOptions, SearchProblem, SearchResult,
        SearchSettings, TableHeuristic, Verbosity,
    },
};
use itertools::Itertools;
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use std::{
    error::Error,
    fmt::{Debug, Display},
    hash::Hash,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
    time::Duration,
};
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(version)]
/// Run DFS, BFS or A* on a graph or a maze and report the trace, path and
/// cost.
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(
        help = "TOML file with solver settings, command line flags take precedence",
        long = "config",
        id = "CONFIG"
    )]
    config: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The search engine to use [default: astar]",
        short = 'e',
        long = "engine",
        id = "ENGINE"
    )]
    search_engine_name: Option<SearchEngineName>,
    #[arg(
        value_enum,
        help = "Which parent DFS keeps for nodes pushed more than once",
        long = "parent-policy",
        id = "POLICY"
    )]
    parent_policy: Option<ParentPolicy>,
    #[arg(help = "Stop after this many expansions", long = "max-expansions")]
    max_expansions: Option<usize>,
    #[arg(
        help = "Stop after this long, e.g. 10s",
        long = "time-limit",
        value_parser = humantime::parse_duration
    )]
    time_limit: Option<Duration>,
    #[arg(
        help = "Show every expansion and wait this long after it, e.g. 100ms",
        long = "step-delay",
        value_parser = humantime::parse_duration
    )]
    step_delay: Option<Duration>,
    #[arg(help = "Print the result as JSON", long = "json")]
    json: bool,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a graph file (TOML, or JSON with a .json extension).
    Graph {
        #[arg(help = "The graph file")]
        path: PathBuf,
        #[arg(help = "Override the start node of the file", long = "start")]
        start: Option<String>,
        #[arg(help = "Override the goal node of the file", long = "goal")]
        goal: Option<String>,
        #[arg(help = "Ignore heuristic values and coordinates", long = "no-heuristic")]
        no_heuristic: bool,
    },
    /// Search one of the bundled sample graphs.
    Sample {
        #[arg(help = "Name of the sample, omit to list them or use --random")]
        name: Option<String>,
        #[arg(value_enum, help = "Pick a random sample of this family", long = "random")]
        random: Option<SampleFamily>,
        #[arg(help = "Seed for picking a random sample", long = "seed")]
        seed: Option<u64>,
    },
    /// Generate a maze and search it from its start to its end cell.
    Maze {
        #[arg(help = "Side length of the maze", short = 'n', long = "size")]
        size: Option<usize>,
        #[arg(help = "Seed for the maze generator", short = 's', long = "seed")]
        seed: Option<u64>,
        #[arg(value_enum, help = "The heuristic for A*", long = "heuristic")]
        heuristic: Option<MazeHeuristicName>,
        #[arg(help = "Start cell as x,y", long = "start")]
        start: Option<Position>,
        #[arg(help = "End cell as x,y", long = "end")]
        end: Option<Position>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match solve(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Settings from the config file with command line flags applied on top.
fn load_config(cli: &Cli) -> Result<SolverConfig, Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => SolverConfig::from_path(path)?,
        None => SolverConfig::default(),
    };
    if let Some(engine) = cli.search_engine_name {
        config.engine = engine;
    }
    if let Some(parent_policy) = cli.parent_policy {
        config.parent_policy = parent_policy;
    }
    config.max_expansions = cli.max_expansions.or(config.max_expansions);
    config.time_limit = cli.time_limit.or(config.time_limit);
    config.step_delay = cli.step_delay.or(config.step_delay);
    if let Commands::Maze {
        size,
        seed,
        heuristic,
        ..
    } = &cli.command
    {
        config.maze_size = size.unwrap_or(config.maze_size);
        config.seed = seed.or(config.seed);
        config.maze_heuristic = heuristic.unwrap_or(config.maze_heuristic);
    }
    Ok(config)
}

fn solve(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = load_config(&cli)?;
    let cancellation = CancellationToken::new();
    let settings = config.search_settings(cancellation.clone());
    info!(engine = config.engine.full_name());

    match &cli.command {
        Commands::Graph {
            path,
            start,
            goal,
            no_heuristic,
        } => {
            let file = GraphFile::from_path(path)?;
            let start = start.as_deref().map(NodeId::new).unwrap_or(file.start());
            let goal = goal.as_deref().map(NodeId::new).or(file.goal());
            let mut options = SearchOptions::from_graph_file(&file)?;
            if *no_heuristic {
                options.heuristic = TableHeuristic::new();
            }
            solve_graph(&cli, &config, &settings, &file.graph(), start, goal, &options)
        }
        Commands::Sample { name, random, seed } => {
            let sample = match (name, random) {
                (Some(name), _) => samples::sample(name)?,
                (None, Some(family)) => {
                    let mut rng = seeded_rng(*seed);
                    samples::random_sample(*family, &mut rng)
                }
                (None, None) => {
                    for sample in samples::samples() {
                        println!("{} ({:?})", sample.name, sample.family);
                    }
                    return Ok(());
                }
            };
            info!(sample = sample.name);
            let file = &sample.file;
            let options = SearchOptions::from_graph_file(file)?;
            solve_graph(
                &cli,
                &config,
                &settings,
                &file.graph(),
                file.start(),
                file.goal(),
                &options,
            )
        }
        Commands::Maze { start, end, .. } => {
            let mut rng = seeded_rng(config.seed);
            let mut maze = Maze::generate(config.maze_size, &mut rng)?;
            if let Some(start) = start {
                maze.set_start(*start)?;
            }
            if let Some(end) = end {
                maze.set_end(*end)?;
            }
            solve_maze(&cli, &config, &settings, &mut maze)
        }
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Observer for the run: a paced printer of every expansion when a step
/// delay is set, nothing otherwise.
fn make_observer<S: Display + 'static>(
    config: &SolverConfig,
    cancellation: &CancellationToken,
) -> Box<dyn SearchObserver<S>> {
    match config.step_delay {
        Some(delay) => {
            let mut term = Term::stderr();
            Box::new(PacedObserver::new(
                delay,
                cancellation.clone(),
                move |state: &S, step: usize| {
                    if let Err(e) = write_step(&mut term, step, state) {
                        warn!("failed to write step {}: {}", step, e);
                    }
                },
            ))
        }
        None => Box::new(NoObserver),
    }
}

fn write_step(out: &mut impl Write, step: usize, state: &impl Display) -> io::Result<()> {
    writeln!(out, "step {}: expanding {}", step, state)
}

fn solve_graph(
    cli: &Cli,
    config: &SolverConfig,
    settings: &SearchSettings,
    graph: &Graph,
    start: NodeId,
    goal: Option<NodeId>,
    options: &SearchOptions,
) -> Result<(), Box<dyn Error>> {
    let mut observer = make_observer::<NodeId>(config, &settings.cancellation);
    let result = search_graph_observed(
        config.engine,
        graph,
        start,
        goal,
        options,
        settings,
        observer.as_mut(),
    )?;
    if result.found_goal() {
        let problem = GraphProblem::new(graph, start, goal, &options.weights, &options.heuristic)?;
        check_path(&problem, &result);
    }
    report(cli, &result)
}

fn solve_maze(
    cli: &Cli,
    config: &SolverConfig,
    settings: &SearchSettings,
    maze: &mut Maze,
) -> Result<(), Box<dyn Error>> {
    let mut observer = make_observer::<Position>(config, &settings.cancellation);
    let result = search_maze_observed(
        config.engine,
        maze,
        config.maze_heuristic,
        settings,
        observer.as_mut(),
    )?;
    if result.found_goal() {
        let end = maze.end().ok_or("the maze has no end cell")?;
        let heuristic = config.maze_heuristic.create(end);
        let problem = MazeProblem::new(maze, heuristic.as_ref())?;
        check_path(&problem, &result);
    }
    maze.record_result(&result)?;
    if !cli.json {
        print!("{}", maze.render(cli.colour));
    }
    report(cli, &result)
}

fn check_path<P>(problem: &P, result: &SearchResult<P::State>)
where
    P: SearchProblem,
    P::State: Display,
{
    info!("validating path");
    match validate_path(problem, &result.path) {
        Ok(cost) if cost == result.cost => info!("path is valid"),
        Ok(cost) => warn!(
            "path is valid but costs {} rather than the reported {}",
            cost, result.cost
        ),
        Err(e) => warn!("path is invalid: {}", e),
    }
}

fn report<S>(cli: &Cli, result: &SearchResult<S>) -> Result<(), Box<dyn Error>>
where
    S: Copy + Ord + Hash + Debug + Display + Serialize,
{
    if cli.json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }
    println!("status: {}", result.status);
    println!("trace: {}", result.trace.iter().join(" "));
    if result.found_goal() {
        println!("path: {}", result.path.iter().join(" "));
        println!("cost: {}", result.cost);
    } else {
        println!("path: none");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_one_line_per_step() {
        let mut out = Vec::new();
        write_step(&mut out, 3, &"B").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "step 3: expanding B\n");
    }

    #[test]
    fn write_errors_are_reported() {
        let error = write_step(&mut ClosedPipe, 1, &"A").unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
    }
}
