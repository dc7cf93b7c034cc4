mod repl_command;

use clap::Parser;
use console::style;
use dialoguer::{theme::ColorfulTheme, BasicHistory, Input};
use graphwalk::{
    graph::{samples, GraphFile, NodeId},
    search::{
        search_graph, ReplayMode, SearchEngineName, SearchOptions, SearchSettings, StepOutcome,
        StepReplay, Verbosity,
    },
};
use itertools::Itertools;
use repl_command::ReplCommand;
use std::{error::Error, path::PathBuf, process::ExitCode};
use strum::IntoEnumIterator;
use tracing::error;

#[derive(Parser)]
#[command(version)]
/// Practise search algorithms: enter the nodes in the order the chosen engine
/// expands them and get told after every step whether it was right.
struct Cli {
    #[arg(help = "The graph file, a bundled sample is used when omitted")]
    path: Option<PathBuf>,
    #[arg(
        help = "The bundled sample to use when no file is given",
        long = "sample",
        default_value = "binary-tree"
    )]
    sample: String,
    #[arg(
        value_enum,
        help = "The search engine to follow",
        short = 'e',
        long = "engine",
        id = "ENGINE",
        default_value_t = SearchEngineName::Dfs
    )]
    search_engine_name: SearchEngineName,
    #[arg(
        help = "Keep going after a wrong step instead of ending the attempt",
        long = "retry"
    )]
    retry: bool,
    #[arg(
        help = "Follow the final path rather than the expansion order",
        long = "path"
    )]
    path_only: bool,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Silent
    )]
    verbosity: Verbosity,
}

struct Exercise {
    file: GraphFile,
    options: SearchOptions,
    mode: ReplayMode,
    path_only: bool,
}

impl Exercise {
    fn replay(&self, engine: SearchEngineName) -> Result<StepReplay<NodeId>, Box<dyn Error>> {
        let result = search_graph(
            engine,
            &self.file.graph(),
            self.file.start(),
            self.file.goal(),
            &self.options,
            &SearchSettings::default(),
        )?;
        let expected = if self.path_only {
            result.path
        } else {
            result.trace
        };
        Ok(StepReplay::new(expected, self.mode))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match load_exercise(&cli).and_then(|exercise| run_repl(exercise, cli.search_engine_name)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_exercise(cli: &Cli) -> Result<Exercise, Box<dyn Error>> {
    let file = match &cli.path {
        Some(path) => GraphFile::from_path(path)?,
        None => samples::sample(&cli.sample)?.file.clone(),
    };
    let options = SearchOptions::from_graph_file(&file)?;
    Ok(Exercise {
        file,
        options,
        mode: if cli.retry {
            ReplayMode::Retry
        } else {
            ReplayMode::StopOnMismatch
        },
        path_only: cli.path_only,
    })
}

fn print_intro(exercise: &Exercise, engine: SearchEngineName) {
    println!("{}", style(engine.full_name()).bold());
    print!("{}", exercise.file.graph());
    match exercise.file.goal() {
        Some(goal) => println!("start: {}, goal: {}", exercise.file.start(), goal),
        None => println!("start: {}", exercise.file.start()),
    }
    if engine.is_informed() && !exercise.options.weights.is_empty() {
        let weights = exercise
            .options
            .weights
            .iter()
            .map(|((from, to), weight)| format!("{}->{}={}", from, to, weight))
            .sorted()
            .join(", ");
        println!("weights: {}", weights);
    }
}

fn print_help() {
    println!("Commands:");
    println!("  <node> or visit <node>: enter the next node");
    println!("  hint: show the expected next node");
    println!("  progress: show how far along you are");
    println!("  restart: start the current exercise again");
    println!(
        "  engine <{}>: switch engine and restart",
        SearchEngineName::iter().join("|")
    );
    println!("  show: print the graph again");
    println!("  help: show this help message");
    println!("  exit: exit the REPL");
}

fn run_repl(exercise: Exercise, engine: SearchEngineName) -> Result<(), Box<dyn Error>> {
    let mut history = BasicHistory::new().max_entries(100).no_duplicates(true);
    let mut engine = engine;
    let mut replay = exercise.replay(engine)?;
    print_intro(&exercise, engine);
    print_help();

    loop {
        let Ok(input) = Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Next node")
            .history_with(&mut history)
            .interact_text()
        else {
            break;
        };

        match ReplCommand::parse(&input) {
            Some(ReplCommand::Exit) => break,
            Some(ReplCommand::Help) => print_help(),
            Some(ReplCommand::Show) => print_intro(&exercise, engine),
            Some(ReplCommand::Hint) => match replay.hint() {
                Some(node) => println!("next is {}", node),
                None => println!("nothing left to enter, try restart"),
            },
            Some(ReplCommand::Progress) => {
                let (done, total) = replay.progress();
                println!(
                    "{}/{} steps: {} ({} mistakes)",
                    done,
                    total,
                    replay.accepted().iter().join(" "),
                    replay.mistakes()
                );
            }
            Some(ReplCommand::Restart) => {
                replay.restart();
                println!("restarted");
            }
            Some(ReplCommand::Engine(new_engine)) => {
                engine = new_engine;
                replay = exercise.replay(engine)?;
                print_intro(&exercise, engine);
            }
            Some(ReplCommand::Visit(name)) => match replay.submit(NodeId::new(&name)) {
                Ok(StepOutcome::Correct { step }) => {
                    println!("{} step {}: {}", style("correct").green(), step, name)
                }
                Ok(StepOutcome::Completed) => println!(
                    "{} you followed {} all the way",
                    style("done!").green().bold(),
                    engine.full_name()
                ),
                Ok(StepOutcome::Mismatch {
                    step,
                    expected,
                    got,
                }) => println!(
                    "{} step {}: {} expands {} here, not {}",
                    style("wrong").red(),
                    step,
                    engine,
                    expected,
                    got
                ),
                Err(e) => println!("{}, type restart to try again", e),
            },
            None => println!("Unknown command"),
        }
    }
    Ok(())
}
