use clap::Parser;
use graphwalk::{
    maze::{Maze, MazeError, Position, DEFAULT_MAZE_SIZE},
    search::Verbosity,
};
use rand::{rngs::StdRng, SeedableRng};
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Generate a maze and print it.
struct Cli {
    #[arg(
        help = "Side length of the maze, even sizes are rounded down",
        short = 'n',
        long = "size",
        default_value_t = DEFAULT_MAZE_SIZE
    )]
    size: usize,
    #[arg(help = "Seed for the random generator", short = 's', long = "seed")]
    seed: Option<u64>,
    #[arg(help = "Start cell as x,y", long = "start")]
    start: Option<Position>,
    #[arg(help = "End cell as x,y", long = "end")]
    end: Option<Position>,
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

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut maze = match Maze::generate(cli.size, &mut rng) {
        Ok(maze) => maze,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    info!(size = maze.size(), open_cells = maze.open_cell_count());

    if let Err(e) = place_endpoints(&mut maze, cli.start, cli.end) {
        error!("{}", e);
        return ExitCode::FAILURE;
    }

    print!("{}", maze.render(cli.colour));
    ExitCode::SUCCESS
}

fn place_endpoints(
    maze: &mut Maze,
    start: Option<Position>,
    end: Option<Position>,
) -> Result<(), MazeError> {
    if let Some(start) = start {
        maze.set_start(start)?;
    }
    if let Some(end) = end {
        maze.set_end(end)?;
    }
    Ok(())
}
