use crate::graph::{EdgeWeights, Graph, GraphFile};
use crate::maze::{Maze, Position};
use crate::search::{SearchOptions, TableHeuristic};

pub const BINARY_TREE_GRAPH_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/samples/traversal/binary_tree.toml"
));

pub const CYCLE_GRAPH_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/samples/traversal/cycle.toml"
));

pub const DIAMOND_GRAPH_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/samples/traversal/diamond.toml"
));

pub const DISCONNECTED_GRAPH_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/samples/traversal/disconnected.toml"
));

pub const FORK_GRAPH_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/samples/weighted/fork.toml"
));

pub fn diamond() -> (Graph, EdgeWeights, TableHeuristic) {
    let file = GraphFile::from_toml_str(DIAMOND_GRAPH_TEXT).unwrap();
    (
        file.graph(),
        file.weights().unwrap(),
        file.heuristic().unwrap(),
    )
}

pub fn diamond_with_options() -> (Graph, SearchOptions) {
    let file = GraphFile::from_toml_str(DIAMOND_GRAPH_TEXT).unwrap();
    (file.graph(), SearchOptions::from_graph_file(&file).unwrap())
}

/// Build a maze from text rows: `#` is a wall, `S` and `E` mark the start and
/// end, anything else is floor.
pub fn maze_from_rows(rows: &[&str]) -> Maze {
    let mut maze = Maze::walled(rows.len());
    let mut start = None;
    let mut end = None;
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), rows.len(), "mazes are square");
        for (x, symbol) in row.chars().enumerate() {
            let position = Position::new(x, y);
            if symbol != '#' {
                maze.carve(position, 0);
            }
            match symbol {
                'S' => start = Some(position),
                'E' => end = Some(position),
                _ => {}
            }
        }
    }
    if let Some(start) = start {
        maze.set_start(start).unwrap();
    }
    if let Some(end) = end {
        maze.set_end(end).unwrap();
    }
    maze
}
