use crate::maze::{generator, Cell, MazeError, Position};
use crate::search::search_engines::SearchResult;
use console::style;
use rand::Rng;
use smallvec::SmallVec;
use std::fmt::{Display, Formatter};

/// Directions in which open neighbours are listed: up, right, down, left.
pub(crate) const DIRECTIONS: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

pub type Neighbours = SmallVec<[Position; 4]>;

/// A square grid of cells, each either a wall or open floor, with an optional
/// designated start and end cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    size: usize,
    /// Cells in row-major order
    cells: Vec<Cell>,
    start: Option<Position>,
    end: Option<Position>,
    /// Number of adjacent open pairs created while carving
    passages: usize,
}

impl Maze {
    /// A `size` x `size` grid where every cell is a wall.
    pub(crate) fn walled(size: usize) -> Self {
        let cells = (0..size * size)
            .map(|index| Cell::new_wall(Position::new(index % size, index / size)))
            .collect();
        Self {
            size,
            cells,
            start: None,
            end: None,
            passages: 0,
        }
    }

    /// Generate a perfect maze, see [`generator::generate`].
    pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self, MazeError> {
        generator::generate(size, rng)
    }

    /// Open the cell at `position`. Carving the cell next to an already open
    /// one counts as one passage.
    pub(crate) fn carve(&mut self, position: Position, passages: usize) {
        let index = self.index(position).expect("carved cell must be in bounds");
        self.cells[index].carve();
        self.passages += passages;
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.in_bounds(position)
            .then_some(position.y * self.size + position.x)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        position.x < self.size && position.y < self.size
    }

    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.index(position).map(|index| &self.cells[index])
    }

    fn cell_mut(&mut self, position: Position) -> Result<&mut Cell, MazeError> {
        match self.index(position) {
            Some(index) => Ok(&mut self.cells[index]),
            None => Err(MazeError::OutOfBounds(position)),
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    pub fn is_open(&self, position: Position) -> bool {
        self.cell(position).is_some_and(Cell::is_open)
    }

    /// The open cells next to `position`, listed up, right, down, left.
    pub fn open_neighbours(&self, position: Position) -> Neighbours {
        DIRECTIONS
            .iter()
            .filter_map(|&(dx, dy)| position.offset(dx, dy))
            .filter(|&neighbour| self.is_open(neighbour))
            .collect()
    }

    pub fn open_cell_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_open()).count()
    }

    pub fn passage_count(&self) -> usize {
        self.passages
    }

    pub fn start(&self) -> Option<Position> {
        self.start
    }

    pub fn end(&self) -> Option<Position> {
        self.end
    }

    /// Make `position` the start cell. If it was the end cell, the maze no
    /// longer has an end.
    pub fn set_start(&mut self, position: Position) -> Result<(), MazeError> {
        self.check_open(position)?;
        if let Some(previous) = self.start.take() {
            self.cell_mut(previous)?.set_start(false);
        }
        if self.end == Some(position) {
            self.end = None;
        }
        let cell = self.cell_mut(position)?;
        cell.set_end(false);
        cell.set_start(true);
        self.start = Some(position);
        Ok(())
    }

    /// Make `position` the end cell. If it was the start cell, the maze no
    /// longer has a start.
    pub fn set_end(&mut self, position: Position) -> Result<(), MazeError> {
        self.check_open(position)?;
        if let Some(previous) = self.end.take() {
            self.cell_mut(previous)?.set_end(false);
        }
        if self.start == Some(position) {
            self.start = None;
        }
        let cell = self.cell_mut(position)?;
        cell.set_start(false);
        cell.set_end(true);
        self.end = Some(position);
        Ok(())
    }

    fn check_open(&self, position: Position) -> Result<(), MazeError> {
        match self.cell(position) {
            None => Err(MazeError::OutOfBounds(position)),
            Some(cell) if cell.is_wall() => Err(MazeError::NotOpen(position)),
            Some(_) => Ok(()),
        }
    }

    pub fn clear_endpoints(&mut self) {
        for cell in &mut self.cells {
            cell.set_start(false);
            cell.set_end(false);
        }
        self.start = None;
        self.end = None;
    }

    /// Place the start in the top left corner `(1, 1)` and the end in the
    /// bottom right corner `(size - 2, size - 2)`.
    pub fn set_default_endpoints(&mut self) -> Result<(), MazeError> {
        self.clear_endpoints();
        self.set_start(Position::new(1, 1))?;
        self.set_end(Position::new(self.size - 2, self.size - 2))
    }

    pub fn has_search_state(&self) -> bool {
        self.cells.iter().any(Cell::has_search_state)
    }

    /// Clear what the last recorded search left in the cells. Needed before a
    /// new result can be recorded.
    pub fn reset_search_state(&mut self) {
        for cell in &mut self.cells {
            cell.reset_search_state();
        }
    }

    /// Write a search result into the cells: traced cells become visited, path
    /// cells are marked, and parents and scores are copied over.
    pub fn record_result(&mut self, result: &SearchResult<Position>) -> Result<(), MazeError> {
        if self.has_search_state() {
            return Err(MazeError::StaleSearchState);
        }
        let positions = result
            .trace
            .iter()
            .chain(result.path.iter())
            .chain(result.parents.iter().flat_map(|(child, parent)| [child, parent]))
            .chain(result.scores.keys());
        for &position in positions {
            if !self.in_bounds(position) {
                return Err(MazeError::OutOfBounds(position));
            }
        }
        for &position in &result.trace {
            self.cell_mut(position)?.mark_visited();
        }
        for (&child, &parent) in &result.parents {
            self.cell_mut(child)?.set_parent(parent);
        }
        for (&position, scores) in &result.scores {
            self.cell_mut(position)?
                .set_scores(scores.g, scores.h, scores.f);
        }
        for &position in &result.path {
            self.cell_mut(position)?.mark_path();
        }
        Ok(())
    }

    fn symbol(cell: &Cell) -> char {
        if cell.is_wall() {
            '#'
        } else if cell.is_start() {
            'S'
        } else if cell.is_end() {
            'E'
        } else if cell.is_path() {
            '*'
        } else if cell.is_visited() {
            '.'
        } else {
            ' '
        }
    }

    /// Render the maze for a terminal, with colours when `colour` is set.
    pub fn render(&self, colour: bool) -> String {
        let mut out = String::with_capacity(self.size * (self.size * 2 + 1));
        for row in self.rows() {
            for cell in row {
                let symbol = Self::symbol(cell);
                if !colour {
                    out.push(symbol);
                    continue;
                }
                let styled = match symbol {
                    '#' => style('█').dim(),
                    'S' => style('S').green().bold(),
                    'E' => style('E').red().bold(),
                    '*' => style('*').blue().bold(),
                    '.' => style('.').yellow(),
                    other => style(other),
                };
                out.push_str(&styled.force_styling(true).to_string());
            }
            out.push('\n');
        }
        out
    }
}

impl Display for Maze {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(false))
    }
}
