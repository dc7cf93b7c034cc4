use crate::maze::Position;

/// One grid position of a [`crate::maze::Maze`].
///
/// Besides the structure of the maze (wall, start and end flags) a cell holds
/// the bookkeeping of the last search recorded into the maze: whether it was
/// visited or lies on the path, its parent and its scores. Search engines never
/// write these fields themselves, see [`crate::maze::Maze::record_result`].
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    position: Position,
    is_wall: bool,
    is_start: bool,
    is_end: bool,
    is_visited: bool,
    is_path: bool,
    /// Back-pointer to the cell this one was reached from
    parent: Option<Position>,
    /// Accumulated cost from the start (g)
    distance: Option<f64>,
    /// Estimated remaining cost to the end (h)
    heuristic: Option<f64>,
    /// Combined score (f = g + h)
    f_score: Option<f64>,
}

impl Cell {
    pub fn new_wall(position: Position) -> Self {
        Self {
            position,
            is_wall: true,
            is_start: false,
            is_end: false,
            is_visited: false,
            is_path: false,
            parent: None,
            distance: None,
            heuristic: None,
            f_score: None,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_wall(&self) -> bool {
        self.is_wall
    }

    pub fn is_open(&self) -> bool {
        !self.is_wall
    }

    pub fn is_start(&self) -> bool {
        self.is_start
    }

    pub fn is_end(&self) -> bool {
        self.is_end
    }

    pub fn is_visited(&self) -> bool {
        self.is_visited
    }

    pub fn is_path(&self) -> bool {
        self.is_path
    }

    pub fn parent(&self) -> Option<Position> {
        self.parent
    }

    pub fn distance(&self) -> Option<f64> {
        self.distance
    }

    pub fn heuristic(&self) -> Option<f64> {
        self.heuristic
    }

    pub fn f_score(&self) -> Option<f64> {
        self.f_score
    }

    pub(crate) fn carve(&mut self) {
        self.is_wall = false;
    }

    pub(crate) fn set_start(&mut self, is_start: bool) {
        self.is_start = is_start;
    }

    pub(crate) fn set_end(&mut self, is_end: bool) {
        self.is_end = is_end;
    }

    pub(crate) fn mark_visited(&mut self) {
        self.is_visited = true;
    }

    pub(crate) fn mark_path(&mut self) {
        self.is_path = true;
    }

    pub(crate) fn set_parent(&mut self, parent: Position) {
        self.parent = Some(parent);
    }

    pub(crate) fn set_scores(&mut self, g: f64, h: f64, f: f64) {
        self.distance = Some(g);
        self.heuristic = Some(h);
        self.f_score = Some(f);
    }

    /// Whether any search bookkeeping is set.
    pub fn has_search_state(&self) -> bool {
        self.is_visited
            || self.is_path
            || self.parent.is_some()
            || self.distance.is_some()
            || self.heuristic.is_some()
            || self.f_score.is_some()
    }

    pub fn reset_search_state(&mut self) {
        self.is_visited = false;
        self.is_path = false;
        self.parent = None;
        self.distance = None;
        self.heuristic = None;
        self.f_score = None;
    }
}
