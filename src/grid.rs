use crate::error::GridError;
use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

/// Sentinel for "no known cost yet"; plays the role of infinity for both
/// `distance` and `heuristic`.
pub const UNREACHABLE: u32 = u32::MAX;

/// Largest grid `Grid::new` will allocate. Keeps every path cost well
/// inside `u32`.
pub const MAX_CELLS: usize = 1 << 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Manhattan distance; the only admissible estimate for 4-way unit-cost moves.
    pub fn manhattan(&self, other: &Position) -> u32 {
        let distance = self.row.abs_diff(other.row).saturating_add(self.col.abs_diff(other.col));
        u32::try_from(distance).unwrap_or(UNREACHABLE)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Parses `row,col`, the format used on the command line.
impl FromStr for Position {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GridError::InvalidCoordinate(s.to_string());
        let (row, col) = s.split_once(',').ok_or_else(invalid)?;
        let row = row.trim().parse().map_err(|_| invalid())?;
        let col = col.trim().parse().map_err(|_| invalid())?;
        Ok(Position { row, col })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub position: Position,
    pub is_wall: bool,
    pub is_start: bool,
    pub is_finish: bool,
    pub distance: u32,
    pub heuristic: u32,
    pub is_visited: bool,
    /// Predecessor on the best known path. An identifier, not an owner.
    pub previous: Option<Position>,
}

impl Node {
    pub fn new(row: usize, col: usize, start: Position, finish: Position) -> Self {
        let position = Position { row, col };
        Node {
            position,
            is_wall: false,
            is_start: position == start,
            is_finish: position == finish,
            distance: UNREACHABLE,
            heuristic: UNREACHABLE,
            is_visited: false,
            previous: None,
        }
    }

    /// Clears everything a search writes, leaving walls and markers alone.
    pub fn reset(&mut self) {
        self.distance = UNREACHABLE;
        self.heuristic = UNREACHABLE;
        self.is_visited = false;
        self.previous = None;
    }
}

/// Row-major grid of nodes with fixed dimensions.
///
/// Editing operations (`with_wall_toggled`, `with_markers`) borrow the grid
/// and hand back a new value, so callers can treat grids as snapshots. The
/// search engine is the only code that mutates nodes in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    nodes: Vec<Node>,
    start: Position,
    finish: Position,
}

impl Grid {
    pub fn new(
        rows: usize,
        cols: usize,
        start: Position,
        finish: Position,
    ) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        let cells = rows
            .checked_mul(cols)
            .filter(|&cells| cells <= MAX_CELLS)
            .ok_or(GridError::TooLarge {
                rows,
                cols,
                max_cells: MAX_CELLS,
            })?;

        let mut nodes = Vec::with_capacity(cells);
        for row in 0..rows {
            for col in 0..cols {
                nodes.push(Node::new(row, col, start, finish));
            }
        }

        let grid = Grid {
            rows,
            cols,
            nodes,
            start,
            finish,
        };
        grid.check_bounds(start)?;
        grid.check_bounds(finish)?;
        Ok(grid)
    }

    /// Builds a grid from a text layout: `S` start, `F` finish, `#` wall,
    /// `.` open. Blank lines and surrounding whitespace are ignored.
    pub fn parse(layout: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = layout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let cols = lines.first().map_or(0, |line| line.chars().count());
        if cols == 0 {
            return Err(GridError::EmptyGrid);
        }

        let mut start = None;
        let mut finish = None;
        let mut walls = Vec::new();

        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(GridError::RaggedLayout {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let position = Position { row, col };
                match ch {
                    '.' => {}
                    '#' => walls.push(position),
                    'S' => set_marker(&mut start, "start", position)?,
                    'F' => set_marker(&mut finish, "finish", position)?,
                    _ => return Err(GridError::UnexpectedCharacter { ch, row, col }),
                }
            }
        }

        let start = start.ok_or(GridError::MissingMarker("start"))?;
        let finish = finish.ok_or(GridError::MissingMarker("finish"))?;
        let mut grid = Grid::new(lines.len(), cols, start, finish)?;
        for wall in walls {
            if let Some(node) = grid.node_mut(wall) {
                node.is_wall = true;
            }
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn finish(&self) -> Position {
        self.finish
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row < self.rows && position.col < self.cols
    }

    pub fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.row * self.cols + position.col)
    }

    pub fn node(&self, position: Position) -> Option<&Node> {
        self.index(position).map(|i| &self.nodes[i])
    }

    pub(crate) fn node_mut(&mut self, position: Position) -> Option<&mut Node> {
        self.index(position).map(move |i| &mut self.nodes[i])
    }

    pub(crate) fn node_at_mut(&mut self, index: usize) -> &mut Node {
        &mut self.nodes[index]
    }

    pub fn is_wall(&self, position: Position) -> bool {
        self.node(position).is_some_and(|node| node.is_wall)
    }

    pub fn wall_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_wall).count()
    }

    /// Returns a copy with the wall flag at `position` flipped.
    ///
    /// Flipping the start or finish cell is not prevented here; callers are
    /// expected to avoid it.
    pub fn with_wall_toggled(&self, position: Position) -> Grid {
        let mut grid = self.clone();
        match grid.node_mut(position) {
            Some(node) => node.is_wall = !node.is_wall,
            None => log::warn!(
                "ignoring wall toggle at {} outside {}x{} grid",
                position,
                self.rows,
                self.cols
            ),
        }
        grid
    }

    /// Returns a copy with start/finish flags recomputed for every node.
    pub fn with_markers(&self, start: Position, finish: Position) -> Grid {
        let mut grid = self.clone();
        grid.start = start;
        grid.finish = finish;
        for node in &mut grid.nodes {
            node.is_start = node.position == start;
            node.is_finish = node.position == finish;
        }
        grid
    }

    /// Checks what a search assumes: both markers are in bounds and open.
    pub fn validate(&self) -> Result<(), GridError> {
        for marker in [self.start, self.finish] {
            self.check_bounds(marker)?;
            if self.is_wall(marker) {
                return Err(GridError::MarkerOnWall { position: marker });
            }
        }
        Ok(())
    }

    pub fn reset_search_state(&mut self) {
        self.nodes.iter_mut().for_each(Node::reset);
    }

    /// In-bounds cardinal neighbours in up, down, left, right order.
    pub fn neighbors(&self, position: Position) -> Vec<Position> {
        let Position { row, col } = position;
        let mut neighbors = Vec::with_capacity(4);
        if row > 0 {
            neighbors.push(Position::new(row - 1, col));
        }
        if row + 1 < self.rows {
            neighbors.push(Position::new(row + 1, col));
        }
        if col > 0 {
            neighbors.push(Position::new(row, col - 1));
        }
        if col + 1 < self.cols {
            neighbors.push(Position::new(row, col + 1));
        }
        neighbors
    }

    /// Draws the grid with row/column headers. Path cells win over visited
    /// cells; markers and walls win over both.
    pub fn render(&self, visited: &[Position], path: &[Position]) -> String {
        let mut overlay = vec![' '; self.nodes.len()];
        for &position in visited {
            if let Some(i) = self.index(position) {
                overlay[i] = 'o';
            }
        }
        for &position in path {
            if let Some(i) = self.index(position) {
                overlay[i] = '*';
            }
        }

        let mut out = String::new();
        out.push_str("   ");
        for col in 0..self.cols {
            let _ = write!(out, "{}", col % 10);
        }
        out.push('\n');

        for row in 0..self.rows {
            let _ = write!(out, "{:2} ", row);
            for col in 0..self.cols {
                let i = row * self.cols + col;
                let node = &self.nodes[i];
                let ch = if node.is_start {
                    'S'
                } else if node.is_finish {
                    'F'
                } else if node.is_wall {
                    '#'
                } else if overlay[i] != ' ' {
                    overlay[i]
                } else {
                    '.'
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }

    pub fn print_grid(&self, visited: &[Position], path: &[Position]) {
        println!("Legend: S=Start, F=Finish, #=Wall, o=Visited, *=Path, .=Open");
        print!("{}", self.render(visited, path));
        println!();
    }

    fn check_bounds(&self, position: Position) -> Result<(), GridError> {
        if self.contains(position) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                position,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}

fn set_marker(
    slot: &mut Option<Position>,
    marker: &'static str,
    position: Position,
) -> Result<(), GridError> {
    match slot {
        Some(first) => Err(GridError::DuplicateMarker {
            marker,
            first: *first,
            second: position,
        }),
        None => {
            *slot = Some(position);
            Ok(())
        }
    }
}
