use crate::grid::Position;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must have at least one row and one column")]
    EmptyGrid,

    #[error("{rows}x{cols} grid exceeds the {max_cells} cell limit")]
    TooLarge {
        rows: usize,
        cols: usize,
        max_cells: usize,
    },

    #[error("position {position} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        position: Position,
        rows: usize,
        cols: usize,
    },

    #[error("marker at {position} sits on a wall")]
    MarkerOnWall { position: Position },

    #[error("invalid coordinate '{0}', expected 'row,col'")]
    InvalidCoordinate(String),

    #[error("unexpected character '{ch}' in layout at row {row}, column {col}")]
    UnexpectedCharacter { ch: char, row: usize, col: usize },

    #[error("layout row {row} has {found} cells, expected {expected}")]
    RaggedLayout {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("layout has no {0} marker")]
    MissingMarker(&'static str),

    #[error("layout has more than one {marker} marker ({first} and {second})")]
    DuplicateMarker {
        marker: &'static str,
        first: Position,
        second: Position,
    },
}
