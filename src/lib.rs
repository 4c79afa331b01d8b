//! Grid pathfinding engine behind an animated terminal visualizer.
//!
//! A [`grid::Grid`] is edited through value-returning helpers, searched in
//! place by one of the [`algorithms`], and the resulting predecessor links
//! are turned into a route by [`path::reconstruct_path`].

pub mod algorithms;
pub mod config;
pub mod error;
pub mod grid;
pub mod path;
pub mod statistics;
pub mod visualizer;

pub use algorithms::{AStar, Algorithm, Dijkstra, SearchAlgorithm, SearchOutcome};
pub use error::GridError;
pub use grid::{Grid, Node, Position, UNREACHABLE};
pub use path::reconstruct_path;
