pub mod a_star;
pub mod common;
pub mod dijkstra;

pub use a_star::AStar;
pub use common::{run_search, SearchAlgorithm, SearchOutcome};
pub use dijkstra::Dijkstra;

/// The algorithms the visualizer can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Dijkstra,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Dijkstra, Algorithm::AStar];

    pub fn create(self) -> Box<dyn SearchAlgorithm> {
        match self {
            Algorithm::Dijkstra => Box::new(Dijkstra),
            Algorithm::AStar => Box::new(AStar),
        }
    }
}
