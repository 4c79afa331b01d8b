use crate::algorithms::common::SearchAlgorithm;
use crate::grid::Node;

/// Uniform-cost search: the frontier is ordered by distance from the start
/// alone, so exploration spreads evenly in every direction.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl SearchAlgorithm for Dijkstra {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn priority(&self, node: &Node) -> u32 {
        node.distance
    }
}
