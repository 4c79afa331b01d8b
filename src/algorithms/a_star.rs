use crate::algorithms::common::SearchAlgorithm;
use crate::grid::{Node, Position};

/// Heuristic-guided search ordered by `distance + heuristic`.
///
/// The heuristic is the Manhattan distance to the finish, which never
/// overestimates under 4-way unit-cost movement, so paths stay optimal.
#[derive(Debug, Default, Clone, Copy)]
pub struct AStar;

impl SearchAlgorithm for AStar {
    fn name(&self) -> &'static str {
        "a_star"
    }

    fn priority(&self, node: &Node) -> u32 {
        node.distance.saturating_add(node.heuristic)
    }

    fn estimate(&self, from: Position, to: Position) -> Option<u32> {
        Some(from.manhattan(&to))
    }
}
