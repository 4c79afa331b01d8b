use crate::grid::{Grid, Node, Position, UNREACHABLE};
use std::collections::VecDeque;

/// Result of one search: the order in which nodes were finalized, and
/// whether the finish was among them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub visited: Vec<Position>,
    pub found: bool,
}

pub trait SearchAlgorithm {
    fn name(&self) -> &'static str;

    /// Frontier ordering key; lower is expanded first. `UNREACHABLE` means
    /// the node cannot be reached and ends the search.
    fn priority(&self, node: &Node) -> u32;

    /// Remaining-cost estimate stored in `Node::heuristic`. Uninformed
    /// searches return `None` and leave the field untouched.
    fn estimate(&self, _from: Position, _to: Position) -> Option<u32> {
        None
    }

    /// Searches `grid` from `start` to `finish`, writing distances,
    /// estimates, visited flags and predecessors into the grid's nodes.
    fn search(&self, grid: &mut Grid, start: Position, finish: Position) -> SearchOutcome {
        run_search(self, grid, start, finish)
    }
}

/// Frontier/relaxation loop shared by every algorithm.
///
/// The frontier is every open node in row-major order. Each round it is
/// stable-sorted by the algorithm's priority, so ties keep the order left by
/// the previous round. Walls never enter the frontier and are never relaxed.
pub fn run_search<A: SearchAlgorithm + ?Sized>(
    algorithm: &A,
    grid: &mut Grid,
    start: Position,
    finish: Position,
) -> SearchOutcome {
    grid.reset_search_state();

    let (Some(start_index), Some(finish_index)) = (grid.index(start), grid.index(finish)) else {
        log::warn!(
            "{}: start {} or finish {} outside {}x{} grid",
            algorithm.name(),
            start,
            finish,
            grid.rows(),
            grid.cols()
        );
        return SearchOutcome::default();
    };

    log::debug!("{}: searching {} -> {}", algorithm.name(), start, finish);

    let start_node = grid.node_at_mut(start_index);
    start_node.distance = 0;
    if let Some(estimate) = algorithm.estimate(start, finish) {
        start_node.heuristic = estimate;
    }

    let mut frontier: VecDeque<usize> = grid
        .nodes()
        .iter()
        .enumerate()
        .filter(|(_, node)| !node.is_wall)
        .map(|(index, _)| index)
        .collect();
    let mut visited = Vec::new();

    while !frontier.is_empty() {
        let nodes = grid.nodes();
        frontier
            .make_contiguous()
            .sort_by_key(|&index| algorithm.priority(&nodes[index]));

        let Some(current) = frontier.pop_front() else {
            break;
        };
        let node = &nodes[current];
        if algorithm.priority(node) == UNREACHABLE {
            log::debug!(
                "{}: finish unreachable after {} visited nodes",
                algorithm.name(),
                visited.len()
            );
            return SearchOutcome {
                visited,
                found: false,
            };
        }

        let position = node.position;
        let distance = node.distance;
        log::trace!("{}: expanding {} at distance {}", algorithm.name(), position, distance);

        grid.node_at_mut(current).is_visited = true;
        visited.push(position);

        if current == finish_index {
            log::debug!(
                "{}: reached finish at distance {} after {} visited nodes",
                algorithm.name(),
                distance,
                visited.len()
            );
            return SearchOutcome {
                visited,
                found: true,
            };
        }

        relax_neighbors(algorithm, grid, position, distance, finish);
    }

    log::debug!("{}: frontier exhausted", algorithm.name());
    SearchOutcome {
        visited,
        found: false,
    }
}

fn relax_neighbors<A: SearchAlgorithm + ?Sized>(
    algorithm: &A,
    grid: &mut Grid,
    position: Position,
    distance: u32,
    finish: Position,
) {
    let tentative = distance + 1;
    for neighbor in grid.neighbors(position) {
        let Some(index) = grid.index(neighbor) else {
            continue;
        };
        let node = grid.node_at_mut(index);
        if node.is_visited || node.is_wall || tentative >= node.distance {
            continue;
        }
        node.distance = tentative;
        if let Some(estimate) = algorithm.estimate(neighbor, finish) {
            node.heuristic = estimate;
        }
        node.previous = Some(position);
    }
}
