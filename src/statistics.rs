use crate::grid::{Grid, Position};
use pathfinding::prelude::bfs;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Statistics {
    pub algorithm: &'static str,
    pub found: bool,
    pub visited_nodes: usize,
    /// Moves along the reconstructed path; 0 when nothing was found.
    pub path_length: usize,
    /// Moves along a shortest path found independently of the engine.
    pub optimal_path_length: Option<usize>,
    pub search_time: Duration,
    pub open_cells: usize,
}

impl Statistics {
    /// Share of open cells the search had to finalize.
    pub fn exploration_ratio(&self) -> f64 {
        if self.open_cells > 0 {
            self.visited_nodes as f64 / self.open_cells as f64
        } else {
            0.0
        }
    }

    pub fn is_optimal(&self) -> bool {
        match self.optimal_path_length {
            Some(optimal) => self.found && self.path_length == optimal,
            None => !self.found,
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm: {}", self.algorithm)?;
        writeln!(f, "Path found: {}", if self.found { "yes" } else { "no" })?;
        writeln!(f, "Visited nodes: {} of {} open cells", self.visited_nodes, self.open_cells)?;
        writeln!(f, "Exploration: {:.1}%", self.exploration_ratio() * 100.0)?;
        if self.found {
            writeln!(f, "Path length: {}", self.path_length)?;
        }
        match self.optimal_path_length {
            Some(optimal) => writeln!(f, "Reference optimum (BFS): {}", optimal)?,
            None => writeln!(f, "Reference optimum (BFS): unreachable")?,
        }
        writeln!(f, "Search time: {:.2?}", self.search_time)?;
        Ok(())
    }
}

/// Shortest move count from start to finish, computed with the
/// `pathfinding` crate's BFS so engine results can be checked against it.
pub fn reference_path_length(grid: &Grid) -> Option<usize> {
    let (start, finish) = (grid.start(), grid.finish());
    if grid.is_wall(start) || !grid.contains(finish) {
        return None;
    }
    bfs(
        &start,
        |p: &Position| {
            grid.neighbors(*p)
                .into_iter()
                .filter(|neighbor| !grid.is_wall(*neighbor))
                .collect::<Vec<_>>()
        },
        |p| *p == finish,
    )
    .map(|path| path.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_length_routes_around_walls() {
        let grid = Grid::parse(
            "
            S#.
            .#.
            ..F
            ",
        )
        .unwrap();
        assert_eq!(reference_path_length(&grid), Some(4));

        let blocked = Grid::parse("S#F").unwrap();
        assert_eq!(reference_path_length(&blocked), None);
    }

    #[test]
    fn optimality_requires_matching_the_reference() {
        let mut stats = Statistics {
            algorithm: "a_star",
            found: true,
            visited_nodes: 4,
            path_length: 4,
            optimal_path_length: Some(4),
            search_time: Duration::ZERO,
            open_cells: 8,
        };
        assert!(stats.is_optimal());
        assert_eq!(stats.exploration_ratio(), 0.5);

        stats.path_length = 6;
        assert!(!stats.is_optimal());

        stats.found = false;
        stats.optimal_path_length = None;
        assert!(stats.is_optimal());
    }
}
