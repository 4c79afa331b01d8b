use crate::grid::{Grid, Position};

/// Follows predecessor links back from `finish` and returns the path start
/// first, finish last.
///
/// When the finish was never reached the result is just `[finish]`; check
/// `SearchOutcome::found` to tell the two cases apart.
pub fn reconstruct_path(grid: &Grid, finish: Position) -> Vec<Position> {
    let mut path = Vec::new();
    let mut current = Some(finish);
    while let Some(position) = current {
        path.push(position);
        current = grid.node(position).and_then(|node| node.previous);
    }
    path.reverse();
    path
}

/// Number of moves along a reconstructed path.
pub fn path_cost(path: &[Position]) -> usize {
    path.len().saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{AStar, SearchAlgorithm};

    #[test]
    fn path_runs_from_start_to_finish() {
        let mut grid = Grid::parse(
            "
            S.#.
            ..#.
            ...F
            ",
        )
        .unwrap();
        let (start, finish) = (grid.start(), grid.finish());
        assert!(AStar.search(&mut grid, start, finish).found);

        let path = reconstruct_path(&grid, finish);
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&finish));
        assert_eq!(path_cost(&path), 5);
        for step in path.windows(2) {
            assert_eq!(step[0].manhattan(&step[1]), 1);
        }
    }

    #[test]
    fn unsearched_grid_yields_only_the_finish() {
        let grid = Grid::parse("S..F").unwrap();
        assert_eq!(reconstruct_path(&grid, grid.finish()), vec![grid.finish()]);
        assert_eq!(path_cost(&[grid.finish()]), 0);
    }
}
