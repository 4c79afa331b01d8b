use pathfinding::prelude::bfs;
use pathfinding_visualizer::{reconstruct_path, AStar, Dijkstra, Grid, Position, SearchAlgorithm};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_grid(rng: &mut StdRng, rows: usize, cols: usize, wall_ratio: f64) -> Grid {
    let start = Position::new(rng.gen_range(0..rows), rng.gen_range(0..cols));
    let finish = Position::new(rng.gen_range(0..rows), rng.gen_range(0..cols));
    let mut grid = Grid::new(rows, cols, start, finish).unwrap();
    for row in 0..rows {
        for col in 0..cols {
            let pos = Position::new(row, col);
            if pos != start && pos != finish && rng.gen_bool(wall_ratio) {
                grid = grid.with_wall_toggled(pos);
            }
        }
    }
    grid
}

fn oracle_length(grid: &Grid) -> Option<usize> {
    let finish = grid.finish();
    bfs(
        &grid.start(),
        |p: &Position| {
            grid.neighbors(*p)
                .into_iter()
                .filter(|n| !grid.is_wall(*n))
                .collect::<Vec<_>>()
        },
        |p| *p == finish,
    )
    .map(|path| path.len() - 1)
}

fn search(algorithm: &dyn SearchAlgorithm, grid: &Grid) -> (bool, Vec<Position>, Vec<Position>) {
    let mut grid = grid.clone();
    let (start, finish) = (grid.start(), grid.finish());
    let outcome = algorithm.search(&mut grid, start, finish);
    assert_eq!(outcome.found, outcome.visited.contains(&finish));
    (outcome.found, outcome.visited, reconstruct_path(&grid, finish))
}

#[test]
fn both_algorithms_match_the_bfs_oracle_on_random_grids() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..60 {
        let grid = random_grid(&mut rng, 12, 18, 0.3);
        let expected = oracle_length(&grid);

        for algorithm in [&Dijkstra as &dyn SearchAlgorithm, &AStar] {
            let (found, visited, path) = search(algorithm, &grid);
            match expected {
                Some(length) => {
                    assert!(found, "{} missed a reachable finish", algorithm.name());
                    assert_eq!(path.len(), length + 1);
                    assert_eq!(path.first(), Some(&grid.start()));
                    assert_eq!(path.last(), Some(&grid.finish()));
                }
                None => {
                    assert!(!found);
                    assert_eq!(path, vec![grid.finish()]);
                }
            }
            assert!(visited.iter().all(|p| !grid.is_wall(*p)));
        }
    }
}

#[test]
fn paths_are_contiguous_and_avoid_walls() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..40 {
        let grid = random_grid(&mut rng, 10, 10, 0.25);
        for algorithm in [&Dijkstra as &dyn SearchAlgorithm, &AStar] {
            let (_, _, path) = search(algorithm, &grid);
            for step in path.windows(2) {
                assert_eq!(step[0].manhattan(&step[1]), 1);
            }
            assert!(path.iter().all(|p| !grid.is_wall(*p)));
        }
    }
}

#[test]
fn open_grid_paths_have_manhattan_length() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..25 {
        let grid = random_grid(&mut rng, 8, 15, 0.0);
        let manhattan = grid.start().manhattan(&grid.finish()) as usize;

        let (_, dijkstra_visited, dijkstra_path) = search(&Dijkstra, &grid);
        let (_, a_star_visited, a_star_path) = search(&AStar, &grid);

        assert_eq!(dijkstra_path.len(), manhattan + 1);
        assert_eq!(a_star_path.len(), manhattan + 1);
        assert!(a_star_visited.len() <= dijkstra_visited.len());
    }
}

#[test]
fn repeated_searches_reproduce_the_visited_order() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut grid = random_grid(&mut rng, 20, 50, 0.2);
    let (start, finish) = (grid.start(), grid.finish());

    for algorithm in [&Dijkstra as &dyn SearchAlgorithm, &AStar] {
        let first = algorithm.search(&mut grid, start, finish);
        let second = algorithm.search(&mut grid, start, finish);
        assert_eq!(first, second);
    }
}

#[test]
fn moving_markers_changes_the_route() {
    let grid = Grid::parse(
        "
        S....
        .###.
        ....F
        ",
    )
    .unwrap();
    let moved = grid.with_markers(Position::new(2, 0), Position::new(0, 4));

    let (found, _, path) = search(&AStar, &moved);
    assert!(found);
    assert_eq!(path.first(), Some(&Position::new(2, 0)));
    assert_eq!(path.last(), Some(&Position::new(0, 4)));
    assert_eq!(path.len(), 7);
}
