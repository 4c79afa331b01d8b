use crate::algorithms::{Algorithm, SearchAlgorithm};
use crate::config::Config;
use crate::error::GridError;
use crate::grid::{Grid, Position};
use crate::path::{path_cost, reconstruct_path};
use crate::statistics::{reference_path_length, Statistics};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use std::thread;
use std::time::{Duration, Instant};

/// Builds the grid a run starts from: a layout string, or an empty board
/// with random walls followed by explicitly toggled cells.
pub fn build_grid(config: &Config) -> Result<Grid, GridError> {
    let grid = match &config.layout {
        Some(layout) => Grid::parse(&layout.replace('/', "\n"))?,
        None => {
            let mut grid = Grid::new(config.rows, config.cols, config.start, config.finish)?;
            let walls = scatter_walls(&grid, config.num_walls, config.seed);
            for wall in &walls {
                if let Some(node) = grid.node_mut(*wall) {
                    node.is_wall = true;
                }
            }
            log::info!("placed {} random walls", walls.len());

            for &wall in &config.walls {
                if wall == grid.start() || wall == grid.finish() {
                    log::warn!("skipping wall toggle on marker cell {}", wall);
                    continue;
                }
                grid = grid.with_wall_toggled(wall);
            }
            grid
        }
    };
    grid.validate()?;
    Ok(grid)
}

/// Picks up to `count` distinct open cells, never the start or finish.
/// `count` is capped at the number of such cells, and the search gives up
/// after `count * 3` draws, so crowded boards get fewer walls.
pub fn scatter_walls(grid: &Grid, count: usize, seed: Option<u64>) -> FxHashSet<Position> {
    let candidates = grid
        .nodes()
        .iter()
        .filter(|node| !node.is_wall && !node.is_start && !node.is_finish)
        .count();
    let count = count.min(candidates);
    let max_attempts = count.saturating_mul(3);

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut walls = FxHashSet::default();
    let mut attempts = 0;
    while walls.len() < count && attempts < max_attempts {
        let pos = Position::new(rng.gen_range(0..grid.rows()), rng.gen_range(0..grid.cols()));
        if pos != grid.start() && pos != grid.finish() && !grid.is_wall(pos) {
            walls.insert(pos);
        }
        attempts += 1;
    }
    walls
}

#[derive(Debug, Clone)]
pub struct RunResult {
    pub statistics: Statistics,
    pub visited: Vec<Position>,
    pub path: Vec<Position>,
}

pub struct Visualizer {
    grid: Grid,
    config: Config,
    optimal_path_length: Option<usize>,
}

impl Visualizer {
    pub fn new(config: Config) -> Result<Self, GridError> {
        let grid = build_grid(&config)?;
        Ok(Self::with_grid(config, grid))
    }

    pub fn with_grid(config: Config, grid: Grid) -> Self {
        let optimal_path_length = reference_path_length(&grid);
        Visualizer {
            grid,
            config,
            optimal_path_length,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Runs every selected algorithm against its own copy of the same grid.
    pub fn run_all(&self, algorithms: &[Algorithm]) -> Vec<RunResult> {
        algorithms
            .iter()
            .map(|algorithm| {
                let result = self.run(algorithm.create().as_ref());
                log::info!(
                    "{}: found={} visited={} path={}",
                    result.statistics.algorithm,
                    result.statistics.found,
                    result.statistics.visited_nodes,
                    result.statistics.path_length
                );
                result
            })
            .collect()
    }

    pub fn run(&self, algorithm: &dyn SearchAlgorithm) -> RunResult {
        let mut grid = self.grid.clone();
        let (start, finish) = (grid.start(), grid.finish());

        let search_start = Instant::now();
        let outcome = algorithm.search(&mut grid, start, finish);
        let search_time = search_start.elapsed();

        let path = if outcome.found {
            reconstruct_path(&grid, finish)
        } else {
            Vec::new()
        };

        let statistics = Statistics {
            algorithm: algorithm.name(),
            found: outcome.found,
            visited_nodes: outcome.visited.len(),
            path_length: path_cost(&path),
            optimal_path_length: self.optimal_path_length,
            search_time,
            open_cells: grid.nodes().len() - grid.wall_count(),
        };
        if !statistics.is_optimal() {
            log::warn!(
                "{} path length {} disagrees with reference {:?}",
                statistics.algorithm,
                statistics.path_length,
                statistics.optimal_path_length
            );
        }

        let result = RunResult {
            statistics,
            visited: outcome.visited,
            path,
        };
        if self.animates() {
            self.animate(&result);
        } else if !self.config.quiet {
            self.grid.print_grid(&result.visited, &result.path);
        }
        result
    }

    /// Playback runs unless visualization is off or output is quiet.
    pub fn animates(&self) -> bool {
        !self.config.no_visualization && !self.config.quiet
    }

    /// Plays back visited cells one at a time, then the path.
    fn animate(&self, result: &RunResult) {
        let name = result.statistics.algorithm;
        let visit_delay = Duration::from_millis(self.config.delay_ms);
        let path_delay = Duration::from_millis(self.config.path_delay_ms);

        for shown in 0..=result.visited.len() {
            self.draw_frame(name, &result.visited[..shown], &[]);
            thread::sleep(visit_delay);
        }
        for shown in 1..=result.path.len() {
            self.draw_frame(name, &result.visited, &result.path[..shown]);
            thread::sleep(path_delay);
        }

        if !result.statistics.found {
            println!("No path from {} to {}", self.grid.start(), self.grid.finish());
        }
    }

    fn draw_frame(&self, name: &str, visited: &[Position], path: &[Position]) {
        clear_screen();
        println!("=== PATHFINDING VISUALIZER ===");
        println!(
            "Algorithm: {} | Visited: {} | Path: {}",
            name,
            visited.len(),
            path.len()
        );
        self.grid.print_grid(visited, path);
    }

    pub fn print_comparison_results(results: &[RunResult]) {
        println!("\n=== ALGORITHM COMPARISON RESULTS ===");
        println!();
        println!(
            "{:<12} {:<8} {:<10} {:<8} {:<10} {:<12} {:<12}",
            "Algorithm", "Found", "Visited", "Path", "Optimal", "Explored", "Search Time"
        );
        println!("{}", "-".repeat(76));

        for result in results {
            let stats = &result.statistics;
            let found = if stats.found { "yes" } else { "no" };
            let path = if stats.found {
                stats.path_length.to_string()
            } else {
                "-".to_string()
            };
            let optimal = stats
                .optimal_path_length
                .map_or_else(|| "-".to_string(), |length| length.to_string());
            println!(
                "{:<12} {:<8} {:<10} {:<8} {:<10} {:<12} {:<12}",
                stats.algorithm,
                found,
                stats.visited_nodes,
                path,
                optimal,
                format!("{:.1}%", stats.exploration_ratio() * 100.0),
                format!("{:.2?}", stats.search_time)
            );
        }
        println!();

        let successful: Vec<&Statistics> = results
            .iter()
            .map(|result| &result.statistics)
            .filter(|stats| stats.found)
            .collect();
        let Some(fewest) = successful.iter().min_by_key(|stats| stats.visited_nodes) else {
            println!("No algorithm reached the finish.");
            return;
        };

        println!("=== PERFORMANCE ANALYSIS ===");
        println!(
            "Fewest visited nodes: {} ({} nodes)",
            fewest.algorithm, fewest.visited_nodes
        );
        let lengths: FxHashSet<usize> = successful.iter().map(|stats| stats.path_length).collect();
        if lengths.len() == 1 {
            println!("All algorithms agree on path length");
        } else {
            println!("Path lengths differ: {:?}", lengths);
        }
    }
}

fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
}
