use crate::algorithms::Algorithm;
use crate::grid::Position;
use clap::{Parser, ValueEnum};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmChoice {
    Dijkstra,
    AStar,
    /// Run every algorithm on the same grid and compare.
    All,
}

impl AlgorithmChoice {
    pub fn algorithms(self) -> Vec<Algorithm> {
        match self {
            AlgorithmChoice::Dijkstra => vec![Algorithm::Dijkstra],
            AlgorithmChoice::AStar => vec![Algorithm::AStar],
            AlgorithmChoice::All => Algorithm::ALL.to_vec(),
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Animated Dijkstra / A* search on a grid", long_about = None)]
pub struct Config {
    #[arg(long, default_value_t = 20)]
    pub rows: usize,

    #[arg(long, default_value_t = 50)]
    pub cols: usize,

    /// Start cell as `row,col`.
    #[arg(long, default_value = "10,15")]
    pub start: Position,

    /// Finish cell as `row,col`.
    #[arg(long, default_value = "10,35")]
    pub finish: Position,

    #[arg(long, value_enum, default_value_t = AlgorithmChoice::AStar)]
    pub algorithm: AlgorithmChoice,

    /// Random walls to scatter; never placed on start or finish.
    #[arg(long, default_value_t = 0)]
    pub num_walls: usize,

    /// Seed for wall placement.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Toggle the wall at `row,col`. May be repeated.
    #[arg(long = "wall")]
    pub walls: Vec<Position>,

    /// Inline layout using `S`, `F`, `#` and `.`, rows separated by `/` or
    /// newlines. Replaces the size, marker and wall options.
    #[arg(long)]
    pub layout: Option<String>,

    /// Delay between visited cells.
    #[arg(long, default_value_t = 10)]
    pub delay_ms: u64,

    /// Delay between path cells.
    #[arg(long, default_value_t = 50)]
    pub path_delay_ms: u64,

    #[arg(long, default_value_t = false)]
    pub no_visualization: bool,

    /// Minimal output: no banner, no playback, no final frame.
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_board() {
        let config = Config::try_parse_from(["pathfinding_visualizer"]).unwrap();
        assert_eq!((config.rows, config.cols), (20, 50));
        assert_eq!(config.start, Position::new(10, 15));
        assert_eq!(config.finish, Position::new(10, 35));
        assert_eq!(config.algorithm, AlgorithmChoice::AStar);
        assert_eq!((config.delay_ms, config.path_delay_ms), (10, 50));
        assert!(config.walls.is_empty());
    }

    #[test]
    fn parses_coordinates_and_repeated_walls() {
        let config = Config::try_parse_from([
            "pathfinding_visualizer",
            "--algorithm",
            "all",
            "--start",
            "0,0",
            "--wall",
            "1,1",
            "--wall",
            "2,3",
        ])
        .unwrap();
        assert_eq!(config.algorithm.algorithms(), Algorithm::ALL.to_vec());
        assert_eq!(config.start, Position::new(0, 0));
        assert_eq!(config.walls, vec![Position::new(1, 1), Position::new(2, 3)]);
    }

    #[test]
    fn rejects_malformed_coordinates() {
        assert!(Config::try_parse_from(["pathfinding_visualizer", "--start", "3"]).is_err());
        assert!(Config::try_parse_from(["pathfinding_visualizer", "--algorithm", "bfs"]).is_err());
    }
}
