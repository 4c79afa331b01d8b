use clap::Parser;

use pathfinding_visualizer::config::{AlgorithmChoice, Config};
use pathfinding_visualizer::visualizer::Visualizer;

fn main() {
    env_logger::init();
    let config = Config::parse();

    let visualizer = match Visualizer::new(config.clone()) {
        Ok(visualizer) => visualizer,
        Err(e) => {
            eprintln!("Invalid grid: {}", e);
            std::process::exit(1);
        }
    };

    if !config.quiet {
        let grid = visualizer.grid();
        println!("Starting pathfinding visualizer...");
        println!("Grid size: {}x{}", grid.rows(), grid.cols());
        println!("Start: {} | Finish: {}", grid.start(), grid.finish());
        println!("Walls: {}", grid.wall_count());
        if config.no_visualization {
            println!("Visualization disabled");
        } else {
            println!(
                "Visualization enabled: {}ms per visited cell, {}ms per path cell",
                config.delay_ms, config.path_delay_ms
            );
        }
        println!();
    }

    let results = visualizer.run_all(&config.algorithm.algorithms());

    if config.algorithm == AlgorithmChoice::All {
        Visualizer::print_comparison_results(&results);
    } else {
        for result in &results {
            println!("\n=== FINAL RESULTS ===");
            println!("{}", result.statistics);
        }
    }
}
