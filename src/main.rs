//! torus-life CLI - Run simulations from JSON configuration.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use torus_life::{
    compute::{SimStats, Simulation},
    schema::{Pattern, SimConfig},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [ticks]", args[0]);
        eprintln!();
        eprintln!("Run a toroidal Game of Life simulation from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to simulation configuration file");
        eprintln!("  ticks        Number of generations to run (default: 100)");
        eprintln!();
        eprintln!("If a plaintext pattern ('.' dead, 'O' alive) exists next to the");
        eprintln!("config as <config>.cells, it is stamped at the grid center first.");
        eprintln!();
        eprintln!("An example configuration is printed with --example.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);
    let ticks: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100);

    // Load configuration
    let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        std::process::exit(1);
    });

    let config: SimConfig = serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        std::process::exit(1);
    });

    let (rows, cols) = (config.rows, config.cols);

    let mut sim = Simulation::new(config).unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    });

    // Stamp an optional pattern file at the grid center
    let pattern_path = config_path.with_extension("cells");
    if pattern_path.exists() {
        let pattern_str = fs::read_to_string(&pattern_path).unwrap_or_else(|e| {
            eprintln!("Error reading pattern file: {}", e);
            std::process::exit(1);
        });
        let pattern = Pattern::parse_plaintext(&pattern_str).unwrap_or_else(|e| {
            eprintln!("Error parsing pattern: {}", e);
            std::process::exit(1);
        });
        sim.set_pattern(pattern);
        sim.place_pattern((rows as i64 / 2, cols as i64 / 2))
            .unwrap_or_else(|e| {
                eprintln!("Error placing pattern: {}", e);
                std::process::exit(1);
            });
    }

    println!("torus-life");
    println!("==========");
    println!("Grid: {}x{} (toroidal)", rows, cols);
    println!("Ticks: {}", ticks);
    println!();

    let initial = SimStats::from_sim(&sim);
    println!("Initial state:");
    println!("  Live cells: {}", initial.live_cells);
    println!("  Seeded cells: {}", initial.seeded_cells);
    println!();

    println!("Running simulation...");
    let start = Instant::now();

    for i in 0..ticks {
        sim.tick();

        // Print progress every 10%
        if (i + 1) % (ticks / 10).max(1) == 0 {
            let stats = SimStats::from_sim(&sim);
            let elapsed = start.elapsed().as_secs_f32();
            let ticks_per_sec = (i + 1) as f32 / elapsed;
            println!(
                "  Tick {}/{}: live={}, seeded={}, {:.1} ticks/s",
                i + 1,
                ticks,
                stats.live_cells,
                stats.seeded_cells,
                ticks_per_sec
            );
        }
    }

    let elapsed = start.elapsed();
    let final_stats = SimStats::from_sim(&sim);

    println!();
    println!("Done in {:.2}s", elapsed.as_secs_f32());
    println!("  Live cells: {}", final_stats.live_cells);
    println!("  Seeded cells: {}", final_stats.seeded_cells);
}

fn print_example_config() {
    let config = SimConfig {
        rows: 200,
        cols: 400,
        initial_marks: vec![(20, 20), (21, 20), (22, 20), (23, 20)],
        ..SimConfig::default()
    };
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
}
