//! Conways CLI - Run a universe from JSON configuration.

use std::fs;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use conways::{Seed, Universe, UniverseConfig, UniverseStats};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "--example" {
        print_example_config();
        return;
    }

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [steps]", args[0]);
        eprintln!();
        eprintln!("Run a Game of Life universe from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to universe configuration file");
        eprintln!("  steps        Number of generations (default: 100)");
        eprintln!();
        eprintln!("Example configuration is generated with --example flag.");
        process::exit(1);
    }

    let config_path = PathBuf::from(&args[1]);
    let steps: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100);

    let config = UniverseConfig::load(&config_path).unwrap_or_else(|e| {
        eprintln!("Error loading config: {}", e);
        process::exit(1);
    });

    // Load or create seed
    let seed_path = config_path.with_extension("seed.json");
    let seed: Seed = if seed_path.exists() {
        let seed_str = fs::read_to_string(&seed_path).unwrap_or_else(|e| {
            eprintln!("Error reading seed file: {}", e);
            process::exit(1);
        });
        serde_json::from_str(&seed_str).unwrap_or_else(|e| {
            eprintln!("Error parsing seed: {}", e);
            process::exit(1);
        })
    } else {
        log::info!("No seed file at {}, using default", seed_path.display());
        Seed::default()
    };

    let mut universe = Universe::from_config(&config).unwrap_or_else(|e| {
        eprintln!("Error creating universe: {}", e);
        process::exit(1);
    });
    if let Err(e) = seed.apply(&mut universe) {
        eprintln!("Error applying seed: {}", e);
        process::exit(1);
    }

    let initial = UniverseStats::from_universe(&universe);

    println!("Conway's Game of Life");
    println!("=====================");
    println!("Grid: {}x{}", universe.width(), universe.height());
    println!("Generations: {}", steps);
    println!("Initial population: {}", initial.population);
    println!();

    println!("Running simulation...");
    let start = Instant::now();

    for i in 0..steps {
        universe.tick();

        // Print progress every 10%
        if (i + 1) % (steps / 10).max(1) == 0 {
            let stats = UniverseStats::from_universe(&universe);
            let elapsed = start.elapsed().as_secs_f32();
            println!(
                "  Generation {}/{}: population={}, density={:.3}, {:.1} gen/s",
                i + 1,
                steps,
                stats.population,
                stats.density,
                (i + 1) as f32 / elapsed
            );
            if stats.population == 0 {
                log::warn!("Universe died out at generation {}", i + 1);
                break;
            }
        }
    }

    let elapsed = start.elapsed();
    let last = UniverseStats::from_universe(&universe);

    println!();
    println!("Final population: {} ({:.1}%)", last.population, last.density * 100.0);
    println!("Time: {:.3}s", elapsed.as_secs_f32());
    println!();
    println!("{}", universe.export_with(&config.alphabet));
}

fn print_example_config() {
    let config = UniverseConfig::default();
    let seed = Seed::default();

    let (config_json, seed_json) = match (
        serde_json::to_string_pretty(&config),
        serde_json::to_string_pretty(&seed),
    ) {
        (Ok(c), Ok(s)) => (c, s),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("Error serializing example: {}", e);
            process::exit(1);
        }
    };

    println!("Example configuration (config.json):");
    println!("{}", config_json);
    println!();
    println!("Example seed (config.seed.json):");
    println!("{}", seed_json);
}
