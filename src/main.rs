//! Evolving Landscape CLI - Run novelty search rounds from JSON configuration.

use std::path::PathBuf;
use std::time::Instant;

use evolving_landscape::{LandscapeEngine, RunConfig};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <run.json> [rounds]", args[0]);
        eprintln!();
        eprintln!("Run evolving landscape rounds from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  run.json  Path to run configuration file");
        eprintln!("  rounds    Number of rounds (overrides the file's value)");
        eprintln!();
        eprintln!("Example configuration is generated with --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);
    let mut run = RunConfig::load(&config_path).unwrap_or_else(|e| {
        eprintln!("Error loading config: {}", e);
        std::process::exit(1);
    });

    if let Some(rounds) = args.get(2).and_then(|s| s.parse().ok()) {
        run.rounds = rounds;
    }

    let landscape = &run.landscape;
    println!("Evolving Landscape");
    println!("==================");
    println!(
        "Sequences: length {} over {} symbols",
        landscape.seq_length,
        evolving_landscape::ALPHABET.len()
    );
    println!("Pool: {} candidates, top {}", landscape.pool_size, landscape.top_k);
    println!("Novelty weight: {}", run.novelty_weight);
    println!("Rounds: {}", run.rounds);
    if let Some(seed) = landscape.random_seed {
        println!("Seed: {}", seed);
    }
    println!();

    let mut engine = LandscapeEngine::new(run.landscape.clone()).unwrap_or_else(|e| {
        eprintln!("Error creating engine: {}", e);
        std::process::exit(1);
    });

    let start = Instant::now();
    let results = engine
        .run_rounds(run.rounds as u64, run.novelty_weight, |result| {
            println!(
                "  Round {:>4}: score={:>7.2} seq={} archive={}",
                result.round_num, result.score, result.seq, result.archive_size
            );
        })
        .unwrap_or_else(|e| {
            eprintln!("Error running round: {}", e);
            std::process::exit(1);
        });
    let elapsed = start.elapsed();

    let best = results
        .iter()
        .max_by(|a, b| a.score.total_cmp(&b.score));

    println!();
    println!("Summary:");
    if let Some(best) = best {
        println!(
            "  Best score: {:.2} (round {}, seq {})",
            best.score, best.round_num, best.seq
        );
    }
    println!("  Archive size: {}", engine.archive().len());
    println!("  Archive diversity: {:.3}", engine.archive_diversity());
    println!(
        "  Time: {:.3}s ({:.1} rounds/s)",
        elapsed.as_secs_f32(),
        run.rounds as f32 / elapsed.as_secs_f32().max(f32::EPSILON)
    );
}

fn print_example_config() {
    let config = RunConfig::default();

    println!("Example configuration (run.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing example config: {}", e),
    }
}
