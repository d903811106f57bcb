//! Duel CLI
//!
//! Pit two engines against each other and report the series outcome.

use std::env;
use std::path::Path;

use duel::{DuelReport, DuelRunner, EnginePlayer, EngineSpec, MatchConfig};
use engine_registry::EngineKind;

fn print_usage() {
    println!("Reversi Duel Runner");
    println!();
    println!("Usage:");
    println!("  duel <engine1> <engine2> [--games N] [--size N] [--depth D] [--seed S]");
    println!("       [--no-swap] [--quiet] [--out FILE]");
    println!();
    println!("Engines:");
    for kind in EngineKind::ALL {
        println!("  {:<10} - {}", kind.key(), kind.description());
    }
    println!();
    println!("Examples:");
    println!("  duel minimax random --games 20 --depth 3");
    println!("  duel minimax minimax --size 6 --seed 7 --out series.json");
}

fn resolve_engine(key: &str) -> Option<EngineKind> {
    match EngineKind::from_key(key) {
        Some(kind) => Some(kind),
        None => {
            eprintln!("Unknown engine '{}'", key);
            None
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        print_usage();
        return;
    }

    let first_kind = match resolve_engine(&args[1]) {
        Some(kind) => kind,
        None => {
            print_usage();
            return;
        }
    };
    let second_kind = match resolve_engine(&args[2]) {
        Some(kind) => kind,
        None => {
            print_usage();
            return;
        }
    };

    // Parse optional arguments
    let mut config = MatchConfig::default();
    let mut depth: Option<u8> = None;
    let mut seed: Option<u64> = None;
    let mut out_path: Option<String> = None;

    let mut i = 3;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    config.games = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "--size" | "-s" => {
                if i + 1 < args.len() {
                    config.board_size = args[i + 1].parse().unwrap_or(8);
                    i += 1;
                }
            }
            "--depth" | "-d" => {
                if i + 1 < args.len() {
                    depth = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--seed" => {
                if i + 1 < args.len() {
                    seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--no-swap" => config.swap_colors = false,
            "--quiet" | "-q" => config.verbose = false,
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    out_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            _ => {}
        }
        i += 1;
    }

    if config.board_size < 4 || config.board_size % 2 != 0 {
        eprintln!("Board size must be even and at least 4");
        return;
    }

    let mut first_spec = EngineSpec::new(first_kind);
    let mut second_spec = EngineSpec::new(second_kind);
    first_spec.depth = depth;
    second_spec.depth = depth;
    // A single seed still gives the engines distinct RNG streams.
    first_spec.seed = seed;
    second_spec.seed = seed.map(|s| s.wrapping_add(1));

    println!(
        "=== Duel: {} vs {} ===",
        first_spec.label, second_spec.label
    );
    println!(
        "Games: {}, Board: {}x{}",
        config.games, config.board_size, config.board_size
    );
    println!();

    let engine1 = first_spec.label.clone();
    let engine2 = second_spec.label.clone();
    let board_size = config.board_size;

    let mut first = EnginePlayer::new(first_spec);
    let mut second = EnginePlayer::new(second_spec);

    let runner = DuelRunner::new(config);
    let (stats, results) = runner.run_series(&mut first, &mut second);

    let report = DuelReport::new(&engine1, &engine2, board_size, stats, &results);

    println!();
    report.print_report();

    if let Some(path) = out_path {
        match report.save(Path::new(&path)) {
            Ok(()) => println!("Report written to {}", path),
            Err(e) => eprintln!("Warning: Failed to save report: {}", e),
        }
    }
}
