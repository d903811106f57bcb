//! Stdin/stdout front end for the protocol engine host.

use std::env;
use std::io::{self, BufRead, Write};
use std::time::Duration;

use engine_registry::EngineKind;
use protocol_engine::{Session, SessionConfig};

fn print_usage() {
    println!("Reversi Protocol Engine");
    println!();
    println!("Usage:");
    println!("  protocol_engine [--engine NAME] [--size N] [--depth D] [--seed S] [--delay-ms MS]");
    println!();
    println!("Engines:");
    for kind in EngineKind::ALL {
        println!("  {:<10} - {}", kind.key(), kind.description());
    }
    println!();
    println!("Commands arrive one per line on stdin: INIT, NEWGAME, PLAY <coord>,");
    println!("GENMOVE [color], UNDO, BOARD, VALID_MOVES [color], PASS [color], QUIT.");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut config = SessionConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--engine" | "-e" => {
                if i + 1 < args.len() {
                    match EngineKind::from_key(&args[i + 1]) {
                        Some(kind) => config.engine = kind,
                        None => {
                            eprintln!("Unknown engine '{}'", args[i + 1]);
                            print_usage();
                            return;
                        }
                    }
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
                    config.depth = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--delay-ms" => {
                if i + 1 < args.len() {
                    let ms = args[i + 1].parse().unwrap_or(200);
                    config.think_delay = Duration::from_millis(ms);
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

    let mut session = Session::new(config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    // Greet first so drivers can wait for READY before sending commands.
    writeln!(stdout, "READY").ok();
    stdout.flush().ok();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if line.split_whitespace().next() == Some("QUIT") {
            break;
        }
        for response in session.handle_command(&line) {
            writeln!(stdout, "{}", response).ok();
        }
        stdout.flush().ok();
    }
}
