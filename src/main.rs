use std::{env, fs, process};

use dial::diagnostics::{DEFAULT_MAX_ERRORS, Diagnostic, render_diagnostics};
use dial::runtime::{START_POSITION, Simulation, self_check, simulate};
use dial::syntax::parse_rotations;

fn main() {
    let mut args: Vec<String> = env::args().collect();
    let verbose = args.iter().any(|arg| arg == "--verbose");
    let json = args.iter().any(|arg| arg == "--json");
    if verbose {
        args.retain(|arg| arg != "--verbose");
    }
    if json {
        args.retain(|arg| arg != "--json");
    }
    let max_errors = extract_max_errors(&mut args);

    if args.len() < 2 {
        print_help();
        return;
    }

    match args[1].as_str() {
        "-h" | "--help" | "help" => print_help(),
        "check" => run_check(),
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: dial run <rotations.txt>");
                process::exit(2);
            }
            run_file(&args[2], verbose, json, max_errors);
        }
        path => run_file(path, verbose, json, max_errors),
    }
}

fn print_help() {
    println!(
        "\
Dial CLI

Usage:
  dial <rotations.txt>
  dial run <rotations.txt>
  dial check

Commands:
  run                Simulate a rotation file and print both answers
  check              Run only the built-in self-check

Flags:
  --verbose          Print the step-by-step rotation trace
  --json             Emit the simulation report as JSON
  --max-errors <n>   Limit displayed parse errors (default: 50)
  -h, --help         Show this help message
"
    );
}

fn run_check() {
    match self_check() {
        Ok(()) => println!("self-check passed"),
        Err(message) => {
            eprintln!("{message}");
            process::exit(1);
        }
    }
}

fn run_file(path: &str, verbose: bool, json: bool, max_errors: usize) {
    // Pre-flight gate: a failing self-check means the build is wrong, so
    // the real input is never opened.
    if let Err(message) = self_check() {
        eprintln!("{message}");
        eprintln!("refusing to process {path} while the self-check fails");
        process::exit(1);
    }

    match fs::read_to_string(path) {
        Ok(source) => {
            let rotations = match parse_rotations(&source, path) {
                Ok(rotations) => rotations,
                Err(mut diagnostics) => {
                    let hidden = diagnostics.len().saturating_sub(max_errors);
                    if hidden > 0 {
                        diagnostics.truncate(max_errors);
                        diagnostics.push(
                            Diagnostic::warning("TOO MANY ERRORS")
                                .with_message(format!("{hidden} more error(s) not shown."))
                                .with_file(path),
                        );
                    }
                    eprintln!("{}", render_diagnostics(&diagnostics, Some(&source), Some(path)));
                    process::exit(1);
                }
            };

            let simulation = simulate(START_POSITION, &rotations);
            report(&simulation, verbose, json);
        }
        Err(e) => {
            eprintln!("Error reading {}: {}", path, e);
            process::exit(1);
        }
    }
}

fn report(simulation: &Simulation, verbose: bool, json: bool) {
    if verbose {
        print!("{}", simulation.render_trace());
    }
    if json {
        match serde_json::to_string_pretty(simulation) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error encoding report: {e}");
                process::exit(1);
            }
        }
    } else {
        println!("part1: {}", simulation.zero_landings);
        println!("part2: {}", simulation.zero_crossings);
    }
}

fn extract_max_errors(args: &mut Vec<String>) -> usize {
    let mut max_errors = DEFAULT_MAX_ERRORS;
    let mut i = 0;
    while i < args.len() {
        if args[i] == "--max-errors" {
            if i + 1 >= args.len() {
                eprintln!("Usage: dial <rotations.txt> --max-errors <n>");
                process::exit(2);
            }
            let value = args.remove(i + 1);
            args.remove(i);
            match value.parse::<usize>() {
                Ok(parsed) if parsed > 0 => max_errors = parsed,
                _ => {
                    eprintln!("Error: --max-errors expects a positive integer, got `{value}`");
                    process::exit(2);
                }
            }
        } else {
            i += 1;
        }
    }
    max_errors
}
