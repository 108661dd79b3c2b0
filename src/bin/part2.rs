//! Part 2: count every hit on 0, mid-rotation passes included.

use std::{env, fs, process};

use dial::diagnostics::render_diagnostics;
use dial::runtime::{START_POSITION, self_check, simulate};
use dial::syntax::parse_rotations;

fn main() {
    let mut args = env::args();
    let _ = args.next();
    let Some(path) = args.next() else {
        eprintln!("usage: part2 <rotations-file>");
        process::exit(2);
    };

    if let Err(message) = self_check() {
        eprintln!("{message}");
        process::exit(1);
    }

    match solve(&path) {
        Ok(answer) => println!("{answer}"),
        Err(message) => {
            eprintln!("{message}");
            process::exit(1);
        }
    }
}

fn solve(path: &str) -> Result<i64, String> {
    let source =
        fs::read_to_string(path).map_err(|e| format!("Error reading {}: {}", path, e))?;
    let rotations = parse_rotations(&source, path)
        .map_err(|diags| render_diagnostics(&diags, Some(&source), Some(path)))?;
    Ok(simulate(START_POSITION, &rotations).zero_crossings)
}
