//! Pre-flight correctness gate.
//!
//! Every entry point runs the known example through the full pipeline
//! before touching real input. A mismatch means the build is wrong and the
//! real computation must not run.

use crate::runtime::{START_POSITION, simulate};
use crate::syntax::parse_rotations;

/// The example rotation sequence from the puzzle statement.
pub const EXAMPLE_ROTATIONS: &str = "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n";

/// Expected zero landings (part 1) for the example.
pub const EXAMPLE_ZERO_LANDINGS: i64 = 3;

/// Expected total zero crossings (part 2) for the example.
pub const EXAMPLE_ZERO_CROSSINGS: i64 = 6;

/// Run the example sequence and compare against the known answers.
pub fn self_check() -> Result<(), String> {
    let rotations = parse_rotations(EXAMPLE_ROTATIONS, "<self-check>")
        .map_err(|diags| format!("self-check: example failed to parse ({} errors)", diags.len()))?;
    let simulation = simulate(START_POSITION, &rotations);

    if simulation.zero_landings != EXAMPLE_ZERO_LANDINGS {
        return Err(format!(
            "self-check: expected {} zero landings on the example, got {}",
            EXAMPLE_ZERO_LANDINGS, simulation.zero_landings
        ));
    }
    if simulation.zero_crossings != EXAMPLE_ZERO_CROSSINGS {
        return Err(format!(
            "self-check: expected {} zero crossings on the example, got {}",
            EXAMPLE_ZERO_CROSSINGS, simulation.zero_crossings
        ));
    }
    Ok(())
}
