//! Folding a rotation list into landing and crossing totals.

use std::fmt::Write as _;

use serde::Serialize;

use crate::runtime::crossings::zero_crossings;
use crate::runtime::{DIAL_POSITIONS, Dial};
use crate::syntax::rotation::Rotation;

/// Outcome of a single rotation: where the pointer came to rest and how
/// many times it hit 0 on the way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub rotation: Rotation,
    pub position: i64,
    pub crossings: i64,
}

/// Result of running a rotation list from a starting position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Simulation {
    pub start_position: i64,
    pub final_position: i64,
    /// Rotations that left the pointer resting on 0.
    pub zero_landings: i64,
    /// Every hit on 0, mid-rotation ones included.
    pub zero_crossings: i64,
    #[serde(skip)]
    pub steps: Vec<Step>,
}

impl Simulation {
    /// Step-by-step transcript, one line per rotation:
    /// `L68: 50 -> 82, zeros: 1, total: 1`.
    pub fn render_trace(&self) -> String {
        let mut out = String::new();
        let mut position = self.start_position;
        let mut total = 0;
        for step in &self.steps {
            total += step.crossings;
            let _ = writeln!(
                out,
                "{}: {} -> {}, zeros: {}, total: {}",
                step.rotation, position, step.position, step.crossings, total
            );
            position = step.position;
        }
        out
    }
}

/// Fold the rotations in order, threading the dial position through and
/// accumulating both counters in one pass. The crossing kernel sees each
/// pre-rotation position; the landing counter sees each post-rotation one.
pub fn simulate(start_position: i64, rotations: &[Rotation]) -> Simulation {
    let start_position = start_position.rem_euclid(DIAL_POSITIONS);
    let mut dial = Dial::new(start_position);
    let mut zero_landings = 0;
    let mut total_crossings = 0;
    let mut steps = Vec::with_capacity(rotations.len());

    for rotation in rotations {
        let crossings = zero_crossings(dial.position(), rotation);
        let position = dial.apply(rotation);

        total_crossings += crossings;
        if position == 0 {
            zero_landings += 1;
        }
        steps.push(Step {
            rotation: *rotation,
            position,
            crossings,
        });
    }

    Simulation {
        start_position,
        final_position: dial.position(),
        zero_landings,
        zero_crossings: total_crossings,
        steps,
    }
}
