//! Dial state and the rotation simulation.

pub mod crossings;
pub mod self_check;
pub mod simulate;

pub use crossings::zero_crossings;
pub use self_check::self_check;
pub use simulate::{Simulation, Step, simulate};

use crate::syntax::rotation::{Direction, Rotation};

/// Number of positions on the dial face.
pub const DIAL_POSITIONS: i64 = 100;

/// Where the pointer rests before the first rotation.
pub const START_POSITION: i64 = 50;

/// The safe dial: a pointer on a 0..100 cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dial {
    position: i64,
}

impl Dial {
    pub fn new(position: i64) -> Self {
        Self {
            position: position.rem_euclid(DIAL_POSITIONS),
        }
    }

    pub fn position(self) -> i64 {
        self.position
    }

    /// Apply one rotation and return the new position.
    ///
    /// Rust's `%` is a remainder, not a modulo, so leftward moves reduce
    /// with `rem_euclid` to stay in `[0, 99]`.
    pub fn apply(&mut self, rotation: &Rotation) -> i64 {
        let distance = i64::from(rotation.distance);
        self.position = match rotation.direction {
            Direction::Left => (self.position - distance).rem_euclid(DIAL_POSITIONS),
            Direction::Right => (self.position + distance).rem_euclid(DIAL_POSITIONS),
        };
        self.position
    }
}
