//! Closed-form count of zero hits during a single rotation.

use crate::runtime::DIAL_POSITIONS;
use crate::syntax::rotation::{Direction, Rotation};

/// How many times the pointer lands on or passes over 0 while rotating
/// `rotation` away from `position`, without stepping through the move.
///
/// Must be called with the position BEFORE the rotation is applied.
///
/// Rightward the pointer hits 0 once per completed hundred, so the count
/// is `(position + distance) / 100`. Leftward the distance splits into
/// complete laps (one hit each) plus a partial remainder, which hits 0
/// exactly when the pointer starts above 0 and the remainder reaches it.
/// A leftward move that starts at 0 steps straight to 99, so the partial
/// remainder can never bring it back to 0.
pub fn zero_crossings(position: i64, rotation: &Rotation) -> i64 {
    debug_assert!((0..DIAL_POSITIONS).contains(&position));
    let distance = i64::from(rotation.distance);
    match rotation.direction {
        Direction::Right => (position + distance) / DIAL_POSITIONS,
        Direction::Left => {
            let laps = distance / DIAL_POSITIONS;
            let partial = distance % DIAL_POSITIONS;
            laps + i64::from(position > 0 && partial >= position)
        }
    }
}
