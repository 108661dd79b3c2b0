//! Parsed rotation instructions.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// The direction letter used in the input encoding.
    pub fn letter(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One dial rotation: a direction and a click count. Distances above the
/// dial size are legal and mean multiple full laps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    pub direction: Direction,
    pub distance: u32,
}

impl Rotation {
    pub fn new(direction: Direction, distance: u32) -> Self {
        Self {
            direction,
            distance,
        }
    }

    pub fn left(distance: u32) -> Self {
        Self::new(Direction::Left, distance)
    }

    pub fn right(distance: u32) -> Self {
        Self::new(Direction::Right, distance)
    }
}

impl fmt::Display for Rotation {
    /// Round-trips the input encoding, e.g. `L68`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.direction, self.distance)
    }
}
