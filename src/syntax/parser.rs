//! Line parser for rotation input files.
//!
//! Input is one rotation per line: a direction letter (`L` or `R`) glued to
//! a decimal click count, e.g. `L68`. Blank and whitespace-only lines are
//! skipped. All malformed lines are reported, not just the first.

use crate::diagnostics::{Diagnostic, Position};
use crate::syntax::rotation::{Direction, Rotation};

/// Parse a whole input file into rotations.
///
/// On failure returns one diagnostic per malformed line, positioned at the
/// offending character. `file` is only used to label diagnostics.
pub fn parse_rotations(source: &str, file: &str) -> Result<Vec<Rotation>, Vec<Diagnostic>> {
    let mut rotations = Vec::new();
    let mut diagnostics = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line, index + 1, file) {
            Ok(rotation) => rotations.push(rotation),
            Err(diag) => diagnostics.push(diag),
        }
    }

    if diagnostics.is_empty() {
        Ok(rotations)
    } else {
        Err(diagnostics)
    }
}

fn parse_line(line: &str, line_number: usize, file: &str) -> Result<Rotation, Diagnostic> {
    let trimmed = line.trim();
    // Column offsets are relative to the untrimmed line as it appears in
    // the source, so the caret lands on the real character.
    let start = line.len() - line.trim_start().len();

    let mut chars = trimmed.chars();
    let letter = chars.next().unwrap_or_default();
    let direction = match letter {
        'L' => Direction::Left,
        'R' => Direction::Right,
        _ => {
            return Err(Diagnostic::error("UNKNOWN DIRECTION")
                .with_code("E001")
                .with_message(format!("`{}` is not a rotation direction.", letter))
                .with_file(file)
                .with_position(Position::new(line_number, start))
                .with_hint("expected `L` or `R`"));
        }
    };

    let digits = chars.as_str();
    if digits.is_empty() {
        return Err(Diagnostic::error("MISSING DISTANCE")
            .with_code("E002")
            .with_message(format!(
                "Rotation `{}` has a direction but no click count.",
                trimmed
            ))
            .with_file(file)
            .with_position(Position::new(line_number, start + 1))
            .with_hint("rotations look like `L68` or `R100`"));
    }

    let distance = digits.parse::<u32>().map_err(|_| {
        Diagnostic::error("INVALID DISTANCE")
            .with_code("E003")
            .with_message(format!("Could not parse `{}` as a click count.", digits))
            .with_file(file)
            .with_position(Position::new(line_number, start + 1))
            .with_hint("the click count is a non-negative decimal integer")
    })?;

    Ok(Rotation::new(direction, distance))
}
