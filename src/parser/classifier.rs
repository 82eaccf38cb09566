//! Numeric line classification
//!
//! A report line is a table row when every whitespace-separated token parses
//! as a floating point number. CONTUR prints negative values flush against
//! the preceding column, so `3-4.5` is read as the two values `3` and `-4.5`.

use std::borrow::Cow;

/// Parse a line as a numeric table row, or `None` if it is not one
pub fn classify_line(line: &str) -> Option<Vec<f64>> {
    if line.trim().is_empty() {
        return None;
    }

    let repaired = separate_fused_minus(line);
    repaired
        .split_whitespace()
        .map(|token| token.parse::<f64>().ok())
        .collect()
}

/// Insert a space between a digit and a directly following minus sign
fn separate_fused_minus(line: &str) -> Cow<'_, str> {
    let fused = line
        .as_bytes()
        .windows(2)
        .any(|pair| pair[0].is_ascii_digit() && pair[1] == b'-');
    if !fused {
        return Cow::Borrowed(line);
    }

    let mut repaired = String::with_capacity(line.len() + 8);
    let mut previous_digit = false;
    for c in line.chars() {
        if c == '-' && previous_digit {
            repaired.push(' ');
        }
        repaired.push(c);
        previous_digit = c.is_ascii_digit();
    }
    Cow::Owned(repaired)
}
