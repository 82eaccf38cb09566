//! `name = value` annotation scanning
//!
//! CONTUR interleaves scalar results with its tables as free text such as
//! `RMASS = 1.0000  BMACH = 4.0000  ETAD = 60.00 DEG`. The scanner reads
//! assignments right to left and reports them left to right. Values accept
//! scientific notation (`1.23E+04`) and stop at the first character that
//! cannot belong to a number, so unit suffixes are left out.

use crate::models::Parameter;

/// All `name = value` pairs on a line, in reading order
pub fn scan_parameters(line: &str) -> Vec<Parameter> {
    let chars: Vec<char> = line.chars().collect();
    let mut found = Vec::new();

    for k in (1..chars.len()).rev() {
        if chars[k] != '=' {
            continue;
        }
        let name = read_name(&chars, k);
        if name.is_empty() {
            continue;
        }
        found.push(Parameter::new(name, read_value(&chars, k + 1)));
    }

    found.reverse();
    found
}

/// Non-space run ending just before the `=` at `eq`, skipping spaces next to it
fn read_name(chars: &[char], eq: usize) -> String {
    let mut end = eq;
    while end > 0 && chars[end - 1] == ' ' {
        end -= 1;
    }
    let mut start = end;
    while start > 0 && chars[start - 1] != ' ' {
        start -= 1;
    }
    chars[start..end].iter().collect::<String>().trim().to_string()
}

/// Numeric value starting at `from`, `None` when it holds no digits
fn read_value(chars: &[char], from: usize) -> Option<f64> {
    let is_numeric = |c: char| c.is_ascii_digit() || c == '.' || c == '-';

    let mut value = String::new();
    for idx in from..chars.len() {
        let c = chars[idx];
        if value.is_empty() && c == ' ' {
            continue;
        }

        let accepted = if is_numeric(c) {
            true
        } else if c == 'E' || c == 'e' {
            chars
                .get(idx + 1)
                .is_some_and(|&next| is_numeric(next) || next == '+')
        } else if c == '+' {
            idx > 0 && matches!(chars[idx - 1], 'E' | 'e')
        } else {
            false
        };

        if !accepted {
            break;
        }
        value.push(c);
    }

    if !value.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}
