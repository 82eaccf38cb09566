//! Column header reconstruction
//!
//! CONTUR header labels are aligned to the columns of the numbers below
//! them, not to each other, so splitting a header line on whitespace breaks
//! multi-word labels. Instead the column boundaries are taken from a template
//! line (the first data row of the block) and the header text is sliced at
//! those same character positions.

/// Lines between a block's first data row and its header text
pub const HEADER_OFFSET: usize = 2;

/// Raw header of the block starting at `start`, if the section has room for one
pub fn block_header(lines: &[String], start: usize) -> Option<Vec<String>> {
    if start < HEADER_OFFSET {
        return None;
    }
    let template = lines.get(start)?;
    let text = lines.get(start - HEADER_OFFSET)?;
    Some(reconstruct_header(template, text))
}

/// Slice `text` at the column boundaries of `template` and trim each piece
///
/// Header text past the end of the template is ignored.
pub fn reconstruct_header(template: &str, text: &str) -> Vec<String> {
    let text: Vec<char> = text.chars().collect();
    let boundaries = column_boundaries(template);

    let mut header = Vec::with_capacity(boundaries.len() + 1);
    let mut start = 0;
    let width = template.chars().count();
    for end in boundaries.into_iter().chain(std::iter::once(width)) {
        let lo = start.min(text.len());
        let hi = end.min(text.len());
        let slice: String = text[lo..hi].iter().collect();
        header.push(slice.trim().to_string());
        start = end;
    }
    header
}

/// Character positions that split `template` into columns
///
/// Every change between whitespace and non-whitespace is a transition; every
/// second transition ends a gap and becomes a split point.
pub fn column_boundaries(template: &str) -> Vec<usize> {
    let is_space: Vec<bool> = template
        .trim_end()
        .chars()
        .map(|c| c.is_whitespace())
        .collect();

    is_space
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0] != pair[1])
        .map(|(idx, _)| idx + 1)
        .skip(1)
        .step_by(2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_with_leading_space() {
        assert_eq!(column_boundaries(" 1.0  2.0"), vec![4]);
        assert_eq!(column_boundaries("   1   0.5   7.25  "), vec![4, 10]);
    }

    #[test]
    fn test_boundaries_without_leading_space() {
        assert_eq!(column_boundaries("1.0  2.0"), vec![5]);
    }

    #[test]
    fn test_block_header_needs_two_lines_above() {
        let lines: Vec<String> = vec![" A   B".into(), " 1   2".into()];
        assert_eq!(block_header(&lines, 1), None);
    }
}
