//! Table block segmentation
//!
//! Consecutive numeric rows of equal width form one table block. A row may
//! also join the block of the row two lines above it, so a single blank,
//! text or short line inside a table does not split it in two.

use tracing::debug;

/// Block assignment for every line of a section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockMap {
    /// Block id per line, `0` for lines outside any table
    ids: Vec<usize>,
    count: usize,
}

impl BlockMap {
    /// Block ids aligned with the section lines
    pub fn ids(&self) -> &[usize] {
        &self.ids
    }

    /// Number of blocks found; ids run from `1` to `count`
    pub fn count(&self) -> usize {
        self.count
    }

    /// Block id of one line, `0` when outside any table or out of range
    pub fn block_of(&self, line: usize) -> usize {
        self.ids.get(line).copied().unwrap_or(0)
    }

    /// Index of the first line of a block
    pub fn start_of(&self, block: usize) -> Option<usize> {
        if block == 0 {
            return None;
        }
        self.ids.iter().position(|&id| id == block)
    }

    /// Whether a block is a single row lying inside another block
    ///
    /// A short row in the middle of a table cannot join either neighbour and
    /// opens a one-row block of its own; the rows around it still share a
    /// block.
    pub fn is_interruption(&self, block: usize) -> bool {
        let mut lines = self.lines_of(block);
        let (Some(line), None) = (lines.next(), lines.next()) else {
            return false;
        };

        let before = [1, 2]
            .into_iter()
            .filter_map(|distance| line.checked_sub(distance))
            .map(|idx| self.block_of(idx))
            .find(|&id| id != 0);
        let after = [1, 2]
            .into_iter()
            .map(|distance| self.block_of(line + distance))
            .find(|&id| id != 0);

        matches!((before, after), (Some(b), Some(a)) if a == b && a != block)
    }

    /// Indices of every line belonging to a block, in order
    pub fn lines_of(&self, block: usize) -> impl Iterator<Item = usize> + '_ {
        self.ids
            .iter()
            .enumerate()
            .filter(move |&(_, &id)| block != 0 && id == block)
            .map(|(idx, _)| idx)
    }
}

/// Assign table blocks to classified lines
///
/// Each numeric row joins the block of the row directly above it when their
/// widths match, otherwise the block of the row two lines above when those
/// widths match, otherwise it opens a new block.
pub fn classify_run(rows: &[Option<Vec<f64>>]) -> BlockMap {
    let mut ids = vec![0; rows.len()];
    let mut count = 0;

    for (idx, row) in rows.iter().enumerate() {
        let Some(row) = row else {
            continue;
        };
        let width = row.len();

        let matching = |distance: usize| {
            idx.checked_sub(distance).and_then(|prev| match &rows[prev] {
                Some(prev_row) if prev_row.len() == width => Some(ids[prev]),
                _ => None,
            })
        };

        let block = match matching(1).or_else(|| matching(2)) {
            Some(block) => block,
            None => {
                count += 1;
                debug!("Table block {} opens at line {} ({} columns)", count, idx, width);
                count
            }
        };
        ids[idx] = block;
    }

    BlockMap { ids, count }
}
