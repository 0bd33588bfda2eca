use crate::solver::MineField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellResult {
    Mine,
    Count(u8),
}

/// Per-cell neighbor counts for one solved board, same shape as the input.
#[derive(Clone, PartialEq, Eq)]
pub struct Solution {
    rows: usize,
    cols: usize,
    cells: Vec<CellResult>,
}

const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Annotates every unmarked cell with the number of marked cells among its
/// up-to-8 neighbors. Neighbors outside the board count as unmarked, so
/// corner cells see 3 candidates, edge cells 5, interior cells 8.
pub fn solve(field: &MineField) -> Solution {
    let mut cells = Vec::with_capacity(field.rows() * field.cols());
    for row in 0..field.rows() {
        for col in 0..field.cols() {
            if field.mine_at(row, col) {
                cells.push(CellResult::Mine);
                continue;
            }
            let mut count = 0u8;
            for (dr, dc) in NEIGHBOR_OFFSETS {
                let nr = row as i32 + dr;
                let nc = col as i32 + dc;
                if nr >= 0 && nc >= 0 && field.mine_at(nr as usize, nc as usize) {
                    count += 1;
                }
            }
            cells.push(CellResult::Count(count));
        }
    }
    Solution {
        rows: field.rows(),
        cols: field.cols(),
        cells,
    }
}

impl Solution {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn at(&self, row: usize, col: usize) -> CellResult {
        self.cells[row * self.cols + col]
    }

    /// Plain-text rendering: cells space-separated, one line per row,
    /// mines as `X` and counts as their digit (0 included).
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                match self.at(row, col) {
                    CellResult::Mine => out.push('X'),
                    CellResult::Count(n) => out.push(char::from(b'0' + n)),
                }
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}
