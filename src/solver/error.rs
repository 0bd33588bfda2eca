use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The mark state of a cell on the board could not be read.
    MissingCellState { row: usize, col: usize },
    /// Input rows are not all the same length.
    MalformedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCellState { row, col } => {
                write!(f, "no mark state for cell ({}, {})", row, col)
            }
            Self::MalformedGrid {
                row,
                expected,
                found,
            } => write!(
                f,
                "malformed grid: row {} has {} cells, expected {}",
                row, found, expected
            ),
        }
    }
}

impl std::error::Error for SolveError {}
