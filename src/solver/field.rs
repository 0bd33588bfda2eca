use crate::solver::SolveError;

/// Immutable snapshot of the board's mine marks, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MineField {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl MineField {
    /// Builds a rows x cols snapshot by querying `lookup` for every cell.
    /// `lookup` returning `None` for any required coordinate is a
    /// precondition violation and fails with the offending coordinate.
    pub fn from_marks<F>(rows: usize, cols: usize, mut lookup: F) -> Result<Self, SolveError>
    where
        F: FnMut(usize, usize) -> Option<bool>,
    {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                match lookup(row, col) {
                    Some(marked) => cells.push(marked),
                    None => return Err(SolveError::MissingCellState { row, col }),
                }
            }
        }
        Ok(Self { rows, cols, cells })
    }

    /// Builds a snapshot from explicit rows, rejecting ragged or empty input.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, SolveError> {
        let expected = rows.first().map(|r| r.len()).unwrap_or(0);
        if expected == 0 {
            return Err(SolveError::MalformedGrid {
                row: 0,
                expected: 1,
                found: 0,
            });
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(SolveError::MalformedGrid {
                    row: i,
                    expected,
                    found: row.len(),
                });
            }
        }
        Ok(Self {
            rows: rows.len(),
            cols: expected,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True if the cell is marked as a mine. Out-of-range coordinates read
    /// as unmarked, which is what the neighbor counting relies on.
    pub fn mine_at(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_accepts_rectangular_input() {
        let field = MineField::from_rows(vec![vec![true, false], vec![false, false]]).unwrap();
        assert_eq!(field.rows(), 2);
        assert_eq!(field.cols(), 2);
        assert!(field.mine_at(0, 0));
        assert!(!field.mine_at(1, 1));
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = MineField::from_rows(vec![vec![false, false], vec![false]]).unwrap_err();
        assert_eq!(
            err,
            SolveError::MalformedGrid {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn from_rows_rejects_empty_input() {
        assert!(MineField::from_rows(vec![]).is_err());
        assert!(MineField::from_rows(vec![vec![]]).is_err());
    }

    #[test]
    fn from_marks_queries_every_cell() {
        let mut queried = Vec::new();
        let field = MineField::from_marks(2, 3, |row, col| {
            queried.push((row, col));
            Some(row == col)
        })
        .unwrap();
        assert_eq!(queried.len(), 6);
        for row in 0..2 {
            for col in 0..3 {
                assert!(queried.contains(&(row, col)));
                assert_eq!(field.mine_at(row, col), row == col);
            }
        }
    }

    #[test]
    fn from_marks_fails_on_unreadable_cell() {
        let err = MineField::from_marks(2, 2, |row, col| {
            if (row, col) == (1, 0) {
                None
            } else {
                Some(false)
            }
        })
        .unwrap_err();
        assert_eq!(err, SolveError::MissingCellState { row: 1, col: 0 });
    }

    #[test]
    fn mine_at_is_false_out_of_range() {
        let field = MineField::from_rows(vec![vec![true]]).unwrap();
        assert!(!field.mine_at(0, 1));
        assert!(!field.mine_at(1, 0));
        assert!(!field.mine_at(5, 5));
    }
}
