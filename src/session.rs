use std::collections::HashMap;

use crate::solver::{solve, MineField, Solution};
use crate::{DEFAULT_COLS, DEFAULT_ROWS, MIN_DIM};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Solved,
}

/// One interactive solver session: the live board dimensions, the per-cell
/// mark toggles, and the last computed solution. Marks are keyed by
/// coordinate and exist only for cells currently on the board, mirroring
/// controls that come and go as the board is resized.
pub struct Session {
    pub rows: usize,
    pub cols: usize,
    pub cursor: (usize, usize),
    pub phase: Phase,
    pub solution: Option<Solution>,
    pub error: Option<String>,
    marks: HashMap<(usize, usize), bool>,
}

impl Session {
    pub fn new() -> Self {
        let mut session = Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cursor: (0, 0),
            phase: Phase::Editing,
            solution: None,
            error: None,
            marks: HashMap::new(),
        };
        session.sync_marks();
        session
    }

    pub fn is_marked(&self, row: usize, col: usize) -> bool {
        self.marks.get(&(row, col)).copied().unwrap_or(false)
    }

    pub fn mine_count(&self) -> usize {
        self.marks.values().filter(|marked| **marked).count()
    }

    pub fn move_cursor(&mut self, dr: i32, dc: i32) {
        let row = self.cursor.0 as i32 + dr;
        let col = self.cursor.1 as i32 + dc;
        if row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols {
            self.cursor = (row as usize, col as usize);
        }
    }

    pub fn toggle_cursor(&mut self) {
        if let Some(marked) = self.marks.get_mut(&self.cursor) {
            *marked = !*marked;
        }
    }

    /// Snapshots the current marks and computes the neighbor counts.
    pub fn solve_board(&mut self) {
        self.error = None;
        match MineField::from_marks(self.rows, self.cols, |row, col| {
            self.marks.get(&(row, col)).copied()
        }) {
            Ok(field) => {
                self.solution = Some(solve(&field));
                self.phase = Phase::Solved;
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    /// Unmarks every cell. Dimensions, phase, and any displayed solution
    /// stay as they are.
    pub fn clear_board(&mut self) {
        for marked in self.marks.values_mut() {
            *marked = false;
        }
    }

    /// Clears the board, restores default dimensions, and drops the
    /// solution, returning to editing.
    pub fn reset(&mut self) {
        self.rows = DEFAULT_ROWS;
        self.cols = DEFAULT_COLS;
        self.cursor = (0, 0);
        self.phase = Phase::Editing;
        self.solution = None;
        self.error = None;
        self.marks.clear();
        self.sync_marks();
    }

    pub fn grow_rows(&mut self) {
        self.rows += 1;
        self.sync_marks();
    }

    pub fn shrink_rows(&mut self) {
        if self.rows > MIN_DIM {
            self.rows -= 1;
            self.sync_marks();
        }
    }

    pub fn grow_cols(&mut self) {
        self.cols += 1;
        self.sync_marks();
    }

    pub fn shrink_cols(&mut self) {
        if self.cols > MIN_DIM {
            self.cols -= 1;
            self.sync_marks();
        }
    }

    // Marks of cells still on the board survive a resize; new cells start
    // unmarked and off-board entries are dropped.
    fn sync_marks(&mut self) {
        let (rows, cols) = (self.rows, self.cols);
        self.marks.retain(|(row, col), _| *row < rows && *col < cols);
        for row in 0..rows {
            for col in 0..cols {
                self.marks.entry((row, col)).or_insert(false);
            }
        }
        self.cursor.0 = self.cursor.0.min(rows - 1);
        self.cursor.1 = self.cursor.1.min(cols - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::CellResult;

    #[test]
    fn starts_editing_with_default_board() {
        let session = Session::new();
        assert_eq!(session.rows, DEFAULT_ROWS);
        assert_eq!(session.cols, DEFAULT_COLS);
        assert_eq!(session.phase, Phase::Editing);
        assert_eq!(session.mine_count(), 0);
    }

    #[test]
    fn shrink_is_refused_at_minimum() {
        let mut session = Session::new();
        session.shrink_rows();
        assert_eq!(session.rows, 1);
        session.shrink_rows();
        session.shrink_rows();
        assert_eq!(session.rows, 1);
        session.shrink_cols();
        session.shrink_cols();
        assert_eq!(session.cols, 1);
    }

    #[test]
    fn resize_keeps_surviving_marks() {
        let mut session = Session::new();
        session.toggle_cursor(); // (0, 0)
        session.grow_rows();
        session.grow_cols();
        assert!(session.is_marked(0, 0));
        assert_eq!(session.mine_count(), 1);
    }

    #[test]
    fn cells_dropped_by_a_shrink_come_back_unmarked() {
        let mut session = Session::new();
        session.move_cursor(1, 1);
        session.toggle_cursor(); // (1, 1)
        session.shrink_rows();
        session.grow_rows();
        assert!(!session.is_marked(1, 1));
    }

    #[test]
    fn shrink_pulls_the_cursor_back_on_board() {
        let mut session = Session::new();
        session.move_cursor(1, 1);
        session.shrink_rows();
        session.shrink_cols();
        assert_eq!(session.cursor, (0, 0));
    }

    #[test]
    fn solve_marks_the_session_solved() {
        let mut session = Session::new();
        session.toggle_cursor();
        session.solve_board();
        assert_eq!(session.phase, Phase::Solved);
        let solution = session.solution.as_ref().unwrap();
        assert_eq!(solution.at(0, 0), CellResult::Mine);
        assert_eq!(solution.at(1, 1), CellResult::Count(1));
    }

    #[test]
    fn clear_unmarks_without_touching_dimensions_or_phase() {
        let mut session = Session::new();
        session.grow_rows();
        session.toggle_cursor();
        session.solve_board();
        session.clear_board();
        assert_eq!(session.rows, 3);
        assert_eq!(session.phase, Phase::Solved);
        assert_eq!(session.mine_count(), 0);
        assert!(session.solution.is_some());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut session = Session::new();
        session.grow_rows();
        session.grow_cols();
        session.toggle_cursor();
        session.solve_board();
        session.reset();
        assert_eq!(session.rows, DEFAULT_ROWS);
        assert_eq!(session.cols, DEFAULT_COLS);
        assert_eq!(session.phase, Phase::Editing);
        assert_eq!(session.mine_count(), 0);
        assert!(session.solution.is_none());
    }

    #[test]
    fn cursor_stays_on_board() {
        let mut session = Session::new();
        session.move_cursor(-1, 0);
        assert_eq!(session.cursor, (0, 0));
        session.move_cursor(5, 5);
        assert_eq!(session.cursor, (0, 0));
        session.move_cursor(1, 1);
        assert_eq!(session.cursor, (1, 1));
    }
}
