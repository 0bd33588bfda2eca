// Shared board/UI constants.
pub const DEFAULT_ROWS: usize = 2;
pub const DEFAULT_COLS: usize = 2;
pub const MIN_DIM: usize = 1; // decrements below this are refused
pub const CELL_W: usize = 4; // render each cell as "[x] " (checkbox plus gap)
// Minimal pane width to fit the sidebar plus a default-size board.
pub const MIN_PANE_WIDTH: u16 = 44;
pub const SIDEBAR_W: u16 = 24;
