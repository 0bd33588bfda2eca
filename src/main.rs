use std::error::Error;

mod app;
mod config;
mod session;
mod solver;
mod ui;
pub use config::{CELL_W, DEFAULT_COLS, DEFAULT_ROWS, MIN_DIM, MIN_PANE_WIDTH, SIDEBAR_W};
pub use session::{Phase, Session};

fn main() -> Result<(), Box<dyn Error>> {
    app::run()
}
