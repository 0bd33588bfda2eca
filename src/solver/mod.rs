pub mod count;
pub mod error;
pub mod field;

pub use count::{solve, CellResult, Solution};
pub use error::SolveError;
pub use field::MineField;
