mod board;
mod color;
mod grid;
mod r#move;
mod piece;
mod score;
mod square;

pub use board::*;
pub use color::*;
pub use grid::*;
pub use piece::*;
pub use r#move::*;
pub use score::*;
pub use square::*;
