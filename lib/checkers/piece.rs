use crate::checkers::{Color, Square};
use derive_more::Display;
use std::iter::once;

/// A checkers piece of a certain [`Color`] standing on a [`Square`].
///
/// A piece starts out as a man and may be crowned king, after which it stays a king.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(
    fmt = "{} {} on {}",
    "self.color",
    "if self.king { \"king\" } else { \"man\" }",
    "self.square"
)]
pub struct Piece {
    square: Square,
    color: Color,
    king: bool,
}

impl Piece {
    /// Constructs an uncrowned [`Piece`].
    pub fn new(square: Square, color: Color) -> Self {
        Piece {
            square,
            color,
            king: false,
        }
    }

    /// This piece's [`Square`].
    pub fn square(&self) -> Square {
        self.square
    }

    /// This piece's row.
    pub fn row(&self) -> u8 {
        self.square.row()
    }

    /// This piece's column.
    pub fn col(&self) -> u8 {
        self.square.col()
    }

    /// This piece's [`Color`].
    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether this piece has been crowned.
    pub fn is_king(&self) -> bool {
        self.king
    }

    /// Records that this piece now stands on another [`Square`].
    ///
    /// Whether the move is legal is up to the caller.
    pub fn move_to(&mut self, square: Square) {
        self.square = square;
    }

    /// Crowns this piece.
    pub fn promote(&mut self) {
        self.king = true;
    }

    /// The row increments this piece may step in.
    ///
    /// Men only step forward, kings also step backward.
    pub fn directions(&self) -> impl Iterator<Item = i8> {
        let forward = self.color.forward();
        once(forward).chain(self.king.then_some(-forward))
    }

    /// This piece's symbol in board notation.
    ///
    /// Men are lowercase, kings uppercase.
    pub fn symbol(&self) -> char {
        match self.king {
            false => self.color.symbol(),
            true => self.color.symbol().to_ascii_uppercase(),
        }
    }
}
