use crate::checkers::Square;
use derive_more::Display;
use std::ops::Not;

/// The color of a checkers [`Piece`][`crate::checkers::Piece`].
///
/// White starts on the bottom three rows and moves first.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Color {
    #[display(fmt = "white")]
    White,
    #[display(fmt = "red")]
    Red,
}

impl Color {
    /// Returns an iterator over [`Color`]s.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        [Color::White, Color::Red].into_iter()
    }

    /// The row increment of a forward step for men of this color.
    pub fn forward(&self) -> i8 {
        match self {
            Color::White => -1,
            Color::Red => 1,
        }
    }

    /// The row on which men of this color are crowned.
    pub fn far_row(&self) -> u8 {
        match self {
            Color::White => 0,
            Color::Red => Square::SIZE - 1,
        }
    }

    /// This color's symbol in board notation.
    pub fn symbol(&self) -> char {
        match self {
            Color::White => 'w',
            Color::Red => 'r',
        }
    }
}

impl Not for Color {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Color::White => Color::Red,
            Color::Red => Color::White,
        }
    }
}
