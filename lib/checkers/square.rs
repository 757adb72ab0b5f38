use derive_more::{DebugCustom, Display, Error};
use std::str::FromStr;

/// A cell on the checkers board.
///
/// Rows are counted from the top of the board, where the red pieces start,
/// columns from the left.
#[derive(DebugCustom, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[debug(fmt = "Square({self})")]
#[display(fmt = "{},{}", "self.row", "self.col")]
pub struct Square {
    #[cfg_attr(test, strategy(0..Square::SIZE))]
    row: u8,
    #[cfg_attr(test, strategy(0..Square::SIZE))]
    col: u8,
}

/// The reason why a [`Square`] could not be constructed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error)]
#[display(fmt = "square `{},{}` is outside of the board", "self.row", "self.col")]
pub struct OutOfBounds {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// The number of rows and of columns on the board.
    pub const SIZE: u8 = 8;

    /// Constructs [`Square`] from a pair of row and column.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is not smaller than [`Square::SIZE`].
    #[track_caller]
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            row < Self::SIZE && col < Self::SIZE,
            "square `{row},{col}` is outside of the board"
        );

        Square { row, col }
    }

    /// Constructs [`Square`] from a pair of row and column, if in bounds.
    pub fn try_new(row: u8, col: u8) -> Result<Self, OutOfBounds> {
        if row < Self::SIZE && col < Self::SIZE {
            Ok(Square { row, col })
        } else {
            Err(OutOfBounds { row, col })
        }
    }

    /// This square's row.
    pub fn row(&self) -> u8 {
        self.row
    }

    /// This square's column.
    pub fn col(&self) -> u8 {
        self.col
    }

    /// Whether this is one of the dark cells pieces stand on.
    pub fn is_dark(&self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// The square reached by shifting this one by some rows and columns, if on the board.
    pub fn offset(&self, rows: i8, cols: i8) -> Option<Self> {
        let row = self.row.checked_add_signed(rows)?;
        let col = self.col.checked_add_signed(cols)?;
        Square::try_new(row, col).ok()
    }

    /// Returns an iterator over all [`Square`]s, row by row.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        (0..Self::SIZE).flat_map(|row| (0..Self::SIZE).map(move |col| Square { row, col }))
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = OutOfBounds;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Square::try_new(row, col)
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error)]
pub enum ParseSquareError {
    #[display(fmt = "failed to parse square, expected `row,col`")]
    InvalidSyntax,
    #[display(fmt = "failed to parse square")]
    OutOfBounds(OutOfBounds),
}

impl From<OutOfBounds> for ParseSquareError {
    fn from(e: OutOfBounds) -> Self {
        ParseSquareError::OutOfBounds(e)
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s.split_once(',').ok_or(ParseSquareError::InvalidSyntax)?;

        let (Ok(row), Ok(col)) = (row.trim().parse(), col.trim().parse()) else {
            return Err(ParseSquareError::InvalidSyntax);
        };

        Ok(Square::try_new(row, col)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn new_constructs_square_from_pair_of_row_and_col(sq: Square) {
        assert_eq!(Square::new(sq.row(), sq.col()), sq);
    }

    #[proptest]
    #[should_panic]
    fn new_panics_if_out_of_bounds(#[strategy(Square::SIZE..)] row: u8, col: u8) {
        Square::new(row, col);
    }

    #[proptest]
    fn try_new_fails_if_out_of_bounds(row: u8, #[strategy(Square::SIZE..)] col: u8) {
        assert_eq!(Square::try_new(row, col), Err(OutOfBounds { row, col }));
        assert_eq!(Square::try_from((col, row)), Err(OutOfBounds { row: col, col: row }));
    }

    #[proptest]
    fn dark_squares_alternate(sq: Square) {
        if let Some(next) = sq.offset(0, 1) {
            assert_ne!(next.is_dark(), sq.is_dark());
        }

        if let Some(next) = sq.offset(1, 1) {
            assert_eq!(next.is_dark(), sq.is_dark());
        }
    }

    #[test]
    fn corner_at_the_origin_is_light() {
        assert!(!Square::new(0, 0).is_dark());
        assert!(Square::new(0, 1).is_dark());
    }

    #[proptest]
    fn offset_shifts_row_and_col(
        sq: Square,
        #[strategy(-2i8..=2)] r: i8,
        #[strategy(-2i8..=2)] c: i8,
    ) {
        let bounds = 0..Square::SIZE as i8;
        let row = sq.row() as i8 + r;
        let col = sq.col() as i8 + c;

        match sq.offset(r, c) {
            Some(s) => assert_eq!((s.row() as i8, s.col() as i8), (row, col)),
            None => assert!(!bounds.contains(&row) || !bounds.contains(&col)),
        }
    }

    #[test]
    fn iter_visits_every_square_in_order() {
        let squares = Vec::from_iter(Square::iter());
        assert_eq!(squares.len(), 64);
        assert!(squares.windows(2).all(|w| w[0] < w[1]));
    }

    #[proptest]
    fn parsing_printed_square_is_an_identity(sq: Square) {
        assert_eq!(sq.to_string().parse(), Ok(sq));
    }

    #[proptest]
    fn parsing_square_fails_if_out_of_bounds(#[strategy(Square::SIZE..)] row: u8, col: u8) {
        assert_eq!(
            format!("{row},{col}").parse::<Square>(),
            Err(ParseSquareError::OutOfBounds(OutOfBounds { row, col }))
        );
    }

    #[proptest]
    fn parsing_square_fails_without_separator(#[filter(!#s.contains(','))] s: String) {
        assert_eq!(s.parse::<Square>(), Err(ParseSquareError::InvalidSyntax));
    }
}
