use crate::checkers::{Color, Moves, Piece, Square};
use derive_more::{Display, Error};
use std::fmt::{self, Write};
use std::{ops::Index, str::FromStr};

const SIZE: usize = Square::SIZE as usize;

/// The arrangement of pieces on the checkers board.
///
/// Every piece is stored in the cell matching its own [`Square`].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Grid([[Option<Piece>; SIZE]; SIZE]);

impl Default for Grid {
    /// The starting arrangement, with three rows of men on either side.
    fn default() -> Self {
        let mut grid = Grid::empty();

        for sq in Square::iter().filter(Square::is_dark) {
            match sq.row() {
                0..=2 => grid.place(Piece::new(sq, Color::Red)),
                5..=7 => grid.place(Piece::new(sq, Color::White)),
                _ => {}
            }
        }

        grid
    }
}

impl Grid {
    /// A grid with no pieces.
    pub fn empty() -> Self {
        Grid([[None; SIZE]; SIZE])
    }

    /// The [`Piece`] on the given [`Square`], if any.
    pub fn piece_on(&self, sq: Square) -> Option<&Piece> {
        self.0[sq.row() as usize][sq.col() as usize].as_ref()
    }

    fn cell(&mut self, sq: Square) -> &mut Option<Piece> {
        &mut self.0[sq.row() as usize][sq.col() as usize]
    }

    /// Places a [`Piece`] on its [`Square`].
    ///
    /// # Panics
    ///
    /// Panics if the square is light or already occupied.
    #[track_caller]
    pub fn place(&mut self, piece: Piece) {
        let sq = piece.square();
        assert!(sq.is_dark(), "pieces may only stand on dark squares, not `{sq}`");
        assert!(self[sq].is_none(), "square `{sq}` is already occupied");
        *self.cell(sq) = Some(piece);
    }

    /// Removes the [`Piece`] on the given [`Square`], if any.
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.cell(sq).take()
    }

    /// Moves the piece on one [`Square`] to another, without checking the rules.
    ///
    /// # Panics
    ///
    /// Panics if the source is empty or the destination is occupied.
    #[track_caller]
    pub(crate) fn relocate(&mut self, whence: Square, whither: Square) -> &mut Piece {
        let mut piece = self.remove(whence).expect("expected piece on the source square");
        debug_assert!(self[whither].is_none(), "square `{whither}` is already occupied");
        piece.move_to(whither);
        self.cell(whither).insert(piece)
    }

    /// Computes where a [`Piece`] may move to.
    ///
    /// Only single steps and single jumps are considered, a jump never continues
    /// from the square it lands on.
    pub fn legal_moves(&self, piece: &Piece) -> Moves {
        let mut moves = Moves::default();

        for rows in piece.directions() {
            for cols in [-1, 1] {
                let Some(next) = piece.square().offset(rows, cols) else {
                    continue;
                };

                match self[next] {
                    None => moves.insert(next, None),
                    Some(other) if other.color() != piece.color() => {
                        if let Some(landing) = next.offset(rows, cols) {
                            if self[landing].is_none() {
                                moves.insert(landing, Some(other));
                            }
                        }
                    }
                    Some(_) => {}
                }
            }
        }

        moves
    }

    /// An iterator over all pieces, row by row.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Piece> {
        self.0.iter().flatten().flatten()
    }

    /// The number of pieces of a [`Color`].
    pub fn count(&self, c: Color) -> usize {
        self.iter().filter(|p| p.color() == c).count()
    }
}

/// Retrieves the [`Piece`] at a given [`Square`], if any.
impl Index<Square> for Grid {
    type Output = Option<Piece>;

    fn index(&self, sq: Square) -> &Self::Output {
        &self.0[sq.row() as usize][sq.col() as usize]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_char('/')?;
            }

            for cell in row {
                f.write_char(cell.map_or('.', |p| p.symbol()))?;
            }
        }

        Ok(())
    }
}

/// The reason why parsing [`Grid`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error)]
pub enum ParseGridError {
    #[display(fmt = "expected {} rows separated by `/`", SIZE)]
    InvalidRowCount,
    #[display(fmt = "expected {} cells on row {}", SIZE, row)]
    InvalidRowLength { row: usize },
    #[display(fmt = "unexpected symbol `{}`, expected one of `.wrWR`", symbol)]
    InvalidSymbol { symbol: char },
    #[display(fmt = "piece on light square `{}`", square)]
    LightSquare { square: Square },
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<_> = s.split('/').collect();
        if rows.len() != SIZE {
            return Err(ParseGridError::InvalidRowCount);
        }

        let mut grid = Grid::empty();
        for (r, row) in rows.iter().enumerate() {
            if row.chars().count() != SIZE {
                return Err(ParseGridError::InvalidRowLength { row: r });
            }

            for (c, symbol) in row.chars().enumerate() {
                let sq = Square::new(r as u8, c as u8);
                let mut piece = match symbol {
                    '.' => continue,
                    'w' | 'W' => Piece::new(sq, Color::White),
                    'r' | 'R' => Piece::new(sq, Color::Red),
                    _ => return Err(ParseGridError::InvalidSymbol { symbol }),
                };

                if !sq.is_dark() {
                    return Err(ParseGridError::LightSquare { square: sq });
                }

                if symbol.is_ascii_uppercase() {
                    piece.promote();
                }

                grid.place(piece);
            }
        }

        Ok(grid)
    }
}
