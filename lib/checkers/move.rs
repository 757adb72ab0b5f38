use crate::checkers::{ParseSquareError, Piece, Square};
use arrayvec::ArrayVec;
use derive_more::{DebugCustom, Deref, Display, Error};
use std::str::FromStr;

/// A request to move the piece on one [`Square`] to another.
#[derive(DebugCustom, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[debug(fmt = "Move({self})")]
#[display(fmt = "{}-{}", _0, _1)]
pub struct Move(pub Square, pub Square);

impl Move {
    /// The source [`Square`].
    pub fn whence(&self) -> Square {
        self.0
    }

    /// The destination [`Square`].
    pub fn whither(&self) -> Square {
        self.1
    }
}

/// The reason why parsing [`Move`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error)]
pub enum ParseMoveError {
    #[display(fmt = "failed to parse move, expected `row,col-row,col`")]
    InvalidSyntax,
    #[display(fmt = "failed to parse move")]
    InvalidSquare(ParseSquareError),
}

impl From<ParseSquareError> for ParseMoveError {
    fn from(e: ParseSquareError) -> Self {
        ParseMoveError::InvalidSquare(e)
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (whence, whither) = s.split_once('-').ok_or(ParseMoveError::InvalidSyntax)?;
        Ok(Move(whence.parse()?, whither.parse()?))
    }
}

/// The legal destinations of a piece.
///
/// Each destination maps to the opponent piece jumped over to get there, if any.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
pub struct Moves(ArrayVec<(Square, Option<Piece>), 4>);

impl Moves {
    /// Records a destination, along with the piece it captures.
    pub(crate) fn insert(&mut self, whither: Square, capture: Option<Piece>) {
        debug_assert!(!self.contains(whither));
        self.0.push((whither, capture));
    }

    /// Whether a [`Square`] is one of the destinations.
    pub fn contains(&self, whither: Square) -> bool {
        self.0.iter().any(|&(sq, _)| sq == whither)
    }

    /// The piece captured by moving to a destination, if any.
    ///
    /// Returns `None` both for simple moves and for squares that are not destinations,
    /// use [`Moves::contains`] to tell them apart.
    pub fn capture(&self, whither: Square) -> Option<&Piece> {
        self.0
            .iter()
            .find(|&&(sq, _)| sq == whither)
            .and_then(|(_, capture)| capture.as_ref())
    }

    /// The number of destinations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no destinations.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// An iterator over destinations and the pieces they capture.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Square, Option<&Piece>)> {
        self.0.iter().map(|(sq, capture)| (*sq, capture.as_ref()))
    }

    /// An iterator over destinations.
    pub fn squares(&self) -> impl DoubleEndedIterator<Item = Square> + '_ {
        self.0.iter().map(|&(sq, _)| sq)
    }
}

impl IntoIterator for Moves {
    type Item = (Square, Option<Piece>);
    type IntoIter = arrayvec::IntoIter<Self::Item, 4>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// The context of a [`Move`] that was played.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deref)]
pub struct MoveContext {
    #[deref]
    pub(crate) mv: Move,
    pub(crate) piece: Piece,
    pub(crate) capture: Option<Piece>,
    pub(crate) promotion: bool,
}

impl MoveContext {
    /// The [`Piece`] moved, as it stands after the move.
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// The [`Piece`] captured, as it stood before the move.
    pub fn capture(&self) -> Option<Piece> {
        self.capture
    }

    /// Whether this is a capture move.
    pub fn is_capture(&self) -> bool {
        self.capture.is_some()
    }

    /// Whether the moved piece was crowned by this move.
    pub fn is_promotion(&self) -> bool {
        self.promotion
    }

    /// Whether this move neither captures nor promotes.
    pub fn is_quiet(&self) -> bool {
        !(self.is_capture() || self.is_promotion())
    }
}

/// Represents an illegal [`Move`] in a given [`Board`][`crate::checkers::Board`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error)]
#[display(fmt = "move `{}` is illegal in this position", _0)]
pub struct IllegalMove(#[error(not(source))] pub Move);
